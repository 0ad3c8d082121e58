//! Practice registry
//!
//! Practices are registered explicitly, keyed by their metadata id.
//! [`install`] publishes one registry as the process-wide catalog.

use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

use serde::Serialize;
use thiserror::Error;

use crate::adapters::ProcessRunner;
use crate::core::models::Verdict;

use super::{Practice, PracticeMetadata, ProjectContext, SecurityVulnerabilitiesPractice};

static CATALOG: OnceLock<PracticeRegistry> = OnceLock::new();

/// Registration failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Two practices claimed the same id
    #[error("practice `{0}` is already registered")]
    Duplicate(String),
}

/// The verdict of one practice on one project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// Which practice produced the verdict
    pub metadata: PracticeMetadata,
    /// The verdict
    pub verdict: Verdict,
}

/// Ordered collection of practices with unique ids
#[derive(Default)]
pub struct PracticeRegistry {
    practices: Vec<Box<dyn Practice>>,
}

impl PracticeRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in practice except `disabled` ids
    #[must_use]
    pub fn builtin(runner: ProcessRunner, disabled: &HashSet<String>) -> Self {
        let candidates: Vec<Box<dyn Practice>> =
            vec![Box::new(SecurityVulnerabilitiesPractice::on_host(runner))];
        Self::from_candidates(candidates, disabled)
    }

    /// Register `candidates` in order, skipping `disabled` ids
    ///
    /// A candidate whose id is already taken is dropped with a warning.
    #[must_use]
    pub fn from_candidates(candidates: Vec<Box<dyn Practice>>, disabled: &HashSet<String>) -> Self {
        let mut registry = Self::new();
        for practice in candidates {
            let id = practice.metadata().id;
            if disabled.contains(id) {
                log::debug!("practice {id} disabled by configuration");
                continue;
            }
            if let Err(e) = registry.register(practice) {
                log::warn!("{e}");
            }
        }
        registry
    }

    /// Add a practice
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] if the id is already taken.
    pub fn register(&mut self, practice: Box<dyn Practice>) -> Result<(), RegistryError> {
        let id = practice.metadata().id;
        if self.get(id).is_some() {
            return Err(RegistryError::Duplicate(id.to_string()));
        }
        self.practices.push(practice);
        Ok(())
    }

    /// Look a practice up by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&dyn Practice> {
        self.practices.iter().find(|p| p.metadata().id == id).map(|p| &**p)
    }

    /// Iterate practices in registration order
    pub fn iter(&self) -> impl Iterator<Item = &dyn Practice> {
        self.practices.iter().map(|p| &**p)
    }

    /// Number of registered practices
    #[must_use]
    pub fn len(&self) -> usize {
        self.practices.len()
    }

    /// Whether no practice is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.practices.is_empty()
    }

    /// Evaluate every applicable practice, in registration order
    ///
    /// Inapplicable practices are skipped entirely, not reported as unknown.
    #[must_use]
    pub fn evaluate_applicable(&self, ctx: &ProjectContext) -> Vec<Evaluation> {
        self.iter()
            .filter(|p| {
                let applicable = p.is_applicable(ctx);
                if !applicable {
                    log::debug!("{} does not apply to {} projects", p.metadata().id, ctx.language());
                }
                applicable
            })
            .map(|p| Evaluation {
                metadata: *p.metadata(),
                verdict: p.evaluate(ctx),
            })
            .collect()
    }
}

impl fmt::Debug for PracticeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter().map(|p| p.metadata().id)).finish()
    }
}

/// Publish `registry` as the process-wide catalog
///
/// Only the first call wins; later registries are dropped and the existing
/// catalog is returned.
pub fn install(registry: PracticeRegistry) -> &'static PracticeRegistry {
    let mut pending = Some(registry);
    let installed = CATALOG.get_or_init(|| pending.take().unwrap_or_default());
    if pending.is_some() {
        log::warn!("practice catalog already installed, ignoring replacement");
    }
    installed
}

/// The process-wide catalog, if one was installed
#[must_use]
pub fn catalog() -> Option<&'static PracticeRegistry> {
    CATALOG.get()
}
