//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Language, Verdict};
use crate::practices::{Evaluation, PracticeImpact, PracticeMetadata};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of scanning one project
#[derive(Debug, Serialize)]
pub struct ScanReport {
    /// Project root that was scanned
    pub project: String,
    /// Language the practices were gated on
    pub language: Language,
    /// When the scan finished (RFC3339)
    pub evaluated_at: String,
    /// One entry per applicable practice
    pub results: Vec<PracticeResult>,
}

/// Verdict of a single practice
#[derive(Debug, Serialize)]
pub struct PracticeResult {
    /// Practice ID (e.g., "JavaScript.SecurityVulnerabilities")
    pub id: String,
    /// Practice name
    pub name: String,
    /// Impact level
    pub impact: PracticeImpact,
    /// The verdict
    pub verdict: Verdict,
    /// What to do about it, only set when the practice is violated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Reference link
    pub url: String,
}

impl From<Evaluation> for PracticeResult {
    fn from(evaluation: Evaluation) -> Self {
        let Evaluation { metadata, verdict } = evaluation;
        Self {
            id: metadata.id.to_string(),
            name: metadata.name.to_string(),
            impact: metadata.impact,
            verdict,
            suggestion: verdict.is_violation().then(|| metadata.suggestion.to_string()),
            url: metadata.url.to_string(),
        }
    }
}

/// Listing of registered practices
#[derive(Debug, Serialize)]
pub struct PracticeList {
    /// Registered practices, in registration order
    pub practices: Vec<PracticeMetadata>,
}

impl ScanReport {
    /// Build a report stamped with the current time
    #[must_use]
    pub fn new(project: String, language: Language, evaluations: Vec<Evaluation>) -> Self {
        Self {
            project,
            language,
            evaluated_at: chrono::Utc::now().to_rfc3339(),
            results: evaluations.into_iter().map(PracticeResult::from).collect(),
        }
    }

    /// Whether any practice was violated
    #[must_use]
    pub fn has_violations(&self) -> bool {
        self.results.iter().any(|r| r.verdict.is_violation())
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("Scanning {} ({})...\n", self.project, self.language);

        if self.results.is_empty() {
            println!("No applicable practices.");
            return;
        }

        for r in &self.results {
            let verdict = match r.verdict {
                Verdict::Practicing => r.verdict.to_string().green(),
                Verdict::NotPracticing => r.verdict.to_string().red().bold(),
                Verdict::Unknown => r.verdict.to_string().yellow(),
            };
            println!("  [{}] {}: {verdict}", r.impact.to_string().to_uppercase(), r.id);
            if let Some(suggestion) = &r.suggestion {
                println!("          {suggestion}");
                println!("          See {}\n", r.url);
            }
        }

        let violations = self.results.iter().filter(|r| r.verdict.is_violation()).count();
        if violations > 0 {
            println!("\n{violations} practice(s) violated.");
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl PracticeList {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.practices.is_empty() {
            println!("No practices registered.");
            return;
        }

        println!("Practices:\n");
        for p in &self.practices {
            println!("  [{}] {}", p.impact.to_string().to_uppercase(), p.id);
            println!("  {}", p.name);
            println!("  {}\n", p.url);
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
