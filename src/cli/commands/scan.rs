//! Scan a project

use std::path::Path;

use anyhow::Context;
use depwarden::adapters::{LocalFileInspector, ProcessRunner};
use depwarden::config::Config;
use depwarden::core::models::Language;
use depwarden::output::{OutputMode, ScanReport};
use depwarden::practices::{PracticeRegistry, ProjectContext, registry};

/// Evaluate every applicable practice against the project at `path`
pub fn scan(
    path: &Path,
    language: Option<Language>,
    timeout: Option<u64>,
    ci: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let root = path
        .canonicalize()
        .with_context(|| format!("Project directory not found: {}", path.display()))?;
    if !root.is_dir() {
        anyhow::bail!("Not a directory: {}", root.display());
    }

    let mut config = Config::load(&root)?;
    if timeout.is_some() {
        config.audit.timeout_secs = timeout;
    }
    if language.is_some() {
        config.project.language = language;
    }

    let runner = ProcessRunner::new(config.audit_timeout());
    log::debug!(
        "audit timeout: {}",
        runner.timeout().map_or_else(|| "none".to_string(), |t| format!("{}s", t.as_secs()))
    );
    let catalog = registry::install(PracticeRegistry::builtin(runner, &config.disabled_practices()));

    let files = Box::new(LocalFileInspector::new(&root));
    let ctx = match config.project.language {
        Some(language) => ProjectContext::new(language, files),
        None => ProjectContext::detect(files),
    };
    log::debug!("scanning {} as a {} project", root.display(), ctx.language());

    let report = ScanReport::new(
        root.display().to_string(),
        ctx.language(),
        catalog.evaluate_applicable(&ctx),
    );
    report.render(mode);

    if ci && report.has_violations() {
        std::process::exit(1);
    }

    Ok(())
}
