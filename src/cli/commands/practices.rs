//! List registered practices

use std::collections::HashSet;

use depwarden::adapters::ProcessRunner;
use depwarden::output::{OutputMode, PracticeList};
use depwarden::practices::{PracticeRegistry, registry};

/// Print the practice catalog
///
/// Lists every built-in practice, including ones a project config disables.
pub fn practices(mode: OutputMode) -> anyhow::Result<()> {
    let catalog = registry::install(PracticeRegistry::builtin(ProcessRunner::default(), &HashSet::new()));

    let list = PracticeList {
        practices: catalog.iter().map(|p| *p.metadata()).collect(),
    };
    list.render(mode);

    Ok(())
}
