//! Package manager resolution
//!
//! Two steps: lock-file evidence picks a candidate, then the host is asked
//! whether the matching executable exists. Yarn projects fall back to npm
//! when yarn itself is missing.

use crate::core::models::PackageManager;
use crate::core::ports::{CommandLocator, FileInspector};

/// npm lock file
pub const PACKAGE_LOCK: &str = "package-lock.json";

/// npm shrinkwrap file
pub const NPM_SHRINKWRAP: &str = "./npm-shrinkwrap.json";

/// Yarn lock file
pub const YARN_LOCK: &str = "./yarn.lock";

/// Evidence probed in order. npm evidence always wins over yarn evidence.
const LOCK_FILES: &[(&str, PackageManager)] = &[
    (PACKAGE_LOCK, PackageManager::Npm),
    (NPM_SHRINKWRAP, PackageManager::Npm),
    (YARN_LOCK, PackageManager::Yarn),
];

/// Pick a candidate package manager from lock files alone
///
/// Stops probing at the first lock file found.
#[must_use]
pub fn detect_package_manager(files: &dyn FileInspector) -> Option<PackageManager> {
    LOCK_FILES.iter().find(|(path, _)| files.exists(path)).map(|&(_, pm)| pm)
}

/// Confirm a candidate is installed, falling back from yarn to npm
///
/// The npm fallback applies whether or not the project has npm lock files.
#[must_use]
pub fn confirm_installed(
    candidate: Option<PackageManager>,
    locator: &dyn CommandLocator,
) -> Option<PackageManager> {
    let candidate = match candidate? {
        PackageManager::Yarn if locator.is_available(PackageManager::Yarn.executable()) => {
            return Some(PackageManager::Yarn);
        },
        PackageManager::Yarn => {
            log::debug!("yarn is not installed, falling back to npm");
            PackageManager::Npm
        },
        PackageManager::Npm => PackageManager::Npm,
    };

    locator.is_available(candidate.executable()).then_some(candidate)
}

/// Detect and confirm in one step
#[must_use]
pub fn resolve_package_manager(
    files: &dyn FileInspector,
    locator: &dyn CommandLocator,
) -> Option<PackageManager> {
    let candidate = detect_package_manager(files);
    log::debug!("lock-file evidence in {}: {candidate:?}", files.base_path().display());
    confirm_installed(candidate, locator)
}
