//! Tests for package manager resolution
//!
//! Lock-file evidence picks a candidate, host availability confirms it.

use depwarden::core::models::PackageManager;
use depwarden::core::services::{detect_package_manager, resolve_package_manager};

use crate::common::{MockFiles, MockHost};

// =============================================================================
// Evidence
// =============================================================================

#[test]
fn package_lock_alone_is_npm() {
    let files = MockFiles::new(&["package-lock.json"]);
    let resolved = resolve_package_manager(&files, &MockHost::with(&["npm"]));
    assert_eq!(resolved, Some(PackageManager::Npm));
}

#[test]
fn npm_evidence_beats_yarn_lock() {
    let files = MockFiles::new(&["package-lock.json", "yarn.lock"]);
    let resolved = resolve_package_manager(&files, &MockHost::with(&["npm", "yarn"]));
    assert_eq!(resolved, Some(PackageManager::Npm));
}

#[test]
fn shrinkwrap_beats_yarn_lock() {
    let files = MockFiles::new(&["npm-shrinkwrap.json", "yarn.lock"]);
    assert_eq!(detect_package_manager(&files), Some(PackageManager::Npm));
}

#[test]
fn probing_stops_at_first_match() {
    let files = MockFiles::new(&["package-lock.json", "yarn.lock"]);
    let _ = detect_package_manager(&files);
    assert_eq!(files.probes(), vec!["package-lock.json".to_string()]);
}

#[test]
fn probes_all_lock_files_in_order_when_none_exist() {
    let files = MockFiles::empty();
    assert_eq!(detect_package_manager(&files), None);
    assert_eq!(
        files.probes(),
        vec!["package-lock.json".to_string(), "./npm-shrinkwrap.json".to_string(), "./yarn.lock".to_string()]
    );
}

// =============================================================================
// Availability
// =============================================================================

#[test]
fn yarn_lock_with_yarn_installed_is_yarn() {
    let files = MockFiles::new(&["yarn.lock"]);
    let resolved = resolve_package_manager(&files, &MockHost::with(&["yarn"]));
    assert_eq!(resolved, Some(PackageManager::Yarn));
}

#[test]
fn yarn_lock_without_yarn_falls_back_to_npm() {
    let files = MockFiles::new(&["yarn.lock"]);
    let resolved = resolve_package_manager(&files, &MockHost::with(&["npm"]));
    assert_eq!(resolved, Some(PackageManager::Npm));
}

#[test]
fn yarn_lock_without_any_tool_is_unresolved() {
    let files = MockFiles::new(&["yarn.lock"]);
    assert_eq!(resolve_package_manager(&files, &MockHost::bare()), None);
}

#[test]
fn package_lock_without_npm_is_unresolved() {
    let files = MockFiles::new(&["package-lock.json"]);
    assert_eq!(resolve_package_manager(&files, &MockHost::with(&["yarn"])), None);
}

#[test]
fn no_evidence_is_unresolved_even_with_tools() {
    let files = MockFiles::empty();
    assert_eq!(resolve_package_manager(&files, &MockHost::with(&["npm", "yarn"])), None);
}
