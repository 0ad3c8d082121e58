//! Tests for the security vulnerabilities practice and the registry

use std::collections::HashSet;

use depwarden::adapters::ProcessRunner;
use depwarden::core::models::{Language, Verdict};
use depwarden::practices::security_vulnerabilities::ID;
use depwarden::practices::{
    Practice, PracticeImpact, PracticeRegistry, ProjectContext, RegistryError,
    SecurityVulnerabilitiesPractice,
};

use crate::common::{MockFiles, MockHost, RecordingRunner};

fn practice(host: MockHost, runner: &RecordingRunner) -> SecurityVulnerabilitiesPractice {
    SecurityVulnerabilitiesPractice::new(Box::new(host), Box::new(runner.clone()))
}

fn project(language: Language, files: &[&str]) -> ProjectContext {
    ProjectContext::new(language, Box::new(MockFiles::new(files)))
}

#[test]
fn metadata() {
    let runner = RecordingRunner::exiting(0);
    let meta = *practice(MockHost::bare(), &runner).metadata();

    assert_eq!(meta.id, "JavaScript.SecurityVulnerabilities");
    assert_eq!(meta.impact, PracticeImpact::High);
    assert!(meta.report_only_once);
    assert_eq!(meta.url, "https://snyk.io/");
}

#[test]
fn applies_to_javascript_and_typescript_only() {
    let runner = RecordingRunner::exiting(0);
    let p = practice(MockHost::bare(), &runner);

    assert!(p.is_applicable(&project(Language::JavaScript, &[])));
    assert!(p.is_applicable(&project(Language::TypeScript, &[])));
    assert!(!p.is_applicable(&project(Language::Rust, &[])));
    assert!(!p.is_applicable(&project(Language::Unknown, &[])));
}

#[test]
fn evaluates_through_the_package_manager() {
    let runner = RecordingRunner::exiting(8);
    let p = practice(MockHost::with(&["yarn"]), &runner);

    let verdict = p.evaluate(&project(Language::TypeScript, &["yarn.lock"]));

    assert_eq!(verdict, Verdict::NotPracticing);
    assert_eq!(runner.calls()[0].command, "yarn audit --summary");
}

#[test]
fn unknown_without_evidence() {
    let runner = RecordingRunner::exiting(1);
    let p = practice(MockHost::with(&["npm", "yarn"]), &runner);

    assert_eq!(p.evaluate(&project(Language::JavaScript, &["package.json"])), Verdict::Unknown);
    assert!(runner.calls().is_empty());
}

#[test]
fn registry_evaluates_only_applicable() {
    let runner = RecordingRunner::exiting(0);
    let mut registry = PracticeRegistry::new();
    registry.register(Box::new(practice(MockHost::with(&["npm"]), &runner))).unwrap();

    let rust = registry.evaluate_applicable(&project(Language::Rust, &["package-lock.json"]));
    assert!(rust.is_empty());
    assert!(runner.calls().is_empty());

    let js = registry.evaluate_applicable(&project(Language::JavaScript, &["package-lock.json"]));
    assert_eq!(js.len(), 1);
    assert_eq!(js[0].metadata.id, ID);
    assert_eq!(js[0].verdict, Verdict::Practicing);
}

#[test]
fn registry_rejects_duplicate_ids() {
    let runner = RecordingRunner::exiting(0);
    let mut registry = PracticeRegistry::new();
    registry.register(Box::new(practice(MockHost::bare(), &runner))).unwrap();

    let result = registry.register(Box::new(practice(MockHost::bare(), &runner)));
    assert_eq!(result, Err(RegistryError::Duplicate(ID.to_string())));
}

#[test]
fn builtin_registry_contains_security_practice() {
    let registry = PracticeRegistry::builtin(ProcessRunner::default(), &HashSet::new());
    assert_eq!(registry.len(), 1);
    assert!(registry.get(ID).is_some());
    assert!(registry.get("Nope.Missing").is_none());
}
