//! Core domain logic for depwarden
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (PackageManager, Verdict, AuditInvocation, Language)
//! - `services/` - Resolution, classification and audit orchestration
//! - `ports/` - Trait definitions for the filesystem, host and process execution

pub mod models;
pub mod ports;
pub mod services;
