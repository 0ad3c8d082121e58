//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `fs` - Project file probing on the local filesystem
//! - `host` - Executable lookup on `PATH`
//! - `process` - Audit command execution

pub mod fs;
pub mod host;
pub mod process;

pub use fs::LocalFileInspector;
pub use host::PathCommandLocator;
pub use process::ProcessRunner;
