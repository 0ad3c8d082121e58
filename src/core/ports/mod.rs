//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and the host: the project's filesystem, the executable search path,
//! and process execution.
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core domain logic depends only on these traits, never on concrete
//! implementations. Resolution and classification can therefore be tested
//! without npm or yarn being installed.

mod command_locator;
mod command_runner;
mod file_inspector;

pub use command_locator::CommandLocator;
pub use command_runner::{CommandRunner, RunError};
pub use file_inspector::FileInspector;
