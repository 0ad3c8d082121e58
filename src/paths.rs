//! Centralized path definitions for depwarden
//!
//! ## Storage Layout
//!
//! ### Per-Project
//!
//! ```text
//! project/
//! └── .depwarden.toml           # Project overrides (timeout, language, disabled practices)
//! ```
//!
//! ### Global (User-Level)
//!
//! ```text
//! ~/.depwarden/
//! └── config.toml               # User defaults
//! ```

use std::path::{Path, PathBuf};

/// Project configuration filename
pub const PROJECT_CONFIG: &str = ".depwarden.toml";

/// Global config directory name
const GLOBAL_DIR: &str = ".depwarden";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get path to the project's `.depwarden.toml`.
#[must_use]
pub fn project_config(root: &Path) -> PathBuf {
    root.join(PROJECT_CONFIG)
}

/// Get the global depwarden directory.
///
/// Returns `~/.depwarden/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.depwarden/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
