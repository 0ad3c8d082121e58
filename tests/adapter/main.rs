//! Adapter tests
//!
//! Tests for I/O adapter implementations against the real host:
//! - Local filesystem probing
//! - Executable lookup
//! - Process execution
