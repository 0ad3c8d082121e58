//! Host executable port

/// Answers whether a named executable can be found on the host
pub trait CommandLocator: Send + Sync {
    /// Check if `program` is resolvable on the command search path
    fn is_available(&self, program: &str) -> bool;
}
