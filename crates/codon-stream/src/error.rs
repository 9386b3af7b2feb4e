// ABOUTME: Error types for position listener construction
// ABOUTME: A surface with no resolvable rows is a construction-time misuse

/// Errors raised while setting up a position listener.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StreamError {
    /// The host mapping resolved no row for line 0, so there is nothing to
    /// build a measurement context from.
    #[error("Cannot create position listener for a surface with no rows")]
    NoRows,
}
