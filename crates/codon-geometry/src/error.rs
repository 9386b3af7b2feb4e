// ABOUTME: Error types for character-geometry resolution
// ABOUTME: Out-of-bounds indices fail loudly instead of silently clamping

/// Errors raised by resolver queries.
///
/// A silently clamped index would corrupt caret placement downstream, so an
/// index past the tolerated one-past-the-end case is a hard error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    #[error(
        "Out of bounds: attempted to get range of character {character} for line of length {length}"
    )]
    OutOfBounds { character: usize, length: usize },
}
