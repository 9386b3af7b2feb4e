// ABOUTME: Logical text positions within a rendered code surface
// ABOUTME: Line/character pairs are the unit every resolver query works in

use serde::{Deserialize, Serialize};

/// Sentinel character index meaning "resolve to the end of the line".
///
/// Callers representing an open-ended range (for example a language-server
/// range whose end column equals the line length they never computed) pass
/// this instead of a concrete index.
pub const FULL_LINE: usize = usize::MAX;

/// A logical text location: a line paired with a character slot.
///
/// `character` is `None` when a pixel offset falls before the first character
/// of the line or after the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub character: Option<usize>,
}

impl Position {
    pub fn new(line: usize, character: Option<usize>) -> Self {
        Self { line, character }
    }

    /// Position at a concrete character slot.
    pub fn at(line: usize, character: usize) -> Self {
        Self::new(line, Some(character))
    }

    /// Position on a line where the pointer is off the text.
    pub fn off_text(line: usize) -> Self {
        Self::new(line, None)
    }

    /// Whether this position identifies an actual character.
    pub fn has_character(&self) -> bool {
        self.character.is_some()
    }
}
