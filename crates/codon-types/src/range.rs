// ABOUTME: Pixel spans and token spans within a single rendered row
// ABOUTME: Character ranges are contiguous and ordered left to right

use serde::{Deserialize, Serialize};

/// The pixel span occupied by one character, relative to the row's left edge.
///
/// Ranges produced for a row are contiguous and ordered: `ranges[i].end ==
/// ranges[i + 1].start`, and the first range starts at 0. Zero-width
/// characters are permitted (`start == end`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CharacterRange {
    pub start: f64,
    pub end: f64,
}

impl CharacterRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Rendered glyph width in pixels.
    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    /// Inclusive containment on both ends, so a coordinate exactly on the
    /// boundary between two adjacent characters matches both; scan order
    /// decides which one wins.
    pub fn contains(&self, x: f64) -> bool {
        x >= self.start && x <= self.end
    }
}

/// Half-open character-index span of one highlighted token within a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenRange {
    pub start: usize,
    pub end: usize,
}

impl TokenRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, character: usize) -> bool {
        character >= self.start && character < self.end
    }
}
