// ABOUTME: Glyph measurement seam and the memoizing width cache
// ABOUTME: Widths are only valid within one measurement context (one font/style environment)

use std::collections::HashMap;
use std::fmt;

use codon_logging::trace;

/// Host-supplied probe that measures the rendered width of one character.
///
/// Implementations render exactly one character from the given UTF-16 code
/// unit inside their measurement container so it inherits the container's
/// font and style, and return the bounding-box width in pixels. The probe
/// must preserve whitespace (no collapsing of tabs or spaces) and stay out of
/// layout flow (hidden, zero height, floated or absolutely positioned);
/// any mutation of the container must be transient, with no net effect after
/// the call returns.
pub trait GlyphMeasurer {
    fn measure(&self, code: u16) -> f64;
}

/// Memo of UTF-16 code unit to measured pixel width.
///
/// Scoped to one measurement context: a given code always yields the same
/// width within the cache's lifetime, which assumes the context's font does
/// not change after construction. Entries are added lazily on first query and
/// never evicted; the cache lives exactly as long as its owning resolver.
pub struct WidthCache {
    measurer: Box<dyn GlyphMeasurer + Send>,
    widths: HashMap<u16, f64>,
}

impl WidthCache {
    pub fn new(measurer: Box<dyn GlyphMeasurer + Send>) -> Self {
        Self {
            measurer,
            widths: HashMap::new(),
        }
    }

    /// Width in pixels of the character with the given code.
    ///
    /// Idempotent: repeated calls with the same code return the cached value
    /// without probing again.
    pub fn width_of(&mut self, code: u16) -> f64 {
        if let Some(&width) = self.widths.get(&code) {
            return width;
        }

        let width = self.measurer.measure(code);
        trace!(code, width, "Measured glyph width");
        self.widths.insert(code, width);
        width
    }

    /// Number of distinct codes measured so far.
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}

impl fmt::Debug for WidthCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidthCache")
            .field("entries", &self.widths.len())
            .finish_non_exhaustive()
    }
}
