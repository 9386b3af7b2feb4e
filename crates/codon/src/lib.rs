// ABOUTME: Public API facade re-exporting the codon crates
// ABOUTME: Hosts depend on this crate; the layered crates stay internal detail

//! Resolve pixel coordinates over a rendered block of source code to logical
//! (line, character) positions and back, and turn raw pointer events into
//! deduplicated [`PositionEvent`]s.
//!
//! The host renders the code (rows of nested styled text runs), knows which
//! row an event target belongs to, and can measure a glyph in a row's style
//! context; it exposes all of that through [`SurfaceMap`] and
//! [`GlyphMeasurer`]. Everything else - the width cache, the per-row
//! coordinate model, hit testing, and the deduplicating event stream - lives
//! here.

pub use codon_types::{
    CharacterRange, FULL_LINE, PointerInput, PointerKind, Position, PositionEvent, Row, RowNode,
    TokenRange,
};

pub use codon_geometry::{CharacterResolver, GeometryError, GlyphMeasurer, WidthCache};

pub use codon_stream::{PositionHandler, PositionListener, StreamError, Subscription, SurfaceMap};

pub use codon_logging as logging;
