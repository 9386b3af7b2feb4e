// ABOUTME: Core character-geometry resolution: width cache, line model, resolver
// ABOUTME: Converts pixel offsets to character indices and back within one row

pub mod error;
pub mod line_model;
pub mod measure;
pub mod resolver;

pub use error::GeometryError;
pub use line_model::{character_ranges, token_span_at};
pub use measure::{GlyphMeasurer, WidthCache};
pub use resolver::CharacterResolver;
