// ABOUTME: Pure data types with no cross-crate dependencies
// ABOUTME: Foundation layer for all other codon crates

pub mod pointer;
pub mod position;
pub mod range;
pub mod row;

// Re-export commonly used types
pub use pointer::{PointerInput, PointerKind, PositionEvent};
pub use position::{FULL_LINE, Position};
pub use range::{CharacterRange, TokenRange};
pub use row::{Row, RowNode};
