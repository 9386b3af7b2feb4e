// ABOUTME: Host-mapping trait between the code surface and its rendered rows
// ABOUTME: The host owns the renderer; the stream only asks narrow questions of it

use std::sync::Arc;

use codon_geometry::GlyphMeasurer;
use codon_types::Row;

/// Mapping between the host's rendered surface and the rows the resolver
/// works in.
///
/// Implemented by the surrounding application; the stream never walks the
/// host's node structure itself. Rows are handed out shared and read-only.
pub trait SurfaceMap {
    /// The host's opaque event-target type.
    type Target;

    /// The row containing the given event target, or `None` when the target
    /// sits outside any code row (surrounding chrome, gutters, whitespace
    /// below the last line). `None` is the expected high-frequency case for
    /// pointer movement, not an error.
    fn row_at_target(&self, target: &Self::Target) -> Option<Arc<Row>>;

    /// The row rendering the given line number, if that line exists.
    fn row_for_line(&self, line: usize) -> Option<Arc<Row>>;

    /// The line number the given row renders.
    fn line_for_row(&self, row: &Row) -> usize;

    /// A glyph measurement context inheriting the row's font and style.
    /// Called once per listener, with the surface's first row.
    fn measurer_for(&self, row: &Row) -> Box<dyn GlyphMeasurer + Send>;
}
