// ABOUTME: Raw pointer inputs and the structured position events derived from them
// ABOUTME: Generic over the host's opaque event-target type

use serde::{Deserialize, Serialize};

use crate::position::Position;
use crate::range::{CharacterRange, TokenRange};

/// Pointer event kinds the position stream subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerKind {
    MouseMove,
    Click,
}

/// All kinds the stream listens for; hosts forwarding DOM events register one
/// listener per entry, in this order.
pub const POINTER_KINDS: [PointerKind; 2] = [PointerKind::MouseMove, PointerKind::Click];

/// A raw pointer event as delivered by the host.
///
/// `target` is whatever the host uses to identify the node under the pointer;
/// the stream only ever hands it back to the host mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerInput<T> {
    pub kind: PointerKind,
    /// Horizontal pointer coordinate in the surface's client space.
    pub client_x: f64,
    pub target: T,
}

impl<T> PointerInput<T> {
    pub fn new(kind: PointerKind, client_x: f64, target: T) -> Self {
        Self {
            kind,
            client_x,
            target,
        }
    }
}

/// The public output unit of the position stream.
///
/// Carries the resolved position, the token under it (when one exists), and
/// the raw input the resolution came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionEvent<T> {
    pub position: Position,
    /// Character-index extent of the highlighted token at `position`.
    pub token_range: Option<TokenRange>,
    /// Pixel extent of that token, relative to the row's left edge.
    pub token_pixel_range: Option<CharacterRange>,
    pub kind: PointerKind,
    pub input: PointerInput<T>,
}
