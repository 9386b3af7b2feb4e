// ABOUTME: Reactive layer turning raw pointer events into position events
// ABOUTME: Filters unmapped targets, resolves characters, deduplicates, emits

pub mod error;
pub mod listener;
pub mod surface;

pub use error::StreamError;
pub use listener::{PositionHandler, PositionListener, Subscription};
pub use surface::SurfaceMap;
