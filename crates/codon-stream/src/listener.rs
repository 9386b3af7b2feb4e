// ABOUTME: Position listener implementing filter, resolve, dedup, emit
// ABOUTME: Handlers register against shared state; subscriptions are drop guards

use std::sync::{Arc, Mutex};

use codon_geometry::CharacterResolver;
use codon_logging::{trace, warn};
use codon_types::{PointerInput, Position, PositionEvent};

use crate::error::StreamError;
use crate::surface::SurfaceMap;

/// Handler receiving deduplicated position events.
pub trait PositionHandler<T> {
    fn on_position(&mut self, event: &PositionEvent<T>);
}

impl<T, F> PositionHandler<T> for F
where
    F: FnMut(&PositionEvent<T>),
{
    fn on_position(&mut self, event: &PositionEvent<T>) {
        self(event)
    }
}

/// Handler registry plus the one piece of per-event state: the last emitted
/// position, compared against to suppress duplicates.
///
/// The lock is never held across handler calls, so handlers may subscribe,
/// dispose, or tear down from inside their callback. While a dispatch is in
/// flight the handlers live on the dispatching stack; removals arriving in
/// that window are parked in `pending_removals` and applied afterwards.
struct ListenerState<T> {
    handlers: Vec<(u64, Box<dyn PositionHandler<T> + Send>)>,
    last_position: Option<Position>,
    next_handler_id: u64,
    torn_down: bool,
    dispatching: bool,
    pending_removals: Vec<u64>,
}

impl<T> Default for ListenerState<T> {
    fn default() -> Self {
        Self {
            handlers: Vec::new(),
            last_position: None,
            next_handler_id: 0,
            torn_down: false,
            dispatching: false,
            pending_removals: Vec::new(),
        }
    }
}

/// Turns raw pointer events over a code surface into structured, deduplicated
/// position events.
///
/// Lifecycle: idle → subscribed → (emitting)* → torn down. All processing is
/// synchronous inside [`PositionListener::on_pointer`]; events are handled
/// strictly in the order the host delivers them and are never batched.
pub struct PositionListener<M: SurfaceMap> {
    map: M,
    resolver: Mutex<CharacterResolver>,
    state: Arc<Mutex<ListenerState<M::Target>>>,
}

impl<M: SurfaceMap> PositionListener<M> {
    /// Build a listener over a surface.
    ///
    /// The width-measurement context is created from the surface's first row,
    /// so a surface with no row at line 0 is a construction-time error.
    pub fn new(map: M) -> Result<Self, StreamError> {
        let first_row = map.row_for_line(0).ok_or(StreamError::NoRows)?;
        let resolver = CharacterResolver::new(map.measurer_for(&first_row));

        Ok(Self {
            map,
            resolver: Mutex::new(resolver),
            state: Arc::new(Mutex::new(ListenerState::default())),
        })
    }

    /// Register a handler for future position events.
    ///
    /// The returned guard unregisters the handler when dropped or disposed.
    pub fn subscribe<H>(&self, handler: H) -> Subscription<M::Target>
    where
        H: PositionHandler<M::Target> + Send + 'static,
    {
        let mut state = self.state.lock().unwrap();
        let id = state.next_handler_id;
        state.next_handler_id += 1;
        state.handlers.push((id, Box::new(handler)));

        Subscription {
            state: self.state.clone(),
            id,
            disposed: false,
        }
    }

    /// Process one raw pointer event from the host.
    ///
    /// Events whose target maps to no code row are dropped silently; a
    /// resolved position equal to the previously emitted one is suppressed,
    /// regardless of which pointer kind produced either event.
    pub fn on_pointer(&self, input: PointerInput<M::Target>) {
        let mut state = self.state.lock().unwrap();
        if state.torn_down {
            return;
        }

        let Some(row) = self.map.row_at_target(&input.target) else {
            trace!(kind = ?input.kind, "Pointer target outside any code row; dropped");
            return;
        };

        let line = self.map.line_for_row(&row);
        let mut resolver = self.resolver.lock().unwrap();
        let character = resolver.character_at_event(&row, &input);
        let position = Position::new(line, character);

        if state.last_position == Some(position) {
            trace!(line, ?character, "Duplicate position suppressed");
            return;
        }
        state.last_position = Some(position);

        let token_range = resolver.token_range_at(&row, &position);
        let token_pixel_range = match resolver.token_pixel_range_at(&row, &position) {
            Ok(range) => range,
            Err(error) => {
                warn!(%error, "Token pixel range resolution failed");
                None
            }
        };
        drop(resolver);

        let kind = input.kind;
        let event = PositionEvent {
            position,
            token_range,
            token_pixel_range,
            kind,
            input,
        };

        // Handlers run without the lock so they can subscribe or dispose
        // from inside the callback.
        state.dispatching = true;
        let mut handlers = std::mem::take(&mut state.handlers);
        drop(state);

        for (_, handler) in handlers.iter_mut() {
            handler.on_position(&event);
        }

        let mut state = self.state.lock().unwrap();
        state.dispatching = false;
        if state.torn_down {
            state.pending_removals.clear();
            return;
        }
        handlers.retain(|(id, _)| !state.pending_removals.contains(id));
        state.pending_removals.clear();
        // Handlers subscribed during dispatch landed in state.handlers;
        // keep registration order.
        handlers.append(&mut state.handlers);
        state.handlers = handlers;
    }

    /// Unregister every handler and stop processing.
    ///
    /// Idempotent; after teardown no further events are emitted.
    pub fn teardown(&self) {
        let mut state = self.state.lock().unwrap();
        state.handlers.clear();
        state.torn_down = true;
    }
}

/// Guard for one registered handler.
pub struct Subscription<T> {
    state: Arc<Mutex<ListenerState<T>>>,
    id: u64,
    disposed: bool,
}

impl<T> Subscription<T> {
    /// Unregister the handler now instead of on drop. Idempotent.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;

        let mut state = self.state.lock().unwrap();
        if state.dispatching {
            state.pending_removals.push(self.id);
        } else {
            state.handlers.retain(|(id, _)| *id != self.id);
        }
    }
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        self.dispose();
    }
}
