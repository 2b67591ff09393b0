//! Event types and per-target listener registries
//!
//! Every element and window owns an [`EventDispatcher`]. Listeners are keyed
//! by [`ListenerId`] so they can be removed again, and are invoked in the
//! order they were registered.
//!
//! ```text
//! HeadlessElement::scroll_to()
//!     ↓ EventDispatcher::dispatch(SCROLL)
//! listener callbacks (registration order)
//!     ↓ Debouncer::call()
//! TimerQueue
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use tracing::trace;

/// Event type identifier
pub type EventType = u32;

/// Built-in event types
pub mod event_types {
    use super::EventType;

    /// A scroll container's scroll offset changed
    pub const SCROLL: EventType = 1;
    /// A window's inner size changed
    pub const RESIZE: EventType = 2;
}

new_key_type! {
    /// Handle to a registered listener
    pub struct ListenerId;
}

/// Payload carried by an event
#[derive(Clone, Debug, PartialEq)]
pub enum EventData {
    /// New scroll offsets of the target
    Scroll { left: f32, top: f32 },
    /// New inner size of the window
    Resize { width: u32, height: u32 },
    None,
}

/// An event delivered to listeners
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub event_type: EventType,
    pub data: EventData,
}

impl Event {
    pub fn scroll(left: f32, top: f32) -> Self {
        Self {
            event_type: event_types::SCROLL,
            data: EventData::Scroll { left, top },
        }
    }

    pub fn resize(width: u32, height: u32) -> Self {
        Self {
            event_type: event_types::RESIZE,
            data: EventData::Resize { width, height },
        }
    }
}

/// Callback for handling events
///
/// Uses Rc since dispatch is single-threaded.
pub type EventCallback = Rc<dyn Fn(&Event)>;

struct ListenerEntry {
    event_type: EventType,
    /// Registration order; slot indices get reused
    seq: u64,
    callback: EventCallback,
}

#[derive(Default)]
struct DispatcherInner {
    listeners: RefCell<SlotMap<ListenerId, ListenerEntry>>,
    next_seq: Cell<u64>,
}

/// Listener registry for a single event target
///
/// Clones share the same registry.
#[derive(Clone, Default)]
pub struct EventDispatcher {
    inner: Rc<DispatcherInner>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for an event type
    pub fn on<F>(&self, event_type: EventType, callback: F) -> ListenerId
    where
        F: Fn(&Event) + 'static,
    {
        let seq = self.inner.next_seq.get();
        self.inner.next_seq.set(seq + 1);

        let id = self.inner.listeners.borrow_mut().insert(ListenerEntry {
            event_type,
            seq,
            callback: Rc::new(callback),
        });
        trace!(?id, event_type, "listener added");
        id
    }

    /// Remove a listener
    ///
    /// Returns `true` if the listener was registered.
    pub fn remove(&self, id: ListenerId) -> bool {
        // Drop the callback only after the registry borrow is released
        let removed = self.inner.listeners.borrow_mut().remove(id);
        if removed.is_some() {
            trace!(?id, "listener removed");
        }
        removed.is_some()
    }

    pub fn contains(&self, id: ListenerId) -> bool {
        self.inner.listeners.borrow().contains_key(id)
    }

    /// Number of listeners registered for an event type
    pub fn listener_count(&self, event_type: EventType) -> usize {
        self.inner
            .listeners
            .borrow()
            .values()
            .filter(|entry| entry.event_type == event_type)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.listeners.borrow().is_empty()
    }

    /// Deliver an event to every listener registered for its type
    ///
    /// The listener set is snapshotted before any callback runs. Listeners
    /// added during dispatch see the next event; listeners removed during
    /// dispatch are skipped if they haven't run yet.
    pub fn dispatch(&self, event: &Event) -> usize {
        let targets: SmallVec<[(ListenerId, EventCallback); 4]> = {
            let listeners = self.inner.listeners.borrow();
            let mut matching: SmallVec<[(u64, ListenerId, EventCallback); 4]> = listeners
                .iter()
                .filter(|(_, entry)| entry.event_type == event.event_type)
                .map(|(id, entry)| (entry.seq, id, entry.callback.clone()))
                .collect();
            matching.sort_unstable_by_key(|&(seq, _, _)| seq);
            matching
                .into_iter()
                .map(|(_, id, callback)| (id, callback))
                .collect()
        };

        let mut delivered = 0;
        for (id, callback) in targets {
            if !self.contains(id) {
                continue;
            }
            callback(event);
            delivered += 1;
        }
        trace!(event_type = event.event_type, delivered, "event dispatched");
        delivered
    }
}
