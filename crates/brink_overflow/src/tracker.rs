//! Overflow tracker bindings
//!
//! A binding ties one element, one callback and one overflow snapshot
//! together. Scroll events on the element and resize events on the window
//! both feed the same debounced recheck, which diffs the fresh state against
//! the snapshot and reports each flipped direction once.
//!
//! ```text
//! scroll (element) ─┐
//!                   ├─► Debouncer ──(quiet window)──► recheck
//! resize (window) ──┘                                   │
//!                                     measure → diff → callback per change
//! ```
//!
//! Bindings hold the element weakly; once the element is gone, rechecks
//! are no-ops.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use brink_core::{event_types, Debouncer, EventDispatcher, ListenerId, TimerHandle};
use brink_platform::{ScrollElement, Window};
use tracing::{debug, trace};

use crate::direction::Direction;
use crate::options::OverflowOptions;
use crate::state::OverflowState;

type OverflowCallback<E> = Box<dyn FnMut(&E, Direction, bool)>;

struct Binding<E: ScrollElement + 'static> {
    element: Weak<E>,
    state: Cell<OverflowState>,
    callback: RefCell<OverflowCallback<E>>,
    debouncer: Debouncer,
}

impl<E: ScrollElement + 'static> Binding<E> {
    fn recheck(&self) {
        let Some(element) = self.element.upgrade() else {
            trace!("overflow recheck skipped, element dropped");
            return;
        };

        let next = OverflowState::measure(&*element);
        let previous = self.state.replace(next);
        let changes = previous.changes(&next);
        debug!(?previous, ?next, changed = changes.len(), "overflow rechecked");

        if changes.is_empty() {
            return;
        }
        let mut callback = self.callback.borrow_mut();
        for (direction, overflowing) in changes {
            (*callback)(&*element, direction, overflowing);
        }
    }
}

/// Type-erased control surface the handle keeps over its binding
trait BindingControl {
    fn cancel_pending(&self) -> bool;
    fn is_pending(&self) -> bool;
}

impl<E: ScrollElement + 'static> BindingControl for Binding<E> {
    fn cancel_pending(&self) -> bool {
        self.debouncer.cancel()
    }

    fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }
}

/// Handle to a live overflow binding
///
/// Dropping the handle disposes the binding. Use [`OverflowTracker::detach`]
/// to let the binding live for as long as the element and window keep
/// dispatching events.
#[must_use = "dropping an OverflowTracker disposes it; call `detach()` to keep it running"]
pub struct OverflowTracker {
    binding: Option<Rc<dyn BindingControl>>,
    element_events: EventDispatcher,
    window_events: EventDispatcher,
    on_scroll: ListenerId,
    on_resize: ListenerId,
}

impl OverflowTracker {
    /// Start tracking overflow on `element`
    ///
    /// Measures the element right away. With
    /// [`trigger_on_init`](OverflowOptions::trigger_on_init) set, `callback`
    /// is invoked once for every direction (up, right, down, left) with its
    /// current value before this returns. Afterwards it is invoked once per
    /// direction that flips, at most once per debounce window of scroll or
    /// resize activity.
    pub fn attach<E, W, F>(
        element: &Rc<E>,
        window: &W,
        timers: &TimerHandle,
        mut callback: F,
        options: OverflowOptions,
    ) -> Self
    where
        E: ScrollElement + 'static,
        W: Window + ?Sized,
        F: FnMut(&E, Direction, bool) + 'static,
    {
        let initial = OverflowState::measure(&**element);

        if options.trigger_on_init {
            for (direction, overflowing) in initial.iter() {
                callback(&**element, direction, overflowing);
            }
        }

        let callback: OverflowCallback<E> = Box::new(callback);
        let binding: Rc<Binding<E>> = Rc::new_cyclic(|weak: &Weak<Binding<E>>| {
            let weak = weak.clone();
            let wait = options.effective_debounce();
            let debouncer = Debouncer::new(timers.clone(), wait, move || {
                if let Some(binding) = weak.upgrade() {
                    binding.recheck();
                }
            });
            Binding {
                element: Rc::downgrade(element),
                state: Cell::new(initial),
                callback: RefCell::new(callback),
                debouncer,
            }
        });

        let element_events = element.events().clone();
        let on_scroll = {
            let binding = binding.clone();
            element_events.on(event_types::SCROLL, move |_| binding.debouncer.call())
        };

        let window_events = window.events().clone();
        let on_resize = {
            let binding = binding.clone();
            window_events.on(event_types::RESIZE, move |_| binding.debouncer.call())
        };

        debug!(
            ?initial,
            debounce = ?options.effective_debounce(),
            trigger_on_init = options.trigger_on_init,
            "overflow tracker attached"
        );

        let control: Rc<dyn BindingControl> = binding;
        Self {
            binding: Some(control),
            element_events,
            window_events,
            on_scroll,
            on_resize,
        }
    }

    /// Whether the binding is still live
    pub fn is_active(&self) -> bool {
        self.binding.is_some()
    }

    /// Whether a recheck is waiting for its debounce window to pass
    pub fn is_pending(&self) -> bool {
        self.binding
            .as_ref()
            .map(|binding| binding.is_pending())
            .unwrap_or(false)
    }

    /// Remove both listeners and cancel a pending recheck
    ///
    /// The callback is never invoked after this returns. Idempotent.
    pub fn dispose(&mut self) {
        let Some(binding) = self.binding.take() else {
            return;
        };
        self.element_events.remove(self.on_scroll);
        self.window_events.remove(self.on_resize);
        let cancelled = binding.cancel_pending();
        debug!(cancelled, "overflow tracker disposed");
    }

    /// Give up the handle and keep the binding running
    ///
    /// The binding then lives as long as the element's and window's event
    /// dispatchers do; there is no way to dispose it afterwards.
    pub fn detach(mut self) {
        self.binding = None;
        debug!("overflow tracker detached");
    }
}

impl Drop for OverflowTracker {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for OverflowTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverflowTracker")
            .field("active", &self.is_active())
            .field("pending", &self.is_pending())
            .finish()
    }
}

/// Start tracking overflow on `element`
///
/// Shorthand for [`OverflowTracker::attach`].
pub fn create_overflow_tracker<E, W, F>(
    element: &Rc<E>,
    window: &W,
    timers: &TimerHandle,
    callback: F,
    options: OverflowOptions,
) -> OverflowTracker
where
    E: ScrollElement + 'static,
    W: Window + ?Sized,
    F: FnMut(&E, Direction, bool) + 'static,
{
    OverflowTracker::attach(element, window, timers, callback, options)
}
