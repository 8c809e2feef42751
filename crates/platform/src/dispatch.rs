//! Routing of input events to registered listeners.
//!
//! Listeners receive an explicit context `C` with every event instead of
//! reaching shared state through globals. The owner of the event loop holds
//! both the [`InputDispatcher`] and the context, and hands the context in on
//! each [`InputDispatcher::dispatch`] call.
//!
//! # Example
//!
//! ```
//! use playground_platform::{InputDispatcher, InputEvent, InputListener};
//!
//! #[derive(Default)]
//! struct Zoom;
//!
//! impl InputListener<f64> for Zoom {
//!     fn scroll_event(&mut self, _x: f64, y: f64, distance: &mut f64) {
//!         *distance -= y;
//!     }
//! }
//!
//! let mut dispatcher = InputDispatcher::new();
//! dispatcher.register(Box::new(Zoom));
//!
//! let mut distance = 10.0;
//! dispatcher.dispatch(&InputEvent::Scroll { x: 0.0, y: 2.0 }, &mut distance);
//! assert_eq!(distance, 8.0);
//! ```

use crate::input::{Action, InputEvent, KeyCode, ModifiersState, MouseButton};

/// Receives input events together with a mutable context.
///
/// Every handler has an empty default body, so an implementor only overrides
/// the events it cares about.
pub trait InputListener<C> {
    fn key_event(&mut self, key: KeyCode, action: Action, modifiers: ModifiersState, ctx: &mut C) {
        let _ = (key, action, modifiers, ctx);
    }

    fn mouse_button_event(
        &mut self,
        button: MouseButton,
        action: Action,
        modifiers: ModifiersState,
        ctx: &mut C,
    ) {
        let _ = (button, action, modifiers, ctx);
    }

    fn mouse_move_event(&mut self, x: f64, y: f64, ctx: &mut C) {
        let _ = (x, y, ctx);
    }

    fn scroll_event(&mut self, x: f64, y: f64, ctx: &mut C) {
        let _ = (x, y, ctx);
    }

    /// Route `event` to the matching handler.
    fn on_event(&mut self, event: &InputEvent, ctx: &mut C) {
        match *event {
            InputEvent::Key {
                key,
                action,
                modifiers,
            } => self.key_event(key, action, modifiers, ctx),
            InputEvent::MouseButton {
                button,
                action,
                modifiers,
            } => self.mouse_button_event(button, action, modifiers, ctx),
            InputEvent::MouseMove { x, y } => self.mouse_move_event(x, y, ctx),
            InputEvent::Scroll { x, y } => self.scroll_event(x, y, ctx),
        }
    }
}

/// Handle returned by [`InputDispatcher::register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// An ordered set of listeners sharing one context type.
pub struct InputDispatcher<C> {
    listeners: Vec<(ListenerId, Box<dyn InputListener<C>>)>,
    next_id: u64,
}

impl<C> Default for InputDispatcher<C> {
    fn default() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 0,
        }
    }
}

impl<C> InputDispatcher<C> {
    /// Create an empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a listener. Listeners are notified in registration order.
    pub fn register(&mut self, listener: Box<dyn InputListener<C>>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        tracing::debug!("Registered input listener {:?}", id);
        id
    }

    /// Remove a listener. Returns `false` if `id` was not registered.
    pub fn unregister(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(other, _)| *other != id);
        let removed = self.listeners.len() != before;
        if removed {
            tracing::debug!("Unregistered input listener {:?}", id);
        }
        removed
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Deliver `event` to every listener, one after another.
    pub fn dispatch(&mut self, event: &InputEvent, ctx: &mut C) {
        tracing::trace!(
            "Dispatching {:?} to {} listeners",
            event,
            self.listeners.len()
        );
        for (_, listener) in &mut self.listeners {
            listener.on_event(event, ctx);
        }
    }
}

impl<C> std::fmt::Debug for InputDispatcher<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputDispatcher")
            .field("listeners", &self.listeners.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
