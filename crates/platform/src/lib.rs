//! Platform abstraction layer for the playground.
//!
//! This crate provides input handling independent of the window backend:
//! - Input events (keyboard, mouse buttons, cursor, scroll)
//! - Listener dispatch with an explicit per-call context
//! - Translation from winit window events

mod dispatch;
mod input;
mod translate;

pub use dispatch::{InputDispatcher, InputListener, ListenerId};
pub use input::{Action, InputEvent, KeyCode, ModifiersState, MouseButton};
pub use translate::{EventTranslator, PIXELS_PER_LINE};

// Re-export winit types that users might need
pub use winit::event::WindowEvent;
