//! Translation from `winit` window events to [`InputEvent`]s.

use winit::event::{MouseScrollDelta, WindowEvent};
use winit::keyboard::PhysicalKey;

use crate::input::{Action, InputEvent, ModifiersState};

/// Pixel scroll deltas are divided by this to approximate wheel lines.
pub const PIXELS_PER_LINE: f64 = 120.0;

/// Stateful adapter turning `winit` window events into input events.
///
/// Modifier keys arrive as separate `ModifiersChanged` events in winit, so the
/// translator remembers the latest state and stamps it onto key and mouse
/// button events.
#[derive(Debug, Default)]
pub struct EventTranslator {
    modifiers: ModifiersState,
}

impl EventTranslator {
    /// Create a translator with no modifiers held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Modifier state as of the last processed event.
    pub fn modifiers(&self) -> ModifiersState {
        self.modifiers
    }

    /// Translate a window event.
    ///
    /// Returns `None` for events that are not user input, for keys winit
    /// could not identify, and for modifier updates (which only change the
    /// translator's state).
    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers.state();
                None
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(key) = event.physical_key else {
                    return None;
                };
                let action = if event.repeat {
                    Action::Repeat
                } else {
                    event.state.into()
                };
                Some(InputEvent::Key {
                    key,
                    action,
                    modifiers: self.modifiers,
                })
            }
            WindowEvent::MouseInput { state, button, .. } => Some(InputEvent::MouseButton {
                button: (*button).into(),
                action: (*state).into(),
                modifiers: self.modifiers,
            }),
            WindowEvent::CursorMoved { position, .. } => Some(InputEvent::MouseMove {
                x: position.x,
                y: position.y,
            }),
            WindowEvent::MouseWheel { delta, .. } => {
                let (x, y) = match delta {
                    MouseScrollDelta::LineDelta(x, y) => (f64::from(*x), f64::from(*y)),
                    MouseScrollDelta::PixelDelta(pos) => {
                        (pos.x / PIXELS_PER_LINE, pos.y / PIXELS_PER_LINE)
                    }
                };
                Some(InputEvent::Scroll { x, y })
            }
            _ => None,
        }
    }
}
