//! Backend-agnostic input events.

pub use winit::keyboard::{KeyCode, ModifiersState};

/// State change reported for a key or mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Press,
    Release,
    /// Key held long enough for the OS to emit a repeat.
    Repeat,
}

impl Action {
    /// Whether the key or button is down after this action.
    pub fn is_down(self) -> bool {
        matches!(self, Action::Press | Action::Repeat)
    }
}

impl From<winit::event::ElementState> for Action {
    fn from(state: winit::event::ElementState) -> Self {
        match state {
            winit::event::ElementState::Pressed => Action::Press,
            winit::event::ElementState::Released => Action::Release,
        }
    }
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => MouseButton::Left,
            winit::event::MouseButton::Right => MouseButton::Right,
            winit::event::MouseButton::Middle => MouseButton::Middle,
            winit::event::MouseButton::Back => MouseButton::Back,
            winit::event::MouseButton::Forward => MouseButton::Forward,
            winit::event::MouseButton::Other(code) => MouseButton::Other(code),
        }
    }
}

/// A single user input event.
///
/// Cursor coordinates are window-relative physical pixels; scroll deltas are
/// in lines, positive `y` meaning away from the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Key {
        key: KeyCode,
        action: Action,
        modifiers: ModifiersState,
    },
    MouseButton {
        button: MouseButton,
        action: Action,
        modifiers: ModifiersState,
    },
    MouseMove {
        x: f64,
        y: f64,
    },
    Scroll {
        x: f64,
        y: f64,
    },
}
