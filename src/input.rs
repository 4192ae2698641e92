//! Input events fed into the editor by a presentation layer.
//!
//! Positions are scene coordinates, i.e. image pixels after the view's
//! zoom and scroll have been undone.

use crate::model::Point;

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Keyboard keys the editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Backspace,
    Delete,
}

/// Events the editor responds to.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse button pressed.
    PointerDown { button: MouseButton, position: Point },
    /// Pointer moved, with or without a button held.
    PointerMove { position: Point },
    /// Mouse button released.
    PointerUp { button: MouseButton, position: Point },
    /// Left button double-clicked.
    DoubleClick { position: Point },
    /// Keyboard key pressed.
    KeyPressed { key: Key },
}

impl InputEvent {
    /// Convenience constructor for a left-button press.
    pub fn left_down(x: f64, y: f64) -> Self {
        InputEvent::PointerDown {
            button: MouseButton::Left,
            position: Point::new(x, y),
        }
    }

    /// Convenience constructor for a left-button release.
    pub fn left_up(x: f64, y: f64) -> Self {
        InputEvent::PointerUp {
            button: MouseButton::Left,
            position: Point::new(x, y),
        }
    }

    pub fn move_to(x: f64, y: f64) -> Self {
        InputEvent::PointerMove {
            position: Point::new(x, y),
        }
    }

    pub fn key(key: Key) -> Self {
        InputEvent::KeyPressed { key }
    }

    /// Scene position carried by the event, if any.
    pub fn position(&self) -> Option<Point> {
        match self {
            InputEvent::PointerDown { position, .. }
            | InputEvent::PointerMove { position }
            | InputEvent::PointerUp { position, .. }
            | InputEvent::DoubleClick { position } => Some(*position),
            InputEvent::KeyPressed { .. } => None,
        }
    }
}
