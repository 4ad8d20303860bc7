//! Pointer input as the scenes see it, already in canvas coordinates.

use crate::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The pointer moved to a new position.
    PointerMoved(Point),
    /// A pointer button was pressed.
    PointerDown {
        position: Point,
        button: PointerButton,
    },
}

impl InputEvent {
    /// Position of a primary-button press, if this is one.
    pub fn primary_press(&self) -> Option<Point> {
        match *self {
            InputEvent::PointerDown {
                position,
                button: PointerButton::Primary,
            } => Some(position),
            _ => None,
        }
    }
}
