//! Clickable buttons.

use crate::action::Action;
use crate::geometry::Rect;
use crate::input::InputEvent;
use crate::render::{Font, Surface, TextAnchor};
use crate::theme::Theme;

pub const BUTTON_RADIUS: u32 = 8;

/// A labelled rectangle that reports its action when clicked.
#[derive(Debug, Clone)]
pub struct Widget {
    bounds: Rect,
    label: String,
    hovered: bool,
    action: Action,
}

impl Widget {
    pub fn new(label: impl Into<String>, bounds: Rect, action: Action) -> Self {
        Self {
            bounds,
            label: label.into(),
            hovered: false,
            action,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn action(&self) -> &Action {
        &self.action
    }

    /// Track hover on pointer motion; return the action on a primary press
    /// inside the bounds.
    pub fn handle(&mut self, event: &InputEvent) -> Option<Action> {
        match event {
            InputEvent::PointerMoved(position) => {
                self.hovered = self.bounds.contains(*position);
                None
            }
            _ => event
                .primary_press()
                .filter(|position| self.bounds.contains(*position))
                .map(|_| self.action.clone()),
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        let (bg, fg) = if self.hovered {
            (Theme::button_hover(), Theme::button_text_hover())
        } else {
            (Theme::button(), Theme::button_text())
        };
        surface.fill_rect(self.bounds, bg, BUTTON_RADIUS);
        surface.draw_text(
            &self.label,
            Font::Body,
            fg,
            TextAnchor::Center(self.bounds.center()),
        );
    }
}

/// Feed `event` to every widget in declaration order and return the first
/// action produced. Every widget sees motion events so hover stays accurate
/// for all of them.
pub fn dispatch_widgets<'a>(
    widgets: impl IntoIterator<Item = &'a mut Widget>,
    event: &InputEvent,
) -> Option<Action> {
    let mut fired = None;
    for widget in widgets {
        let action = widget.handle(event);
        if fired.is_none() {
            fired = action;
        }
    }
    fired
}
