//! Menu cards: one clickable panel per catalog entry.

use crate::action::{Action, SceneDescriptor};
use crate::catalog::CatalogEntry;
use crate::geometry::{Point, Rect, Size};
use crate::image::ImageHandle;
use crate::input::InputEvent;
use crate::render::{Font, Surface, TextAnchor};
use crate::theme::Theme;

pub const CARD_SIZE: Size = Size::new(260, 300);
pub const CARD_START_X: i32 = 60;
pub const CARD_TOP: i32 = 130;
pub const CARD_PITCH: i32 = 280;
pub const CARD_RADIUS: u32 = 16;

const VIEW_MORE_SIZE: Size = Size::new(160, 44);
const VIEW_MORE_RADIUS: u32 = 10;

#[derive(Debug, Clone)]
pub struct Card {
    entry: usize,
    bounds: Rect,
    view_more: Rect,
    view_more_hovered: bool,
}

impl Card {
    /// Card for the catalog entry at `entry`, laid out left to right.
    pub fn new(entry: usize) -> Self {
        let bounds = Rect::new(
            CARD_START_X + entry as i32 * CARD_PITCH,
            CARD_TOP,
            CARD_SIZE.width,
            CARD_SIZE.height,
        );
        let view_more = Rect::new(
            bounds.center().x - (VIEW_MORE_SIZE.width / 2) as i32,
            bounds.y + 260,
            VIEW_MORE_SIZE.width,
            VIEW_MORE_SIZE.height,
        );
        Self {
            entry,
            bounds,
            view_more,
            view_more_hovered: false,
        }
    }

    pub fn entry(&self) -> usize {
        self.entry
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn view_more(&self) -> Rect {
        self.view_more
    }

    pub fn is_view_more_hovered(&self) -> bool {
        self.view_more_hovered
    }

    /// A primary press anywhere on the card opens its detail page.
    pub fn handle(&mut self, event: &InputEvent) -> Option<Action> {
        match event {
            InputEvent::PointerMoved(position) => {
                self.view_more_hovered = self.view_more.contains(*position);
                None
            }
            _ => event
                .primary_press()
                .filter(|position| self.bounds.contains(*position))
                .map(|_| Action::NavigateTo(SceneDescriptor::Detail { entry: self.entry })),
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface, entry: &CatalogEntry, image: &ImageHandle) {
        let center_x = self.bounds.center().x;

        surface.fill_rect(self.bounds, Theme::panel(), CARD_RADIUS);
        surface.stroke_rect(self.bounds, Theme::card_border(), 2, CARD_RADIUS);

        let image_rect = Rect::centered_on(Point::new(center_x, self.bounds.y + 95), image.size());
        surface.draw_image(image, image_rect, u8::MAX);

        surface.draw_text(
            &entry.name,
            Font::Body,
            Theme::label(),
            TextAnchor::Center(Point::new(center_x, self.bounds.y + 195)),
        );
        surface.draw_text(
            &entry.area,
            Font::Small,
            Theme::subtitle(),
            TextAnchor::Center(Point::new(center_x, self.bounds.y + 230)),
        );

        let view_more_color = if self.view_more_hovered {
            Theme::view_more_hover()
        } else {
            Theme::view_more()
        };
        surface.fill_rect(self.view_more, view_more_color, VIEW_MORE_RADIUS);
        surface.draw_text(
            "View more",
            Font::Small,
            Theme::label(),
            TextAnchor::Center(self.view_more.center()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PointerButton;

    #[test]
    fn cards_are_laid_out_by_pitch() {
        let xs: Vec<i32> = (0..3).map(|i| Card::new(i).bounds().x).collect();
        assert_eq!(xs, [60, 340, 620]);
        let card = Card::new(1);
        assert_eq!(card.bounds(), Rect::new(340, 130, 260, 300));
        assert_eq!(card.view_more(), Rect::new(390, 390, 160, 44));
    }

    #[test]
    fn view_more_is_centered_under_the_text() {
        let card = Card::new(0);
        assert_eq!(card.view_more().center().x, card.bounds().center().x);
        assert!(card.view_more().y > card.bounds().y + 230);
    }

    #[test]
    fn hover_tracks_view_more_only() {
        let mut card = Card::new(0);
        card.handle(&InputEvent::PointerMoved(Point::new(70, 140)));
        assert!(!card.is_view_more_hovered());
        card.handle(&InputEvent::PointerMoved(card.view_more().center()));
        assert!(card.is_view_more_hovered());
    }

    #[test]
    fn press_on_card_opens_detail() {
        let mut card = Card::new(2);
        let press = InputEvent::PointerDown {
            position: Point::new(700, 140),
            button: PointerButton::Primary,
        };
        assert_eq!(
            card.handle(&press),
            Some(Action::NavigateTo(SceneDescriptor::Detail { entry: 2 }))
        );
        let right = InputEvent::PointerDown {
            position: Point::new(700, 140),
            button: PointerButton::Secondary,
        };
        assert_eq!(card.handle(&right), None);
    }
}
