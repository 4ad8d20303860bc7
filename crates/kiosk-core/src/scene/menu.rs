//! Menu: one card per university plus the About and Exit buttons.

use std::rc::Rc;

use crate::action::{Action, SceneDescriptor};
use crate::assets::Assets;
use crate::card::Card;
use crate::catalog::Catalog;
use crate::geometry::{Point, Rect, Size};
use crate::input::InputEvent;
use crate::render::{Font, Surface, TextAnchor};
use crate::scene::{Scene, SceneContext};
use crate::theme::Theme;
use crate::widget::{dispatch_widgets, Widget};

const BUTTON_SIZE: Size = Size::new(240, 60);
const PADDING_X: i32 = 60;

pub const ABOUT_TITLE: &str = "About the launcher";
pub const ABOUT_BODY: &str = "This launcher runs right in the terminal.\n\
                              Select a university to see its details\n\
                              and open its official site.";

#[derive(Debug)]
pub struct MenuScene {
    catalog: Catalog,
    assets: Rc<Assets>,
    canvas: Size,
    cards: Vec<Card>,
    widgets: Vec<Widget>,
}

impl MenuScene {
    pub fn new(ctx: &SceneContext) -> Self {
        let width = ctx.canvas.width as i32;
        let button_y = ctx.canvas.height as i32 - 80;

        let cards = (0..ctx.catalog.len()).map(Card::new).collect();
        let widgets = vec![
            Widget::new(
                "About",
                Rect::new(PADDING_X, button_y, BUTTON_SIZE.width, BUTTON_SIZE.height),
                Action::NavigateTo(SceneDescriptor::Info {
                    title: ABOUT_TITLE.to_string(),
                    body: ABOUT_BODY.to_string(),
                    url: None,
                }),
            ),
            Widget::new(
                "Exit",
                Rect::new(
                    width - PADDING_X - BUTTON_SIZE.width as i32,
                    button_y,
                    BUTTON_SIZE.width,
                    BUTTON_SIZE.height,
                ),
                Action::Exit,
            ),
        ];

        Self {
            catalog: ctx.catalog.clone(),
            assets: Rc::clone(&ctx.assets),
            canvas: ctx.canvas,
            cards,
            widgets,
        }
    }

    /// Cards in catalog order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    pub fn about_button(&self) -> &Widget {
        &self.widgets[0]
    }

    pub fn exit_button(&self) -> &Widget {
        &self.widgets[1]
    }
}

impl Scene for MenuScene {
    fn handle(&mut self, event: &InputEvent) -> Option<Action> {
        let mut fired = dispatch_widgets(self.widgets.iter_mut(), event);
        for card in &mut self.cards {
            let action = card.handle(event);
            if fired.is_none() {
                fired = action;
            }
        }
        fired
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.clear(Theme::background());
        surface.draw_text(
            "Choose an option to explore",
            Font::Title,
            Theme::heading(),
            TextAnchor::Center(Point::new(self.canvas.width as i32 / 2, 42)),
        );

        for card in &self.cards {
            let (Some(entry), Some(image)) = (
                self.catalog.get(card.entry()),
                self.assets.entry_image(card.entry()),
            ) else {
                continue;
            };
            card.draw(surface, entry, image);
        }

        for widget in &self.widgets {
            widget.draw(surface);
        }
    }
}
