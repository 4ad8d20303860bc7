//! Static text page with a Back button and an optional link.

use crate::action::{Action, SceneDescriptor};
use crate::geometry::{Point, Rect, Size};
use crate::input::InputEvent;
use crate::render::{Font, Surface, TextAnchor};
use crate::scene::{Scene, SceneContext};
use crate::text::draw_wrapped;
use crate::theme::Theme;
use crate::widget::{dispatch_widgets, Widget};

#[derive(Debug)]
pub struct InfoScene {
    title: String,
    body: String,
    canvas: Size,
    back: Widget,
    open: Option<Widget>,
}

impl InfoScene {
    /// An empty `url` is treated the same as no url.
    pub fn new(ctx: &SceneContext, title: String, body: String, url: Option<String>) -> Self {
        let width = ctx.canvas.width as i32;
        let button_y = ctx.canvas.height as i32 - 80;

        let back = Widget::new(
            "Back",
            Rect::new(40, button_y, 200, 56),
            Action::NavigateTo(SceneDescriptor::Menu),
        );
        let open = url.filter(|u| !u.is_empty()).map(|url| {
            Widget::new(
                "Open link",
                Rect::new(width - 260, button_y, 220, 56),
                Action::OpenExternal(url),
            )
        });

        Self {
            title,
            body,
            canvas: ctx.canvas,
            back,
            open,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn back_button(&self) -> &Widget {
        &self.back
    }

    pub fn open_button(&self) -> Option<&Widget> {
        self.open.as_ref()
    }
}

impl Scene for InfoScene {
    fn handle(&mut self, event: &InputEvent) -> Option<Action> {
        dispatch_widgets(
            std::iter::once(&mut self.back).chain(self.open.as_mut()),
            event,
        )
    }

    fn draw(&self, surface: &mut dyn Surface) {
        let width = self.canvas.width as i32;
        surface.clear(Theme::background());
        surface.draw_text(
            &self.title,
            Font::Title,
            Theme::heading(),
            TextAnchor::Center(Point::new(width / 2, 42)),
        );
        draw_wrapped(
            surface,
            &self.body,
            Font::Small,
            Theme::body(),
            Point::new(70, 110),
            self.canvas.width.saturating_sub(140),
        );
        self.back.draw(surface);
        if let Some(open) = &self.open {
            open.draw(surface);
        }
    }
}
