//! Detail page for a single university.

use crate::action::{Action, SceneDescriptor};
use crate::catalog::CatalogEntry;
use crate::error::Result;
use crate::geometry::{Point, Rect, Size};
use crate::image::ImageHandle;
use crate::input::InputEvent;
use crate::render::{Font, Surface, TextAnchor};
use crate::scene::{Scene, SceneContext};
use crate::text::draw_wrapped;
use crate::theme::Theme;
use crate::widget::{dispatch_widgets, Widget};

const PANEL_RADIUS: u32 = 16;

#[derive(Debug)]
pub struct DetailScene {
    entry_index: usize,
    entry: CatalogEntry,
    image: ImageHandle,
    canvas: Size,
    back: Widget,
    open: Widget,
}

impl DetailScene {
    /// Bind the page to catalog entry `entry`.
    pub fn new(ctx: &SceneContext, entry: usize) -> Result<Self> {
        let record = ctx.catalog.entry(entry)?.clone();
        let image = ctx
            .assets
            .entry_image(entry)
            .cloned()
            .unwrap_or_else(|| {
                ImageHandle::placeholder(crate::assets::ENTRY_IMAGE_SIZE, Theme::placeholder())
            });

        let width = ctx.canvas.width as i32;
        let button_y = ctx.canvas.height as i32 - 80;
        let back = Widget::new(
            "Back",
            Rect::new(40, button_y, 280, 56),
            Action::NavigateTo(SceneDescriptor::Menu),
        );
        let open = Widget::new(
            "Open official site",
            Rect::new(width - 280, button_y, 240, 56),
            Action::OpenExternal(record.url.clone()),
        );

        Ok(Self {
            entry_index: entry,
            entry: record,
            image,
            canvas: ctx.canvas,
            back,
            open,
        })
    }

    pub fn entry_index(&self) -> usize {
        self.entry_index
    }

    pub fn entry(&self) -> &CatalogEntry {
        &self.entry
    }

    pub fn back_button(&self) -> &Widget {
        &self.back
    }

    pub fn open_button(&self) -> &Widget {
        &self.open
    }

    /// Panel holding the image and the wrapped text.
    pub fn panel(&self) -> Rect {
        Rect::new(68, 90, self.canvas.width.saturating_sub(120), 360)
    }

    /// Text width budget next to the image.
    pub fn body_width(&self) -> u32 {
        self.canvas.width.saturating_sub(120 + 220 + 160)
    }

    pub fn body(&self) -> String {
        format!(
            "Summary: {}\n\n\
             Official site: {}\n\
             Tip: look into scholarships, admission requirements and career prospects.\n\
             Task: add this information to your Google Sites page, in the ISB Fair section.",
            self.entry.summary, self.entry.url
        )
    }
}

impl Scene for DetailScene {
    fn handle(&mut self, event: &InputEvent) -> Option<Action> {
        dispatch_widgets([&mut self.back, &mut self.open], event)
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.clear(Theme::background());
        surface.draw_text(
            &format!("{} - {}", self.entry.name, self.entry.area),
            Font::Title,
            Theme::heading(),
            TextAnchor::Center(Point::new(self.canvas.width as i32 / 2, 42)),
        );

        let panel = self.panel();
        surface.fill_rect(panel, Theme::panel(), PANEL_RADIUS);
        surface.stroke_rect(panel, Theme::panel_border(), 2, PANEL_RADIUS);

        let image_rect = Rect::centered_on(
            Point::new(panel.x + 140, panel.center().y),
            self.image.size(),
        );
        surface.draw_image(&self.image, image_rect, u8::MAX);

        draw_wrapped(
            surface,
            &self.body(),
            Font::Small,
            Theme::body(),
            Point::new(image_rect.right() + 30, panel.y + 30),
            self.body_width(),
        );

        self.back.draw(surface);
        self.open.draw(surface);
    }
}
