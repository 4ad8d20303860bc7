//! Splash screen: fades the logo in, then hands over to the menu.

use crate::action::{Action, SceneDescriptor};
use crate::geometry::{Point, Rect, Size};
use crate::image::ImageHandle;
use crate::render::{Font, Surface, TextAnchor};
use crate::scene::{Scene, SceneContext};
use crate::theme::Theme;

/// Seconds the splash stays up.
pub const SPLASH_DURATION: f32 = 1.8;

#[derive(Debug)]
pub struct SplashScene {
    elapsed: f32,
    duration: f32,
    logo: ImageHandle,
    heading: String,
    canvas: Size,
}

impl SplashScene {
    pub fn new(ctx: &SceneContext) -> Self {
        Self::with_duration(ctx, SPLASH_DURATION)
    }

    pub fn with_duration(ctx: &SceneContext, duration: f32) -> Self {
        Self {
            elapsed: 0.0,
            duration,
            logo: ctx.assets.logo().clone(),
            heading: ctx.heading.clone(),
            canvas: ctx.canvas,
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Logo opacity: proportional to progress, clamped to 0..=255.
    pub fn logo_alpha(&self) -> u8 {
        let ratio = if self.duration > 0.0 {
            self.elapsed / self.duration
        } else {
            1.0
        };
        (255.0 * ratio).clamp(0.0, 255.0) as u8
    }
}

impl Scene for SplashScene {
    // Pointer input is ignored; only time moves the splash along.

    fn update(&mut self, dt: f32) -> Option<Action> {
        self.elapsed += dt;
        (self.elapsed >= self.duration).then_some(Action::NavigateTo(SceneDescriptor::Menu))
    }

    fn draw(&self, surface: &mut dyn Surface) {
        let width = self.canvas.width as i32;
        let height = self.canvas.height as i32;

        surface.clear(Theme::background());
        surface.draw_text(
            &self.heading,
            Font::Title,
            Theme::splash_heading(),
            TextAnchor::Center(Point::new(width / 2, 70)),
        );
        let logo_rect = Rect::centered_on(Point::new(width / 2, height / 2), self.logo.size());
        surface.draw_image(&self.logo, logo_rect, self.logo_alpha());
        surface.draw_text(
            "Loading launcher...",
            Font::Small,
            Theme::caption(),
            TextAnchor::Center(Point::new(width / 2, height - 40)),
        );
    }
}
