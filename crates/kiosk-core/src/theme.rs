//! Color scheme for the kiosk scenes.

use crate::geometry::Color;

/// The color palette shared by every scene.
///
/// A dark, low-contrast base with slightly blue panels so the university
/// artwork stands out.
pub struct Theme;

impl Theme {
    // ── Base colors ─────────────────────────────────────────
    pub fn background() -> Color {
        Color::rgb(18, 18, 24)
    }

    pub fn panel() -> Color {
        Color::rgb(34, 34, 46)
    }

    pub fn card_border() -> Color {
        Color::rgb(90, 98, 130)
    }

    pub fn panel_border() -> Color {
        Color::rgb(90, 90, 130)
    }

    // ── Text colors ─────────────────────────────────────────
    pub fn heading() -> Color {
        Color::rgb(235, 235, 245)
    }

    pub fn splash_heading() -> Color {
        Color::rgb(230, 230, 245)
    }

    pub fn caption() -> Color {
        Color::rgb(190, 190, 210)
    }

    pub fn body() -> Color {
        Color::rgb(220, 220, 235)
    }

    pub fn subtitle() -> Color {
        Color::rgb(200, 200, 220)
    }

    pub fn label() -> Color {
        Color::rgb(240, 240, 250)
    }

    // ── Widget colors ───────────────────────────────────────
    pub fn button() -> Color {
        Color::rgb(40, 40, 60)
    }

    pub fn button_hover() -> Color {
        Color::rgb(60, 60, 90)
    }

    pub fn button_text() -> Color {
        Self::label()
    }

    pub fn button_text_hover() -> Color {
        Color::rgb(255, 255, 255)
    }

    pub fn view_more() -> Color {
        Color::rgb(50, 50, 85)
    }

    pub fn view_more_hover() -> Color {
        Color::rgb(70, 70, 110)
    }

    // ── Asset fallbacks ─────────────────────────────────────
    pub fn placeholder() -> Color {
        Color::rgb(60, 60, 80)
    }

    pub fn placeholder_border() -> Color {
        Color::rgb(100, 100, 140)
    }

    pub fn logo_placeholder() -> Color {
        Color::rgb(30, 30, 50)
    }
}
