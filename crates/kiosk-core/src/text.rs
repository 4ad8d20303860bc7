//! Greedy word wrapping of multi-paragraph text inside a pixel budget.

use crate::geometry::{Color, Point};
use crate::render::{Font, Surface, TextAnchor};

/// Extra gap after each paragraph, on top of the line height.
pub const PARAGRAPH_SPACING: u32 = 8;

/// One output line and its offset from the top of the text block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedLine {
    pub text: String,
    pub offset_y: u32,
}

/// Break `text` into lines no wider than `max_width` according to `measure`.
///
/// Paragraphs are separated by `'\n'`. Words are packed greedily while the
/// measured line stays strictly below `max_width`. A word that alone exceeds
/// the budget gets a line to itself; words are never split. An empty
/// paragraph yields an empty line, so blank lines in the input still take
/// vertical space.
pub fn wrap<F>(text: &str, max_width: u32, line_height: u32, measure: F) -> Vec<WrappedLine>
where
    F: Fn(&str) -> u32,
{
    let mut lines = Vec::new();
    let mut offset_y = 0;

    for paragraph in text.split('\n') {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            if line.is_empty() {
                line.push_str(word);
                continue;
            }
            let candidate = format!("{line} {word}");
            if measure(&candidate) < max_width {
                line = candidate;
            } else {
                lines.push(WrappedLine {
                    text: std::mem::replace(&mut line, word.to_string()),
                    offset_y,
                });
                offset_y += line_height;
            }
        }
        lines.push(WrappedLine {
            text: line,
            offset_y,
        });
        offset_y += line_height + PARAGRAPH_SPACING;
    }

    lines
}

/// Wrap `text` with the surface's metrics for `font` and draw it with its
/// top-left corner at `origin`.
pub fn draw_wrapped(
    surface: &mut dyn Surface,
    text: &str,
    font: Font,
    color: Color,
    origin: Point,
    max_width: u32,
) {
    let line_height = surface.line_height(font);
    let lines = wrap(text, max_width, line_height, |s| {
        surface.measure_text(font, s)
    });
    for line in lines.iter().filter(|l| !l.text.is_empty()) {
        let at = Point::new(origin.x, origin.y + line.offset_y as i32);
        surface.draw_text(&line.text, font, color, TextAnchor::TopLeft(at));
    }
}
