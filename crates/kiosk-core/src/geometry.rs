//! Logical canvas geometry. All coordinates are canvas pixels, independent of
//! whatever grid the host finally draws into.

/// A position on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Width and height in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of pixels covered by this size.
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// An axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rectangle of `size` whose center is `center`.
    pub fn centered_on(center: Point, size: Size) -> Self {
        Self {
            x: center.x - (size.width / 2) as i32,
            y: center.y - (size.height / 2) as i32,
            width: size.width,
            height: size.height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.x + (self.width / 2) as i32,
            self.y + (self.height / 2) as i32,
        )
    }

    /// Half-open containment test: the left and top edges are inside, the
    /// right and bottom edges are not.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Whether the two rectangles share at least one pixel.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Composite `over` on top of `self` with the given alpha (0 keeps
    /// `self`, 255 yields `over`).
    pub fn blend(self, over: Color, alpha: u8) -> Color {
        let mix = |under: u8, over: u8| -> u8 {
            let a = alpha as u32;
            ((over as u32 * a + under as u32 * (255 - a) + 127) / 255) as u8
        };
        Color::rgb(mix(self.r, over.r), mix(self.g, over.g), mix(self.b, over.b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let rect = Rect::new(60, 130, 260, 300);
        assert!(rect.contains(Point::new(60, 130)));
        assert!(rect.contains(Point::new(319, 429)));
        assert!(!rect.contains(Point::new(320, 200)));
        assert!(!rect.contains(Point::new(100, 430)));
        assert!(!rect.contains(Point::new(59, 200)));
    }

    #[test]
    fn centered_on_round_trips_center() {
        let rect = Rect::centered_on(Point::new(450, 280), Size::new(220, 220));
        assert_eq!(rect, Rect::new(340, 170, 220, 220));
        assert_eq!(rect.center(), Point::new(450, 280));
    }

    #[test]
    fn adjacent_rects_do_not_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(10, 0, 10, 10);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&Rect::new(9, 9, 5, 5)));
    }

    #[test]
    fn blend_endpoints() {
        let under = Color::rgb(18, 18, 24);
        let over = Color::rgb(200, 100, 50);
        assert_eq!(under.blend(over, 0), under);
        assert_eq!(under.blend(over, 255), over);
        assert_eq!(
            Color::rgb(0, 0, 0).blend(Color::rgb(255, 255, 255), 128),
            Color::rgb(128, 128, 128)
        );
    }
}
