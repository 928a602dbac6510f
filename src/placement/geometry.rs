//! Screen-space geometry values
//!
//! All coordinates are UI pixels with the origin at the top-left of the
//! viewport. Every value here is rebuilt from host state each frame.

/// A pixel position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// Returns this point moved by `(dx, dy)`
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// A pixel extent (measured text, marker squares)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Size { width, height }
    }

    pub fn square(edge: i32) -> Self {
        Size::new(edge, edge)
    }
}

/// Viewport dimensions for the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenBounds {
    pub width: i32,
    pub height: i32,
}

impl ScreenBounds {
    pub fn new(width: i32, height: i32) -> Self {
        ScreenBounds { width, height }
    }
}

/// Padding the host adds around tooltip text on both axes.
pub const TOOLTIP_PADDING: i32 = 32;

/// Distance from the pointer to the tooltip's top-left corner.
pub const TOOLTIP_POINTER_GAP: i32 = 32;

/// Gap kept between the pointer and a tooltip flipped above it.
pub const TOOLTIP_FLIP_GAP: i32 = 16;

/// The tooltip box shown next to the hovered item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooltipGeometry {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl TooltipGeometry {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        TooltipGeometry { x, y, width, height }
    }

    /// Lays out a tooltip the way the host does for item hovers
    ///
    /// The box wraps the wider of the two text blocks plus padding and
    /// opens below-right of the pointer. If it would leave the screen on
    /// the right it is pinned to the right edge; if it would leave the
    /// screen at the bottom it flips above the pointer.
    pub fn for_text(title: Size, body: Size, pointer: Point, bounds: ScreenBounds) -> Self {
        let width = title.width.max(body.width) + TOOLTIP_PADDING;
        let height = title.height + body.height + TOOLTIP_PADDING;

        let mut x = pointer.x + TOOLTIP_POINTER_GAP;
        let mut y = pointer.y + TOOLTIP_POINTER_GAP;

        if x + width > bounds.width {
            x = bounds.width - width;
        }
        if y + height > bounds.height {
            y = pointer.y - height - TOOLTIP_FLIP_GAP;
        }

        TooltipGeometry::new(x, y, width, height)
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Returns a copy that is at least `min` in size and sits inside `bounds`
    ///
    /// Overflow past the right or bottom edge is removed by shifting the box
    /// by exactly the overflow. A box larger than the screen stays pinned to
    /// the top-left.
    pub fn clamped_to(self, bounds: ScreenBounds, min: Size) -> Self {
        let width = self.width.max(min.width);
        let height = self.height.max(min.height);
        let mut x = self.x;
        let mut y = self.y;

        let overflow_x = x + width - bounds.width;
        if overflow_x > 0 {
            x -= overflow_x;
        }
        let overflow_y = y + height - bounds.height;
        if overflow_y > 0 {
            y -= overflow_y;
        }

        TooltipGeometry::new(x.max(0), y.max(0), width, height)
    }
}

/// Where the marker goes this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerPlacement {
    pub position: Point,
    /// Edge length of the square marker in pixels
    pub size: i32,
}

impl MarkerPlacement {
    pub fn right(&self) -> i32 {
        self.position.x + self.size
    }

    pub fn bottom(&self) -> i32 {
        self.position.y + self.size
    }

    /// True if the whole marker square is on screen
    pub fn fits_within(&self, bounds: ScreenBounds) -> bool {
        self.position.x >= 0
            && self.position.y >= 0
            && self.right() <= bounds.width
            && self.bottom() <= bounds.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tooltip_opens_below_right_of_pointer() {
        let tip = TooltipGeometry::for_text(
            Size::new(60, 20),
            Size::new(100, 40),
            Point::new(100, 100),
            ScreenBounds::new(800, 600),
        );
        assert_eq!(tip, TooltipGeometry::new(132, 132, 132, 92));
    }

    #[test]
    fn test_tooltip_pins_to_right_edge() {
        let tip = TooltipGeometry::for_text(
            Size::new(60, 20),
            Size::new(100, 40),
            Point::new(750, 100),
            ScreenBounds::new(800, 600),
        );
        assert_eq!(tip.x, 800 - 132);
        assert_eq!(tip.right(), 800);
    }

    #[test]
    fn test_tooltip_flips_above_pointer_at_bottom() {
        let tip = TooltipGeometry::for_text(
            Size::new(60, 20),
            Size::new(100, 40),
            Point::new(100, 550),
            ScreenBounds::new(800, 600),
        );
        assert_eq!(tip.y, 550 - 92 - TOOLTIP_FLIP_GAP);
    }

    #[test]
    fn test_clamp_shifts_by_exact_overflow() {
        let tip = TooltipGeometry::new(750, 560, 100, 80);
        let clamped = tip.clamped_to(ScreenBounds::new(800, 600), Size::square(0));
        assert_eq!(clamped.x, 700);
        assert_eq!(clamped.y, 520);
        assert_eq!((clamped.width, clamped.height), (100, 80));
    }

    #[test]
    fn test_clamp_grows_degenerate_box() {
        let tip = TooltipGeometry::new(10, 10, 0, -5);
        let clamped = tip.clamped_to(ScreenBounds::new(800, 600), Size::new(80, 80));
        assert_eq!((clamped.width, clamped.height), (80, 80));
        assert_eq!(clamped.top_left(), Point::new(10, 10));
    }

    #[test]
    fn test_marker_fits_within() {
        let bounds = ScreenBounds::new(800, 600);
        let inside = MarkerPlacement { position: Point::new(736, 0), size: 64 };
        let outside = MarkerPlacement { position: Point::new(737, 0), size: 64 };
        assert!(inside.fits_within(bounds));
        assert!(!outside.fits_within(bounds));
    }
}
