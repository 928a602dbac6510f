//! Marker placement
//!
//! Two modes, picked by whether the host is showing a tooltip box:
//!
//! - **Tooltip-relative**: the marker sits in a corner of the box, inset by
//!   [`TOOLTIP_INSET`]. The box is clamped on screen before corners are taken.
//! - **Cursor-relative**: the marker floats up-right of the pointer and flips
//!   to the other side when it would leave the screen. Any overflow left
//!   after that is clamped, so the marker is always fully on screen.
//!
//! The calculator holds nothing but its immutable config, so the same inputs
//! always give the same placement.

use serde::{Deserialize, Serialize};

use super::geometry::{MarkerPlacement, Point, ScreenBounds, Size, TooltipGeometry};

/// Marker edge length at scale 1.0
pub const BASE_ICON_SIZE: i32 = 32;

/// Distance between a tooltip edge and the marker inside it
pub const TOOLTIP_INSET: i32 = 8;

/// Largest accepted marker scale; bigger values are clamped
pub const MAX_ICON_SCALE: f32 = 64.0;

/// Horizontal distance from the pointer in cursor-relative mode
pub const CURSOR_SHIFT_X: i32 = 48;

/// Vertical distance from the pointer in cursor-relative mode
pub const CURSOR_SHIFT_Y: i32 = 32;

/// Corner (or pointer) the marker is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IconAnchor {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
    FollowCursor,
}

/// Placement options, fixed for the session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementConfig {
    pub anchor: IconAnchor,
    pub offset_x: i32,
    pub offset_y: i32,
    /// Marker size multiplier, always positive
    pub scale: f32,
    pub show_background: bool,
}

impl PlacementConfig {
    /// Scale the sprite is drawn at, capped at [`MAX_ICON_SCALE`]
    pub fn draw_scale(&self) -> f32 {
        self.scale.min(MAX_ICON_SCALE)
    }

    /// Marker edge length in pixels
    pub fn icon_size(&self) -> i32 {
        (BASE_ICON_SIZE as f32 * self.draw_scale()) as i32
    }

    /// Smallest tooltip that still holds an inset marker
    pub fn min_tooltip_size(&self) -> Size {
        Size::square(self.icon_size().saturating_add(2 * TOOLTIP_INSET))
    }
}

impl Default for PlacementConfig {
    fn default() -> Self {
        PlacementConfig {
            anchor: IconAnchor::TopRight,
            offset_x: 0,
            offset_y: 0,
            scale: 2.0,
            show_background: true,
        }
    }
}

/// Computes where the marker is drawn
#[derive(Debug, Clone)]
pub struct IconPlacementCalculator {
    config: PlacementConfig,
}

impl IconPlacementCalculator {
    pub fn new(config: PlacementConfig) -> Self {
        IconPlacementCalculator { config }
    }

    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    /// Computes the marker placement for one frame
    ///
    /// `tooltip` is the box the host is drawing for the hovered item, or
    /// `None` when no box is shown (toolbar hovers).
    pub fn compute_position(
        &self,
        tooltip: Option<TooltipGeometry>,
        pointer: Point,
        bounds: ScreenBounds,
    ) -> MarkerPlacement {
        let size = self.config.icon_size();
        let position = match tooltip {
            Some(tooltip) => self.within_tooltip(tooltip, bounds, size),
            None => self.beside_cursor(pointer, bounds, size),
        };
        MarkerPlacement { position, size }
    }

    fn within_tooltip(&self, tooltip: TooltipGeometry, bounds: ScreenBounds, size: i32) -> Point {
        let tip = tooltip.clamped_to(bounds, self.config.min_tooltip_size());

        let left = tip.x.saturating_add(TOOLTIP_INSET);
        let right = tip.right().saturating_sub(size.saturating_add(TOOLTIP_INSET));
        let top = tip.y.saturating_add(TOOLTIP_INSET);
        let bottom = tip.bottom().saturating_sub(size.saturating_add(TOOLTIP_INSET));

        let corner = match self.config.anchor {
            IconAnchor::TopLeft => Point::new(left, top),
            IconAnchor::TopRight | IconAnchor::FollowCursor => Point::new(right, top),
            IconAnchor::BottomLeft => Point::new(left, bottom),
            IconAnchor::BottomRight => Point::new(right, bottom),
        };

        corner.offset(self.config.offset_x, self.config.offset_y)
    }

    fn beside_cursor(&self, pointer: Point, bounds: ScreenBounds, size: i32) -> Point {
        let mut x = pointer.x + CURSOR_SHIFT_X + self.config.offset_x;
        let mut y = pointer.y - CURSOR_SHIFT_Y + self.config.offset_y;

        if x + size > bounds.width {
            x = pointer.x - CURSOR_SHIFT_X + self.config.offset_x;
        }
        if y < 0 {
            y = pointer.y + CURSOR_SHIFT_Y + self.config.offset_y;
        }

        // Whatever overflow the mirror and flip leave is clamped away.
        let x = x.min(bounds.width - size).max(0);
        let y = y.min(bounds.height - size).max(0);

        Point::new(x, y)
    }
}
