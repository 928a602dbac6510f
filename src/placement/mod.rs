// Marker placement
//
// This module provides the screen-space math for the overlay:
// - geometry.rs: points, sizes, screen bounds, tooltip boxes
// - calculator.rs: IconPlacementCalculator and its config

pub mod calculator;
pub mod geometry;

pub use calculator::{IconAnchor, IconPlacementCalculator, PlacementConfig, BASE_ICON_SIZE, MAX_ICON_SCALE};
pub use geometry::{MarkerPlacement, Point, ScreenBounds, Size, TooltipGeometry};
