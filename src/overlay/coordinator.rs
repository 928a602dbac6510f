//! Per-frame overlay orchestration
//!
//! The host calls into the coordinator twice per frame:
//!
//! 1. [`OverlayCoordinator::on_frame_tick`] before rendering, to sample the
//!    pointer and resolve the hovered item.
//! 2. [`OverlayCoordinator::on_render`] from either the HUD pass or the
//!    active-menu pass (never both in one frame).
//!
//! The only state carried between frames is the resolver's memoized hover
//! and the marker texture loaded at construction.

use std::path::Path;

use tracing::{debug, warn};

use crate::config::OverlayConfig;
use crate::hover::{HostUi, HoverContext, HoverItemResolver};
use crate::item::Item;
use crate::placement::{
    IconPlacementCalculator, MarkerPlacement, Point, ScreenBounds, Size, TooltipGeometry,
};
use crate::status::{query_status, DonationStatus, DonationStatusOracle};
use crate::text::measure_text;

use super::draw::{
    AssetProvider, DrawCommand, DrawRequest, Renderer, Rgba, BACKGROUND_MARGIN, MARKER_LAYER_DEPTH,
};

/// Scale of the bitmap glyphs used for indicator labels
pub const LABEL_SCALE: i32 = 2;

/// Gap between the marker square and its label
pub const LABEL_GAP: i32 = 4;

/// The host render pass a draw is requested from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderLayer {
    Hud,
    ActiveMenu,
}

impl RenderLayer {
    /// True if this pass is the one that draws for `context`
    pub fn accepts(self, context: HoverContext) -> bool {
        match self {
            RenderLayer::Hud => !context.is_menu(),
            RenderLayer::ActiveMenu => context.is_menu(),
        }
    }
}

/// Screen state the host hands over with each render signal
#[derive(Debug, Clone, Copy)]
pub struct FrameInput {
    pub pointer: Point,
    pub bounds: ScreenBounds,
    /// Tooltip box the host is drawing for the hovered item, if any
    pub tooltip: Option<TooltipGeometry>,
}

/// Why the overlay did or did not flag the hovered item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerDecision {
    NoHover,
    NotEligible,
    Status(DonationStatus),
}

impl MarkerDecision {
    /// True only for an eligible item whose donation is known to be missing
    pub fn shows_marker(self) -> bool {
        self == MarkerDecision::Status(DonationStatus::Unresolved)
    }
}

pub struct OverlayCoordinator<T> {
    config: OverlayConfig,
    calculator: IconPlacementCalculator,
    resolver: HoverItemResolver,
    context: HoverContext,
    /// `None` when the texture failed to load; icon drawing stays off for the session
    marker: Option<T>,
}

impl<T> OverlayCoordinator<T> {
    /// Creates the coordinator and loads the marker texture once
    ///
    /// A failed load is logged here and never retried.
    pub fn new<A>(config: OverlayConfig, assets: &mut A, marker_path: &Path) -> Self
    where
        A: AssetProvider<Texture = T> + ?Sized,
    {
        let marker = match assets.load(marker_path) {
            Ok(texture) => Some(texture),
            Err(err) => {
                warn!(%err, "marker texture unavailable, icon indicator disabled");
                None
            }
        };
        Self::with_marker(config, marker)
    }

    /// Creates the coordinator around an already loaded (or missing) texture
    pub fn with_marker(config: OverlayConfig, marker: Option<T>) -> Self {
        let calculator = IconPlacementCalculator::new(config.placement());
        OverlayCoordinator {
            config,
            calculator,
            resolver: HoverItemResolver::new(),
            context: HoverContext::None,
            marker,
        }
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn has_marker_asset(&self) -> bool {
        self.marker.is_some()
    }

    /// Context recorded by the last frame tick
    pub fn context(&self) -> HoverContext {
        self.context
    }

    pub fn hovered_item(&self) -> Option<&Item> {
        self.resolver.hovered()
    }

    /// Pointer sample signal: records the context and resolves the hover
    pub fn on_frame_tick<H>(&mut self, context: HoverContext, pointer: Point, ui: &H)
    where
        H: HostUi + ?Sized,
    {
        self.context = context;
        self.resolver.sample(context, pointer, ui);
    }

    /// Drops the remembered hover so the next tick scans the host again
    ///
    /// Call after the host changes what sits under a still pointer.
    pub fn invalidate_hover(&mut self) {
        self.resolver.invalidate();
    }

    /// Eligibility and status of the hovered item
    ///
    /// Independent of display settings and of the marker texture.
    pub fn evaluate<O>(&self, oracle: &O) -> MarkerDecision
    where
        O: DonationStatusOracle + ?Sized,
    {
        let Some(item) = self.resolver.hovered() else {
            return MarkerDecision::NoHover;
        };
        if !item.is_fish() {
            return MarkerDecision::NotEligible;
        }
        MarkerDecision::Status(query_status(oracle, item))
    }

    /// Builds this frame's draw request for `layer`, or `None` if nothing is drawn
    pub fn plan<O>(&self, layer: RenderLayer, frame: &FrameInput, oracle: &O) -> Option<DrawRequest>
    where
        O: DonationStatusOracle + ?Sized,
    {
        if !layer.accepts(self.context) || !self.config.any_indicator_enabled() {
            return None;
        }

        let decision = self.evaluate(oracle);

        let draw_icon =
            self.config.use_icon_indicator && decision.shows_marker() && self.marker.is_some();
        let label = if self.config.use_text_indicator {
            match decision {
                MarkerDecision::Status(DonationStatus::Unresolved) => Some(&self.config.not_donated_text),
                MarkerDecision::Status(DonationStatus::Resolved) => Some(&self.config.donated_text),
                _ => None,
            }
        } else {
            None
        };

        if !draw_icon && label.is_none() {
            return None;
        }

        let placement = self
            .calculator
            .compute_position(frame.tooltip, frame.pointer, frame.bounds);
        let mut commands = Vec::with_capacity(3);

        if draw_icon {
            let placement_config = self.calculator.config();
            if placement_config.show_background {
                commands.push(DrawCommand::Background {
                    position: placement.position.offset(-BACKGROUND_MARGIN, -BACKGROUND_MARGIN),
                    size: Size::square(placement.size + 2 * BACKGROUND_MARGIN),
                    color: Rgba::MARKER_BACKGROUND,
                });
            }
            commands.push(DrawCommand::Marker {
                position: placement.position,
                scale: placement_config.draw_scale(),
                layer_depth: MARKER_LAYER_DEPTH,
            });
        }

        if let Some(text) = label {
            commands.push(DrawCommand::Label {
                text: text.clone(),
                position: label_position(text, &placement, frame.bounds),
                scale: LABEL_SCALE,
                color: Rgba::WHITE,
            });
        }

        Some(DrawRequest { commands })
    }

    /// Render signal: draws the indicator for this pass, if any
    ///
    /// Renderer failures are logged and swallowed.
    pub fn on_render<O, R>(&self, layer: RenderLayer, frame: &FrameInput, oracle: &O, renderer: &mut R)
    where
        O: DonationStatusOracle + ?Sized,
        R: Renderer<Texture = T> + ?Sized,
    {
        let Some(request) = self.plan(layer, frame, oracle) else {
            return;
        };
        if let Err(err) = request.submit(renderer, self.marker.as_ref()) {
            debug!(%err, "overlay draw failed");
        }
    }
}

/// Puts a label under the marker square, or above it near the bottom edge
fn label_position(text: &str, placement: &MarkerPlacement, bounds: ScreenBounds) -> Point {
    let extent = measure_text(text, LABEL_SCALE);

    let x = placement
        .position
        .x
        .min(bounds.width - extent.width)
        .max(0);

    let below = placement.bottom() + LABEL_GAP;
    let y = if below + extent.height > bounds.height {
        placement.position.y - LABEL_GAP - extent.height
    } else {
        below
    };

    Point::new(x, y)
}
