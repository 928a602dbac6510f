//! Overlay orchestration
//!
//! # Architecture
//!
//! - `coordinator`: OverlayCoordinator, the per-frame state machine
//! - `draw`: Renderer and AssetProvider host interfaces, draw requests
//!
//! # Example Usage
//!
//! ```ignore
//! // Once, at startup
//! let mut overlay = OverlayCoordinator::new(config, &mut assets, Path::new("assets/curator_emoji.png"));
//!
//! // Every frame, before rendering
//! overlay.on_frame_tick(context, pointer, &host_ui);
//!
//! // From the HUD pass or the menu pass
//! overlay.on_render(RenderLayer::ActiveMenu, &frame, &flags, &mut renderer);
//! ```

pub mod coordinator;
pub mod draw;

pub use coordinator::{FrameInput, MarkerDecision, OverlayCoordinator, RenderLayer};
pub use draw::{AssetError, AssetProvider, DrawCommand, DrawRequest, Renderer, Rgba};
