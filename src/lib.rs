//! Fish donation overlay
//!
//! Flags fish the player has not donated yet. Each frame the overlay finds
//! the item under the pointer, checks it against the host's donation flags,
//! and places a small marker on the item tooltip (or next to the pointer
//! when there is no tooltip).
//!
//! # Modules
//!
//! - [`hover`]: which item the pointer targets
//! - [`status`]: donation flag lookups
//! - [`placement`]: marker geometry
//! - [`overlay`]: the per-frame coordinator and draw interfaces
//! - [`config`]: settings file
//! - [`host`]: SDL2 implementations of the host interfaces (feature `sdl`)

pub mod config;
pub mod hover;
pub mod item;
pub mod logging;
pub mod overlay;
pub mod placement;
pub mod status;
pub mod text;

#[cfg(feature = "sdl")]
pub mod host;
