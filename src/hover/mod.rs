// Hover resolution
//
// This module figures out which single item the pointer targets:
// - context.rs: HoverContext and the HostUi read interface
// - resolver.rs: HoverItemResolver with per-pointer memoization
// - error.rs: lookup failures reported by the host

pub mod context;
pub mod error;
pub mod resolver;

pub use context::{HostUi, HoverContext, SurfaceFlags, ToolbarPanel};
pub use error::LookupError;
pub use resolver::HoverItemResolver;
