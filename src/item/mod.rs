// Item snapshots
//
// The host owns every item. This module only describes the slice of item
// state the overlay reads each frame:
// - Item name and category code
// - Shop entries that may or may not be items

pub mod definition;

pub use definition::{Item, Salable, FISH_CATEGORY};
