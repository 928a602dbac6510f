/// Category code the host assigns to fish.
pub const FISH_CATEGORY: i32 = -4;

/// A read-only snapshot of a host item
///
/// The host owns the real object. The overlay only needs the name (used
/// as a stable key) and the category code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Internal name, stable across saves and languages
    pub name: String,

    /// Classification code (fish, artifact, mineral, ...)
    pub category: i32,
}

impl Item {
    /// Creates a new item snapshot
    pub fn new(name: impl Into<String>, category: i32) -> Self {
        Item {
            name: name.into(),
            category,
        }
    }

    /// Shorthand for an item in the fish category
    pub fn fish(name: impl Into<String>) -> Self {
        Self::new(name, FISH_CATEGORY)
    }

    /// Returns true if this item belongs to the donation-tracked category
    pub fn is_fish(&self) -> bool {
        self.category == FISH_CATEGORY
    }
}

/// Anything a shop can list
///
/// Shops sell more than items (recipes, catalogue entries, buildings), so
/// the shop hover target must be narrowed before the overlay can use it.
#[derive(Debug, Clone, PartialEq)]
pub enum Salable {
    Item(Item),
    Other { name: String },
}

impl Salable {
    /// Narrows this entry to an item, discarding anything else
    pub fn into_item(self) -> Option<Item> {
        match self {
            Salable::Item(item) => Some(item),
            Salable::Other { .. } => None,
        }
    }
}
