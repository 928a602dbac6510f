//! Hover target resolution
//!
//! [`HoverItemResolver::resolve`] is a pure lookup against the host. The
//! resolver also keeps the last result so the host surfaces are only
//! scanned again once the pointer moves or the context changes.

use tracing::debug;

use crate::item::{Item, Salable};
use crate::placement::Point;

use super::context::{HostUi, HoverContext};

/// Finds the item under the pointer and remembers it between samples
#[derive(Debug, Default)]
pub struct HoverItemResolver {
    /// Pointer and context of the last scan
    last_sample: Option<(Point, HoverContext)>,
    hovered: Option<Item>,
}

impl HoverItemResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the hovered item for `context`
    ///
    /// Returns at most one item. Lookup failures are logged and treated as
    /// no hover.
    pub fn resolve<H>(context: HoverContext, ui: &H) -> Option<Item>
    where
        H: HostUi + ?Sized,
    {
        let lookup = match context {
            HoverContext::None => Ok(None),
            HoverContext::Hud => ui
                .toolbar_panels()
                .map(|panels| panels.iter().find_map(|panel| panel.hover_item.clone())),
            HoverContext::InventoryPage => ui.inventory_hover(),
            HoverContext::ContainerMenu => ui.container_hover(),
            HoverContext::ShopMenu => ui.shop_hover().map(|entry| entry.and_then(Salable::into_item)),
        };

        match lookup {
            Ok(item) => item,
            Err(err) => {
                debug!(?context, %err, "hover lookup failed");
                None
            }
        }
    }

    /// Samples the pointer for this frame
    ///
    /// Scans the host only when the pointer or context differs from the
    /// previous sample. Returns the (possibly cached) hovered item.
    pub fn sample<H>(&mut self, context: HoverContext, pointer: Point, ui: &H) -> Option<&Item>
    where
        H: HostUi + ?Sized,
    {
        if self.last_sample != Some((pointer, context)) {
            self.hovered = Self::resolve(context, ui);
            self.last_sample = Some((pointer, context));
        }
        self.hovered.as_ref()
    }

    /// The item found by the last sample
    pub fn hovered(&self) -> Option<&Item> {
        self.hovered.as_ref()
    }

    /// Forces the next sample to scan the host again
    pub fn invalidate(&mut self) {
        self.last_sample = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hover::context::ToolbarPanel;
    use crate::hover::error::LookupError;
    use std::cell::Cell;

    #[derive(Default)]
    struct StubUi {
        panels: Option<Vec<ToolbarPanel>>,
        inventory: Option<Item>,
        container: Option<Item>,
        shop: Option<Salable>,
        broken: bool,
        scans: Cell<usize>,
    }

    impl StubUi {
        fn check(&self) -> Result<(), LookupError> {
            self.scans.set(self.scans.get() + 1);
            if self.broken {
                Err(LookupError::Unavailable("menu is closing".into()))
            } else {
                Ok(())
            }
        }
    }

    impl HostUi for StubUi {
        fn toolbar_panels(&self) -> Result<&[ToolbarPanel], LookupError> {
            self.check()?;
            self.panels
                .as_deref()
                .ok_or(LookupError::MissingSurface("toolbar"))
        }

        fn inventory_hover(&self) -> Result<Option<Item>, LookupError> {
            self.check()?;
            Ok(self.inventory.clone())
        }

        fn container_hover(&self) -> Result<Option<Item>, LookupError> {
            self.check()?;
            Ok(self.container.clone())
        }

        fn shop_hover(&self) -> Result<Option<Salable>, LookupError> {
            self.check()?;
            Ok(self.shop.clone())
        }
    }

    #[test]
    fn test_hud_returns_first_panel_with_hover() {
        let ui = StubUi {
            panels: Some(vec![
                ToolbarPanel { hover_item: None },
                ToolbarPanel { hover_item: Some(Item::fish("Carp")) },
                ToolbarPanel { hover_item: Some(Item::fish("Bream")) },
            ]),
            ..Default::default()
        };
        assert_eq!(
            HoverItemResolver::resolve(HoverContext::Hud, &ui),
            Some(Item::fish("Carp"))
        );
    }

    #[test]
    fn test_hud_without_panels_is_no_hover() {
        let ui = StubUi::default();
        assert_eq!(HoverItemResolver::resolve(HoverContext::Hud, &ui), None);
    }

    #[test]
    fn test_each_menu_reads_only_its_own_surface() {
        let ui = StubUi {
            inventory: Some(Item::fish("Carp")),
            container: Some(Item::fish("Pike")),
            ..Default::default()
        };
        assert_eq!(
            HoverItemResolver::resolve(HoverContext::InventoryPage, &ui),
            Some(Item::fish("Carp"))
        );
        assert_eq!(
            HoverItemResolver::resolve(HoverContext::ContainerMenu, &ui),
            Some(Item::fish("Pike"))
        );
        assert_eq!(HoverItemResolver::resolve(HoverContext::ShopMenu, &ui), None);
        assert_eq!(HoverItemResolver::resolve(HoverContext::None, &ui), None);
    }

    #[test]
    fn test_shop_entries_must_be_items() {
        let mut ui = StubUi {
            shop: Some(Salable::Other { name: "Fish Pond".into() }),
            ..Default::default()
        };
        assert_eq!(HoverItemResolver::resolve(HoverContext::ShopMenu, &ui), None);

        ui.shop = Some(Salable::Item(Item::fish("Tuna")));
        assert_eq!(
            HoverItemResolver::resolve(HoverContext::ShopMenu, &ui),
            Some(Item::fish("Tuna"))
        );
    }

    #[test]
    fn test_lookup_failure_degrades_to_no_hover() {
        let ui = StubUi {
            inventory: Some(Item::fish("Carp")),
            broken: true,
            ..Default::default()
        };
        assert_eq!(HoverItemResolver::resolve(HoverContext::InventoryPage, &ui), None);
    }

    #[test]
    fn test_sample_skips_scan_when_pointer_still() {
        let ui = StubUi {
            inventory: Some(Item::fish("Carp")),
            ..Default::default()
        };
        let mut resolver = HoverItemResolver::new();

        let pointer = Point::new(40, 40);
        assert!(resolver.sample(HoverContext::InventoryPage, pointer, &ui).is_some());
        assert!(resolver.sample(HoverContext::InventoryPage, pointer, &ui).is_some());
        assert_eq!(ui.scans.get(), 1);

        resolver.sample(HoverContext::InventoryPage, pointer.offset(1, 0), &ui);
        assert_eq!(ui.scans.get(), 2);

        resolver.sample(HoverContext::ContainerMenu, pointer.offset(1, 0), &ui);
        assert_eq!(ui.scans.get(), 3);
        assert_eq!(resolver.hovered(), None);
    }

    #[test]
    fn test_invalidate_forces_rescan() {
        let ui = StubUi::default();
        let mut resolver = HoverItemResolver::new();
        let pointer = Point::new(5, 5);

        resolver.sample(HoverContext::InventoryPage, pointer, &ui);
        resolver.invalidate();
        resolver.sample(HoverContext::InventoryPage, pointer, &ui);
        assert_eq!(ui.scans.get(), 2);
    }
}
