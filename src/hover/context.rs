use crate::item::{Item, Salable};

use super::error::LookupError;

/// The UI surface that owns the pointer this frame
///
/// Exactly one is active at a time. Menus are mutually exclusive, and the
/// HUD only counts while no menu is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum HoverContext {
    /// Nothing that can show an item (title screen, cutscene, ...)
    #[default]
    None,
    /// In-world HUD with toolbar panels
    Hud,
    /// Inventory tab of the game menu
    InventoryPage,
    /// Chest or other item grab grid
    ContainerMenu,
    /// Shop listing
    ShopMenu,
}

impl HoverContext {
    /// True for contexts that draw inside the active-menu layer
    pub fn is_menu(self) -> bool {
        matches!(
            self,
            HoverContext::InventoryPage | HoverContext::ContainerMenu | HoverContext::ShopMenu
        )
    }

    /// Picks the active context from host surface flags
    ///
    /// Priority order (highest to lowest):
    /// 1. ShopMenu
    /// 2. ContainerMenu
    /// 3. InventoryPage
    /// 4. Hud
    /// 5. None
    pub fn from_surfaces(surfaces: &SurfaceFlags) -> Self {
        if surfaces.shop_open {
            HoverContext::ShopMenu
        } else if surfaces.container_open {
            HoverContext::ContainerMenu
        } else if surfaces.inventory_page_open {
            HoverContext::InventoryPage
        } else if surfaces.hud_visible {
            HoverContext::Hud
        } else {
            HoverContext::None
        }
    }
}

/// Which host surfaces are up this frame
#[derive(Debug, Clone, Copy, Default)]
pub struct SurfaceFlags {
    pub hud_visible: bool,
    pub inventory_page_open: bool,
    pub container_open: bool,
    pub shop_open: bool,
}

/// One toolbar-like panel drawn on the HUD
#[derive(Debug, Clone, Default)]
pub struct ToolbarPanel {
    pub hover_item: Option<Item>,
}

/// Read access to the host's hover state, one method per surface
///
/// Implementations must not mutate host state. A surface that is missing
/// or unreadable reports a [`LookupError`].
pub trait HostUi {
    /// Every toolbar panel currently on screen, in draw order
    fn toolbar_panels(&self) -> Result<&[ToolbarPanel], LookupError>;

    /// Hover slot of the open inventory page
    fn inventory_hover(&self) -> Result<Option<Item>, LookupError>;

    /// Hover slot of the open container grid
    fn container_hover(&self) -> Result<Option<Item>, LookupError>;

    /// Hovered shop entry, which may not be an item
    fn shop_hover(&self) -> Result<Option<Salable>, LookupError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context_is_none() {
        assert_eq!(HoverContext::default(), HoverContext::None);
    }

    #[test]
    fn test_menu_contexts() {
        assert!(!HoverContext::None.is_menu());
        assert!(!HoverContext::Hud.is_menu());
        assert!(HoverContext::InventoryPage.is_menu());
        assert!(HoverContext::ContainerMenu.is_menu());
        assert!(HoverContext::ShopMenu.is_menu());
    }

    #[test]
    fn test_context_priority() {
        let mut surfaces = SurfaceFlags::default();
        assert_eq!(HoverContext::from_surfaces(&surfaces), HoverContext::None);

        surfaces.hud_visible = true;
        assert_eq!(HoverContext::from_surfaces(&surfaces), HoverContext::Hud);

        surfaces.inventory_page_open = true;
        assert_eq!(HoverContext::from_surfaces(&surfaces), HoverContext::InventoryPage);

        surfaces.container_open = true;
        assert_eq!(HoverContext::from_surfaces(&surfaces), HoverContext::ContainerMenu);

        surfaces.shop_open = true;
        assert_eq!(HoverContext::from_surfaces(&surfaces), HoverContext::ShopMenu);
    }
}
