//! Fish donation overlay demo
//!
//! A stand-in host: a toolbar on the HUD and an inventory page (Tab) full
//! of sample items. Hover a fish to see the overlay. Left click toggles the
//! hovered fish's donation flag.
//!
//! Usage: `fish-overlay-demo [flags.json]`
//!
//! With a flags file the donation state is read from disk instead (F5
//! reloads it) and clicks are ignored.

use std::path::{Path, PathBuf};

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::pixels::Color;
use tracing::{info, warn};

use donation_overlay::config::{default_config_path, OverlayConfig};
use donation_overlay::host::{SdlAssets, SdlRenderer};
use donation_overlay::hover::{HostUi, HoverContext, LookupError, SurfaceFlags, ToolbarPanel};
use donation_overlay::item::{Item, Salable};
use donation_overlay::logging;
use donation_overlay::overlay::{FrameInput, OverlayCoordinator, RenderLayer, Renderer, Rgba};
use donation_overlay::placement::{Point, ScreenBounds, Size, TooltipGeometry};
use donation_overlay::status::{DonationKey, DonationStatusOracle, FlagFile, MailFlags};
use donation_overlay::text::measure_text;

const WINDOW_WIDTH: u32 = 800;
const WINDOW_HEIGHT: u32 = 600;

const SLOT_SIZE: i32 = 48;
const SLOT_MARGIN: i32 = 4;
const TOOLBAR_SLOTS: usize = 9;
const INVENTORY_COLUMNS: usize = 9;
const INVENTORY_ROWS: usize = 3;

const MARKER_PATH: &str = "assets/curator_emoji.png";

const SLOT_COLOR: Rgba = Rgba::new(50, 50, 60, 200);
const SLOT_HOVER_COLOR: Rgba = Rgba::new(90, 90, 110, 220);
const PAGE_COLOR: Rgba = Rgba::new(25, 25, 35, 200);
const TOOLTIP_BORDER: Rgba = Rgba::new(90, 60, 30, 255);
const TOOLTIP_FILL: Rgba = Rgba::new(250, 230, 180, 255);
const TOOLTIP_TEXT: Rgba = Rgba::new(60, 40, 20, 255);

const TOOLTIP_TEXT_SCALE: i32 = 2;

fn sample_items() -> Vec<Option<Item>> {
    let toolbar = [
        Some(Item::fish("Carp")),
        Some(Item::new("Parsnip", -75)),
        Some(Item::fish("Largemouth Bass")),
        None,
        Some(Item::new("Quartz", -2)),
        Some(Item::fish("Sunfish")),
        None,
        None,
        Some(Item::fish("Pufferfish")),
    ];
    let page = [
        Some(Item::fish("Sardine")),
        Some(Item::fish("Tuna")),
        Some(Item::new("Amethyst", -2)),
        Some(Item::fish("Sea Cucumber")),
        Some(Item::new("Wood", -16)),
        Some(Item::fish("Catfish")),
        Some(Item::fish("Eel")),
        Some(Item::new("Clay", -16)),
        Some(Item::fish("Pike")),
    ];

    let mut slots: Vec<Option<Item>> = toolbar.into_iter().chain(page).collect();
    slots.resize(TOOLBAR_SLOTS + INVENTORY_COLUMNS * INVENTORY_ROWS, None);
    slots
}

/// Demo host UI state
///
/// Slots 0-8 are the toolbar, 9-35 the inventory page.
struct DemoUi {
    slots: Vec<Option<Item>>,
    inventory_open: bool,
    pointer: Point,
    bounds: ScreenBounds,
    toolbar: Vec<ToolbarPanel>,
}

impl DemoUi {
    fn new(slots: Vec<Option<Item>>, bounds: ScreenBounds) -> Self {
        DemoUi {
            slots,
            inventory_open: false,
            pointer: Point::default(),
            bounds,
            toolbar: Vec::new(),
        }
    }

    fn surfaces(&self) -> SurfaceFlags {
        SurfaceFlags {
            hud_visible: !self.inventory_open,
            inventory_page_open: self.inventory_open,
            ..Default::default()
        }
    }

    fn context(&self) -> HoverContext {
        HoverContext::from_surfaces(&self.surfaces())
    }

    /// Rebuilds the toolbar panel state from the current pointer
    fn refresh(&mut self) {
        let hover_item = if self.inventory_open {
            None
        } else {
            self.slot_at(self.pointer)
                .and_then(|index| self.slots[index].clone())
        };
        self.toolbar = vec![ToolbarPanel { hover_item }];
    }

    fn toolbar_slot(&self, index: usize) -> (Point, Size) {
        let width = (SLOT_SIZE + SLOT_MARGIN) * TOOLBAR_SLOTS as i32 - SLOT_MARGIN;
        let x = (self.bounds.width - width) / 2 + index as i32 * (SLOT_SIZE + SLOT_MARGIN);
        let y = self.bounds.height - SLOT_SIZE - 15;
        (Point::new(x, y), Size::square(SLOT_SIZE))
    }

    fn page_rect(&self) -> (Point, Size) {
        let width = (SLOT_SIZE + SLOT_MARGIN) * INVENTORY_COLUMNS as i32 + SLOT_MARGIN;
        let height = (SLOT_SIZE + SLOT_MARGIN) * INVENTORY_ROWS as i32 + SLOT_MARGIN;
        let origin = Point::new(
            (self.bounds.width - width) / 2,
            (self.bounds.height - height) / 2,
        );
        (origin, Size::new(width, height))
    }

    fn page_slot(&self, index: usize) -> (Point, Size) {
        let (origin, _) = self.page_rect();
        let local = index - TOOLBAR_SLOTS;
        let col = (local % INVENTORY_COLUMNS) as i32;
        let row = (local / INVENTORY_COLUMNS) as i32;
        let position = origin.offset(
            SLOT_MARGIN + col * (SLOT_SIZE + SLOT_MARGIN),
            SLOT_MARGIN + row * (SLOT_SIZE + SLOT_MARGIN),
        );
        (position, Size::square(SLOT_SIZE))
    }

    fn visible_slots(&self) -> Vec<(usize, (Point, Size))> {
        if self.inventory_open {
            (TOOLBAR_SLOTS..self.slots.len())
                .map(|index| (index, self.page_slot(index)))
                .collect()
        } else {
            (0..TOOLBAR_SLOTS)
                .map(|index| (index, self.toolbar_slot(index)))
                .collect()
        }
    }

    fn slot_at(&self, pointer: Point) -> Option<usize> {
        self.visible_slots()
            .into_iter()
            .find(|(_, (position, size))| {
                pointer.x >= position.x
                    && pointer.x < position.x + size.width
                    && pointer.y >= position.y
                    && pointer.y < position.y + size.height
            })
            .map(|(index, _)| index)
    }
}

impl HostUi for DemoUi {
    fn toolbar_panels(&self) -> Result<&[ToolbarPanel], LookupError> {
        Ok(&self.toolbar)
    }

    fn inventory_hover(&self) -> Result<Option<Item>, LookupError> {
        if !self.inventory_open {
            return Err(LookupError::MissingSurface("inventory page"));
        }
        Ok(self
            .slot_at(self.pointer)
            .and_then(|index| self.slots[index].clone()))
    }

    fn container_hover(&self) -> Result<Option<Item>, LookupError> {
        Err(LookupError::MissingSurface("container"))
    }

    fn shop_hover(&self) -> Result<Option<Salable>, LookupError> {
        Err(LookupError::MissingSurface("shop"))
    }
}

fn draw_slots<R>(renderer: &mut R, ui: &DemoUi) -> Result<(), String>
where
    R: Renderer + ?Sized,
{
    if ui.inventory_open {
        let (origin, size) = ui.page_rect();
        renderer.draw_rect(origin, size, PAGE_COLOR)?;
    }

    let hovered = ui.slot_at(ui.pointer);
    for (index, (position, size)) in ui.visible_slots() {
        let color = if hovered == Some(index) { SLOT_HOVER_COLOR } else { SLOT_COLOR };
        renderer.draw_rect(position, size, color)?;

        if let Some(item) = &ui.slots[index] {
            let short: String = item.name.chars().filter(|c| !c.is_whitespace()).take(4).collect();
            renderer.draw_text(&short, position.offset(2, SLOT_SIZE / 2 - 4), 1, Rgba::WHITE)?;
        }
    }

    Ok(())
}

/// Draws the host tooltip for `item` and returns its box
fn draw_tooltip<R>(
    renderer: &mut R,
    item: &Item,
    pointer: Point,
    bounds: ScreenBounds,
) -> Result<TooltipGeometry, String>
where
    R: Renderer + ?Sized,
{
    let body = if item.is_fish() { "Fish" } else { "Item" };
    let title_size = measure_text(&item.name, TOOLTIP_TEXT_SCALE);
    let body_size = measure_text(body, TOOLTIP_TEXT_SCALE);
    let tooltip = TooltipGeometry::for_text(title_size, body_size, pointer, bounds);

    renderer.draw_rect(tooltip.top_left(), Size::new(tooltip.width, tooltip.height), TOOLTIP_BORDER)?;
    renderer.draw_rect(
        tooltip.top_left().offset(3, 3),
        Size::new(tooltip.width - 6, tooltip.height - 6),
        TOOLTIP_FILL,
    )?;

    let text_origin = tooltip.top_left().offset(16, 16);
    renderer.draw_text(&item.name, text_origin, TOOLTIP_TEXT_SCALE, TOOLTIP_TEXT)?;
    renderer.draw_text(
        body,
        text_origin.offset(0, title_size.height),
        TOOLTIP_TEXT_SCALE,
        TOOLTIP_TEXT,
    )?;

    Ok(tooltip)
}

fn load_config() -> OverlayConfig {
    let path = default_config_path().unwrap_or_else(|| PathBuf::from("./config.json"));
    let loaded = OverlayConfig::load_or_create(&path);

    let debug = loaded.as_ref().map(|c| c.debug_logging).unwrap_or(false);
    logging::init(debug);

    match loaded {
        Ok(config) => {
            info!(path = %path.display(), "overlay settings loaded");
            config
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "using default overlay settings");
            OverlayConfig::default()
        }
    }
}

fn main() -> Result<(), String> {
    let config = load_config();

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window = video_subsystem
        .window("Fish Donation Overlay", WINDOW_WIDTH, WINDOW_HEIGHT)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window
        .into_canvas()
        .present_vsync()
        .build()
        .map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;

    let mut assets = SdlAssets::new(&texture_creator);
    let mut overlay = OverlayCoordinator::new(config, &mut assets, Path::new(MARKER_PATH));

    let bounds = ScreenBounds::new(WINDOW_WIDTH as i32, WINDOW_HEIGHT as i32);
    let mut ui = DemoUi::new(sample_items(), bounds);
    let mut flags: MailFlags = ["AquariumDonated:Carp", "AquariumDonated:Sardine"]
        .into_iter()
        .collect();

    let mut flag_file = std::env::args().nth(1).map(FlagFile::open);
    if let Some(file) = &flag_file {
        info!(path = %file.path().display(), "reading donation flags from file, F5 reloads");
    }

    if overlay.config().use_icon_indicator && !overlay.has_marker_asset() {
        warn!(path = MARKER_PATH, "icon indicator enabled but marker missing, only text can show");
    }
    info!("Tab toggles the inventory page, left click toggles a fish's donation flag");

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown { keycode: Some(Keycode::Escape), .. } => break 'running,
                Event::KeyDown { keycode: Some(Keycode::Tab), repeat: false, .. } => {
                    ui.inventory_open = !ui.inventory_open;
                }
                Event::KeyDown { keycode: Some(Keycode::F5), .. } => {
                    if let Some(file) = flag_file.as_mut() {
                        match file.refresh() {
                            Ok(()) => info!(path = %file.path().display(), "donation flags reloaded"),
                            Err(err) => warn!(path = %file.path().display(), %err, "reload failed"),
                        }
                    }
                }
                Event::MouseMotion { x, y, .. } => {
                    ui.pointer = Point::new(x, y);
                }
                Event::MouseButtonDown { mouse_btn: MouseButton::Left, .. }
                    if flag_file.is_none() =>
                {
                    if let Some(item) = overlay.hovered_item().filter(|item| item.is_fish()) {
                        match DonationKey::for_item(item) {
                            Ok(key) => {
                                let donated = flags.toggle(key.as_str());
                                info!(item = %item.name, donated, "donation flag toggled");
                            }
                            Err(err) => warn!(%err, "cannot toggle donation flag"),
                        }
                    }
                }
                _ => {}
            }
        }

        // Pointer sample
        ui.refresh();
        overlay.on_frame_tick(ui.context(), ui.pointer, &ui);
        let context = overlay.context();

        // Render
        canvas.set_draw_color(Color::RGB(40, 70, 50));
        canvas.clear();

        let mut renderer = SdlRenderer::new(&mut canvas);
        draw_slots(&mut renderer, &ui)?;

        let tooltip = match overlay.hovered_item() {
            Some(item) if context.is_menu() => {
                Some(draw_tooltip(&mut renderer, item, ui.pointer, bounds)?)
            }
            _ => None,
        };

        let frame = FrameInput {
            pointer: ui.pointer,
            bounds,
            tooltip,
        };
        let layer = if context.is_menu() {
            RenderLayer::ActiveMenu
        } else {
            RenderLayer::Hud
        };
        let oracle: &dyn DonationStatusOracle = match &flag_file {
            Some(file) => file,
            None => &flags,
        };
        overlay.on_render(layer, &frame, oracle, &mut renderer);

        canvas.present();
    }

    Ok(())
}
