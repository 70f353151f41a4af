//! App module - contains the main application state and logic

mod textures;
mod views;

use crate::settings::Settings;
use crate::theme;
use crate::ui::grid::TileGrid;
use eframe::egui;
use std::collections::{HashMap, HashSet};
use tracing::info;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) settings: Settings,
    pub(crate) grid: TileGrid,
    pub(crate) allows_multiple_selection: bool,
    pub(crate) green_cover: bool,
    // Content textures by tile index
    pub(crate) tile_textures: HashMap<usize, egui::TextureHandle>,
    // Tiles drawn last frame; ones that drop out get recycled
    pub(crate) visible_tiles: HashSet<usize>,
}

// ============================================================================
// APP INITIALIZATION
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Phosphor icons for the toolbar checkbox
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let grid = TileGrid::new(
            settings.item_count,
            settings.allows_multiple_selection,
            settings.tile.clone(),
        );
        info!(
            items = settings.item_count,
            multi = settings.allows_multiple_selection,
            "Grid ready"
        );

        Self {
            allows_multiple_selection: settings.allows_multiple_selection,
            green_cover: false,
            settings,
            grid,
            tile_textures: HashMap::new(),
            visible_tiles: HashSet::new(),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);

        egui::TopBottomPanel::top("toolbar")
            .exact_height(theme::TOOLBAR_HEIGHT)
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_ELEVATED)
                    .inner_margin(egui::Margin::symmetric(theme::SPACING_LG as i8, 0)),
            )
            .show(ctx, |ui| self.render_toolbar(ui, now));

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(theme::SPACING_LG as i8)),
            )
            .show(ctx, |ui| self.render_grid_view(ui, ctx, now));

        // Keep frames coming until every transition has settled
        if self.grid.tick(now) {
            ctx.request_repaint();
        }
    }
}
