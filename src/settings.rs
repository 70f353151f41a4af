//! User settings read from settings.json in the app data directory
//!
//! Settings are read once at startup and never written back.

use crate::constants::*;
use crate::ui::tile::TileConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Tile appearance and timing
    pub tile: TileConfig,

    // Grid
    pub item_count: usize,
    pub allows_multiple_selection: bool,
    pub tile_width: f32,
    pub tile_height: f32,

    /// Image files by tile index; missing entries get a generated gradient
    pub images: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_w: None,
            window_h: None,
            tile: TileConfig::default(),
            item_count: DEFAULT_ITEM_COUNT,
            allows_multiple_selection: true,
            tile_width: DEFAULT_TILE_SIZE.0,
            tile_height: DEFAULT_TILE_SIZE.1,
            images: Vec::new(),
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => Self::from_json(&s).unwrap_or_else(|e| {
                warn!(error = %e, "Failed to parse settings, using defaults");
                Self::default()
            }),
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        let settings: Self = serde_json::from_str(s)?;
        debug!(items = settings.item_count, "Settings loaded");
        Ok(settings.sanitized())
    }

    fn sanitized(mut self) -> Self {
        self.tile = self.tile.sanitized();
        if !(self.tile_width >= 1.0 && self.tile_height >= 1.0) {
            warn!(
                width = self.tile_width,
                height = self.tile_height,
                "Tile size invalid, using defaults"
            );
            self.tile_width = DEFAULT_TILE_SIZE.0;
            self.tile_height = DEFAULT_TILE_SIZE.1;
        }
        self
    }

    pub fn tile_size(&self) -> egui::Vec2 {
        egui::vec2(self.tile_width, self.tile_height)
    }

    /// Configured image path for a tile, if any
    pub fn image_path(&self, index: usize) -> Option<PathBuf> {
        self.images
            .get(index)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
    }
}
