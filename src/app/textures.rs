//! Tile content loading

use super::App;
use crate::utils::{load_color_image, placeholder_image};
use eframe::egui;
use tracing::debug;

/// Edge length of generated placeholder images
const PLACEHOLDER_SIZE: u32 = 256;

impl App {
    /// Content texture for a tile: the configured image file, else a generated gradient.
    pub fn load_tile_texture(&mut self, ctx: &egui::Context, index: usize) -> egui::TextureHandle {
        if let Some(cached) = self.tile_textures.get(&index) {
            return cached.clone();
        }

        let image = self
            .settings
            .image_path(index)
            .and_then(|path| load_color_image(&path))
            .unwrap_or_else(|| {
                debug!(index, "Using placeholder image");
                placeholder_image(index, PLACEHOLDER_SIZE)
            });

        let texture = ctx.load_texture(format!("tile-{}", index), image, egui::TextureOptions::LINEAR);
        self.tile_textures.insert(index, texture.clone());
        texture
    }
}
