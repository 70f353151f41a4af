//! Utility functions

use crate::constants::APP_NAME;
use eframe::egui;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Get the app data directory path (settings, logs)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional)
pub fn parse_hex_color(s: &str) -> Option<egui::Color32> {
    let hex = s.trim().trim_start_matches('#');
    if !hex.is_ascii() || !matches!(hex.len(), 6 | 8) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let (r, g, b) = (byte(0)?, byte(2)?, byte(4)?);
    let a = if hex.len() == 8 { byte(6)? } else { 255 };
    Some(egui::Color32::from_rgba_unmultiplied(r, g, b, a))
}

pub fn format_hex_color(color: egui::Color32) -> String {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    if a == 255 {
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    } else {
        format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
    }
}

/// Serde adapter storing a color as a hex string
pub mod hex_color {
    use eframe::egui::Color32;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(color: &Color32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_hex_color(*color))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color32, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_hex_color(&s)
            .ok_or_else(|| de::Error::custom(format!("invalid color '{}', expected #RRGGBB", s)))
    }
}

/// Decode an image file into egui pixels
pub fn load_color_image(path: &Path) -> Option<egui::ColorImage> {
    match image::open(path) {
        Ok(img) => {
            let rgba = img.to_rgba8();
            let size = [rgba.width() as usize, rgba.height() as usize];
            let pixels = rgba.into_raw();
            Some(egui::ColorImage::from_rgba_unmultiplied(size, &pixels))
        }
        Err(e) => {
            warn!(error = %e, path = %path.display(), "Failed to load tile image");
            None
        }
    }
}

/// Diagonal two-tone gradient, colors picked from the tile index
pub fn placeholder_image(index: usize, size: u32) -> egui::ColorImage {
    let size = size.max(1);
    let palette = crate::theme::PLACEHOLDER_PALETTE;
    let start = palette[index % palette.len()];
    let end = palette[(index + 1) % palette.len()];

    let img = image::RgbaImage::from_fn(size, size, |x, y| {
        let t = (x + y) as f32 / (2 * size) as f32;
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        image::Rgba([
            mix(start.r(), end.r()),
            mix(start.g(), end.g()),
            mix(start.b(), end.b()),
            255,
        ])
    });

    let dims = [img.width() as usize, img.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(dims, img.as_raw())
}
