//! Application constants and component defaults

pub const APP_NAME: &str = "Ripple Tiles";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Opacity of the selection cover
pub const DEFAULT_COVER_ALPHA: f32 = 0.3;
/// Seconds for every select/deselect transition
pub const DEFAULT_ANIMATION_DURATION: f64 = 0.5;
/// Uniform content scale while selected
pub const DEFAULT_SELECTED_SCALE: f32 = 1.1;

pub const DEFAULT_ITEM_COUNT: usize = 10;
pub const DEFAULT_TILE_SIZE: (f32, f32) = (180.0, 180.0);
