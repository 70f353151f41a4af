//! Ripple Tiles - selectable image tiles with a touch-origin ripple reveal

pub mod app;
pub mod constants;
pub mod settings;
pub mod theme;
pub mod ui;
pub mod utils;
