//! UI module - the selectable tile component, its grid host and small widgets

pub mod components;
pub mod grid;
pub mod tile;
