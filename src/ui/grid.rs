//! Grid host for selectable tiles
//!
//! Owns the selection set and one reusable tile per index. The grid is the
//! source of truth for selection; tiles only mirror it visually.

use super::tile::{SelectableTile, TileConfig};
use egui::{Pos2, Rect};
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, warn};

pub struct TileGrid {
    config: TileConfig,
    item_count: usize,
    allows_multiple_selection: bool,
    tiles: HashMap<usize, SelectableTile>,
    selected: BTreeSet<usize>,
}

impl TileGrid {
    pub fn new(item_count: usize, allows_multiple_selection: bool, config: TileConfig) -> Self {
        Self {
            config,
            item_count,
            allows_multiple_selection,
            tiles: HashMap::new(),
            selected: BTreeSet::new(),
        }
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn allows_multiple_selection(&self) -> bool {
        self.allows_multiple_selection
    }

    pub fn set_allows_multiple_selection(&mut self, allowed: bool) {
        self.allows_multiple_selection = allowed;
    }

    pub fn config(&self) -> &TileConfig {
        &self.config
    }

    /// Swap appearance and timing on every tile, including ones created later.
    pub fn set_config(&mut self, config: TileConfig) {
        debug!(color = ?config.cover_color, "Tile config changed");
        for tile in self.tiles.values_mut() {
            tile.set_config(config.clone());
        }
        self.config = config;
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    pub fn selected_indices(&self) -> Vec<usize> {
        self.selected.iter().copied().collect()
    }

    pub fn tile(&self, index: usize) -> Option<&SelectableTile> {
        self.tiles.get(&index)
    }

    /// Tile for `index`, created on first use. None when out of range.
    pub fn tile_mut(&mut self, index: usize) -> Option<&mut SelectableTile> {
        if index >= self.item_count {
            warn!(index, count = self.item_count, "Tile index out of range");
            return None;
        }
        let config = &self.config;
        Some(
            self.tiles
                .entry(index)
                .or_insert_with(|| SelectableTile::new(config.clone())),
        )
    }

    /// Position a tile and bring its visuals in line with the selection set.
    pub fn layout(&mut self, index: usize, bounds: Rect, now: f64) -> Option<&mut SelectableTile> {
        let selected = self.selected.contains(&index);
        let tile = self.tile_mut(index)?;
        tile.on_bounds_changed(bounds, now);
        if tile.is_selected() != selected {
            tile.set_selected(selected, now);
        }
        Some(tile)
    }

    /// Touch-down in tile-local coordinates. Always precedes the toggle for the same gesture.
    pub fn touch_down(&mut self, index: usize, point: Pos2) {
        if let Some(tile) = self.tile_mut(index) {
            tile.on_touch_down(point);
        }
    }

    pub fn toggle(&mut self, index: usize, now: f64) {
        if self.selected.contains(&index) {
            self.deselect(index, now);
        } else {
            self.select(index, now);
        }
    }

    pub fn select(&mut self, index: usize, now: f64) {
        if index >= self.item_count {
            warn!(index, count = self.item_count, "Ignoring select out of range");
            return;
        }
        if !self.allows_multiple_selection {
            let others: Vec<usize> = self.selected.iter().copied().filter(|&i| i != index).collect();
            for other in others {
                self.deselect(other, now);
            }
        }
        self.selected.insert(index);
        debug!(index, "Tile selected");
        if let Some(tile) = self.tile_mut(index) {
            tile.set_selected(true, now);
        }
    }

    pub fn deselect(&mut self, index: usize, now: f64) {
        if !self.selected.remove(&index) {
            return;
        }
        debug!(index, "Tile deselected");
        if let Some(tile) = self.tiles.get_mut(&index) {
            tile.set_selected(false, now);
        }
    }

    pub fn clear_selection(&mut self, now: f64) {
        for index in self.selected_indices() {
            self.deselect(index, now);
        }
    }

    /// The tile scrolled out of view; reset it for reuse. Selection is kept.
    pub fn recycle(&mut self, index: usize) {
        if let Some(tile) = self.tiles.get_mut(&index) {
            debug!(index, "Tile recycled");
            tile.prepare_for_reuse();
        }
    }

    /// Settle finished animations. Returns true while any tile is animating.
    pub fn tick(&mut self, now: f64) -> bool {
        self.tiles
            .values_mut()
            .fold(false, |animating, tile| tile.tick(now) | animating)
    }
}
