//! Selectable tile with a touch-origin ripple cover
//!
//! The host reports a touch-down point first and toggles selection later,
//! after its own hit testing. Selecting with a pending touch grows a circular
//! cover out of that point while the content scales up; selecting without one
//! (a recycled tile shown again) applies the end state at once. Deselecting
//! shrinks the cover back into its origin when there is one, otherwise the
//! cover is cleared immediately. Content scale always animates back.
//!
//! All geometry is tile-local: bounds start at the origin, points are
//! relative to the tile's top-left corner.

pub mod animation;
pub mod mask;

use crate::constants::*;
use crate::utils::hex_color;
use animation::{Easing, Track, TransitionToken};
use egui::{Color32, Pos2, Rect};
use mask::CircleMask;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// Appearance and timing of a tile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileConfig {
    #[serde(with = "hex_color")]
    pub cover_color: Color32,
    pub cover_alpha: f32,
    /// Seconds
    pub animation_duration: f64,
    pub selected_image_scale: f32,
    /// Timing of the cover grow/shrink
    pub mask_easing: Easing,
    /// Timing of the content scale
    pub scale_easing: Easing,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            cover_color: Color32::WHITE,
            cover_alpha: DEFAULT_COVER_ALPHA,
            animation_duration: DEFAULT_ANIMATION_DURATION,
            selected_image_scale: DEFAULT_SELECTED_SCALE,
            mask_easing: Easing::Linear,
            scale_easing: Easing::EaseInOut,
        }
    }
}

impl TileConfig {
    /// Green cover preset
    pub fn green() -> Self {
        Self {
            cover_color: crate::theme::COVER_GREEN,
            ..Self::default()
        }
    }

    /// Clamp out-of-range values, warning about each one.
    pub fn sanitized(mut self) -> Self {
        if !(0.0..=1.0).contains(&self.cover_alpha) {
            warn!(value = self.cover_alpha, "cover_alpha out of range, clamping");
            self.cover_alpha = if self.cover_alpha.is_nan() {
                DEFAULT_COVER_ALPHA
            } else {
                self.cover_alpha.clamp(0.0, 1.0)
            };
        }
        if !(self.animation_duration >= 0.0 && self.animation_duration.is_finite()) {
            warn!(value = self.animation_duration, "animation_duration invalid, using 0");
            self.animation_duration = 0.0;
        }
        if !(self.selected_image_scale > 0.0 && self.selected_image_scale.is_finite()) {
            warn!(value = self.selected_image_scale, "selected_image_scale invalid, using default");
            self.selected_image_scale = DEFAULT_SELECTED_SCALE;
        }
        self
    }
}

/// One-shot touch origin, consumed by the next transition that uses it
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PendingTouch {
    #[default]
    None,
    At(Pos2),
}

impl PendingTouch {
    pub fn take(&mut self) -> Option<Pos2> {
        match std::mem::take(self) {
            PendingTouch::At(point) => Some(point),
            PendingTouch::None => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, PendingTouch::At(_))
    }
}

/// Observable selection state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TileState {
    Deselected,
    Selecting(Pos2),
    /// Selected through a touch-driven grow
    Selected,
    /// Selected without a touch, e.g. redisplayed after scrolling
    SelectedNoTouch,
    Deselecting(Pos2),
}

/// What the mask run is doing, kept alongside the mask track
#[derive(Debug, Clone, Copy, PartialEq)]
enum Motion {
    Idle,
    Growing(Pos2),
    Shrinking(Pos2),
}

pub struct SelectableTile {
    config: TileConfig,
    selected: bool,
    touch: PendingTouch,
    /// None until the host lays the tile out
    bounds: Option<Rect>,
    image: Option<egui::TextureHandle>,
    mask: Track<CircleMask>,
    scale: Track<f32>,
    motion: Motion,
    /// Touch point that drove the current selection
    origin: Option<Pos2>,
    needs_redraw: bool,
}

impl SelectableTile {
    pub fn new(config: TileConfig) -> Self {
        Self {
            config: config.sanitized(),
            selected: false,
            touch: PendingTouch::None,
            bounds: None,
            image: None,
            mask: Track::new(CircleMask::EMPTY),
            scale: Track::new(1.0),
            motion: Motion::Idle,
            origin: None,
            needs_redraw: true,
        }
    }

    pub fn config(&self) -> &TileConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: TileConfig) {
        self.config = config.sanitized();
        self.needs_redraw = true;
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    pub fn pending_touch(&self) -> PendingTouch {
        self.touch
    }

    pub fn image(&self) -> Option<&egui::TextureHandle> {
        self.image.as_ref()
    }

    pub fn set_image(&mut self, image: Option<egui::TextureHandle>) {
        self.image = image;
        self.needs_redraw = true;
    }

    /// Returns true once after anything visible changed.
    pub fn take_needs_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Remember where the gesture started. Nothing animates until selection changes.
    pub fn on_touch_down(&mut self, point: Pos2) {
        trace!(x = point.x, y = point.y, "touch down");
        self.touch = PendingTouch::At(point);
    }

    /// Apply a selection change. Returns the token of the mask run when one started.
    pub fn set_selected(&mut self, selected: bool, now: f64) -> Option<TransitionToken> {
        let Some(bounds) = self.bounds else {
            trace!(selected, "tile not laid out yet, deferring");
            self.selected = selected;
            return None;
        };
        // Only a repeated select with a fresh touch grows again
        if selected == self.selected && (!selected || !self.touch.is_pending()) {
            trace!(selected, "selection unchanged");
            if !selected {
                self.touch = PendingTouch::None;
            }
            return None;
        }

        self.selected = selected;
        self.needs_redraw = true;
        if selected {
            self.select(bounds, now)
        } else {
            self.deselect(now)
        }
    }

    fn select(&mut self, bounds: Rect, now: f64) -> Option<TransitionToken> {
        let duration = self.config.animation_duration;
        let scale = self.config.selected_image_scale;

        let Some(point) = self.touch.take() else {
            self.redisplay_selected(bounds);
            return None;
        };

        let from = CircleMask::point(point);
        let to = CircleMask::full_cover(bounds, point);
        debug!(x = point.x, y = point.y, radius = to.radius, duration, "grow");

        let token = self
            .mask
            .animate(from, to, to, duration, self.config.mask_easing, now);
        self.scale.animate(
            self.scale.value(now),
            scale,
            scale,
            duration,
            self.config.scale_easing,
            now,
        );
        self.motion = Motion::Growing(point);
        self.origin = Some(point);
        Some(token)
    }

    fn redisplay_selected(&mut self, bounds: Rect) {
        debug!(width = bounds.width(), height = bounds.height(), "selected without touch");
        self.mask.set(CircleMask::covering(bounds));
        self.scale.set(self.config.selected_image_scale);
        self.motion = Motion::Idle;
        self.origin = None;
    }

    fn deselect(&mut self, now: f64) -> Option<TransitionToken> {
        let duration = self.config.animation_duration;

        // A fresh touch wins; otherwise an unfinished grow folds back into its origin
        let target = self.touch.take().or_else(|| match self.motion_at(now) {
            Motion::Growing(point) => Some(point),
            _ => None,
        });

        let token = match target {
            Some(point) => {
                debug!(x = point.x, y = point.y, duration, "shrink");
                let token = self.mask.animate(
                    self.mask.value(now),
                    CircleMask::point(point),
                    CircleMask::EMPTY,
                    duration,
                    self.config.mask_easing,
                    now,
                );
                self.motion = Motion::Shrinking(point);
                Some(token)
            }
            None => {
                debug!("clear cover");
                self.mask.set(CircleMask::EMPTY);
                self.motion = Motion::Idle;
                None
            }
        };

        self.scale.animate(
            self.scale.value(now),
            1.0,
            1.0,
            duration,
            self.config.scale_easing,
            now,
        );
        self.origin = None;
        token
    }

    /// Resize the overlay and content to the new bounds.
    ///
    /// A mask run in flight is cancelled and snapped to its end state for the
    /// new bounds; a resting cover is re-anchored so it still covers.
    pub fn on_bounds_changed(&mut self, bounds: Rect, now: f64) {
        let previous = self.bounds.replace(bounds);
        if previous == Some(bounds) {
            return;
        }
        self.needs_redraw = true;

        if previous.is_none() {
            if self.selected {
                self.redisplay_selected(bounds);
            }
            return;
        }

        match self.motion_at(now) {
            Motion::Growing(point) => {
                debug!("bounds changed during grow, snapping to cover");
                self.mask
                    .set(CircleMask::full_cover(bounds, bounds.clamp(point)));
                self.motion = Motion::Idle;
            }
            Motion::Shrinking(_) => {
                debug!("bounds changed during shrink, clearing");
                self.mask.set(CircleMask::EMPTY);
                self.motion = Motion::Idle;
            }
            Motion::Idle => {
                self.mask.tick(now);
                let resting = self.mask.resting();
                if self.selected && !resting.is_empty() {
                    self.mask
                        .set(CircleMask::full_cover(bounds, bounds.clamp(resting.center)));
                }
            }
        }
    }

    /// Completion callback for a mask run. Stale tokens are ignored.
    pub fn complete_mask(&mut self, token: TransitionToken) -> bool {
        let applied = self.mask.finish(token);
        if applied {
            self.motion = Motion::Idle;
            self.needs_redraw = true;
        } else {
            trace!(?token, "stale mask completion ignored");
        }
        applied
    }

    /// Settle finished runs. Returns true while anything is still animating.
    pub fn tick(&mut self, now: f64) -> bool {
        let mask_running = self.mask.tick(now);
        let scale_running = self.scale.tick(now);
        if !mask_running {
            self.motion = Motion::Idle;
        }
        mask_running || scale_running
    }

    pub fn is_animating(&self) -> bool {
        self.mask.is_animating() || self.scale.is_animating()
    }

    pub fn mask_run(&self) -> Option<&animation::AnimationRun<CircleMask>> {
        self.mask.run()
    }

    pub fn scale_run(&self) -> Option<&animation::AnimationRun<f32>> {
        self.scale.run()
    }

    /// Mask as it should be drawn at `now`
    pub fn mask(&self, now: f64) -> CircleMask {
        self.mask.value(now)
    }

    pub fn resting_mask(&self) -> CircleMask {
        self.mask.resting()
    }

    pub fn content_scale(&self, now: f64) -> f32 {
        self.scale.value(now)
    }

    /// Overlay surface; always matches the bounds
    pub fn overlay_rect(&self) -> Rect {
        self.bounds.unwrap_or(Rect::ZERO)
    }

    /// Content fills the bounds, scaled about their center.
    pub fn content_rect(&self, now: f64) -> Rect {
        let bounds = self.overlay_rect();
        Rect::from_center_size(bounds.center(), bounds.size() * self.content_scale(now))
    }

    pub fn cover_fill(&self) -> Color32 {
        let [r, g, b, _] = self.config.cover_color.to_srgba_unmultiplied();
        let alpha = (self.config.cover_alpha * 255.0).round() as u8;
        Color32::from_rgba_unmultiplied(r, g, b, alpha)
    }

    pub fn state(&self, now: f64) -> TileState {
        match (self.selected, self.motion_at(now)) {
            (true, Motion::Growing(point)) => TileState::Selecting(point),
            (false, Motion::Shrinking(point)) => TileState::Deselecting(point),
            (true, _) if self.origin.is_some() => TileState::Selected,
            (true, _) => TileState::SelectedNoTouch,
            (false, _) => TileState::Deselected,
        }
    }

    /// Reset for a new item: no selection, no cover, identity scale.
    pub fn prepare_for_reuse(&mut self) {
        self.selected = false;
        self.touch = PendingTouch::None;
        self.mask.set(CircleMask::EMPTY);
        self.scale.set(1.0);
        self.motion = Motion::Idle;
        self.origin = None;
        self.needs_redraw = true;
    }

    /// Motion, treating a run that has already elapsed as finished
    fn motion_at(&self, now: f64) -> Motion {
        match self.mask.run() {
            Some(run) if !run.is_done(now) => self.motion,
            _ => Motion::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    fn laid_out(w: f32, h: f32) -> SelectableTile {
        let mut tile = SelectableTile::new(TileConfig::default());
        tile.on_bounds_changed(Rect::from_min_size(Pos2::ZERO, vec2(w, h)), 0.0);
        tile
    }

    #[test]
    fn touch_then_select_grows_from_the_touch_point() {
        let mut tile = laid_out(100.0, 50.0);
        let p = pos2(20.0, 10.0);
        tile.on_touch_down(p);
        assert_eq!(tile.mask(0.0), CircleMask::EMPTY);

        let token = tile.set_selected(true, 0.0);
        assert!(token.is_some());

        let run = tile.mask_run().expect("grow run");
        assert_eq!(run.from, CircleMask::point(p));
        assert_eq!(run.to, CircleMask::new(p, 150.0));
        assert_eq!(run.duration, 0.5);
        assert_eq!(tile.pending_touch(), PendingTouch::None);
        assert_eq!(tile.state(0.1), TileState::Selecting(p));

        let scale = tile.scale_run().expect("scale run");
        assert_eq!(scale.to, 1.1);
        assert_eq!(scale.duration, 0.5);
    }

    #[test]
    fn grow_completion_leaves_the_end_circle_in_place() {
        let mut tile = laid_out(100.0, 50.0);
        let p = pos2(20.0, 10.0);
        tile.on_touch_down(p);
        tile.set_selected(true, 0.0);

        assert!(tile.tick(0.25));
        assert!(!tile.tick(0.5));
        assert_eq!(tile.resting_mask(), CircleMask::new(p, 150.0));
        assert_eq!(tile.mask(0.6), CircleMask::new(p, 150.0));
        assert_eq!(tile.content_scale(0.6), 1.1);
        assert_eq!(tile.state(0.6), TileState::Selected);
    }

    #[test]
    fn select_without_touch_covers_immediately_from_center() {
        let mut tile = laid_out(100.0, 50.0);
        assert!(tile.set_selected(true, 0.0).is_none());

        assert!(!tile.is_animating());
        assert_eq!(tile.mask(0.0), CircleMask::new(pos2(50.0, 25.0), 150.0));
        assert_eq!(tile.content_scale(0.0), 1.1);
        assert_eq!(tile.state(0.0), TileState::SelectedNoTouch);
    }

    #[test]
    fn deselect_without_touch_clears_and_animates_scale_back() {
        let mut tile = laid_out(100.0, 50.0);
        tile.set_selected(true, 0.0);
        assert!(tile.set_selected(false, 1.0).is_none());

        assert_eq!(tile.mask(1.0), CircleMask::EMPTY);
        assert!(tile.mask_run().is_none());
        let scale = tile.scale_run().expect("scale run");
        assert_eq!((scale.from, scale.to, scale.duration), (1.1, 1.0, 0.5));
        assert!(!tile.tick(1.5));
        assert_eq!(tile.content_scale(1.5), 1.0);
        assert_eq!(tile.state(1.5), TileState::Deselected);
    }

    #[test]
    fn deselect_before_grow_completes_shrinks_into_the_touch_point() {
        let mut tile = laid_out(100.0, 50.0);
        let p = pos2(20.0, 10.0);
        tile.on_touch_down(p);
        let grow = tile.set_selected(true, 0.0).expect("grow token");

        let shrink = tile.set_selected(false, 0.2).expect("shrink token");
        let run = tile.mask_run().expect("shrink run");
        assert_eq!(run.to, CircleMask::point(p));
        assert!(run.from.radius > 0.0 && run.from.radius < 150.0);
        assert_eq!(tile.state(0.3), TileState::Deselecting(p));

        // The grow's completion arrives late and must not resurrect the cover
        assert!(!tile.complete_mask(grow));
        assert!(tile.complete_mask(shrink));
        assert_eq!(tile.resting_mask(), CircleMask::EMPTY);
    }

    #[test]
    fn touch_on_selected_tile_then_deselect_shrinks_to_new_touch() {
        let mut tile = laid_out(100.0, 50.0);
        tile.set_selected(true, 0.0);
        let q = pos2(90.0, 40.0);
        tile.on_touch_down(q);
        tile.set_selected(false, 1.0);

        let run = tile.mask_run().expect("shrink run");
        assert_eq!(run.from, CircleMask::new(pos2(50.0, 25.0), 150.0));
        assert_eq!(run.to, CircleMask::point(q));
        assert_eq!(tile.pending_touch(), PendingTouch::None);

        assert!(tile.tick(1.2));
        assert!(!tile.tick(1.5));
        assert_eq!(tile.resting_mask(), CircleMask::EMPTY);
    }

    #[test]
    fn second_select_without_touch_does_not_restart_the_grow() {
        let mut tile = laid_out(100.0, 50.0);
        tile.on_touch_down(pos2(5.0, 5.0));
        let first = tile.set_selected(true, 0.0);
        let started = tile.mask_run().map(|r| r.started_at);

        assert!(tile.set_selected(true, 0.1).is_none());
        assert_eq!(tile.mask_run().map(|r| r.started_at), started);
        assert!(tile.complete_mask(first.expect("grow token")));
    }

    #[test]
    fn end_to_end_select_then_deselect() {
        let mut tile = laid_out(100.0, 50.0);
        tile.on_touch_down(pos2(20.0, 10.0));
        tile.set_selected(true, 0.0);
        {
            let run = tile.mask_run().expect("grow");
            assert_eq!(run.from, CircleMask::new(pos2(20.0, 10.0), 0.0));
            assert_eq!(run.to, CircleMask::new(pos2(20.0, 10.0), 150.0));
        }
        assert!(!tile.tick(0.5));
        assert_eq!(tile.content_scale(0.5), 1.1);

        tile.set_selected(false, 0.6);
        assert_eq!(tile.mask(0.6), CircleMask::EMPTY);
        assert!(tile.tick(0.9));
        assert!(!tile.tick(1.1));
        assert_eq!(tile.content_scale(1.1), 1.0);
    }

    #[test]
    fn select_before_layout_is_deferred_until_attached() {
        let mut tile = SelectableTile::new(TileConfig::default());
        assert!(tile.set_selected(true, 0.0).is_none());
        assert!(tile.is_selected());
        assert_eq!(tile.mask(0.0), CircleMask::EMPTY);

        tile.on_bounds_changed(Rect::from_min_size(Pos2::ZERO, vec2(40.0, 60.0)), 0.0);
        assert_eq!(tile.mask(0.0), CircleMask::new(pos2(20.0, 30.0), 100.0));
        assert_eq!(tile.content_scale(0.0), 1.1);
    }

    #[test]
    fn resize_during_grow_snaps_to_cover_for_new_bounds() {
        let mut tile = laid_out(100.0, 50.0);
        tile.on_touch_down(pos2(90.0, 40.0));
        let grow = tile.set_selected(true, 0.0).expect("grow token");

        tile.on_bounds_changed(Rect::from_min_size(Pos2::ZERO, vec2(60.0, 30.0)), 0.1);
        assert!(tile.mask_run().is_none());
        let mask = tile.mask(0.1);
        assert_eq!(mask, CircleMask::new(pos2(60.0, 30.0), 90.0));
        assert!(mask.covers(tile.overlay_rect()));
        assert!(!tile.complete_mask(grow));
        assert_eq!(tile.state(0.1), TileState::Selected);
    }

    #[test]
    fn resize_during_shrink_clears() {
        let mut tile = laid_out(100.0, 50.0);
        tile.set_selected(true, 0.0);
        tile.on_touch_down(pos2(10.0, 10.0));
        tile.set_selected(false, 1.0);

        tile.on_bounds_changed(Rect::from_min_size(Pos2::ZERO, vec2(200.0, 100.0)), 1.1);
        assert!(tile.mask_run().is_none());
        assert_eq!(tile.mask(1.1), CircleMask::EMPTY);
        assert_eq!(tile.state(1.1), TileState::Deselected);
    }

    #[test]
    fn resize_while_selected_keeps_full_coverage() {
        let mut tile = laid_out(100.0, 50.0);
        tile.set_selected(true, 0.0);
        let bigger = Rect::from_min_size(Pos2::ZERO, vec2(300.0, 200.0));
        tile.on_bounds_changed(bigger, 1.0);

        assert_eq!(tile.overlay_rect(), bigger);
        assert_eq!(tile.mask(1.0).radius, 500.0);
        assert!(tile.mask(1.0).covers(bigger));
        assert_eq!(tile.content_rect(1.0).center(), bigger.center());
    }

    #[test]
    fn zero_size_bounds_produce_zero_radius_cover() {
        let mut tile = laid_out(0.0, 0.0);
        tile.on_touch_down(Pos2::ZERO);
        tile.set_selected(true, 0.0);
        assert_eq!(tile.mask_run().map(|r| r.to.radius), Some(0.0));
        tile.set_selected(false, 1.0);
        assert_eq!(tile.mask(1.0).radius, 0.0);
    }

    #[test]
    fn reuse_resets_everything_visible() {
        let mut tile = laid_out(100.0, 50.0);
        tile.on_touch_down(pos2(1.0, 1.0));
        let grow = tile.set_selected(true, 0.0).expect("grow token");
        tile.on_touch_down(pos2(2.0, 2.0));

        tile.prepare_for_reuse();
        assert!(!tile.is_selected());
        assert!(!tile.is_animating());
        assert_eq!(tile.pending_touch(), PendingTouch::None);
        assert_eq!(tile.mask(0.1), CircleMask::EMPTY);
        assert_eq!(tile.content_scale(0.1), 1.0);
        assert!(!tile.complete_mask(grow));

        // Shown again as selected: no stale touch, so no grow
        assert!(tile.set_selected(true, 0.2).is_none());
        assert_eq!(tile.state(0.2), TileState::SelectedNoTouch);
    }

    #[test]
    fn content_rect_scales_about_center() {
        let mut tile = laid_out(100.0, 50.0);
        tile.set_selected(true, 0.0);
        let rect = tile.content_rect(0.0);
        assert_eq!(rect.center(), pos2(50.0, 25.0));
        assert!((rect.width() - 110.0).abs() < 1e-3);
        assert!((rect.height() - 55.0).abs() < 1e-3);
    }

    #[test]
    fn cover_fill_applies_alpha() {
        let tile = SelectableTile::new(TileConfig::default());
        assert_eq!(
            tile.cover_fill(),
            Color32::from_rgba_unmultiplied(255, 255, 255, 77)
        );
    }

    #[test]
    fn translucent_cover_color_keeps_its_rgb() {
        let config: TileConfig =
            serde_json::from_str(r##"{"cover_color": "#FFFFFF80"}"##).expect("valid config");
        let tile = SelectableTile::new(config);
        assert_eq!(tile.cover_fill().to_srgba_unmultiplied(), [255, 255, 255, 77]);
    }

    #[test]
    fn deselect_on_deselected_tile_ignores_pending_touch() {
        let mut tile = laid_out(100.0, 50.0);
        tile.on_touch_down(pos2(20.0, 10.0));

        assert!(tile.set_selected(false, 0.0).is_none());
        assert!(tile.mask_run().is_none());
        assert_eq!(tile.pending_touch(), PendingTouch::None);
        assert_eq!(tile.state(0.1), TileState::Deselected);
        assert_eq!(tile.mask(0.1), CircleMask::EMPTY);
    }

    #[test]
    fn mask_runs_linear_while_scale_eases() {
        let mut tile = laid_out(100.0, 50.0);
        tile.on_touch_down(pos2(0.0, 0.0));
        tile.set_selected(true, 0.0);

        assert_eq!(tile.mask_run().map(|r| r.easing), Some(Easing::Linear));
        assert_eq!(tile.scale_run().map(|r| r.easing), Some(Easing::EaseInOut));
        assert!((tile.mask(0.125).radius - 37.5).abs() < 1e-3);
    }

    #[test]
    fn set_config_changes_the_cover_fill() {
        let mut tile = laid_out(10.0, 10.0);
        tile.take_needs_redraw();
        tile.set_config(TileConfig::green());
        assert!(tile.take_needs_redraw());
        assert_eq!(
            tile.cover_fill(),
            Color32::from_rgba_unmultiplied(0x00, 0xc8, 0x53, 77)
        );
    }

    #[test]
    fn green_preset_only_changes_the_color() {
        let green = TileConfig::green();
        assert_eq!(green.cover_color, crate::theme::COVER_GREEN);
        assert_eq!(
            TileConfig {
                cover_color: Color32::WHITE,
                ..green
            },
            TileConfig::default()
        );
    }

    #[test]
    fn sanitized_clamps_out_of_range_values() {
        let config = TileConfig {
            cover_alpha: 1.7,
            animation_duration: -1.0,
            selected_image_scale: 0.0,
            ..TileConfig::default()
        }
        .sanitized();
        assert_eq!(config.cover_alpha, 1.0);
        assert_eq!(config.animation_duration, 0.0);
        assert_eq!(config.selected_image_scale, DEFAULT_SELECTED_SCALE);
    }

    #[test]
    fn config_reads_partial_json() {
        let config: TileConfig =
            serde_json::from_str(r##"{"cover_color": "#00C853", "scale_easing": "linear"}"##)
                .expect("valid config");
        assert_eq!(config.cover_color, Color32::from_rgb(0x00, 0xc8, 0x53));
        assert_eq!(config.scale_easing, Easing::Linear);
        assert_eq!(config.mask_easing, Easing::Linear);
        assert_eq!(config.cover_alpha, DEFAULT_COVER_ALPHA);
        assert_eq!(config.animation_duration, DEFAULT_ANIMATION_DURATION);
    }

    #[test]
    fn image_change_requests_redraw() {
        let mut tile = laid_out(10.0, 10.0);
        tile.take_needs_redraw();
        assert!(!tile.take_needs_redraw());

        let ctx = egui::Context::default();
        let texture = ctx.load_texture(
            "tile-test",
            egui::ColorImage::new([2, 2], Color32::RED),
            egui::TextureOptions::LINEAR,
        );
        tile.set_image(Some(texture));
        assert!(tile.image().is_some());
        assert!(tile.take_needs_redraw());
    }
}
