//! Circular cover mask geometry

use egui::{pos2, Color32, Pos2, Rect, Shape};

/// Radius that covers `bounds` from any point inside it.
///
/// Width plus height is always at least the diagonal, so a circle of this
/// radius centered anywhere in the rect reaches every corner.
pub fn full_cover_radius(bounds: Rect) -> f32 {
    let size = bounds.size();
    (size.x.max(0.0) + size.y.max(0.0)).max(0.0)
}

/// A circle in tile-local coordinates. Radius is never negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleMask {
    pub center: Pos2,
    pub radius: f32,
}

impl Default for CircleMask {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl CircleMask {
    /// Zero radius at the origin; renders nothing
    pub const EMPTY: Self = Self {
        center: Pos2::ZERO,
        radius: 0.0,
    };

    pub fn new(center: Pos2, radius: f32) -> Self {
        let radius = if radius.is_finite() { radius.max(0.0) } else { 0.0 };
        Self { center, radius }
    }

    /// Zero-radius circle at `center`, the start of a grow and the end of a shrink.
    pub fn point(center: Pos2) -> Self {
        Self::new(center, 0.0)
    }

    pub fn full_cover(bounds: Rect, center: Pos2) -> Self {
        Self::new(center, full_cover_radius(bounds))
    }

    /// Full cover centered on the middle of `bounds`
    pub fn covering(bounds: Rect) -> Self {
        Self::full_cover(bounds, bounds.center())
    }

    pub fn is_empty(&self) -> bool {
        self.radius <= 0.0
    }

    /// The square the circle is inscribed in.
    pub fn oval_rect(&self) -> Rect {
        Rect::from_center_size(self.center, egui::Vec2::splat(self.radius * 2.0))
    }

    pub fn contains(&self, point: Pos2) -> bool {
        // Small slack so corners sitting exactly on the edge count as inside
        self.center.distance(point) <= self.radius + 1e-3
    }

    pub fn covers(&self, rect: Rect) -> bool {
        [
            rect.left_top(),
            rect.right_top(),
            rect.left_bottom(),
            rect.right_bottom(),
        ]
        .into_iter()
        .all(|corner| self.contains(corner))
    }

    /// Flatten to a closed polygon. Empty masks produce an empty path.
    pub fn to_path(&self, segments: usize) -> Vec<Pos2> {
        if self.is_empty() || segments < 3 {
            return Vec::new();
        }
        (0..segments)
            .map(|i| {
                let angle = std::f32::consts::TAU * i as f32 / segments as f32;
                pos2(
                    self.center.x + self.radius * angle.cos(),
                    self.center.y + self.radius * angle.sin(),
                )
            })
            .collect()
    }

    /// Paintable shape offset into screen space by `origin`.
    pub fn to_shape(&self, origin: Pos2, fill: Color32) -> Shape {
        if self.is_empty() {
            return Shape::Noop;
        }
        Shape::circle_filled(origin + self.center.to_vec2(), self.radius, fill)
    }

    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self::new(
            self.center.lerp(other.center, t),
            self.radius + (other.radius - self.radius) * t,
        )
    }
}
