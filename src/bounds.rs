//! Axis-aligned bounds for mesh hierarchies.

use bevy::prelude::*;

/// Axis-aligned bounding box.
///
/// Degenerate (zero-volume) boxes are legal: an empty point set produces a
/// zero-size box at the origin, and consumers must tolerate zero-extent axes.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct WorldBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Default for WorldBounds {
    fn default() -> Self { Self::ZERO }
}

impl WorldBounds {
    /// Zero-size box at the origin.
    pub const ZERO: Self = Self {
        min: Vec3::ZERO,
        max: Vec3::ZERO,
    };

    pub const fn new(min: Vec3, max: Vec3) -> Self { Self { min, max } }

    /// Tightest box enclosing `points`. Empty input yields [`Self::ZERO`].
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Self {
        let mut iter = points.into_iter();
        let Some(first) = iter.next() else {
            return Self::ZERO;
        };
        let mut bounds = Self {
            min: first,
            max: first,
        };
        for point in iter {
            bounds.expand(point);
        }
        bounds
    }

    /// Grows the box to enclose `point`.
    pub fn expand(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Component-wise extent, `max - min`.
    pub fn size(&self) -> Vec3 { self.max - self.min }

    /// Box midpoint, `(min + max) / 2`.
    pub fn center(&self) -> Vec3 { (self.min + self.max) * 0.5 }

    /// The 8 corners of the box.
    pub fn corners(&self) -> [Vec3; 8] {
        let (min, max) = (self.min, self.max);
        [
            Vec3::new(min.x, min.y, min.z),
            Vec3::new(max.x, min.y, min.z),
            Vec3::new(min.x, max.y, min.z),
            Vec3::new(max.x, max.y, min.z),
            Vec3::new(min.x, min.y, max.z),
            Vec3::new(max.x, min.y, max.z),
            Vec3::new(min.x, max.y, max.z),
            Vec3::new(max.x, max.y, max.z),
        ]
    }

    /// Re-derives the box after applying `transform` to its corners.
    ///
    /// The result is the axis-aligned box of the transformed corners, so a
    /// rotated box grows rather than rotates.
    pub fn transformed_by(&self, transform: &Transform) -> Self {
        Self::from_points(self.corners().map(|corner| transform.transform_point(corner)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_zero_box_at_origin() {
        let bounds = WorldBounds::from_points(std::iter::empty());
        assert_eq!(bounds, WorldBounds::ZERO);
        assert_eq!(bounds.size(), Vec3::ZERO);
        assert_eq!(bounds.center(), Vec3::ZERO);
    }

    #[test]
    fn from_points_is_tight() {
        let bounds = WorldBounds::from_points([
            Vec3::new(-1.0, 0.0, 2.0),
            Vec3::new(3.0, -2.0, 0.0),
            Vec3::new(0.0, 1.0, -1.0),
        ]);
        assert_eq!(bounds.min, Vec3::new(-1.0, -2.0, -1.0));
        assert_eq!(bounds.max, Vec3::new(3.0, 1.0, 2.0));
        assert_eq!(bounds.size(), Vec3::new(4.0, 3.0, 3.0));
        assert_eq!(bounds.center(), Vec3::new(1.0, -0.5, 0.5));
    }

    #[test]
    fn transformed_by_applies_scale_and_translation() {
        let bounds = WorldBounds::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        let moved = bounds.transformed_by(
            &Transform::from_translation(Vec3::new(0.0, 3.0, 0.0)).with_scale(Vec3::splat(2.0)),
        );
        assert_eq!(moved.min, Vec3::new(-2.0, 1.0, -2.0));
        assert_eq!(moved.max, Vec3::new(2.0, 5.0, 2.0));
    }

    #[test]
    fn transformed_by_grows_under_rotation() {
        let bounds = WorldBounds::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        let rotated = bounds
            .transformed_by(&Transform::from_rotation(Quat::from_rotation_y(
                std::f32::consts::FRAC_PI_4,
            )));
        let expected = 2.0 * std::f32::consts::SQRT_2;
        assert!((rotated.size().x - expected).abs() < 1e-5);
        assert!((rotated.size().z - expected).abs() < 1e-5);
        assert!((rotated.size().y - 2.0).abs() < 1e-5);
    }
}
