//! Body parameter mapping: slider values to a non-uniform body scale.

use bevy::prelude::*;

/// Slider value that maps to unit scale.
pub const NEUTRAL_PARAM: f32 = 5.0;

/// Marks the avatar body root entity.
#[derive(Component, Reflect, Debug)]
#[reflect(Component)]
pub struct AvatarBody;

/// Current body sliders, in their native UI range.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Component)]
pub struct BodyParams {
    pub height:  f32,
    pub fitness: f32,
}

impl Default for BodyParams {
    fn default() -> Self {
        Self {
            height:  NEUTRAL_PARAM,
            fitness: NEUTRAL_PARAM,
        }
    }
}

impl BodyParams {
    pub const fn new(height: f32, fitness: f32) -> Self { Self { height, fitness } }

    /// Scale vector for the body root.
    pub fn scale(&self) -> Vec3 { body_scale(self.height, self.fitness) }
}

/// Maps the two sliders to a non-uniform scale: fitness drives girth (X and
/// Z), height drives vertical extent (Y). The two axes are deliberately
/// decoupled rather than a uniform scale. Zero values are legal and produce a
/// flattened body rather than an error.
pub fn body_scale(height: f32, fitness: f32) -> Vec3 {
    Vec3::new(
        fitness / NEUTRAL_PARAM,
        height / NEUTRAL_PARAM,
        fitness / NEUTRAL_PARAM,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_sliders_to_divided_scale() {
        assert_eq!(
            body_scale(7.0, 3.0),
            Vec3::new(3.0 / 5.0, 7.0 / 5.0, 3.0 / 5.0)
        );
    }

    #[test]
    fn neutral_sliders_yield_unit_scale() {
        assert_eq!(BodyParams::default().scale(), Vec3::ONE);
    }

    #[test]
    fn zero_sliders_flatten_without_error() {
        let scale = body_scale(0.0, 0.0);
        assert_eq!(scale, Vec3::ZERO);
        assert!(scale.is_finite());
    }

    #[test]
    fn fitness_controls_girth_height_controls_vertical() {
        let scale = body_scale(10.0, 5.0);
        assert_eq!(scale, Vec3::new(1.0, 2.0, 1.0));
    }
}
