//! Garment fit solver.
//!
//! Bounding-volume analysis that produces the initial uniform scale and
//! centering translation placing a freshly loaded garment onto the body.

use bevy::prelude::*;

use crate::bounds::WorldBounds;

// ============================================================================
// Constants
// ============================================================================

/// Extents at or below this are treated as degenerate.
pub const DEGENERATE_EXTENT: f32 = 1e-6;

// ============================================================================
// Types
// ============================================================================

/// Result of fitting a garment's bounds into the body's bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GarmentFit {
    /// Uniform scale applied to the garment.
    pub scale:    f32,
    /// Translation placing the scaled garment's center on the body's center.
    pub position: Vec3,
}

// ============================================================================
// Solver
// ============================================================================

/// Computes the largest uniform scale that keeps the garment inside the
/// body's bounding envelope on every axis, plus the translation that centers
/// the scaled garment on the body.
///
/// `garment` must be the garment's box at its neutral transform (identity
/// scale, origin position): scaling about the origin moves the box center to
/// `center * scale`, which is what the centering translation accounts for.
///
/// Pure function with no hidden state; callers re-invoke it on every load and
/// body resize rather than caching results.
pub fn fit_garment(body: &WorldBounds, garment: &WorldBounds) -> GarmentFit {
    let body_size = body.size();
    let garment_size = garment.size();

    let scale = axis_ratio(body_size.x, garment_size.x)
        .min(axis_ratio(body_size.y, garment_size.y))
        .min(axis_ratio(body_size.z, garment_size.z));

    let position = body.center() - garment.center() * scale;

    GarmentFit { scale, position }
}

/// Per-axis fit ratio. An axis where either extent is degenerate contributes
/// a neutral 1.0, so flattened geometry never yields NaN, infinity, or a
/// collapsed fit.
fn axis_ratio(body_extent: f32, garment_extent: f32) -> f32 {
    if garment_extent <= DEGENERATE_EXTENT || body_extent <= DEGENERATE_EXTENT {
        1.0
    } else {
        body_extent / garment_extent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn picks_the_most_conservative_axis() {
        let body = WorldBounds::new(Vec3::new(-0.5, -1.0, -0.5), Vec3::new(0.5, 1.0, 0.5));
        let garment = WorldBounds::new(Vec3::new(-1.0, -2.0, -1.0), Vec3::new(1.0, 2.0, 1.0));

        let fit = fit_garment(&body, &garment);
        assert!((fit.scale - 0.5).abs() < EPSILON);
        assert!(fit.position.abs_diff_eq(Vec3::ZERO, EPSILON));
    }

    #[test]
    fn scaled_garment_never_overflows_and_binds_one_axis() {
        let body = WorldBounds::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 3.0, 1.5));
        let garment = WorldBounds::new(Vec3::new(-1.0, -4.0, -0.5), Vec3::new(3.0, 4.0, 2.5));

        let fit = fit_garment(&body, &garment);
        let scaled = garment.size() * fit.scale;
        let body_size = body.size();

        let mut binding_axes = 0;
        for axis in 0..3 {
            assert!(scaled[axis] <= body_size[axis] + EPSILON);
            if (scaled[axis] - body_size[axis]).abs() < EPSILON {
                binding_axes += 1;
            }
        }
        assert!(binding_axes >= 1);
    }

    #[test]
    fn translation_centers_the_scaled_garment() {
        let body = WorldBounds::new(Vec3::new(1.0, 0.0, -1.0), Vec3::new(3.0, 4.0, 1.0));
        let garment = WorldBounds::new(Vec3::new(0.0, 2.0, 0.0), Vec3::new(4.0, 6.0, 4.0));

        let fit = fit_garment(&body, &garment);
        let scaled_center = garment.center() * fit.scale + fit.position;
        assert!(scaled_center.abs_diff_eq(body.center(), EPSILON));
    }

    #[test]
    fn degenerate_garment_axis_contributes_neutral_ratio() {
        let body = WorldBounds::new(Vec3::new(-0.5, -1.0, -0.5), Vec3::new(0.5, 1.0, 0.5));
        let garment = WorldBounds::new(Vec3::new(0.0, -2.0, -1.0), Vec3::new(0.0, 2.0, 1.0));

        let fit = fit_garment(&body, &garment);
        assert!(fit.scale.is_finite());
        assert!(fit.position.is_finite());
        // x collapses to the neutral 1.0, leaving y (2/4) and z (1/2) to bind.
        assert!((fit.scale - 0.5).abs() < EPSILON);
    }

    #[test]
    fn fully_degenerate_inputs_yield_identity_scale() {
        let fit = fit_garment(&WorldBounds::ZERO, &WorldBounds::ZERO);
        assert!((fit.scale - 1.0).abs() < EPSILON);
        assert_eq!(fit.position, Vec3::ZERO);
    }

    #[test]
    fn solver_is_pure() {
        let body = WorldBounds::new(Vec3::new(-0.5, -1.0, -0.5), Vec3::new(0.5, 1.0, 0.5));
        let garment = WorldBounds::new(Vec3::new(-1.0, -2.0, -1.0), Vec3::new(1.0, 2.0, 1.0));

        let first = fit_garment(&body, &garment);
        let second = fit_garment(&body, &garment);
        assert_eq!(first, second);
    }
}
