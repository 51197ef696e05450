//! Live transform state for the active garment.

use bevy::prelude::*;

use crate::alignment::GarmentCategory;

/// How the garment transform is currently driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum FitMode {
    /// Transform comes entirely from the fit solver.
    #[default]
    AutoFit,
    /// The user touched a manual control. Overrides persist across body
    /// resizes while the fit components keep re-deriving underneath.
    UserOverridden,
}

/// Live, user-adjustable transform of the active garment.
///
/// The fit components (`fit_scale`, `fit_position`) are owned by the solver
/// and re-derived on load and body resize. The user components compose on
/// top rather than replacing them: the final scale is `fit_scale *
/// user_scale` and the translation is `fit_position + user_offset`. Z
/// rotation is fixed at 0; garments are assumed upright, only tilt and turn
/// are adjustable.
#[derive(Component, Reflect, Debug, Clone)]
#[reflect(Component)]
pub struct GarmentTransform {
    pub category:     GarmentCategory,
    pub fit_scale:    f32,
    pub fit_position: Vec3,
    pub user_scale:   f32,
    pub user_offset:  Vec3,
    pub rotation_x:   f32,
    pub rotation_y:   f32,
    pub mode:         FitMode,
}

impl GarmentTransform {
    /// Fresh state for a newly fitted garment: solver output, neutral user
    /// overrides, rotation reset.
    pub const fn from_fit(category: GarmentCategory, fit_scale: f32, fit_position: Vec3) -> Self {
        Self {
            category,
            fit_scale,
            fit_position,
            user_scale: 1.0,
            user_offset: Vec3::ZERO,
            rotation_x: 0.0,
            rotation_y: 0.0,
            mode: FitMode::AutoFit,
        }
    }

    /// Composed uniform scale.
    pub fn final_scale(&self) -> f32 { self.fit_scale * self.user_scale }

    /// Composed translation.
    pub fn translation(&self) -> Vec3 { self.fit_position + self.user_offset }

    /// Renderable transform for the garment root.
    pub fn to_transform(&self) -> Transform {
        Transform {
            translation: self.translation(),
            rotation:    Quat::from_euler(EulerRot::XYZ, self.rotation_x, self.rotation_y, 0.0),
            scale:       Vec3::splat(self.final_scale()),
        }
    }
}

/// Monotonic sequence for garment loads.
///
/// The scene host reserves a number when a load starts and hands it back with
/// the loaded result; a result carrying an older number than the newest
/// reservation lost the race to a replacement and is dropped (last load
/// wins).
#[derive(Resource, Reflect, Debug, Default)]
#[reflect(Resource)]
pub struct LoadSequence {
    issued: u64,
}

impl LoadSequence {
    /// Reserves the next sequence number for a load that is starting.
    pub fn begin_load(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// True if `seq` is older than the newest reservation.
    pub const fn is_stale(&self, seq: u64) -> bool { seq < self.issued }
}

/// The currently active garment, if any.
#[derive(Resource, Reflect, Debug, Default)]
#[reflect(Resource)]
pub struct ActiveGarment {
    pub entity: Option<Entity>,
    pub seq:    u64,
}

/// Writes changed garment state to the renderable `Transform` before
/// transform propagation, so a body resize and the garment follow-up land in
/// the same frame and the two are never rendered inconsistently scaled.
pub fn apply_garment_transforms(
    mut query: Query<(&GarmentTransform, &mut Transform), Changed<GarmentTransform>>,
) {
    for (garment, mut transform) in &mut query {
        *transform = garment.to_transform();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_scale_composes_multiplicatively() {
        let mut garment =
            GarmentTransform::from_fit(GarmentCategory::Unclassified, 0.5, Vec3::ZERO);
        assert_eq!(garment.final_scale(), 0.5);

        garment.user_scale = 1.2;
        assert!((garment.final_scale() - 0.6).abs() < 1e-6);

        // A later refit keeps the multiplier on top.
        garment.fit_scale = 1.0;
        assert!((garment.final_scale() - 1.2).abs() < 1e-6);
    }

    #[test]
    fn user_offset_composes_additively() {
        let mut garment = GarmentTransform::from_fit(
            GarmentCategory::Pants,
            1.0,
            Vec3::new(0.0, 1.0, 0.0),
        );
        garment.user_offset = Vec3::new(0.2, 0.0, -0.1);
        assert_eq!(garment.translation(), Vec3::new(0.2, 1.0, -0.1));
    }

    #[test]
    fn from_fit_resets_overrides_and_rotation() {
        let garment = GarmentTransform::from_fit(GarmentCategory::Shirt, 2.0, Vec3::ONE);
        assert_eq!(garment.user_scale, 1.0);
        assert_eq!(garment.user_offset, Vec3::ZERO);
        assert_eq!(garment.rotation_x, 0.0);
        assert_eq!(garment.rotation_y, 0.0);
        assert_eq!(garment.mode, FitMode::AutoFit);
    }

    #[test]
    fn to_transform_keeps_z_rotation_fixed() {
        let mut garment = GarmentTransform::from_fit(GarmentCategory::Shirt, 1.0, Vec3::ZERO);
        garment.rotation_x = 0.3;
        garment.rotation_y = -0.7;

        let (x, y, z) = garment
            .to_transform()
            .rotation
            .to_euler(EulerRot::XYZ);
        assert!((x - 0.3).abs() < 1e-5);
        assert!((y + 0.7).abs() < 1e-5);
        assert!(z.abs() < 1e-5);
    }

    #[test]
    fn load_sequence_marks_older_loads_stale() {
        let mut loads = LoadSequence::default();
        let first = loads.begin_load();
        let second = loads.begin_load();

        assert!(loads.is_stale(first));
        assert!(!loads.is_stale(second));
        assert_eq!(second, first + 1);
    }
}
