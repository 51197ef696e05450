//! Visualization overlay for fit debugging
//!
//! Draws the world-space bounds of the avatar body and the active garment as
//! gizmo boxes. Uses Bevy's GizmoConfigGroup pattern (similar to Avian3D's
//! PhysicsGizmos).

use bevy::prelude::*;

use crate::body::AvatarBody;
use crate::bounds::WorldBounds;
use crate::garment::GarmentTransform;
use crate::support::collect_points_relative_to;

/// Gizmo config group for fit bounds visualization.
/// Toggle via `GizmoConfigStore::config_mut::<FitBoundsGizmo>().enabled`
#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct FitBoundsGizmo {}

/// Configuration for fit bounds colors and appearance
#[derive(Resource, Reflect, Debug, Clone)]
#[reflect(Resource)]
pub struct FitBoundsVisualizationConfig {
    pub body_color:    Color,
    pub garment_color: Color,
    pub line_width:    f32,
}

impl Default for FitBoundsVisualizationConfig {
    fn default() -> Self {
        Self {
            body_color:    Color::srgb(0.0, 1.0, 0.0), // Green
            garment_color: Color::srgb(1.0, 1.0, 0.0), // Yellow
            line_width:    2.0,
        }
    }
}

/// Plugin that adds fit bounds visualization functionality
pub struct FitBoundsVisualizationPlugin;

impl Plugin for FitBoundsVisualizationPlugin {
    fn build(&self, app: &mut App) {
        app.init_gizmo_group::<FitBoundsGizmo>()
            .init_resource::<FitBoundsVisualizationConfig>()
            .add_systems(Startup, init_fit_bounds_gizmo)
            .add_systems(Update, draw_fit_bounds);
    }
}

/// Initialize the fit bounds gizmo config (disabled by default)
fn init_fit_bounds_gizmo(
    mut config_store: ResMut<GizmoConfigStore>,
    viz_config: Res<FitBoundsVisualizationConfig>,
) {
    let (config, _) = config_store.config_mut::<FitBoundsGizmo>();
    config.enabled = false;
    config.line.width = viz_config.line_width;
}

/// System that draws body and garment world bounds as boxes
fn draw_fit_bounds(
    mut gizmos: Gizmos<FitBoundsGizmo>,
    viz_config: Res<FitBoundsVisualizationConfig>,
    body_query: Query<Entity, With<AvatarBody>>,
    garment_query: Query<Entity, With<GarmentTransform>>,
    children_query: Query<&Children>,
    mesh_query: Query<&Mesh3d>,
    global_transform_query: Query<&GlobalTransform>,
    meshes: Res<Assets<Mesh>>,
) {
    let targets = body_query
        .iter()
        .map(|e| (e, viz_config.body_color))
        .chain(garment_query.iter().map(|e| (e, viz_config.garment_color)));

    for (entity, color) in targets {
        let Some(points) = collect_points_relative_to(
            entity,
            &children_query,
            &mesh_query,
            &global_transform_query,
            &meshes,
        ) else {
            continue;
        };
        let Ok(global) = global_transform_query.get(entity) else {
            continue;
        };

        let bounds =
            WorldBounds::from_points(points.iter().map(|p| global.transform_point(*p)));

        // Degenerate boxes still draw as a thin sliver
        gizmos.cube(
            Transform::from_translation(bounds.center())
                .with_scale(bounds.size().max(Vec3::splat(1e-3))),
            color,
        );
    }
}
