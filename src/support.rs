//! Support utilities for mesh and hierarchy operations.

use bevy::prelude::*;

/// Extracts vertex positions from all meshes on `root` and its descendants,
/// expressed in `root`'s local space.
///
/// Root-relative points stay valid when the root's own transform is about to
/// change, which lets callers evaluate candidate root transforms before the
/// transform propagation pass has run. Returns `None` when the hierarchy
/// holds no resident mesh geometry.
pub fn collect_points_relative_to(
    root: Entity,
    children_query: &Query<&Children>,
    mesh_query: &Query<&Mesh3d>,
    global_transform_query: &Query<&GlobalTransform>,
    meshes: &Assets<Mesh>,
) -> Option<Vec<Vec3>> {
    let root_global = global_transform_query.get(root).ok()?;

    let mesh_entities: Vec<Entity> = std::iter::once(root)
        .chain(children_query.iter_descendants(root))
        .filter(|e| mesh_query.get(*e).is_ok())
        .collect();

    if mesh_entities.is_empty() {
        return None;
    }

    let mut points = Vec::new();

    for mesh_entity in &mesh_entities {
        let Ok(mesh3d) = mesh_query.get(*mesh_entity) else {
            continue;
        };
        let Some(mesh) = meshes.get(&mesh3d.0) else {
            continue;
        };
        let Ok(global_transform) = global_transform_query.get(*mesh_entity) else {
            continue;
        };
        let Some(positions) = mesh
            .attribute(Mesh::ATTRIBUTE_POSITION)
            .and_then(|a| a.as_float3())
        else {
            continue;
        };

        let to_root = global_transform.reparented_to(root_global);
        points.extend(
            positions
                .iter()
                .map(|pos| to_root.transform_point(Vec3::from_array(*pos))),
        );
    }

    if points.is_empty() { None } else { Some(points) }
}
