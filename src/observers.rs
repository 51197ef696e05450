//! Observers that wire scene-host events to the fitting engine.

use bevy::prelude::*;

use crate::alignment::GarmentCategory;
use crate::body::AvatarBody;
use crate::body::BodyParams;
use crate::bounds::WorldBounds;
use crate::events::BodyResized;
use crate::events::GarmentFitted;
use crate::events::GarmentLoaded;
use crate::events::SetBodyParams;
use crate::events::SetGarmentOffset;
use crate::events::SetGarmentRotation;
use crate::events::SetGarmentScale;
use crate::garment::ActiveGarment;
use crate::garment::FitMode;
use crate::garment::GarmentTransform;
use crate::garment::LoadSequence;
use crate::solver::fit_garment;
use crate::support::collect_points_relative_to;

/// Bounds of the hierarchy under `root` with `root_transform` applied at the
/// root.
///
/// Evaluating against an explicit root transform keeps the result correct
/// when the root was mutated earlier in the same step, before transform
/// propagation has run. Returns `None` when no mesh geometry is resident.
fn hierarchy_bounds(
    root: Entity,
    root_transform: &Transform,
    children_query: &Query<&Children>,
    mesh_query: &Query<&Mesh3d>,
    global_transform_query: &Query<&GlobalTransform>,
    meshes: &Assets<Mesh>,
) -> Option<WorldBounds> {
    let points = collect_points_relative_to(
        root,
        children_query,
        mesh_query,
        global_transform_query,
        meshes,
    )?;
    Some(WorldBounds::from_points(
        points.iter().map(|p| root_transform.transform_point(*p)),
    ))
}

/// Observer for `SetBodyParams` - applies the slider mapping to the body root
/// and re-follows the active garment in the same step, so body and garment
/// never render inconsistently scaled.
///
/// The garment follow re-derives only the fit components: fit scale tracks
/// the new body envelope and the position re-centers on the new body center,
/// while user-set scale, offset, and rotation persist on top.
pub fn on_set_body_params(
    event: On<SetBodyParams>,
    mut commands: Commands,
    mut body_query: Query<(&mut BodyParams, &mut Transform), With<AvatarBody>>,
    mut garment_query: Query<&mut GarmentTransform>,
    active: Res<ActiveGarment>,
    children_query: Query<&Children>,
    mesh_query: Query<&Mesh3d>,
    global_transform_query: Query<&GlobalTransform>,
    meshes: Res<Assets<Mesh>>,
) {
    let body = event.body;

    let Ok((mut params, mut transform)) = body_query.get_mut(body) else {
        warn!("SetBodyParams: {body:?} is not an avatar body, ignoring");
        return;
    };

    params.height = event.height;
    params.fitness = event.fitness;
    let scale = params.scale();
    transform.scale = scale;

    info!(
        "body resized: height={} fitness={} scale=({:.2}, {:.2}, {:.2})",
        event.height, event.fitness, scale.x, scale.y, scale.z
    );

    if let Some(garment) = active.entity {
        if let Ok(mut garment_state) = garment_query.get_mut(garment) {
            let new_body_bounds = hierarchy_bounds(
                body,
                &*transform,
                &children_query,
                &mesh_query,
                &global_transform_query,
                &meshes,
            );
            let garment_points = collect_points_relative_to(
                garment,
                &children_query,
                &mesh_query,
                &global_transform_query,
                &meshes,
            );

            if let (Some(body_bounds), Some(points)) = (new_body_bounds, garment_points) {
                let garment_bounds = WorldBounds::from_points(points);
                let fit = fit_garment(&body_bounds, &garment_bounds);

                garment_state.fit_scale = fit.scale;
                garment_state.fit_position = fit.position;

                debug!(
                    "garment re-followed: fit_scale={:.3} final_scale={:.3}",
                    fit.scale,
                    garment_state.final_scale()
                );
                commands.trigger(GarmentFitted {
                    garment,
                    scale:    fit.scale,
                    position: fit.position,
                });
            } else {
                warn!("SetBodyParams: no resident geometry to re-follow garment {garment:?}");
            }
        }
    }

    commands.trigger(BodyResized { body, scale });
}

/// Observer for `GarmentLoaded` - fits a freshly loaded garment onto the
/// body: solver scale and centering first, then the per-category vertical
/// alignment nudge, with user overrides and rotation reset.
///
/// A previous active garment is detached (despawned; its assets stay owned
/// by the host). Results whose sequence number is older than the newest
/// reserved load lost the race to a replacement and are dropped.
pub fn on_garment_loaded(
    event: On<GarmentLoaded>,
    mut commands: Commands,
    mut active: ResMut<ActiveGarment>,
    loads: Res<LoadSequence>,
    body_query: Query<&Transform, With<AvatarBody>>,
    children_query: Query<&Children>,
    mesh_query: Query<&Mesh3d>,
    global_transform_query: Query<&GlobalTransform>,
    meshes: Res<Assets<Mesh>>,
) {
    let garment = event.garment;

    if loads.is_stale(event.seq) {
        info!(
            "GarmentLoaded: load {} for {garment:?} lost the race to a newer load, discarding",
            event.seq
        );
        if active.entity != Some(garment) {
            commands.entity(garment).despawn();
        }
        return;
    }

    let Ok(body_transform) = body_query.get(event.body) else {
        warn!("GarmentLoaded: no avatar body at {:?}, ignoring", event.body);
        return;
    };

    if let Some(previous) = active.entity {
        if previous != garment {
            info!("GarmentLoaded: replacing previous garment {previous:?}");
            commands.entity(previous).despawn();
        }
    }

    let category = GarmentCategory::from_name(&event.name);

    let body_bounds = hierarchy_bounds(
        event.body,
        body_transform,
        &children_query,
        &mesh_query,
        &global_transform_query,
        &meshes,
    );
    let garment_points = collect_points_relative_to(
        garment,
        &children_query,
        &mesh_query,
        &global_transform_query,
        &meshes,
    );

    // A garment may finish loading before the body mesh is resident. That is
    // not a fault: the garment gets an identity fit and self-heals on the
    // next body change.
    let garment_state = match (body_bounds, garment_points) {
        (Some(body_bounds), Some(points)) => {
            let garment_bounds = WorldBounds::from_points(points);
            let fit = fit_garment(&body_bounds, &garment_bounds);
            let mut fit_position = fit.position;
            fit_position.y += category.vertical_offset();

            info!(
                "garment '{}' fitted: category={category:?} scale={:.3} position=({:.2}, {:.2}, {:.2})",
                event.name, fit.scale, fit_position.x, fit_position.y, fit_position.z
            );
            GarmentTransform::from_fit(category, fit.scale, fit_position)
        },
        _ => {
            warn!(
                "GarmentLoaded: geometry not resident for '{}', keeping identity fit",
                event.name
            );
            GarmentTransform::from_fit(category, 1.0, Vec3::ZERO)
        },
    };

    commands
        .entity(garment)
        .insert((garment_state.to_transform(), garment_state.clone()));

    active.entity = Some(garment);
    active.seq = event.seq;

    commands.trigger(GarmentFitted {
        garment,
        scale:    garment_state.fit_scale,
        position: garment_state.fit_position,
    });
}

/// Observer for `SetGarmentScale` - manual multiplier on the fitted scale.
pub fn on_set_garment_scale(event: On<SetGarmentScale>, mut query: Query<&mut GarmentTransform>) {
    let Ok(mut garment) = query.get_mut(event.garment) else {
        warn!("SetGarmentScale: {:?} has no garment state", event.garment);
        return;
    };

    garment.user_scale = event.scale;
    garment.mode = FitMode::UserOverridden;

    debug!(
        "garment user scale={} final_scale={:.3}",
        event.scale,
        garment.final_scale()
    );
}

/// Observer for `SetGarmentOffset` - manual offset from the fitted position.
pub fn on_set_garment_offset(event: On<SetGarmentOffset>, mut query: Query<&mut GarmentTransform>) {
    let Ok(mut garment) = query.get_mut(event.garment) else {
        warn!("SetGarmentOffset: {:?} has no garment state", event.garment);
        return;
    };

    garment.user_offset = event.offset;
    garment.mode = FitMode::UserOverridden;
}

/// Observer for `SetGarmentRotation` - manual tilt and turn, in radians.
pub fn on_set_garment_rotation(
    event: On<SetGarmentRotation>,
    mut query: Query<&mut GarmentTransform>,
) {
    let Ok(mut garment) = query.get_mut(event.garment) else {
        warn!("SetGarmentRotation: {:?} has no garment state", event.garment);
        return;
    };

    garment.rotation_x = event.rotation_x;
    garment.rotation_y = event.rotation_y;
    garment.mode = FitMode::UserOverridden;
}

/// Observer for `SetBodyColor` - recolors every material under the body
/// root. Pass-through to the material layer; no fitting state changes.
#[cfg(feature = "recolor")]
pub fn on_set_body_color(
    event: On<crate::events::SetBodyColor>,
    children_query: Query<&Children>,
    material_query: Query<&MeshMaterial3d<StandardMaterial>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut recolored = 0;
    for entity in std::iter::once(event.body).chain(children_query.iter_descendants(event.body)) {
        let Ok(material_handle) = material_query.get(entity) else {
            continue;
        };
        let Some(material) = materials.get_mut(&material_handle.0) else {
            continue;
        };
        material.base_color = event.color;
        recolored += 1;
    }

    debug!("recolored {recolored} body materials");
}
