//! Interactive try-on demo: a parametric primitive avatar with garments
//! fitted onto it using `bevy_garment_fit`.
//!
//! A real host would load glTF scenes for the body and garments; this demo
//! builds both from primitives so it runs without assets. Keyboard stands in
//! for the original slider UI:
//!
//! - Up/Down adjusts height, Right/Left adjusts fitness
//! - 'S' loads a shirt, 'P' loads pants (replacing the active garment)
//! - '[' / ']' shrinks / grows the garment's manual scale
//! - 'W'/'X' nudge the garment up/down, 'A'/'D' left/right, 'Q'/'E' depth
//! - 'R' tilts the garment, 'T' turns it (hold Shift to reverse)
//! - 'C' cycles the body color
//! - 'B' toggles the fit bounds overlay

use std::f32::consts::PI;

use bevy::prelude::*;
use bevy_garment_fit::FitBoundsGizmo;
use bevy_garment_fit::FitBoundsVisualizationPlugin;
use bevy_garment_fit::SetBodyColor;
use bevy_garment_fit::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;
use bevy_panorbit_camera::PanOrbitCameraPlugin;

const PARAM_STEP: f32 = 0.5;
const SCALE_STEP: f32 = 0.05;
const OFFSET_STEP: f32 = 0.1;
const ROTATION_STEP: f32 = PI / 36.0;

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins,
            PanOrbitCameraPlugin,
            GarmentFitPlugin,
            FitBoundsVisualizationPlugin,
        ))
        .init_resource::<Sliders>()
        .add_systems(Startup, setup)
        .add_systems(Update, (keyboard_controls, announce_loaded_garments))
        .run();
}

/// Slider state the UI would normally own.
#[derive(Resource)]
struct Sliders {
    height:        f32,
    fitness:       f32,
    garment_scale: f32,
    offset:        Vec3,
    rotation_x:    f32,
    rotation_y:    f32,
    color_index:   usize,
}

impl Default for Sliders {
    fn default() -> Self {
        Self {
            height:        5.0,
            fitness:       5.0,
            garment_scale: 1.0,
            offset:        Vec3::ZERO,
            rotation_x:    0.0,
            rotation_y:    0.0,
            color_index:   0,
        }
    }
}

/// A garment whose load has been reserved but not yet announced to the
/// engine. Primitive "loads" resolve on the next frame; a real host would
/// carry this through its async asset pipeline instead.
#[derive(Component)]
struct PendingGarment {
    name: String,
    seq:  u64,
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(2.0, 1.6, 6.0),
        PanOrbitCamera {
            focus: Vec3::new(0.0, 1.0, 0.0),
            ..default()
        },
    ));

    commands.insert_resource(GlobalAmbientLight {
        brightness: 300.0,
        ..default()
    });
    commands.spawn((
        DirectionalLight::default(),
        Transform::from_xyz(10.0, 10.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        DirectionalLight::default(),
        Transform::from_xyz(-10.0, -10.0, -10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Primitive avatar: legs, torso, head under a single body root.
    let skin = materials.add(StandardMaterial::from(body_color(0)));
    commands
        .spawn((
            AvatarBody,
            BodyParams::default(),
            Transform::default(),
            Visibility::default(),
        ))
        .with_children(|body| {
            body.spawn((
                Mesh3d(meshes.add(Cylinder::new(0.18, 0.9))),
                MeshMaterial3d(skin.clone()),
                Transform::from_xyz(-0.15, 0.45, 0.0),
            ));
            body.spawn((
                Mesh3d(meshes.add(Cylinder::new(0.18, 0.9))),
                MeshMaterial3d(skin.clone()),
                Transform::from_xyz(0.15, 0.45, 0.0),
            ));
            body.spawn((
                Mesh3d(meshes.add(Capsule3d::new(0.35, 0.8))),
                MeshMaterial3d(skin.clone()),
                Transform::from_xyz(0.0, 1.4, 0.0),
            ));
            body.spawn((
                Mesh3d(meshes.add(Sphere::new(0.22))),
                MeshMaterial3d(skin),
                Transform::from_xyz(0.0, 2.2, 0.0),
            ));
        });
}

fn keyboard_controls(
    mut commands: Commands,
    keys: Res<ButtonInput<KeyCode>>,
    mut sliders: ResMut<Sliders>,
    mut loads: ResMut<LoadSequence>,
    mut config_store: ResMut<GizmoConfigStore>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    body_query: Query<Entity, With<AvatarBody>>,
    active: Res<ActiveGarment>,
) {
    let Ok(body) = body_query.single() else {
        return;
    };
    let direction = if keys.pressed(KeyCode::ShiftLeft) || keys.pressed(KeyCode::ShiftRight) {
        -1.0
    } else {
        1.0
    };

    // Body sliders
    let mut body_changed = false;
    if keys.just_pressed(KeyCode::ArrowUp) {
        sliders.height += PARAM_STEP;
        body_changed = true;
    }
    if keys.just_pressed(KeyCode::ArrowDown) {
        sliders.height = (sliders.height - PARAM_STEP).max(0.0);
        body_changed = true;
    }
    if keys.just_pressed(KeyCode::ArrowRight) {
        sliders.fitness += PARAM_STEP;
        body_changed = true;
    }
    if keys.just_pressed(KeyCode::ArrowLeft) {
        sliders.fitness = (sliders.fitness - PARAM_STEP).max(0.0);
        body_changed = true;
    }
    if body_changed {
        commands.trigger(SetBodyParams {
            body,
            height: sliders.height,
            fitness: sliders.fitness,
        });
    }

    // Garment "file picker"
    if keys.just_pressed(KeyCode::KeyS) {
        spawn_garment(
            &mut commands,
            &mut meshes,
            &mut materials,
            &mut loads,
            "BlueShirt",
            Cuboid::new(1.6, 1.2, 0.9).into(),
            Color::srgb(0.2, 0.4, 0.9),
        );
    }
    if keys.just_pressed(KeyCode::KeyP) {
        spawn_garment(
            &mut commands,
            &mut meshes,
            &mut materials,
            &mut loads,
            "RedPants",
            Cuboid::new(1.2, 1.5, 0.8).into(),
            Color::srgb(0.8, 0.2, 0.2),
        );
    }

    if keys.just_pressed(KeyCode::KeyC) {
        sliders.color_index += 1;
        commands.trigger(SetBodyColor {
            body,
            color: body_color(sliders.color_index),
        });
    }
    if keys.just_pressed(KeyCode::KeyB) {
        let (config, _) = config_store.config_mut::<FitBoundsGizmo>();
        config.enabled = !config.enabled;
    }

    // Garment sliders
    let Some(garment) = active.entity else {
        return;
    };

    if keys.just_pressed(KeyCode::BracketRight) {
        sliders.garment_scale += SCALE_STEP;
        commands.trigger(SetGarmentScale {
            garment,
            scale: sliders.garment_scale,
        });
    }
    if keys.just_pressed(KeyCode::BracketLeft) {
        sliders.garment_scale = (sliders.garment_scale - SCALE_STEP).max(SCALE_STEP);
        commands.trigger(SetGarmentScale {
            garment,
            scale: sliders.garment_scale,
        });
    }

    let mut offset_delta = Vec3::ZERO;
    if keys.just_pressed(KeyCode::KeyW) {
        offset_delta.y += OFFSET_STEP;
    }
    if keys.just_pressed(KeyCode::KeyX) {
        offset_delta.y -= OFFSET_STEP;
    }
    if keys.just_pressed(KeyCode::KeyD) {
        offset_delta.x += OFFSET_STEP;
    }
    if keys.just_pressed(KeyCode::KeyA) {
        offset_delta.x -= OFFSET_STEP;
    }
    if keys.just_pressed(KeyCode::KeyE) {
        offset_delta.z += OFFSET_STEP;
    }
    if keys.just_pressed(KeyCode::KeyQ) {
        offset_delta.z -= OFFSET_STEP;
    }
    if offset_delta != Vec3::ZERO {
        sliders.offset += offset_delta;
        commands.trigger(SetGarmentOffset {
            garment,
            offset: sliders.offset,
        });
    }

    let mut rotation_changed = false;
    if keys.just_pressed(KeyCode::KeyR) {
        sliders.rotation_x += direction * ROTATION_STEP;
        rotation_changed = true;
    }
    if keys.just_pressed(KeyCode::KeyT) {
        sliders.rotation_y += direction * ROTATION_STEP;
        rotation_changed = true;
    }
    if rotation_changed {
        commands.trigger(SetGarmentRotation {
            garment,
            rotation_x: sliders.rotation_x,
            rotation_y: sliders.rotation_y,
        });
    }
}

/// Announces pending garments to the fitting engine once a body exists.
/// Late announcements with a stale sequence number are discarded by the
/// engine, so mashing the load keys is safe.
fn announce_loaded_garments(
    mut commands: Commands,
    mut sliders: ResMut<Sliders>,
    pending_query: Query<(Entity, &PendingGarment)>,
    body_query: Query<Entity, With<AvatarBody>>,
) {
    let Ok(body) = body_query.single() else {
        return;
    };

    for (garment, pending) in &pending_query {
        commands.entity(garment).remove::<PendingGarment>();
        commands.trigger(GarmentLoaded {
            garment,
            body,
            name: pending.name.clone(),
            seq: pending.seq,
        });

        // Mirror the engine's reset of per-garment overrides.
        sliders.garment_scale = 1.0;
        sliders.offset = Vec3::ZERO;
        sliders.rotation_x = 0.0;
        sliders.rotation_y = 0.0;
    }
}

fn spawn_garment(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    loads: &mut LoadSequence,
    name: &str,
    mesh: Mesh,
    color: Color,
) {
    let seq = loads.begin_load();
    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(StandardMaterial::from(color))),
        Transform::default(),
        Visibility::default(),
        PendingGarment {
            name: name.to_owned(),
            seq,
        },
    ));
}

fn body_color(index: usize) -> Color {
    const PALETTE: [(f32, f32, f32); 4] = [
        (0.85, 0.65, 0.55),
        (0.55, 0.40, 0.30),
        (0.70, 0.75, 0.80),
        (0.45, 0.60, 0.45),
    ];
    let (r, g, b) = PALETTE[index % PALETTE.len()];
    Color::srgb(r, g, b)
}
