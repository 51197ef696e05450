//! Entity events: the input surface the scene host drives, plus lifecycle
//! notifications it can observe.

use bevy::prelude::*;

// ============================================================================
// Body input
// ============================================================================

/// Sets the body sliders. Height and fitness arrive in their native UI range;
/// the default value of 5.0 on both yields unit scale.
#[derive(EntityEvent, Reflect)]
#[reflect(Event, FromReflect)]
pub struct SetBodyParams {
    #[event_target]
    pub body:    Entity,
    pub height:  f32,
    pub fitness: f32,
}

/// Recolors every mesh under the body root. The color is passed through to
/// the material layer untouched; it plays no part in the fitting math.
#[cfg(feature = "recolor")]
#[derive(EntityEvent, Reflect)]
#[reflect(Event, FromReflect)]
pub struct SetBodyColor {
    #[event_target]
    pub body:  Entity,
    pub color: Color,
}

// ============================================================================
// Garment input
// ============================================================================

/// Announces a fully loaded garment hierarchy ready for fitting.
///
/// `seq` must come from `LoadSequence::begin_load` at the moment the load
/// started; a load finishing after a newer one was reserved is discarded.
/// `name` is the asset's display name, used solely for category inference.
#[derive(EntityEvent, Reflect)]
#[reflect(Event, FromReflect)]
pub struct GarmentLoaded {
    #[event_target]
    pub garment: Entity,
    pub body:    Entity,
    pub name:    String,
    pub seq:     u64,
}

/// Manual uniform scale multiplier, layered on the fitted scale.
#[derive(EntityEvent, Reflect)]
#[reflect(Event, FromReflect)]
pub struct SetGarmentScale {
    #[event_target]
    pub garment: Entity,
    pub scale:   f32,
}

/// Manual position offset from the fitted position.
#[derive(EntityEvent, Reflect)]
#[reflect(Event, FromReflect)]
pub struct SetGarmentOffset {
    #[event_target]
    pub garment: Entity,
    pub offset:  Vec3,
}

/// Manual tilt (X) and turn (Y) in radians. Z rotation stays fixed at 0.
#[derive(EntityEvent, Reflect)]
#[reflect(Event, FromReflect)]
pub struct SetGarmentRotation {
    #[event_target]
    pub garment:    Entity,
    pub rotation_x: f32,
    pub rotation_y: f32,
}

// ============================================================================
// Lifecycle
// ============================================================================

/// Fired after body sliders were applied and any active garment re-followed.
#[derive(EntityEvent, Reflect)]
#[reflect(Event, FromReflect)]
pub struct BodyResized {
    #[event_target]
    pub body:  Entity,
    pub scale: Vec3,
}

/// Fired after a garment was fitted, on initial load and on body-resize
/// follow. Carries the fit components only, without user overrides.
#[derive(EntityEvent, Reflect)]
#[reflect(Event, FromReflect)]
pub struct GarmentFitted {
    #[event_target]
    pub garment:  Entity,
    pub scale:    f32,
    pub position: Vec3,
}
