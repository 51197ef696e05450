// bevy_garment_fit
// Fitting engine for dressing a parametric avatar body:
// - Body slider mapping (height / fitness) to a non-uniform body scale
// - Bounding-volume garment fit solving with per-category alignment
// - Live garment transform state composing fit results with user overrides

use bevy::prelude::*;

mod alignment;
mod body;
mod bounds;
mod events;
mod garment;
mod observers;
pub mod prelude;
mod solver;
mod support;
#[cfg(feature = "visualization")]
mod visualization;

// Public API - Events
pub use events::BodyResized;
pub use events::GarmentFitted;
pub use events::GarmentLoaded;
#[cfg(feature = "recolor")]
pub use events::SetBodyColor;
pub use events::SetBodyParams;
pub use events::SetGarmentOffset;
pub use events::SetGarmentRotation;
pub use events::SetGarmentScale;

// Public API - Components (for querying)
pub use body::AvatarBody;
pub use body::BodyParams;
pub use garment::FitMode;
pub use garment::GarmentTransform;

// Public API - Resources
pub use garment::ActiveGarment;
pub use garment::LoadSequence;

// Public API - Fit math
pub use alignment::GarmentCategory;
pub use body::NEUTRAL_PARAM;
pub use body::body_scale;
pub use bounds::WorldBounds;
pub use solver::GarmentFit;
pub use solver::fit_garment;

// Public API - Visualization (for enabling/disabling the overlay)
#[cfg(feature = "visualization")]
pub use visualization::FitBoundsGizmo;
#[cfg(feature = "visualization")]
pub use visualization::FitBoundsVisualizationConfig;
#[cfg(feature = "visualization")]
pub use visualization::FitBoundsVisualizationPlugin;

// Internal - used by plugin, not for external use
use bevy::transform::TransformSystems;
use garment::apply_garment_transforms;
use observers::{
    on_garment_loaded, on_set_body_params, on_set_garment_offset, on_set_garment_rotation,
    on_set_garment_scale,
};

/// Plugin that adds the garment fitting engine
pub struct GarmentFitPlugin;

impl Plugin for GarmentFitPlugin {
    fn build(&self, app: &mut App) {
        app
            // Register observers for scene-host events
            .add_observer(on_set_body_params)
            .add_observer(on_garment_loaded)
            .add_observer(on_set_garment_scale)
            .add_observer(on_set_garment_offset)
            .add_observer(on_set_garment_rotation)
            // Push garment state to renderable transforms before propagation,
            // in the same frame as the change that produced it
            .add_systems(
                PostUpdate,
                apply_garment_transforms.before(TransformSystems::Propagate),
            )
            // Initialize resources
            .init_resource::<ActiveGarment>()
            .init_resource::<LoadSequence>();

        #[cfg(feature = "recolor")]
        app.add_observer(observers::on_set_body_color);
    }
}
