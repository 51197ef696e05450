//! Convenient re-exports for common types and traits

pub use crate::ActiveGarment;
pub use crate::AvatarBody;
pub use crate::BodyParams;
pub use crate::BodyResized;
pub use crate::FitMode;
pub use crate::GarmentCategory;
pub use crate::GarmentFit;
pub use crate::GarmentFitPlugin;
pub use crate::GarmentFitted;
pub use crate::GarmentLoaded;
pub use crate::GarmentTransform;
pub use crate::LoadSequence;
#[cfg(feature = "recolor")]
pub use crate::SetBodyColor;
pub use crate::SetBodyParams;
pub use crate::SetGarmentOffset;
pub use crate::SetGarmentRotation;
pub use crate::SetGarmentScale;
pub use crate::WorldBounds;
pub use crate::body_scale;
pub use crate::fit_garment;
