//! Per-category vertical alignment heuristics.
//!
//! Garment assets do not share an origin convention, so after centering, the
//! solver's result gets a fixed vertical nudge chosen by garment category.
//! Category inference is deliberately a substring match on the asset's
//! display name: an explicit rule table that can later be swapped for
//! skeleton-anchor logic without touching the solver.

use bevy::prelude::*;

/// Garment category inferred from the asset's display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum GarmentCategory {
    Pants,
    Shirt,
    #[default]
    Unclassified,
}

/// Name-substring rules, checked in order; first match wins.
const CATEGORY_RULES: &[(&str, GarmentCategory)] = &[
    ("pants", GarmentCategory::Pants),
    ("shirt", GarmentCategory::Shirt),
];

impl GarmentCategory {
    /// Infers the category from a display name, case-insensitively.
    pub fn from_name(name: &str) -> Self {
        let name = name.to_ascii_lowercase();
        CATEGORY_RULES
            .iter()
            .find(|(pattern, _)| name.contains(pattern))
            .map_or(Self::Unclassified, |&(_, category)| category)
    }

    /// Vertical nudge along the up-axis, applied once at load time on top of
    /// the centering translation.
    pub const fn vertical_offset(self) -> f32 {
        match self {
            Self::Pants => 1.0,
            Self::Shirt => 1.5,
            Self::Unclassified => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_category_by_substring() {
        assert_eq!(
            GarmentCategory::from_name("RedPants.glb"),
            GarmentCategory::Pants
        );
        assert_eq!(
            GarmentCategory::from_name("BlueShirt.glb"),
            GarmentCategory::Shirt
        );
        assert_eq!(
            GarmentCategory::from_name("Hat.glb"),
            GarmentCategory::Unclassified
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(
            GarmentCategory::from_name("SHIRT_V2"),
            GarmentCategory::Shirt
        );
        assert_eq!(
            GarmentCategory::from_name("cargoPANTS"),
            GarmentCategory::Pants
        );
    }

    #[test]
    fn offsets_match_the_rule_table() {
        assert_eq!(GarmentCategory::Pants.vertical_offset(), 1.0);
        assert_eq!(GarmentCategory::Shirt.vertical_offset(), 1.5);
        assert_eq!(GarmentCategory::Unclassified.vertical_offset(), 0.0);
    }
}
