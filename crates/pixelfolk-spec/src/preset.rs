//! Named body presets.
//!
//! Each preset is the baseline range table with a handful of entries replaced.
//! Attributes derived from others (bottom widths, forearm length, head height,
//! shin length) are left out so the resolver derives them.

use serde::{Deserialize, Serialize};

use crate::params::{attr, ParameterSet};

/// Named bundle of `{min, max}` ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyPreset {
    #[default]
    Standard,
    Short,
    Tall,
    Thin,
    Bulky,
    Human,
}

impl BodyPreset {
    /// All presets, in display order.
    pub const ALL: [BodyPreset; 6] = [
        BodyPreset::Standard,
        BodyPreset::Short,
        BodyPreset::Tall,
        BodyPreset::Thin,
        BodyPreset::Bulky,
        BodyPreset::Human,
    ];

    /// Looks up a preset by name. Unknown names fall back to `Standard`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "short" => BodyPreset::Short,
            "tall" => BodyPreset::Tall,
            "thin" => BodyPreset::Thin,
            "bulky" => BodyPreset::Bulky,
            "human" => BodyPreset::Human,
            _ => BodyPreset::Standard,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BodyPreset::Standard => "standard",
            BodyPreset::Short => "short",
            BodyPreset::Tall => "tall",
            BodyPreset::Thin => "thin",
            BodyPreset::Bulky => "bulky",
            BodyPreset::Human => "human",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BodyPreset::Standard => "Balanced proportions",
            BodyPreset::Short => "Compact torso and legs, large head",
            BodyPreset::Tall => "Long legs and torso, small head",
            BodyPreset::Thin => "Narrow limbs and torso",
            BodyPreset::Bulky => "Broad torso and thick limbs",
            BodyPreset::Human => "Human proportions for region-colored characters",
        }
    }

    /// Full range table for this preset.
    pub fn ranges(&self) -> ParameterSet {
        let base = baseline_ranges();
        let overrides = match self {
            BodyPreset::Standard => ParameterSet::new(),
            BodyPreset::Short => ParameterSet::new()
                .with_range(attr::TORSO_Y, 40.0, 44.0)
                .with_range(attr::TORSO_HEIGHT, 18.0, 22.0)
                .with_range(attr::HEAD_WIDTH, 18.0, 22.0)
                .with_range(attr::UPPER_ARM_LENGTH, 10.0, 13.0)
                .with_range(attr::THIGH_LENGTH, 12.0, 15.0),
            BodyPreset::Tall => ParameterSet::new()
                .with_range(attr::TORSO_Y, 22.0, 24.0)
                .with_range(attr::TORSO_HEIGHT, 28.0, 32.0)
                .with_range(attr::HEAD_WIDTH, 12.0, 14.0)
                .with_range(attr::UPPER_ARM_LENGTH, 17.0, 20.0)
                .with_range(attr::THIGH_LENGTH, 20.0, 24.0),
            BodyPreset::Thin => ParameterSet::new()
                .with_range(attr::TORSO_TOP_WIDTH, 14.0, 17.0)
                .with_range(attr::TORSO_BOTTOM_WIDTH, 11.0, 13.0)
                .with_range(attr::UPPER_ARM_TOP_WIDTH, 4.0, 5.0)
                .with_range(attr::FOREARM_TOP_WIDTH, 3.5, 4.5)
                .with_range(attr::THIGH_TOP_WIDTH, 5.5, 7.0)
                .with_range(attr::SHIN_TOP_WIDTH, 4.0, 5.0),
            BodyPreset::Bulky => ParameterSet::new()
                .with_range(attr::TORSO_TOP_WIDTH, 28.0, 32.0)
                .with_range(attr::TORSO_BOTTOM_WIDTH, 22.0, 26.0)
                .with_range(attr::UPPER_ARM_TOP_WIDTH, 8.0, 10.0)
                .with_range(attr::FOREARM_TOP_WIDTH, 7.0, 9.0)
                .with_range(attr::THIGH_TOP_WIDTH, 11.0, 13.0)
                .with_range(attr::SHIN_TOP_WIDTH, 8.0, 10.0)
                .with_range(attr::NECK_WIDTH, 9.0, 11.0),
            BodyPreset::Human => ParameterSet::new()
                .with_range(attr::TORSO_TOP_WIDTH, 20.0, 24.0)
                .with_range(attr::TORSO_BOTTOM_WIDTH, 16.0, 18.0)
                .with_range(attr::HEAD_WIDTH, 15.0, 17.0)
                .with_range(attr::ARM_ANGLE, 8.0, 14.0)
                .with_range(attr::ELBOW_ANGLE, 0.0, 4.0)
                .with_range(attr::LEG_ANGLE, 2.0, 5.0)
                .with_range(attr::FILL_DENSITY, 0.9, 1.0),
        };
        base.merged(&overrides)
    }
}

/// Baseline range table shared by all presets.
fn baseline_ranges() -> ParameterSet {
    ParameterSet::new()
        .with_value(attr::CENTER_X, 50.0)
        .with_range(attr::TORSO_Y, 28.0, 31.0)
        .with_range(attr::TORSO_TOP_WIDTH, 20.0, 26.0)
        .with_range(attr::TORSO_BOTTOM_WIDTH, 16.0, 20.0)
        .with_range(attr::TORSO_HEIGHT, 24.0, 28.0)
        .with_range(attr::NECK_WIDTH, 6.0, 8.0)
        .with_range(attr::NECK_HEIGHT, 3.0, 5.0)
        .with_range(attr::HEAD_WIDTH, 14.0, 18.0)
        .with_range(attr::UPPER_ARM_TOP_WIDTH, 6.0, 8.0)
        .with_range(attr::UPPER_ARM_LENGTH, 13.0, 17.0)
        .with_range(attr::FOREARM_TOP_WIDTH, 5.0, 7.0)
        .with_range(attr::ARM_ANGLE, 10.0, 25.0)
        .with_range(attr::ELBOW_ANGLE, -5.0, 10.0)
        .with_range(attr::THIGH_TOP_WIDTH, 8.0, 11.0)
        .with_range(attr::THIGH_LENGTH, 15.0, 21.0)
        .with_range(attr::SHIN_TOP_WIDTH, 6.0, 8.0)
        .with_range(attr::LEG_ANGLE, 2.0, 8.0)
        .with_value(attr::GROUND_Y, 94.0)
        .with_range(attr::FILL_DENSITY, 0.75, 0.95)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamValue;

    #[test]
    fn test_unknown_name_falls_back_to_standard() {
        assert_eq!(BodyPreset::from_name("giant"), BodyPreset::Standard);
        assert_eq!(BodyPreset::from_name(""), BodyPreset::Standard);
    }

    #[test]
    fn test_name_round_trip() {
        for preset in BodyPreset::ALL {
            assert_eq!(BodyPreset::from_name(preset.as_str()), preset);
        }
    }

    #[test]
    fn test_every_preset_is_a_full_table() {
        let baseline = baseline_ranges();
        for preset in BodyPreset::ALL {
            let ranges = preset.ranges();
            assert_eq!(ranges.len(), baseline.len(), "{}", preset.as_str());
            assert!(ranges.validate().is_ok(), "{}", preset.as_str());
        }
    }

    #[test]
    fn test_tall_overrides_thigh_length() {
        let ranges = BodyPreset::Tall.ranges();
        assert_eq!(
            ranges.get(attr::THIGH_LENGTH),
            Some(&ParamValue::range(20.0, 24.0))
        );
        // untouched entries come from the baseline
        assert_eq!(ranges.get(attr::GROUND_Y), Some(&ParamValue::Number(94.0)));
    }

    #[test]
    fn test_derived_attributes_are_not_tabled() {
        let ranges = BodyPreset::Standard.ranges();
        assert!(!ranges.contains(attr::UPPER_ARM_BOTTOM_WIDTH));
        assert!(!ranges.contains(attr::HEAD_HEIGHT));
        assert!(!ranges.contains(attr::SHIN_LENGTH));
    }
}
