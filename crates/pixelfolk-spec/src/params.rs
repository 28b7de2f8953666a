//! Parameter sets: per-attribute ranges or fixed values, before and after resolution.
//!
//! Size attributes are percentages of the canvas size, angles are degrees, and
//! `fill_density` is a probability in `[0, 1]`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// Attribute names understood by the skeleton builder.
pub mod attr {
    pub const CENTER_X: &str = "center_x";
    pub const TORSO_Y: &str = "torso_y";
    pub const TORSO_TOP_WIDTH: &str = "torso_top_width";
    pub const TORSO_BOTTOM_WIDTH: &str = "torso_bottom_width";
    pub const TORSO_HEIGHT: &str = "torso_height";
    pub const NECK_WIDTH: &str = "neck_width";
    pub const NECK_HEIGHT: &str = "neck_height";
    pub const HEAD_WIDTH: &str = "head_width";
    pub const HEAD_HEIGHT: &str = "head_height";
    pub const UPPER_ARM_TOP_WIDTH: &str = "upper_arm_top_width";
    pub const UPPER_ARM_BOTTOM_WIDTH: &str = "upper_arm_bottom_width";
    pub const UPPER_ARM_LENGTH: &str = "upper_arm_length";
    pub const FOREARM_TOP_WIDTH: &str = "forearm_top_width";
    pub const FOREARM_BOTTOM_WIDTH: &str = "forearm_bottom_width";
    pub const FOREARM_LENGTH: &str = "forearm_length";
    pub const ARM_ANGLE: &str = "arm_angle";
    pub const ELBOW_ANGLE: &str = "elbow_angle";
    pub const THIGH_TOP_WIDTH: &str = "thigh_top_width";
    pub const THIGH_BOTTOM_WIDTH: &str = "thigh_bottom_width";
    pub const THIGH_LENGTH: &str = "thigh_length";
    pub const SHIN_TOP_WIDTH: &str = "shin_top_width";
    pub const SHIN_BOTTOM_WIDTH: &str = "shin_bottom_width";
    pub const SHIN_LENGTH: &str = "shin_length";
    pub const LEG_ANGLE: &str = "leg_angle";
    pub const GROUND_Y: &str = "ground_y";
    pub const FILL_DENSITY: &str = "fill_density";
}

/// A single parameter entry before resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Sampled uniformly from `[min, max]` at resolution time.
    Range { min: f64, max: f64 },
    /// Fixed number, passed through unchanged.
    Number(f64),
    /// Fixed flag, passed through unchanged.
    Flag(bool),
    /// Fixed text, passed through unchanged.
    Text(String),
}

impl ParamValue {
    /// Creates a range value.
    pub fn range(min: f64, max: f64) -> Self {
        ParamValue::Range { min, max }
    }

    /// Returns true if this entry must be sampled.
    pub fn is_range(&self) -> bool {
        matches!(self, ParamValue::Range { .. })
    }

    fn validate(&self, name: &str) -> Result<(), SpecError> {
        match *self {
            ParamValue::Range { min, max } => {
                for value in [min, max] {
                    if !value.is_finite() {
                        return Err(SpecError::NonFinite {
                            name: name.to_string(),
                            value,
                        });
                    }
                }
                if min > max {
                    return Err(SpecError::InvalidRange {
                        name: name.to_string(),
                        min,
                        max,
                    });
                }
                Ok(())
            }
            ParamValue::Number(value) if !value.is_finite() => Err(SpecError::NonFinite {
                name: name.to_string(),
                value,
            }),
            _ => Ok(()),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Number(value)
    }
}

/// Mapping from attribute name to range or fixed value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet {
    entries: BTreeMap<String, ParamValue>,
}

impl ParameterSet {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a `{min, max}` range entry.
    pub fn with_range(mut self, name: impl Into<String>, min: f64, max: f64) -> Self {
        self.entries.insert(name.into(), ParamValue::range(min, max));
        self
    }

    /// Adds a fixed entry.
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.entries.insert(name.into(), value.into());
        self
    }

    /// Inserts or replaces an entry.
    pub fn insert(&mut self, name: impl Into<String>, value: ParamValue) {
        self.entries.insert(name.into(), value);
    }

    /// Looks up an entry.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries.get(name)
    }

    /// Returns true if the attribute is present.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterates entries in attribute-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a copy of `self` with every entry of `overrides` replacing the
    /// entry of the same name.
    pub fn merged(&self, overrides: &ParameterSet) -> ParameterSet {
        let mut entries = self.entries.clone();
        for (name, value) in &overrides.entries {
            entries.insert(name.clone(), value.clone());
        }
        ParameterSet { entries }
    }

    /// Rejects inverted ranges and non-finite numbers.
    pub fn validate(&self) -> Result<(), SpecError> {
        for (name, value) in &self.entries {
            value.validate(name)?;
        }
        Ok(())
    }
}

/// A concrete parameter value after resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResolvedValue {
    Number(f64),
    Flag(bool),
    Text(String),
}

/// Fully concrete parameter set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolvedParams {
    values: BTreeMap<String, ResolvedValue>,
}

impl ResolvedParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: ResolvedValue) {
        self.values.insert(name.into(), value);
    }

    pub fn insert_number(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), ResolvedValue::Number(value));
    }

    pub fn get(&self, name: &str) -> Option<&ResolvedValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Returns a numeric attribute, failing if absent or not a number.
    pub fn number(&self, name: &str) -> Result<f64, SpecError> {
        match self.values.get(name) {
            Some(ResolvedValue::Number(v)) => Ok(*v),
            Some(_) => Err(SpecError::NotNumeric(name.to_string())),
            None => Err(SpecError::MissingAttribute(name.to_string())),
        }
    }

    /// Returns a numeric attribute if present and numeric.
    pub fn number_opt(&self, name: &str) -> Option<f64> {
        match self.values.get(name) {
            Some(ResolvedValue::Number(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolvedValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
