//! Typed body parameters read out of a resolved parameter set.

use serde::{Deserialize, Serialize};

use crate::error::SpecError;
use crate::params::{attr, ResolvedParams};

/// Concrete body proportions.
///
/// Sizes and positions are percentages of the canvas size, angles are degrees,
/// and `fill_density` is a probability. `shin_length` is nominal only: shins
/// are stretched to reach `ground_y`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyParams {
    pub center_x: f64,
    pub torso_y: f64,
    pub torso_top_width: f64,
    pub torso_bottom_width: f64,
    pub torso_height: f64,
    pub neck_width: f64,
    pub neck_height: f64,
    pub head_width: f64,
    pub head_height: f64,
    pub upper_arm_top_width: f64,
    pub upper_arm_bottom_width: f64,
    pub upper_arm_length: f64,
    pub forearm_top_width: f64,
    pub forearm_bottom_width: f64,
    pub forearm_length: f64,
    pub arm_angle: f64,
    pub elbow_angle: f64,
    pub thigh_top_width: f64,
    pub thigh_bottom_width: f64,
    pub thigh_length: f64,
    pub shin_top_width: f64,
    pub shin_bottom_width: f64,
    pub shin_length: f64,
    pub leg_angle: f64,
    pub ground_y: f64,
    pub fill_density: f64,
}

impl BodyParams {
    /// Reads every attribute the skeleton builder needs.
    ///
    /// Fails on the first missing or non-numeric attribute, and when
    /// `fill_density` lies outside `[0, 1]`.
    pub fn from_resolved(params: &ResolvedParams) -> Result<Self, SpecError> {
        let body = Self {
            center_x: params.number(attr::CENTER_X)?,
            torso_y: params.number(attr::TORSO_Y)?,
            torso_top_width: params.number(attr::TORSO_TOP_WIDTH)?,
            torso_bottom_width: params.number(attr::TORSO_BOTTOM_WIDTH)?,
            torso_height: params.number(attr::TORSO_HEIGHT)?,
            neck_width: params.number(attr::NECK_WIDTH)?,
            neck_height: params.number(attr::NECK_HEIGHT)?,
            head_width: params.number(attr::HEAD_WIDTH)?,
            head_height: params.number(attr::HEAD_HEIGHT)?,
            upper_arm_top_width: params.number(attr::UPPER_ARM_TOP_WIDTH)?,
            upper_arm_bottom_width: params.number(attr::UPPER_ARM_BOTTOM_WIDTH)?,
            upper_arm_length: params.number(attr::UPPER_ARM_LENGTH)?,
            forearm_top_width: params.number(attr::FOREARM_TOP_WIDTH)?,
            forearm_bottom_width: params.number(attr::FOREARM_BOTTOM_WIDTH)?,
            forearm_length: params.number(attr::FOREARM_LENGTH)?,
            arm_angle: params.number(attr::ARM_ANGLE)?,
            elbow_angle: params.number(attr::ELBOW_ANGLE)?,
            thigh_top_width: params.number(attr::THIGH_TOP_WIDTH)?,
            thigh_bottom_width: params.number(attr::THIGH_BOTTOM_WIDTH)?,
            thigh_length: params.number(attr::THIGH_LENGTH)?,
            shin_top_width: params.number(attr::SHIN_TOP_WIDTH)?,
            shin_bottom_width: params.number(attr::SHIN_BOTTOM_WIDTH)?,
            shin_length: params.number(attr::SHIN_LENGTH)?,
            leg_angle: params.number(attr::LEG_ANGLE)?,
            ground_y: params.number(attr::GROUND_Y)?,
            fill_density: params.number(attr::FILL_DENSITY)?,
        };

        if !(0.0..=1.0).contains(&body.fill_density) {
            return Err(SpecError::OutOfRange {
                name: attr::FILL_DENSITY.to_string(),
                value: body.fill_density,
                min: 0.0,
                max: 1.0,
            });
        }

        Ok(body)
    }
}
