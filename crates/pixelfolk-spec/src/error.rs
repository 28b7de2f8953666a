//! Error types for spec parsing and validation.

use thiserror::Error;

/// Errors raised while parsing or validating a character spec.
#[derive(Debug, Error)]
pub enum SpecError {
    /// A `{min, max}` range with `min > max`.
    #[error("invalid range for '{name}': min {min} is greater than max {max}")]
    InvalidRange { name: String, min: f64, max: f64 },

    /// A NaN or infinite number.
    #[error("'{name}' must be finite, got {value}")]
    NonFinite { name: String, value: f64 },

    /// A numeric attribute the skeleton needs is absent after derivation.
    #[error("missing required attribute '{0}'")]
    MissingAttribute(String),

    /// A required attribute resolved to a boolean or string.
    #[error("attribute '{0}' must be numeric")]
    NotNumeric(String),

    /// A value outside its allowed interval.
    #[error("'{name}' must be in [{min}, {max}], got {value}")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Palette has no colors.
    #[error("palette must contain at least one color")]
    EmptyPalette,

    /// A palette color string that is not `#rrggbb`.
    #[error("invalid color '{0}': expected #rrggbb")]
    InvalidColor(String),

    /// Canvas size outside the supported interval.
    #[error("canvas size must be in [{min}, {max}], got {size}")]
    CanvasSize { size: u32, min: u32, max: u32 },

    /// Malformed JSON document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SpecError {
    /// Returns the stable error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            SpecError::InvalidRange { .. } => "E001",
            SpecError::NonFinite { .. } => "E002",
            SpecError::MissingAttribute(_) => "E003",
            SpecError::NotNumeric(_) => "E004",
            SpecError::OutOfRange { .. } => "E005",
            SpecError::EmptyPalette => "E006",
            SpecError::InvalidColor(_) => "E007",
            SpecError::CanvasSize { .. } => "E008",
            SpecError::Json(_) => "E009",
        }
    }
}

/// Common interface for errors raised by generation backends.
pub trait BackendError: std::error::Error {
    /// Stable code such as "SPRITE_001".
    fn code(&self) -> &'static str;

    /// Backend family, used to group codes in reports.
    fn category(&self) -> &'static str;

    fn message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            SpecError::InvalidRange {
                name: "a".into(),
                min: 2.0,
                max: 1.0,
            },
            SpecError::NonFinite {
                name: "a".into(),
                value: f64::NAN,
            },
            SpecError::MissingAttribute("a".into()),
            SpecError::NotNumeric("a".into()),
            SpecError::EmptyPalette,
            SpecError::InvalidColor("x".into()),
        ];
        let mut codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_display_names_attribute() {
        let err = SpecError::InvalidRange {
            name: "torso_height".into(),
            min: 30.0,
            max: 20.0,
        };
        assert!(err.to_string().contains("torso_height"));
    }
}
