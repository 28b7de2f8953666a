//! JSON output types for the `--json` flag.
//!
//! Codes are stable so scripts can branch on them without parsing messages.

use serde::{Deserialize, Serialize};

use pixelfolk_backend_sprite::Character;
use pixelfolk_spec::ResolvedParams;

/// Error codes for CLI operations.
pub mod error_codes {
    /// Spec file could not be read or parsed
    pub const SPEC_LOAD: &str = "CLI_001";
    /// Spec failed validation
    pub const INVALID_SPEC: &str = "CLI_002";
    /// Output file could not be written
    pub const WRITE_ERROR: &str = "CLI_003";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E003")
    pub code: String,
    pub message: String,
    /// Seed of the character that failed, in batch runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
}

impl JsonError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// What `generate --json` reports for one character.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CharacterSummary {
    pub seed: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub preset: String,
    pub plan: String,
    pub canvas_size: u32,
    pub params: ResolvedParams,
    /// Filled cells before post-processing
    pub raw_filled: usize,
    /// Filled cells after post-processing
    pub filled: usize,
    pub png: String,
    pub png_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_png: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frames_png: Option<String>,
}

impl CharacterSummary {
    pub fn new(character: &Character, preset: &str, png: String, png_hash: String) -> Self {
        Self {
            seed: character.seed,
            name: character.name.clone(),
            preset: preset.to_string(),
            plan: character.plan().name.to_string(),
            canvas_size: character.canvas_size,
            params: character.params.clone(),
            raw_filled: character.raw_pixels().filled_count(),
            filled: character.pixels().filled_count(),
            png,
            png_hash,
            raw_png: None,
            frames_png: None,
        }
    }
}

/// Top-level `generate --json` document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateOutput {
    pub success: bool,
    pub characters: Vec<CharacterSummary>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JsonError>,
}

/// Top-level `validate --json` document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidateOutput {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<ResolvedParams>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JsonError>,
}

impl ValidateOutput {
    pub fn success(params: ResolvedParams) -> Self {
        Self {
            success: true,
            params: Some(params),
            errors: Vec::new(),
        }
    }

    pub fn failure(error: JsonError) -> Self {
        Self {
            success: false,
            params: None,
            errors: vec![error],
        }
    }
}

/// One row of `presets --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PresetInfo {
    pub name: String,
    pub description: String,
    pub plan: String,
}

/// Print any serializable value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
