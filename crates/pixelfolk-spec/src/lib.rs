//! Pixelfolk Character Spec Library
//!
//! This crate provides the declarative types that describe a procedurally
//! generated pixel character: parameter ranges, presets, palettes, and
//! post-processing toggles. It contains no randomness and no pixels; the
//! `pixelfolk-backend-sprite` crate consumes these types and produces grids.
//!
//! # Example
//!
//! ```
//! use pixelfolk_spec::{BodyPreset, CharacterSpec, ParamValue};
//!
//! let json = r#"{
//!     "seed": 7,
//!     "preset": "tall",
//!     "params": { "arm_angle": { "min": 15, "max": 20 }, "fill_density": 0.9 }
//! }"#;
//!
//! let spec = CharacterSpec::from_json(json).unwrap();
//! assert_eq!(spec.canvas_size, 50);
//! assert_eq!(BodyPreset::from_name(spec.preset_name()), BodyPreset::Tall);
//! assert_eq!(spec.params.get("fill_density"), Some(&ParamValue::Number(0.9)));
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error type with stable codes
//! - [`params`]: Parameter sets (ranges or fixed values) and resolved values
//! - [`body`]: Typed, fully resolved body parameters
//! - [`preset`]: Named range tables (standard, short, tall, thin, bulky, human)
//! - [`palette`]: Palette colors
//! - [`process`]: Post-processing toggles
//! - [`animation`]: Animation frame styles
//! - [`character`]: Top-level character document

pub mod animation;
pub mod body;
pub mod character;
pub mod error;
pub mod palette;
pub mod params;
pub mod preset;
pub mod process;

// Re-export commonly used types at the crate root
pub use animation::AnimationStyle;
pub use body::BodyParams;
pub use character::{CharacterSpec, PlanKind, DEFAULT_CANVAS_SIZE, MAX_CANVAS_SIZE, MIN_CANVAS_SIZE};
pub use error::{BackendError, SpecError};
pub use palette::{Palette, PaletteColor};
pub use params::{attr, ParamValue, ParameterSet, ResolvedParams, ResolvedValue};
pub use preset::BodyPreset;
pub use process::{LightDirection, ProcessOptions, DEFAULT_OUTLINE_COLOR};
