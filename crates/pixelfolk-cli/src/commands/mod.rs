//! CLI command implementations

pub mod generate;
pub mod json_output;
pub mod presets;
pub mod preview;
pub mod validate;
