//! Pixelfolk CLI library.
//!
//! This crate provides the command implementations behind the `pixelfolk`
//! binary: spec loading, character generation and export, preset listing,
//! validation, and animated previews.

pub mod commands;
pub mod input;
pub mod logging;
