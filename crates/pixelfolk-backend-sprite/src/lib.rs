//! Pixelfolk Sprite Generation Backend
//!
//! This crate turns a [`pixelfolk_spec::CharacterSpec`] into pixel grids:
//! parameter ranges are sampled, a jointed skeleton of trapezoids and circles
//! is built, rasterized into a soft occupancy field, filled stochastically with
//! left-right mirroring, and post-processed. All output is identical given the
//! same spec and seed.
//!
//! # Pipeline
//!
//! - **Resolve**: sample `{min, max}` ranges, derive missing bottom widths
//! - **Skeleton**: forward kinematics for 15 trapezoids and 6 joints
//! - **Heatmap**: radial falloff per shape, overlaps take the maximum
//! - **Fill**: Bernoulli fill of the left half, mirrored; isolated pixels removed
//! - **Process**: smoothing, directional lighting, outline (each optional)
//! - **Animate**: regenerate, head-bob, or stretch frames with one rest frame
//!
//! # Example
//!
//! ```
//! use pixelfolk_backend_sprite::generate_character;
//! use pixelfolk_spec::{CharacterSpec, ProcessOptions};
//!
//! let spec = CharacterSpec::new(42);
//! let mut character = generate_character(&spec).unwrap();
//! assert!(character.raw_pixels().is_mirror_symmetric());
//!
//! // Toggling post-processing never touches geometry or fill.
//! character.reprocess(ProcessOptions::none());
//! assert_eq!(character.pixels(), character.raw_pixels());
//! ```
//!
//! # Determinism
//!
//! - PCG32 for every random draw, threaded explicitly
//! - Separate BLAKE3-derived streams for resolution and fill
//! - PNG encoding with fixed compression and filter settings

pub mod animation;
pub mod character;
pub mod color;
pub mod fill;
pub mod geometry;
pub mod grid;
pub mod heatmap;
pub mod plan;
pub mod png;
pub mod process;
pub mod resolve;
pub mod rng;
pub mod skeleton;

// Re-export main types for convenience
pub use animation::{derive_frames, AnimationFrames};
pub use character::{generate_character, Character, GenerateError};
pub use color::Rgb;
pub use grid::{CellRect, PixelGrid};
pub use heatmap::{generate_heatmap, OccupancyField};
pub use plan::{BodyPlan, PalettePolicy, Region};
pub use png::{PngConfig, PngError, RgbaImage};
pub use resolve::{resolve_params, ResolveError};
pub use rng::DeterministicRng;
pub use skeleton::{build_skeleton, BodyPart, Skeleton};
