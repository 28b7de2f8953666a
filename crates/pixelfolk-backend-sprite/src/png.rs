//! Deterministic PNG export for pixel grids.
//!
//! Fixed compression and filter settings give byte-identical files for equal
//! grids. Empty cells are written fully transparent; each cell becomes a
//! `scale x scale` block.

use std::io::Write;
use std::path::Path;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;

use crate::grid::PixelGrid;

/// Largest accepted upscaling factor.
pub const MAX_SCALE: u32 = 64;

/// Largest accepted output width or height in pixels.
pub const MAX_IMAGE_SIDE: u32 = 16384;

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// PNG export settings.
#[derive(Debug, Clone)]
pub struct PngConfig {
    pub compression: Compression,
    pub filter: FilterType,
    /// Output pixels per grid cell.
    pub scale: u32,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
            scale: 1,
        }
    }
}

impl PngConfig {
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }
}

/// An RGBA8 image ready for encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl RgbaImage {
    /// Upscale a single grid.
    pub fn from_grid(grid: &PixelGrid, scale: u32) -> Result<Self, PngError> {
        Self::strip(std::slice::from_ref(grid), scale)
    }

    /// Lay grids out left to right. All grids must share one size.
    pub fn strip(grids: &[PixelGrid], scale: u32) -> Result<Self, PngError> {
        if scale == 0 || scale > MAX_SCALE {
            return Err(PngError::InvalidDimensions(format!(
                "scale must be in 1..={}, got {}",
                MAX_SCALE, scale
            )));
        }
        let Some(first) = grids.first() else {
            return Err(PngError::InvalidDimensions("no frames to write".into()));
        };
        let size = first.size();
        if size == 0 {
            return Err(PngError::InvalidDimensions("empty grid".into()));
        }
        if let Some(bad) = grids.iter().find(|g| g.size() != size) {
            return Err(PngError::InvalidDimensions(format!(
                "frame size {} does not match {}",
                bad.size(),
                size
            )));
        }

        let cell = size.checked_mul(scale);
        let width = cell
            .zip(u32::try_from(grids.len()).ok())
            .and_then(|(cell, frames)| cell.checked_mul(frames));
        let (cell, width) = match (cell, width) {
            (Some(cell), Some(width)) if width <= MAX_IMAGE_SIDE => (cell, width),
            _ => {
                return Err(PngError::InvalidDimensions(format!(
                    "{} frame(s) of {} cells at scale {} exceed {} pixels",
                    grids.len(),
                    size,
                    scale,
                    MAX_IMAGE_SIDE
                )))
            }
        };
        let height = cell;
        let mut data = Vec::with_capacity(width as usize * height as usize * 4);
        for py in 0..height {
            let y = py / scale;
            for grid in grids {
                for px in 0..cell {
                    let rgba = grid
                        .get(px / scale, y)
                        .map(|c| c.to_rgba8())
                        .unwrap_or([0, 0, 0, 0]);
                    data.extend_from_slice(&rgba);
                }
            }
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }
}

/// Encode an RGBA image to any writer.
pub fn write_rgba_to_writer<W: Write>(
    image: &RgbaImage,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    let mut encoder = Encoder::new(writer, image.width, image.height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    // no timestamps or other variable chunks
    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&image.data)?;
    Ok(())
}

/// Write one grid to a PNG file.
pub fn write_grid(grid: &PixelGrid, path: &Path, config: &PngConfig) -> Result<String, PngError> {
    let (data, hash) = write_grid_to_vec_with_hash(grid, config)?;
    std::fs::write(path, data)?;
    Ok(hash)
}

/// Write frames as a horizontal strip to a PNG file.
pub fn write_strip(
    frames: &[PixelGrid],
    path: &Path,
    config: &PngConfig,
) -> Result<String, PngError> {
    let (data, hash) = write_strip_to_vec_with_hash(frames, config)?;
    std::fs::write(path, data)?;
    Ok(hash)
}

/// Compute the BLAKE3 hash of PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Encode one grid in memory and return the bytes with their hash.
pub fn write_grid_to_vec_with_hash(
    grid: &PixelGrid,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let image = RgbaImage::from_grid(grid, config.scale)?;
    encode_with_hash(&image, config)
}

/// Encode a frame strip in memory and return the bytes with their hash.
pub fn write_strip_to_vec_with_hash(
    frames: &[PixelGrid],
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let image = RgbaImage::strip(frames, config.scale)?;
    encode_with_hash(&image, config)
}

fn encode_with_hash(image: &RgbaImage, config: &PngConfig) -> Result<(Vec<u8>, String), PngError> {
    let mut data = Vec::new();
    write_rgba_to_writer(image, &mut data, config)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}
