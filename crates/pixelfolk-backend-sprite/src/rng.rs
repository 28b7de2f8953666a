//! Seeded PCG32 streams for character generation.
//!
//! Every random draw in the pipeline goes through this type, threaded
//! explicitly. There is no global generator.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// PCG32 generator threaded through resolution and fill.
#[derive(Clone)]
pub struct DeterministicRng {
    inner: Pcg32,
}

impl DeterministicRng {
    /// Create a new RNG from a 32-bit seed.
    ///
    /// The seed is expanded to 64 bits by duplicating the bits.
    pub fn new(seed: u32) -> Self {
        let seed64 = (seed as u64) | ((seed as u64) << 32);
        Self {
            inner: Pcg32::seed_from_u64(seed64),
        }
    }

    /// Derive a seed for a named sub-stream (e.g. "resolve", "fill") using BLAKE3.
    pub fn derive_stream_seed(base_seed: u32, stream: &str) -> u32 {
        let mut input = Vec::with_capacity(4 + stream.len());
        input.extend_from_slice(&base_seed.to_le_bytes());
        input.extend_from_slice(stream.as_bytes());
        let hash = blake3::hash(&input);
        let bytes = hash.as_bytes();
        u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    /// Create the RNG for a named sub-stream of `base_seed`.
    pub fn for_stream(base_seed: u32, stream: &str) -> Self {
        Self::new(Self::derive_stream_seed(base_seed, stream))
    }

    /// Uniform draw in `[0, 1)`.
    #[inline]
    pub fn gen_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Uniform real in `[min, max]`. Returns `min` when the interval is empty.
    #[inline]
    pub fn uniform(&mut self, min: f64, max: f64) -> f64 {
        if max <= min {
            return min;
        }
        self.inner.gen_range(min..=max)
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    #[inline]
    pub fn gen_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        self.inner.gen_range(0..len)
    }
}
