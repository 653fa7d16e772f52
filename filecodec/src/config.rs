use math::PrimeField;
use serde::Deserialize;
use serde::Serialize;

use crate::error::{CodecError, Result};

/// Bytes per chunk. Every 31-byte value stays below a 255-bit prime.
pub const DEFAULT_CHUNK_SIZE: usize = 31;

/// Largest accepted chunk size (1 MiB).
pub const MAX_CHUNK_SIZE: usize = 1 << 20;

/// Where decoding puts the zero bytes that fill a chunk up to full width.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Padding {
    /// Fixed-width big-endian: zeros precede the value bytes. Chunk-aligned
    /// input decodes back to itself.
    #[default]
    Leading,
    /// Zeros follow the value bytes. Matches files written by the legacy
    /// tool, but a chunk whose first byte is zero does not decode back to
    /// itself.
    Trailing,
}

/// Chunking parameters shared by encoding and decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    pub chunk_size: usize,
    pub padding: Padding,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::with_chunk_size(DEFAULT_CHUNK_SIZE)
    }
}

impl CodecConfig {
    pub const fn new(chunk_size: usize, padding: Padding) -> Self {
        Self {
            chunk_size,
            padding,
        }
    }

    pub const fn with_chunk_size(chunk_size: usize) -> Self {
        Self::new(chunk_size, Padding::Leading)
    }

    /// Accepts chunk sizes in `1..=MAX_CHUNK_SIZE`.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_CHUNK_SIZE).contains(&self.chunk_size) {
            return Err(CodecError::InvalidChunkSize);
        }
        Ok(())
    }

    /// Whether every chunk value is already canonical in `field`, i.e.
    /// `256^chunk_size <= p`. Otherwise encoding reduces some chunks and
    /// their original bytes cannot be recovered.
    pub fn is_lossless_for(&self, field: &PrimeField) -> bool {
        // 2^(8c) <= p exactly when p has more than 8c bits
        self.chunk_size
            .checked_mul(8)
            .and_then(|bits| u64::try_from(bits).ok())
            .is_some_and(|bits| bits < field.modulus().bits())
    }

    /// Bytes produced by decoding `chunks` coefficients.
    pub(crate) fn decoded_len(&self, chunks: usize) -> Result<usize> {
        chunks
            .checked_mul(self.chunk_size)
            .ok_or(CodecError::InvalidChunkSize)
    }
}
