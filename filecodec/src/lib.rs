//! Lossless conversion between byte streams and polynomials over GF(p).
//!
//! Input is cut into fixed-size chunks; chunk `i`, read as a big-endian
//! unsigned integer, becomes the coefficient of `x^i`. Decoding writes every
//! coefficient back as one full-width chunk, so output length is always a
//! whole number of chunks even when the input's last chunk was short.

pub mod codec;
pub mod config;
pub mod error;
pub mod file;

pub use codec::{decode, decode_with, encode, FileCodec};
pub use config::{CodecConfig, Padding, DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE};
pub use error::{CodecError, Result};
