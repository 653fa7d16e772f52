use std::io;
use std::io::Read;
use std::io::Write;

use math::FieldElement;
use math::Polynomial;
use math::PrimeField;
use num_bigint::BigUint;
use tracing::debug;
use tracing::warn;

use crate::config::{CodecConfig, Padding};
use crate::error::{CodecError, Result};

/// Encode `bytes` over `field` with `chunk_size`-byte chunks.
///
/// The last chunk may be shorter; it is converted from exactly the bytes
/// present. Empty input gives a polynomial without coefficients.
pub fn encode(
    bytes: &[u8],
    field: &PrimeField,
    chunk_size: usize,
) -> Result<Polynomial> {
    let codec =
        FileCodec::new(field.clone(), CodecConfig::with_chunk_size(chunk_size))?;
    Ok(codec.encode(bytes))
}

/// Decode every coefficient of `poly` into one `chunk_size`-byte chunk,
/// using the default (leading) padding.
pub fn decode(poly: &Polynomial, chunk_size: usize) -> Result<Vec<u8>> {
    decode_with(poly, &CodecConfig::with_chunk_size(chunk_size))
}

/// Like [`decode`], with the padding side taken from `config`.
/// [`Padding::Trailing`] reproduces the legacy on-disk layout.
pub fn decode_with(poly: &Polynomial, config: &CodecConfig) -> Result<Vec<u8>> {
    config.validate()?;
    let mut out = Vec::with_capacity(config.decoded_len(poly.len())?);
    write_chunks(config, poly, &mut out)?;
    Ok(out)
}

/// Byte codec bound to one field and one [`CodecConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCodec {
    field: PrimeField,
    config: CodecConfig,
}

impl FileCodec {
    pub fn new(field: PrimeField, config: CodecConfig) -> Result<Self> {
        config.validate()?;
        if !config.is_lossless_for(&field) {
            warn!(
                chunk_size = config.chunk_size,
                %field,
                "chunk values can exceed the modulus; encoding will be lossy"
            );
        }
        Ok(Self { field, config })
    }

    /// 31-byte chunks with leading padding.
    pub fn with_default_config(field: PrimeField) -> Result<Self> {
        Self::new(field, CodecConfig::default())
    }

    #[inline]
    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    #[inline]
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn encode(&self, bytes: &[u8]) -> Polynomial {
        let poly = Polynomial::from_reduced(
            self.field.clone(),
            bytes
                .chunks(self.config.chunk_size)
                .map(BigUint::from_bytes_be),
        );
        debug!(bytes = bytes.len(), chunks = poly.len(), "encoded buffer");
        poly
    }

    /// Like [`encode`](Self::encode), pulling chunks from `reader` until it
    /// is exhausted. Short reads are retried.
    pub fn encode_reader<R: Read>(&self, mut reader: R) -> Result<Polynomial> {
        let chunk_size = self.config.chunk_size;
        let mut chunk = vec![0u8; chunk_size];
        let mut values = Vec::new();
        let mut total = 0;

        loop {
            let filled = read_chunk(&mut reader, &mut chunk)?;
            if filled == 0 {
                break;
            }
            total += filled;
            values.push(BigUint::from_bytes_be(&chunk[..filled]));
            if filled < chunk_size {
                break;
            }
        }

        let poly = Polynomial::from_reduced(self.field.clone(), values);
        debug!(bytes = total, chunks = poly.len(), "encoded stream");
        Ok(poly)
    }

    /// Decode into a fresh buffer of `len(coefficients) * chunk_size` bytes.
    pub fn decode(&self, poly: &Polynomial) -> Result<Vec<u8>> {
        let mut out =
            Vec::with_capacity(self.config.decoded_len(poly.len())?);
        self.decode_into(poly, &mut out)?;
        Ok(out)
    }

    /// Stream full-width chunks into `writer`, returning the bytes written.
    pub fn decode_into<W: Write>(
        &self,
        poly: &Polynomial,
        writer: W,
    ) -> Result<usize> {
        let written = write_chunks(&self.config, poly, writer)?;
        debug!(chunks = poly.len(), bytes = written, "decoded polynomial");
        Ok(written)
    }
}

/// Fill `buf` from `reader`, stopping early only at end of input.
fn read_chunk<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(err) => return Err(err),
        }
    }
    Ok(filled)
}

fn write_chunks<W: Write>(
    config: &CodecConfig,
    poly: &Polynomial,
    mut writer: W,
) -> Result<usize> {
    let total = config.decoded_len(poly.len())?;
    let mut chunk = vec![0u8; config.chunk_size];
    for (index, coeff) in poly.coefficients().iter().enumerate() {
        fill_chunk(config, index, coeff, &mut chunk)?;
        writer.write_all(&chunk)?;
    }
    writer.flush()?;
    Ok(total)
}

fn fill_chunk(
    config: &CodecConfig,
    index: usize,
    coeff: &FieldElement,
    chunk: &mut [u8],
) -> Result<()> {
    let bytes = coeff.to_bytes_be();
    let chunk_size = chunk.len();
    if bytes.len() > chunk_size {
        return Err(CodecError::CoefficientTooWide {
            index,
            width: bytes.len(),
            chunk_size,
        });
    }

    chunk.fill(0);
    let target = match config.padding {
        Padding::Leading => &mut chunk[chunk_size - bytes.len()..],
        Padding::Trailing => &mut chunk[..bytes.len()],
    };
    target.copy_from_slice(&bytes);
    Ok(())
}
