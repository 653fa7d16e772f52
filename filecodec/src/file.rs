//! Path-based helpers layered on the streaming codec.

use std::fs::File;
use std::io::BufReader;
use std::io::BufWriter;
use std::path::Path;

use math::Polynomial;
use tracing::debug;

use crate::codec::FileCodec;
use crate::error::{CodecError, Result};

impl FileCodec {
    /// Read the whole file at `path` and encode it.
    pub fn encode_file(&self, path: impl AsRef<Path>) -> Result<Polynomial> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| CodecError::file(path, err))?;
        let poly = self
            .encode_reader(BufReader::new(file))
            .map_err(|err| err.at_path(path))?;
        debug!(path = %path.display(), chunks = poly.len(), "encoded file");
        Ok(poly)
    }

    /// Create (or truncate) the file at `path` and decode `poly` into it.
    /// Returns the number of bytes written.
    pub fn decode_to_file(
        &self,
        poly: &Polynomial,
        path: impl AsRef<Path>,
    ) -> Result<usize> {
        let path = path.as_ref();
        let file =
            File::create(path).map_err(|err| CodecError::file(path, err))?;
        let written = self
            .decode_into(poly, BufWriter::new(file))
            .map_err(|err| err.at_path(path))?;
        debug!(path = %path.display(), bytes = written, "decoded to file");
        Ok(written)
    }
}
