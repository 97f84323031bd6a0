//! Payload framing: base64url text with an optional compression marker
//!
//! Serialized payload bytes are framed as unpadded base64url text before they
//! become the `value` segment of a token. When compression is requested the
//! bytes are zlib-compressed first, but the compressed form is only adopted
//! when it is smaller than the original by more than one byte; otherwise the
//! marker character it would cost is not worth the saving. A leading `.` on
//! the framed text tells the decoder that the bytes were compressed, so no
//! external metadata is needed.

use std::io::{Read, Write};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;

use crate::constants::COMPRESSION_MARKER;
use crate::error::Error;

/// Frame serialized bytes as base64url text, optionally compressing them.
pub fn encode(bytes: &[u8], compress: bool) -> Result<String, Error> {
    let mut adopted = None;

    if compress {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
        encoder.write_all(bytes)?;
        let compressed = encoder.finish()?;
        // Adopt the compressed form only when it beats the original by more
        // than the one byte the marker will cost.
        if compressed.len() + 1 < bytes.len() {
            adopted = Some(compressed);
        }
    }

    let text = match &adopted {
        Some(compressed) => format!("{COMPRESSION_MARKER}{}", URL_SAFE_NO_PAD.encode(compressed)),
        None => URL_SAFE_NO_PAD.encode(bytes),
    };

    Ok(text)
}

/// Recover the original bytes from framed payload text.
///
/// Fails with [`Error::Decode`] when the base64 text is invalid and with
/// [`Error::CorruptStream`] when a marked payload does not decompress.
pub fn decode(text: &str) -> Result<Vec<u8>, Error> {
    match text.strip_prefix(COMPRESSION_MARKER) {
        Some(rest) => {
            let compressed = URL_SAFE_NO_PAD.decode(rest)?;
            let mut bytes = Vec::new();
            ZlibDecoder::new(compressed.as_slice()).read_to_end(&mut bytes)?;
            Ok(bytes)
        }
        None => Ok(URL_SAFE_NO_PAD.decode(text)?),
    }
}
