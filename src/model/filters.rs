//! Stream filter decoding.
//!
//! Content and metadata streams arrive wrapped in the filters named by their
//! `Filter` entry. Only the filters this library actually meets on that path
//! are implemented; anything else is reported as a decode error rather than
//! silently passed through.

use crate::error::{PdfError, Result};
use flate2::read::ZlibDecoder;
use std::io::Read;

/// Apply a single named filter to `data`.
pub fn decode(data: &[u8], filter: &str) -> Result<Vec<u8>> {
    match filter {
        "FlateDecode" | "Fl" => flate_decode(data),
        "ASCIIHexDecode" | "AHx" => ascii_hex_decode(data),
        other => Err(PdfError::DecodeError(format!("unsupported filter: {other}"))),
    }
}

fn flate_decode(data: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = ZlibDecoder::new(data);
    let mut out = Vec::new();
    decoder
        .read_to_end(&mut out)
        .map_err(|e| PdfError::DecodeError(format!("FlateDecode: {e}")))?;
    Ok(out)
}

/// ASCIIHexDecode: hex digit pairs, whitespace ignored, terminated by `>`.
/// An odd trailing digit is padded with zero per the PDF spec.
fn ascii_hex_decode(data: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(data.len() / 2);
    let mut pending: Option<u8> = None;

    for &b in data {
        let nibble = match b {
            b'0'..=b'9' => b - b'0',
            b'a'..=b'f' => b - b'a' + 10,
            b'A'..=b'F' => b - b'A' + 10,
            b'>' => break,
            b if b.is_ascii_whitespace() || b == 0 => continue,
            other => {
                return Err(PdfError::DecodeError(format!(
                    "ASCIIHexDecode: unexpected byte {other:#04x}"
                )));
            }
        };
        match pending.take() {
            Some(high) => out.push((high << 4) | nibble),
            None => pending = Some(nibble),
        }
    }

    if let Some(high) = pending {
        out.push(high << 4);
    }
    Ok(out)
}
