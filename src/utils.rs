//! Small shared helpers: top-level metadata string decoding.

use crate::font::encoding::pdf_doc_char;
use crate::model::{Dict, Object};

/// Decode a top-level PDF text string to UTF-8.
///
/// Strings starting with the `0xFE 0xFF` byte-order mark are UTF-16BE
/// (surrogate pairs included); everything else is PDFDocEncoding.
pub fn decode_text(bytes: &[u8]) -> String {
    if let Some(rest) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = rest
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&units)
    } else {
        bytes.iter().map(|&b| pdf_doc_char(b)).collect()
    }
}

/// Apply [`decode_text`] recursively through dictionaries and arrays.
/// Non-string values pass through unchanged.
pub fn decode_strings(obj: &Object) -> Object {
    match obj {
        Object::String(bytes) => Object::String(decode_text(bytes).into_bytes()),
        Object::Array(items) => Object::Array(items.iter().map(decode_strings).collect()),
        Object::Dict(dict) => Object::Dict(decode_strings_dict(dict)),
        other => other.clone(),
    }
}

/// Dictionary form of [`decode_strings`].
pub fn decode_strings_dict(dict: &Dict) -> Dict {
    dict.iter()
        .map(|(k, v)| (k.clone(), decode_strings(v)))
        .collect()
}
