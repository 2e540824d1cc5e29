//! Fonts: per-scope font records built from `Font` resource dictionaries.
//!
//! One font map is built per page and per Form XObject scope. The
//! interpreter consults it when a show-text operator fires with a current
//! font selected, converting string operands to UTF-8 through the font's
//! ToUnicode CMap when present, else through its base encoding.

pub mod cmap;
pub mod encoding;
pub mod glyphs;

use crate::document::xref::Xref;
use crate::model::{Dict, Object};
use cmap::UnicodeCMap;
use encoding::Encoding;
use std::collections::HashMap;

/// Fonts in the current scope, keyed by resource label.
pub type FontMap = HashMap<String, Font>;

/// One font from a `Font` resource dictionary.
#[derive(Debug, Clone)]
pub struct Font {
    /// Resource label the content stream selects the font by (`/F1 12 Tf`).
    pub label: String,
    /// `Subtype` (Type1, TrueType, Type0, ...).
    pub subtype: Option<String>,
    /// `BaseFont` name.
    pub basefont: Option<String>,
    /// Character encoding.
    pub encoding: Encoding,
    /// `DescendantFonts` of a composite font, resolved.
    pub descendantfonts: Option<Object>,
    /// ToUnicode CMap, when present and parseable.
    pub tounicode: Option<UnicodeCMap>,
}

impl Font {
    /// Build a font from its resolved descriptor dictionary.
    pub fn new(label: &str, spec: &Dict, xref: &Xref) -> Self {
        let subtype = spec
            .get("Subtype")
            .and_then(|s| s.as_name().ok())
            .map(str::to_owned);
        let basefont = spec
            .get("BaseFont")
            .and_then(|s| s.as_name().ok())
            .map(str::to_owned);
        let encoding = match spec.get("Encoding") {
            Some(enc) => Encoding::from_object(&xref.object(enc)),
            None => Encoding::standard(),
        };
        let descendantfonts = spec.get("DescendantFonts").map(|d| xref.object(d));
        let tounicode = spec
            .get("ToUnicode")
            .map(|t| xref.object(t))
            .and_then(|obj| match obj {
                Object::Stream(stream) => Some(stream),
                _ => None,
            })
            .and_then(|stream| match stream.unfiltered_data() {
                Ok(data) => match UnicodeCMap::parse(&data) {
                    Ok(cmap) => Some(cmap),
                    Err(err) => {
                        // A broken ToUnicode map is not fatal; text through
                        // this font falls back to its base encoding.
                        log::debug!("ignoring unparseable ToUnicode CMap for {label}: {err}");
                        None
                    }
                },
                Err(err) => {
                    log::debug!("ignoring undecodable ToUnicode stream for {label}: {err}");
                    None
                }
            });

        Self {
            label: label.to_owned(),
            subtype,
            basefont,
            encoding,
            descendantfonts,
            tounicode,
        }
    }

    /// Convert a show-text operand to UTF-8.
    ///
    /// Byte strings are decoded; arrays are mapped element-wise with numeric
    /// positioning values passing through unchanged; anything else is
    /// returned as-is.
    pub fn to_utf8(&self, operand: &Object) -> Object {
        match operand {
            Object::String(bytes) => Object::String(self.decode_bytes(bytes).into_bytes()),
            Object::Array(items) => Object::Array(items.iter().map(|o| self.to_utf8(o)).collect()),
            other => other.clone(),
        }
    }

    fn decode_bytes(&self, bytes: &[u8]) -> String {
        match &self.tounicode {
            Some(cmap) if !cmap.is_empty() => cmap.decode(bytes),
            _ => self.encoding.to_utf8(bytes),
        }
    }
}

/// Build the font map for one resource scope.
///
/// `res` is a resource dictionary; its `Font` entry (resolved through the
/// xref) maps labels to font descriptors. Entries that do not resolve to a
/// dictionary are skipped.
pub fn build_font_map(res: &Dict, xref: &Xref) -> FontMap {
    let mut fonts = FontMap::new();
    let font_dict = match res.get("Font").map(|f| xref.object(f)) {
        Some(Object::Dict(d)) => d,
        _ => return fonts,
    };

    for (label, entry) in &font_dict {
        match xref.object(entry) {
            Object::Dict(spec) => {
                fonts.insert(label.clone(), Font::new(label, &spec, xref));
            }
            other => {
                log::debug!("font {label} is not a dictionary ({})", other.type_name());
            }
        }
    }
    fonts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ObjRef;

    fn win_ansi_spec() -> Dict {
        let mut spec = Dict::new();
        spec.insert("Type".into(), Object::Name("Font".into()));
        spec.insert("Subtype".into(), Object::Name("Type1".into()));
        spec.insert("BaseFont".into(), Object::Name("Helvetica".into()));
        spec.insert("Encoding".into(), Object::Name("WinAnsiEncoding".into()));
        spec.insert("ToUnicode".into(), Object::Ref(ObjRef::new(9, 0)));
        spec
    }

    #[test]
    fn test_font_without_tounicode_uses_encoding() {
        let xref = Xref::new("1.4");
        let mut spec = win_ansi_spec();
        spec.remove("ToUnicode");
        let font = Font::new("F1", &spec, &xref);
        assert!(font.tounicode.is_none());
        assert_eq!(
            font.to_utf8(&Object::String(b"\xe9".to_vec())),
            Object::String("é".as_bytes().to_vec())
        );
    }

    #[test]
    fn test_broken_tounicode_is_swallowed() {
        let mut xref = Xref::new("1.4");
        xref.insert(
            9,
            Object::Stream(Box::new(crate::model::Stream::new(
                Dict::new(),
                b"beginbfchar\n<41> <0041>".as_slice().to_vec(),
            ))),
        );
        let font = Font::new("F1", &win_ansi_spec(), &xref);
        assert!(font.tounicode.is_none());
        assert_eq!(font.subtype.as_deref(), Some("Type1"));
        assert_eq!(font.basefont.as_deref(), Some("Helvetica"));
    }

    #[test]
    fn test_array_operand_maps_strings_and_keeps_numbers() {
        let xref = Xref::new("1.4");
        let mut spec = win_ansi_spec();
        spec.remove("ToUnicode");
        let font = Font::new("F1", &spec, &xref);
        let operand = Object::Array(vec![
            Object::String(b"Hi".to_vec()),
            Object::Int(-120),
            Object::String(b"\xe9".to_vec()),
        ]);
        assert_eq!(
            font.to_utf8(&operand),
            Object::Array(vec![
                Object::String(b"Hi".to_vec()),
                Object::Int(-120),
                Object::String("é".as_bytes().to_vec()),
            ])
        );
    }
}
