//! Font encodings: byte string to UTF-8 conversion.
//!
//! Simple fonts map single bytes through one of the four standard Latin
//! tables, optionally patched by a `Differences` array; composite fonts with
//! an Identity encoding carry big-endian two-byte code units. Codes with no
//! mapping decode to U+FFFD rather than being dropped.

use crate::font::glyphs::name_to_unicode;
use crate::model::Object;
use std::collections::HashMap;

/// One of the standard single-byte Latin encodings.
///
/// Tables follow PDF 32000-1 Annex D; only the positions that differ from
/// ASCII / Latin-1 are spelled out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseEncoding {
    Standard,
    WinAnsi,
    MacRoman,
    PdfDoc,
}

/// StandardEncoding positions above ASCII, plus its two quote quirks.
const STANDARD_HIGH: &[(u8, u32)] = &[
    (0xA1, 0x00A1),
    (0xA2, 0x00A2),
    (0xA3, 0x00A3),
    (0xA4, 0x2044),
    (0xA5, 0x00A5),
    (0xA6, 0x0192),
    (0xA7, 0x00A7),
    (0xA8, 0x00A4),
    (0xA9, 0x0027),
    (0xAA, 0x201C),
    (0xAB, 0x00AB),
    (0xAC, 0x2039),
    (0xAD, 0x203A),
    (0xAE, 0xFB01),
    (0xAF, 0xFB02),
    (0xB1, 0x2013),
    (0xB2, 0x2020),
    (0xB3, 0x2021),
    (0xB4, 0x00B7),
    (0xB6, 0x00B6),
    (0xB7, 0x2022),
    (0xB8, 0x201A),
    (0xB9, 0x201E),
    (0xBA, 0x201D),
    (0xBB, 0x00BB),
    (0xBC, 0x2026),
    (0xBD, 0x2030),
    (0xBF, 0x00BF),
    (0xC1, 0x0060),
    (0xC2, 0x00B4),
    (0xC3, 0x02C6),
    (0xC4, 0x02DC),
    (0xC5, 0x00AF),
    (0xC6, 0x02D8),
    (0xC7, 0x02D9),
    (0xC8, 0x00A8),
    (0xCA, 0x02DA),
    (0xCB, 0x00B8),
    (0xCD, 0x02DD),
    (0xCE, 0x02DB),
    (0xCF, 0x02C7),
    (0xD0, 0x2014),
    (0xE1, 0x00C6),
    (0xE3, 0x00AA),
    (0xE8, 0x0141),
    (0xE9, 0x00D8),
    (0xEA, 0x0152),
    (0xEB, 0x00BA),
    (0xF1, 0x00E6),
    (0xF5, 0x0131),
    (0xF8, 0x0142),
    (0xF9, 0x00F8),
    (0xFA, 0x0153),
    (0xFB, 0x00DF),
];

/// WinAnsiEncoding 0x80-0x9F block; the rest is Latin-1.
const WIN_ANSI_HIGH: &[(u8, u32)] = &[
    (0x80, 0x20AC),
    (0x82, 0x201A),
    (0x83, 0x0192),
    (0x84, 0x201E),
    (0x85, 0x2026),
    (0x86, 0x2020),
    (0x87, 0x2021),
    (0x88, 0x02C6),
    (0x89, 0x2030),
    (0x8A, 0x0160),
    (0x8B, 0x2039),
    (0x8C, 0x0152),
    (0x8E, 0x017D),
    (0x91, 0x2018),
    (0x92, 0x2019),
    (0x93, 0x201C),
    (0x94, 0x201D),
    (0x95, 0x2022),
    (0x96, 0x2013),
    (0x97, 0x2014),
    (0x98, 0x02DC),
    (0x99, 0x2122),
    (0x9A, 0x0161),
    (0x9B, 0x203A),
    (0x9C, 0x0153),
    (0x9E, 0x017E),
    (0x9F, 0x0178),
];

/// MacRomanEncoding upper half.
const MAC_ROMAN_HIGH: &[(u8, u32)] = &[
    (0x80, 0x00C4),
    (0x81, 0x00C5),
    (0x82, 0x00C7),
    (0x83, 0x00C9),
    (0x84, 0x00D1),
    (0x85, 0x00D6),
    (0x86, 0x00DC),
    (0x87, 0x00E1),
    (0x88, 0x00E0),
    (0x89, 0x00E2),
    (0x8A, 0x00E4),
    (0x8B, 0x00E3),
    (0x8C, 0x00E5),
    (0x8D, 0x00E7),
    (0x8E, 0x00E9),
    (0x8F, 0x00E8),
    (0x90, 0x00EA),
    (0x91, 0x00EB),
    (0x92, 0x00ED),
    (0x93, 0x00EC),
    (0x94, 0x00EE),
    (0x95, 0x00EF),
    (0x96, 0x00F1),
    (0x97, 0x00F3),
    (0x98, 0x00F2),
    (0x99, 0x00F4),
    (0x9A, 0x00F6),
    (0x9B, 0x00F5),
    (0x9C, 0x00FA),
    (0x9D, 0x00F9),
    (0x9E, 0x00FB),
    (0x9F, 0x00FC),
    (0xA0, 0x2020),
    (0xA1, 0x00B0),
    (0xA2, 0x00A2),
    (0xA3, 0x00A3),
    (0xA4, 0x00A7),
    (0xA5, 0x2022),
    (0xA6, 0x00B6),
    (0xA7, 0x00DF),
    (0xA8, 0x00AE),
    (0xA9, 0x00A9),
    (0xAA, 0x2122),
    (0xAB, 0x00B4),
    (0xAC, 0x00A8),
    (0xAD, 0x2260),
    (0xAE, 0x00C6),
    (0xAF, 0x00D8),
    (0xB0, 0x221E),
    (0xB1, 0x00B1),
    (0xB2, 0x2264),
    (0xB3, 0x2265),
    (0xB4, 0x00A5),
    (0xB5, 0x00B5),
    (0xB6, 0x2202),
    (0xB7, 0x2211),
    (0xB8, 0x220F),
    (0xB9, 0x03C0),
    (0xBA, 0x222B),
    (0xBB, 0x00AA),
    (0xBC, 0x00BA),
    (0xBD, 0x2126),
    (0xBE, 0x00E6),
    (0xBF, 0x00F8),
    (0xC0, 0x00BF),
    (0xC1, 0x00A1),
    (0xC2, 0x00AC),
    (0xC3, 0x221A),
    (0xC4, 0x0192),
    (0xC5, 0x2248),
    (0xC6, 0x2206),
    (0xC7, 0x00AB),
    (0xC8, 0x00BB),
    (0xC9, 0x2026),
    (0xCA, 0x00A0),
    (0xCB, 0x00C0),
    (0xCC, 0x00C3),
    (0xCD, 0x00D5),
    (0xCE, 0x0152),
    (0xCF, 0x0153),
    (0xD0, 0x2013),
    (0xD1, 0x2014),
    (0xD2, 0x201C),
    (0xD3, 0x201D),
    (0xD4, 0x2018),
    (0xD5, 0x2019),
    (0xD6, 0x00F7),
    (0xD7, 0x25CA),
    (0xD8, 0x00FF),
    (0xD9, 0x0178),
    (0xDA, 0x2044),
    (0xDB, 0x20AC),
    (0xDC, 0x2039),
    (0xDD, 0x203A),
    (0xDE, 0xFB01),
    (0xDF, 0xFB02),
    (0xE0, 0x2021),
    (0xE1, 0x00B7),
    (0xE2, 0x201A),
    (0xE3, 0x201E),
    (0xE4, 0x2030),
    (0xE5, 0x00C2),
    (0xE6, 0x00CA),
    (0xE7, 0x00C1),
    (0xE8, 0x00CB),
    (0xE9, 0x00C8),
    (0xEA, 0x00CD),
    (0xEB, 0x00CE),
    (0xEC, 0x00CF),
    (0xED, 0x00CC),
    (0xEE, 0x00D3),
    (0xEF, 0x00D4),
    (0xF0, 0xF8FF),
    (0xF1, 0x00D2),
    (0xF2, 0x00DA),
    (0xF3, 0x00DB),
    (0xF4, 0x00D9),
    (0xF5, 0x0131),
    (0xF6, 0x02C6),
    (0xF7, 0x02DC),
    (0xF8, 0x00AF),
    (0xF9, 0x02D8),
    (0xFA, 0x02D9),
    (0xFB, 0x02DA),
    (0xFC, 0x00B8),
    (0xFD, 0x02DD),
    (0xFE, 0x02DB),
    (0xFF, 0x02C7),
];

/// PDFDocEncoding positions that differ from Latin-1.
const PDF_DOC_HIGH: &[(u8, u32)] = &[
    (0x18, 0x02D8),
    (0x19, 0x02C7),
    (0x1A, 0x02C6),
    (0x1B, 0x02D9),
    (0x1C, 0x02DD),
    (0x1D, 0x02DB),
    (0x1E, 0x02DA),
    (0x1F, 0x02DC),
    (0x80, 0x2022),
    (0x81, 0x2020),
    (0x82, 0x2021),
    (0x83, 0x2026),
    (0x84, 0x2014),
    (0x85, 0x2013),
    (0x86, 0x0192),
    (0x87, 0x2044),
    (0x88, 0x2039),
    (0x89, 0x203A),
    (0x8A, 0x2212),
    (0x8B, 0x2030),
    (0x8C, 0x201E),
    (0x8D, 0x201C),
    (0x8E, 0x201D),
    (0x8F, 0x2018),
    (0x90, 0x2019),
    (0x91, 0x201A),
    (0x92, 0x2122),
    (0x93, 0xFB01),
    (0x94, 0xFB02),
    (0x95, 0x0141),
    (0x96, 0x0152),
    (0x97, 0x0160),
    (0x98, 0x0178),
    (0x99, 0x017D),
    (0x9A, 0x0131),
    (0x9B, 0x0142),
    (0x9C, 0x0153),
    (0x9D, 0x0161),
    (0x9E, 0x017E),
    (0xA0, 0x20AC),
];

fn table_lookup(table: &[(u8, u32)], code: u8) -> Option<char> {
    table
        .iter()
        .find(|&&(c, _)| c == code)
        .and_then(|&(_, cp)| char::from_u32(cp))
}

impl BaseEncoding {
    /// Resolve a single code through this base table.
    fn lookup(self, code: u8) -> Option<char> {
        match self {
            Self::Standard => match code {
                0x27 => Some('\u{2019}'),
                0x60 => Some('\u{2018}'),
                0x20..=0x7E => Some(code as char),
                _ => table_lookup(STANDARD_HIGH, code),
            },
            Self::WinAnsi => match code {
                0x20..=0x7E => Some(code as char),
                0x80..=0x9F => table_lookup(WIN_ANSI_HIGH, code),
                0xA0..=0xFF => char::from_u32(code as u32),
                _ => None,
            },
            Self::MacRoman => match code {
                0x20..=0x7E => Some(code as char),
                0x80..=0xFF => table_lookup(MAC_ROMAN_HIGH, code),
                _ => None,
            },
            Self::PdfDoc => match code {
                0x18..=0x1F | 0x80..=0xA0 => table_lookup(PDF_DOC_HIGH, code),
                0x7F | 0xAD => None,
                _ => char::from_u32(code as u32),
            },
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "StandardEncoding" => Some(Self::Standard),
            "WinAnsiEncoding" => Some(Self::WinAnsi),
            "MacRomanEncoding" => Some(Self::MacRoman),
            "PDFDocEncoding" => Some(Self::PdfDoc),
            _ => None,
        }
    }
}

/// Decode one byte of PDFDocEncoding (used by the metadata string decoder).
pub(crate) fn pdf_doc_char(code: u8) -> char {
    BaseEncoding::PdfDoc.lookup(code).unwrap_or('\u{FFFD}')
}

/// A font's character encoding: byte strings in, UTF-8 out.
#[derive(Debug, Clone, PartialEq)]
pub enum Encoding {
    /// Single-byte encoding, optionally patched by a `Differences` array.
    Simple {
        base: BaseEncoding,
        differences: HashMap<u8, String>,
    },
    /// Two-byte big-endian code units (`Identity-H` / `Identity-V`).
    Identity,
}

impl Encoding {
    /// Standard encoding with no differences; the fallback for fonts that
    /// say nothing about their encoding.
    pub fn standard() -> Self {
        Self::Simple {
            base: BaseEncoding::Standard,
            differences: HashMap::new(),
        }
    }

    /// Build an encoding from a font's resolved `Encoding` entry: a name, a
    /// dictionary with `BaseEncoding` + `Differences`, or anything else
    /// (treated as Standard).
    pub fn from_object(obj: &Object) -> Self {
        match obj {
            Object::Name(name) => match name.as_str() {
                "Identity-H" | "Identity-V" => Self::Identity,
                other => match BaseEncoding::from_name(other) {
                    Some(base) => Self::Simple {
                        base,
                        differences: HashMap::new(),
                    },
                    None => {
                        log::debug!("unknown encoding name {other}, using StandardEncoding");
                        Self::standard()
                    }
                },
            },
            Object::Dict(dict) => {
                let base = dict
                    .get("BaseEncoding")
                    .and_then(|b| b.as_name().ok())
                    .and_then(BaseEncoding::from_name)
                    .unwrap_or(BaseEncoding::Standard);
                let differences = dict
                    .get("Differences")
                    .and_then(|d| d.as_array().ok())
                    .map(|entries| Self::parse_differences(entries))
                    .unwrap_or_default();
                Self::Simple { base, differences }
            }
            _ => Self::standard(),
        }
    }

    /// `Differences` arrays interleave code positions and glyph names:
    /// an integer sets the position, each following name fills it and
    /// advances. Unresolvable glyph names are ignored.
    fn parse_differences(entries: &[Object]) -> HashMap<u8, String> {
        let mut map = HashMap::new();
        let mut code: Option<u8> = None;
        for entry in entries {
            match entry {
                Object::Int(n) => {
                    code = u8::try_from(*n).ok();
                }
                Object::Name(glyph) => {
                    if let Some(c) = code {
                        match name_to_unicode(glyph) {
                            Ok(s) => {
                                map.insert(c, s);
                            }
                            Err(_) => log::debug!("unresolvable glyph name {glyph} in Differences"),
                        }
                        code = c.checked_add(1);
                    }
                }
                _ => {}
            }
        }
        map
    }

    /// Convert a byte string to UTF-8.
    pub fn to_utf8(&self, bytes: &[u8]) -> String {
        match self {
            Self::Simple { base, differences } => bytes
                .iter()
                .map(|&b| match differences.get(&b) {
                    Some(s) => s.clone(),
                    None => base.lookup(b).unwrap_or('\u{FFFD}').to_string(),
                })
                .collect(),
            Self::Identity => bytes
                .chunks(2)
                .map(|chunk| match chunk {
                    [hi, lo] => {
                        char::from_u32(u16::from_be_bytes([*hi, *lo]) as u32).unwrap_or('\u{FFFD}')
                    }
                    _ => '\u{FFFD}',
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_ansi_latin1_range() {
        let enc = Encoding::from_object(&Object::Name("WinAnsiEncoding".into()));
        assert_eq!(enc.to_utf8(b"\xe9"), "é");
        assert_eq!(enc.to_utf8(b"Hi"), "Hi");
    }

    #[test]
    fn test_standard_quote_quirks() {
        let enc = Encoding::standard();
        assert_eq!(enc.to_utf8(b"'"), "\u{2019}");
        assert_eq!(enc.to_utf8(b"`"), "\u{2018}");
    }

    #[test]
    fn test_mac_roman_high_range() {
        let enc = Encoding::from_object(&Object::Name("MacRomanEncoding".into()));
        assert_eq!(enc.to_utf8(b"\x8e"), "é");
    }

    #[test]
    fn test_differences_override_base() {
        let mut dict = crate::model::Dict::new();
        dict.insert("BaseEncoding".into(), Object::Name("WinAnsiEncoding".into()));
        dict.insert(
            "Differences".into(),
            Object::Array(vec![
                Object::Int(65),
                Object::Name("eacute".into()),
                Object::Name("ccedilla".into()),
            ]),
        );
        let enc = Encoding::from_object(&Object::Dict(dict));
        assert_eq!(enc.to_utf8(b"AB"), "éç");
        assert_eq!(enc.to_utf8(b"C"), "C");
    }

    #[test]
    fn test_identity_decodes_two_byte_units() {
        let enc = Encoding::from_object(&Object::Name("Identity-H".into()));
        assert_eq!(enc.to_utf8(&[0x00, 0x41, 0x30, 0x42]), "A\u{3042}");
    }

    #[test]
    fn test_unmapped_code_is_replacement() {
        let enc = Encoding::from_object(&Object::Name("MacRomanEncoding".into()));
        assert_eq!(enc.to_utf8(&[0x07]), "\u{FFFD}");
    }
}
