//! Adobe glyph name to Unicode conversion.
//!
//! Carries the subset of the Adobe Glyph List needed to resolve the glyph
//! names that show up in encoding `Differences` arrays, plus the algorithmic
//! `uniXXXX` / `uXXXXXX` forms from the AGL specification:
//! https://github.com/adobe-type-tools/agl-specification#2-the-mapping

use crate::error::{PdfError, Result};
use std::collections::HashMap;
use std::sync::LazyLock;

/// AGL subset: Latin letters resolve algorithmically (single-character
/// names map to themselves), so the table carries everything else that
/// `Differences` arrays commonly reference.
const GLYPHS: &[(&str, u32)] = &[
    ("AE", 0x00C6),
    ("Aacute", 0x00C1),
    ("Acircumflex", 0x00C2),
    ("Adieresis", 0x00C4),
    ("Agrave", 0x00C0),
    ("Aring", 0x00C5),
    ("Atilde", 0x00C3),
    ("Ccedilla", 0x00C7),
    ("Delta", 0x2206),
    ("Eacute", 0x00C9),
    ("Ecircumflex", 0x00CA),
    ("Edieresis", 0x00CB),
    ("Egrave", 0x00C8),
    ("Eth", 0x00D0),
    ("Euro", 0x20AC),
    ("Iacute", 0x00CD),
    ("Icircumflex", 0x00CE),
    ("Idieresis", 0x00CF),
    ("Igrave", 0x00CC),
    ("Lslash", 0x0141),
    ("Ntilde", 0x00D1),
    ("OE", 0x0152),
    ("Oacute", 0x00D3),
    ("Ocircumflex", 0x00D4),
    ("Odieresis", 0x00D6),
    ("Ograve", 0x00D2),
    ("Omega", 0x2126),
    ("Oslash", 0x00D8),
    ("Otilde", 0x00D5),
    ("Scaron", 0x0160),
    ("Thorn", 0x00DE),
    ("Uacute", 0x00DA),
    ("Ucircumflex", 0x00DB),
    ("Udieresis", 0x00DC),
    ("Ugrave", 0x00D9),
    ("Yacute", 0x00DD),
    ("Ydieresis", 0x0178),
    ("Zcaron", 0x017D),
    ("aacute", 0x00E1),
    ("acircumflex", 0x00E2),
    ("acute", 0x00B4),
    ("adieresis", 0x00E4),
    ("ae", 0x00E6),
    ("agrave", 0x00E0),
    ("ampersand", 0x0026),
    ("aring", 0x00E5),
    ("asciicircum", 0x005E),
    ("asciitilde", 0x007E),
    ("asterisk", 0x002A),
    ("at", 0x0040),
    ("atilde", 0x00E3),
    ("backslash", 0x005C),
    ("bar", 0x007C),
    ("braceleft", 0x007B),
    ("braceright", 0x007D),
    ("bracketleft", 0x005B),
    ("bracketright", 0x005D),
    ("breve", 0x02D8),
    ("brokenbar", 0x00A6),
    ("bullet", 0x2022),
    ("caron", 0x02C7),
    ("ccedilla", 0x00E7),
    ("cedilla", 0x00B8),
    ("cent", 0x00A2),
    ("circumflex", 0x02C6),
    ("colon", 0x003A),
    ("comma", 0x002C),
    ("copyright", 0x00A9),
    ("currency", 0x00A4),
    ("dagger", 0x2020),
    ("daggerdbl", 0x2021),
    ("degree", 0x00B0),
    ("dieresis", 0x00A8),
    ("divide", 0x00F7),
    ("dollar", 0x0024),
    ("dotaccent", 0x02D9),
    ("dotlessi", 0x0131),
    ("eacute", 0x00E9),
    ("ecircumflex", 0x00EA),
    ("edieresis", 0x00EB),
    ("egrave", 0x00E8),
    ("eight", 0x0038),
    ("ellipsis", 0x2026),
    ("emdash", 0x2014),
    ("endash", 0x2013),
    ("equal", 0x003D),
    ("eth", 0x00F0),
    ("exclam", 0x0021),
    ("exclamdown", 0x00A1),
    ("fi", 0xFB01),
    ("five", 0x0035),
    ("fl", 0xFB02),
    ("florin", 0x0192),
    ("four", 0x0034),
    ("fraction", 0x2044),
    ("germandbls", 0x00DF),
    ("grave", 0x0060),
    ("greater", 0x003E),
    ("guillemotleft", 0x00AB),
    ("guillemotright", 0x00BB),
    ("guilsinglleft", 0x2039),
    ("guilsinglright", 0x203A),
    ("hungarumlaut", 0x02DD),
    ("hyphen", 0x002D),
    ("iacute", 0x00ED),
    ("icircumflex", 0x00EE),
    ("idieresis", 0x00EF),
    ("igrave", 0x00EC),
    ("less", 0x003C),
    ("logicalnot", 0x00AC),
    ("lslash", 0x0142),
    ("macron", 0x00AF),
    ("minus", 0x2212),
    ("mu", 0x00B5),
    ("multiply", 0x00D7),
    ("nine", 0x0039),
    ("ntilde", 0x00F1),
    ("numbersign", 0x0023),
    ("oacute", 0x00F3),
    ("ocircumflex", 0x00F4),
    ("odieresis", 0x00F6),
    ("oe", 0x0153),
    ("ogonek", 0x02DB),
    ("ograve", 0x00F2),
    ("one", 0x0031),
    ("onehalf", 0x00BD),
    ("onequarter", 0x00BC),
    ("onesuperior", 0x00B9),
    ("ordfeminine", 0x00AA),
    ("ordmasculine", 0x00BA),
    ("oslash", 0x00F8),
    ("otilde", 0x00F5),
    ("paragraph", 0x00B6),
    ("parenleft", 0x0028),
    ("parenright", 0x0029),
    ("percent", 0x0025),
    ("period", 0x002E),
    ("periodcentered", 0x00B7),
    ("perthousand", 0x2030),
    ("plus", 0x002B),
    ("plusminus", 0x00B1),
    ("question", 0x003F),
    ("questiondown", 0x00BF),
    ("quotedbl", 0x0022),
    ("quotedblbase", 0x201E),
    ("quotedblleft", 0x201C),
    ("quotedblright", 0x201D),
    ("quoteleft", 0x2018),
    ("quoteright", 0x2019),
    ("quotesinglbase", 0x201A),
    ("quotesingle", 0x0027),
    ("registered", 0x00AE),
    ("ring", 0x02DA),
    ("scaron", 0x0161),
    ("section", 0x00A7),
    ("semicolon", 0x003B),
    ("seven", 0x0037),
    ("six", 0x0036),
    ("slash", 0x002F),
    ("space", 0x0020),
    ("sterling", 0x00A3),
    ("thorn", 0x00FE),
    ("three", 0x0033),
    ("threequarters", 0x00BE),
    ("threesuperior", 0x00B3),
    ("tilde", 0x02DC),
    ("trademark", 0x2122),
    ("two", 0x0032),
    ("twosuperior", 0x00B2),
    ("uacute", 0x00FA),
    ("ucircumflex", 0x00FB),
    ("udieresis", 0x00FC),
    ("ugrave", 0x00F9),
    ("underscore", 0x005F),
    ("yacute", 0x00FD),
    ("ydieresis", 0x00FF),
    ("yen", 0x00A5),
    ("zcaron", 0x017E),
    ("zero", 0x0030),
];

static GLYPH_TO_CHAR: LazyLock<HashMap<&'static str, char>> = LazyLock::new(|| {
    GLYPHS
        .iter()
        .filter_map(|&(name, code)| char::from_u32(code).map(|c| (name, c)))
        .collect()
});

/// Check if a string contains only hexadecimal characters.
fn is_hex(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_hexdigit())
}

fn is_surrogate(cp: u32) -> bool {
    (0xD800..=0xDFFF).contains(&cp)
}

fn decode_component(name: &str) -> Result<String> {
    // "uni" + 4*N hex digits, each a UTF-16 code unit (surrogates rejected).
    if let Some(hex) = name.strip_prefix("uni")
        && hex.len() >= 4
        && hex.len() % 4 == 0
        && is_hex(hex)
    {
        let mut result = String::new();
        for chunk in hex.as_bytes().chunks(4) {
            let hex_str = std::str::from_utf8(chunk).unwrap();
            let cp = u32::from_str_radix(hex_str, 16)
                .map_err(|_| PdfError::UnknownGlyph(name.to_string()))?;
            if is_surrogate(cp) {
                return Err(PdfError::UnknownGlyph(name.to_string()));
            }
            match char::from_u32(cp) {
                Some(ch) => result.push(ch),
                None => return Err(PdfError::UnknownGlyph(name.to_string())),
            }
        }
        return Ok(result);
    }

    // "u" + 4-6 hex digits, a single code point.
    if let Some(hex) = name.strip_prefix('u')
        && (4..=6).contains(&hex.len())
        && is_hex(hex)
    {
        let cp = u32::from_str_radix(hex, 16)
            .map_err(|_| PdfError::UnknownGlyph(name.to_string()))?;
        if let Some(ch) = char::from_u32(cp)
            && !is_surrogate(cp)
        {
            return Ok(ch.to_string());
        }
        return Err(PdfError::UnknownGlyph(name.to_string()));
    }

    // Single-character ASCII names map to themselves (A -> A, comma is
    // tabled; bare punctuation names like "a" .. "z" fall out here too).
    if name.len() == 1 && name.is_ascii() {
        return Ok(name.to_string());
    }

    match GLYPH_TO_CHAR.get(name) {
        Some(&ch) => Ok(ch.to_string()),
        None => Err(PdfError::UnknownGlyph(name.to_string())),
    }
}

/// Convert an Adobe glyph name to a Unicode string.
///
/// Strips any `.suffix`, splits `_`-joined composites, and resolves each
/// component through the algorithmic forms or the table.
pub fn name_to_unicode(name: &str) -> Result<String> {
    let name = name.split('.').next().unwrap_or(name);
    if name.is_empty() || name == "notdef" {
        return Err(PdfError::UnknownGlyph(name.to_string()));
    }

    let mut result = String::new();
    for part in name.split('_') {
        result.push_str(&decode_component(part)?);
    }
    Ok(result)
}
