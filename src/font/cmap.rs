//! ToUnicode CMap parsing.
//!
//! A ToUnicode CMap maps character codes to Unicode. The blocks that matter
//! here:
//!
//! ```text
//! begincodespacerange <00> <FF> endcodespacerange
//! beginbfchar <3A> <0041> endbfchar
//! beginbfrange <00> <5E> <0020> endbfrange
//! ```
//!
//! Parsing is line-oriented over the (typically ASCII) stream payload.
//! Destination values are UTF-16BE code units. An unterminated block is a
//! parse error; the font builder swallows it and keeps the font without a
//! ToUnicode map.

use crate::error::{PdfError, Result};

/// Parsed ToUnicode CMap: code -> Unicode string, plus the code width the
/// codespace declares (1 or 2 bytes, 2 when absent).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnicodeCMap {
    map: std::collections::HashMap<u32, String>,
    code_width: usize,
}

impl UnicodeCMap {
    /// Parse a decoded ToUnicode stream payload.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let content = String::from_utf8_lossy(data);
        let mut cmap = Self {
            map: std::collections::HashMap::new(),
            code_width: 2,
        };

        let mut lines = content.split(['\n', '\r']).map(str::trim);
        while let Some(line) = lines.next() {
            if line.ends_with("begincodespacerange") {
                let block = collect_block(&mut lines, "endcodespacerange")?;
                cmap.parse_codespace(&block);
            } else if line.ends_with("beginbfchar") {
                let block = collect_block(&mut lines, "endbfchar")?;
                cmap.parse_bfchar(&block);
            } else if line.ends_with("beginbfrange") {
                let block = collect_block(&mut lines, "endbfrange")?;
                cmap.parse_bfrange(&block);
            }
        }

        Ok(cmap)
    }

    /// Number of explicit code mappings.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True when no mapping was declared.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Code width in bytes (1 or 2).
    pub fn code_width(&self) -> usize {
        self.code_width
    }

    /// Look up one code.
    pub fn lookup(&self, code: u32) -> Option<&str> {
        self.map.get(&code).map(String::as_str)
    }

    /// Decode a byte string: split at the code width, map each code,
    /// U+FFFD for codes without a mapping.
    pub fn decode(&self, bytes: &[u8]) -> String {
        let mut out = String::new();
        for chunk in bytes.chunks(self.code_width) {
            if chunk.len() < self.code_width {
                out.push('\u{FFFD}');
                continue;
            }
            let code = chunk.iter().fold(0u32, |acc, &b| (acc << 8) | b as u32);
            match self.lookup(code) {
                Some(s) => out.push_str(s),
                None => out.push('\u{FFFD}'),
            }
        }
        out
    }

    fn parse_codespace(&mut self, lines: &[&str]) {
        for line in lines {
            let hexes = extract_hex_sequences(line);
            if let Some(first) = hexes.first() {
                let digits = first.len().saturating_sub(2);
                if digits == 2 {
                    self.code_width = 1;
                } else if digits >= 4 {
                    self.code_width = 2;
                }
                return;
            }
        }
    }

    fn parse_bfchar(&mut self, lines: &[&str]) {
        for line in lines {
            let hexes = extract_hex_sequences(line);
            for pair in hexes.chunks(2) {
                let [src, dst] = pair else { continue };
                if let (Some(code), Some(text)) = (parse_hex_value(src), parse_utf16be(dst)) {
                    self.map.insert(code, text);
                }
            }
        }
    }

    fn parse_bfrange(&mut self, lines: &[&str]) {
        for line in lines {
            let hexes = extract_hex_sequences(line);
            if hexes.len() < 3 {
                continue;
            }
            let (Some(lo), Some(hi)) = (parse_hex_value(hexes[0]), parse_hex_value(hexes[1]))
            else {
                continue;
            };
            if hi < lo {
                continue;
            }

            if line.contains('[') {
                // Explicit destination per code: <lo> <hi> [<d0> <d1> ...]
                for (i, dst) in hexes[2..].iter().enumerate() {
                    let code = lo + i as u32;
                    if code > hi {
                        break;
                    }
                    if let Some(text) = parse_utf16be(dst) {
                        self.map.insert(code, text);
                    }
                }
            } else if let Some(units) = parse_hex_units(hexes[2]) {
                // Single destination, last code unit incremented per code.
                for offset in 0..=(hi - lo) {
                    let mut units = units.clone();
                    if let Some(last) = units.last_mut() {
                        *last = last.wrapping_add(offset as u16);
                    }
                    self.map
                        .insert(lo + offset, String::from_utf16_lossy(&units));
                }
            }
        }
    }
}

/// Collect block lines up to the terminator, which must be present.
fn collect_block<'a>(
    lines: &mut impl Iterator<Item = &'a str>,
    terminator: &str,
) -> Result<Vec<&'a str>> {
    let mut block = Vec::new();
    for line in lines {
        if line == terminator {
            return Ok(block);
        }
        if !line.is_empty() {
            block.push(line);
        }
    }
    Err(PdfError::MalformedPdf(format!(
        "ToUnicode CMap block missing {terminator}"
    )))
}

/// Extract all `<...>` sequences from a line.
fn extract_hex_sequences(line: &str) -> Vec<&str> {
    let mut results = Vec::new();
    let mut rest = line;
    while let Some(start) = rest.find('<') {
        let Some(len) = rest[start..].find('>') else {
            break;
        };
        results.push(&rest[start..=start + len]);
        rest = &rest[start + len + 1..];
    }
    results
}

/// Parse `<0048>` to 0x48.
fn parse_hex_value(s: &str) -> Option<u32> {
    let s = s.trim_start_matches('<').trim_end_matches('>');
    u32::from_str_radix(s, 16).ok()
}

/// Parse `<00480065>` to UTF-16BE code units.
fn parse_hex_units(s: &str) -> Option<Vec<u16>> {
    let s = s.trim_start_matches('<').trim_end_matches('>');
    if s.is_empty() || s.len() % 4 != 0 {
        return None;
    }
    let mut units = Vec::with_capacity(s.len() / 4);
    for chunk in s.as_bytes().chunks(4) {
        let hex = std::str::from_utf8(chunk).ok()?;
        units.push(u16::from_str_radix(hex, 16).ok()?);
    }
    Some(units)
}

/// Parse a destination hex string to text via UTF-16BE.
fn parse_utf16be(s: &str) -> Option<String> {
    parse_hex_units(s).map(|units| String::from_utf16_lossy(&units))
}
