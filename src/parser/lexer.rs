//! Content-stream tokenizer.
//!
//! Lexes one decoded content stream into operand objects and operator
//! tokens. The lexer is parameterized by the operator table: a bare keyword
//! is an operator only if the table knows it, anything else comes back as an
//! unrecognized token for the interpreter to treat as an operand.
//!
//! Arrays and dictionaries are assembled here, so the interpreter only ever
//! sees whole operands. Inline-image payloads bypass tokenization entirely
//! through [`ContentLexer::read_inline_data`].

use crate::error::{PdfError, Result};
use crate::interp::operators::{Callback, OperatorTable};
use crate::model::{Dict, Object};

/// Token produced by the content lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A literal operand: number, string, name, bool, null, array or dict.
    Object(Object),
    /// An operator present in the operator table.
    Operator(Callback),
    /// A bare keyword the operator table does not know.
    Other(Vec<u8>),
}

/// Raw lexical token, before array/dict assembly.
#[derive(Debug)]
enum RawToken {
    Literal(Object),
    Keyword(Vec<u8>),
    ArrayStart,
    ArrayEnd,
    DictStart,
    DictEnd,
}

/// Tokenizer over a single decoded content stream.
pub struct ContentLexer<'a> {
    data: &'a [u8],
    pos: usize,
    table: &'a OperatorTable,
}

impl<'a> ContentLexer<'a> {
    /// Create a lexer over `data`, recognizing operators from `table`.
    pub fn new(data: &'a [u8], table: &'a OperatorTable) -> Self {
        Self { data, pos: 0, table }
    }

    /// Current byte offset, mostly useful in tests.
    pub fn tell(&self) -> usize {
        self.pos
    }

    /// Pull the next token. `Ok(None)` is clean end-of-stream; premature
    /// end-of-file inside a token is [`PdfError::UnexpectedEof`].
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        let raw = match self.lex_raw()? {
            Some(raw) => raw,
            None => return Ok(None),
        };
        match raw {
            RawToken::Literal(obj) => Ok(Some(Token::Object(obj))),
            RawToken::ArrayStart => {
                let items = self.finish_array()?;
                Ok(Some(Token::Object(Object::Array(items))))
            }
            RawToken::DictStart => {
                let dict = self.finish_dict()?;
                Ok(Some(Token::Object(Object::Dict(dict))))
            }
            // Stray closers at top level; hand them to the interpreter as
            // unrecognized tokens, like any other junk keyword.
            RawToken::ArrayEnd => Ok(Some(Token::Other(b"]".to_vec()))),
            RawToken::DictEnd => Ok(Some(Token::Other(b">>".to_vec()))),
            RawToken::Keyword(bytes) => match self.table.get(&bytes) {
                Some(callback) => Ok(Some(Token::Operator(callback))),
                None => Ok(Some(Token::Other(bytes))),
            },
        }
    }

    /// Consume raw bytes up to the next standalone occurrence of `sentinel`.
    ///
    /// Used for inline image data after `ID`. Exactly one whitespace byte
    /// (or one CRLF pair) is skipped before the data and trimmed after it;
    /// image payloads may legitimately start or end with bytes that count as
    /// PDF whitespace, so runs are left alone. The cursor is left *at* the
    /// sentinel so it is tokenized as an ordinary operator afterwards. A
    /// missing sentinel is premature end-of-file.
    pub fn read_inline_data(&mut self, sentinel: &[u8]) -> Result<Vec<u8>> {
        if self.peek() == Some(b'\r') && self.peek_at(1) == Some(b'\n') {
            self.pos += 2;
        } else if self.peek().is_some_and(is_whitespace) {
            self.pos += 1;
        }
        let start = self.pos;

        let mut i = self.pos;
        while i + sentinel.len() <= self.data.len() {
            if &self.data[i..i + sentinel.len()] == sentinel {
                let after = self.data.get(i + sentinel.len()).copied();
                if after.is_none() || after.is_some_and(is_whitespace) {
                    let mut end = i;
                    if end >= start + 2 && &self.data[end - 2..end] == b"\r\n" {
                        end -= 2;
                    } else if end > start && is_whitespace(self.data[end - 1]) {
                        end -= 1;
                    }
                    let span = self.data[start..end].to_vec();
                    self.pos = i;
                    return Ok(span);
                }
            }
            i += 1;
        }
        Err(PdfError::UnexpectedEof)
    }

    // === array / dict assembly ===

    fn finish_array(&mut self) -> Result<Vec<Object>> {
        let mut items = Vec::new();
        loop {
            match self.lex_raw()? {
                None => return Err(PdfError::UnexpectedEof),
                Some(RawToken::ArrayEnd) => return Ok(items),
                Some(RawToken::Literal(obj)) => items.push(obj),
                Some(RawToken::ArrayStart) => {
                    items.push(Object::Array(self.finish_array()?));
                }
                Some(RawToken::DictStart) => {
                    items.push(Object::Dict(self.finish_dict()?));
                }
                // Keywords and stray dict closers inside an array are
                // malformed; drop them and keep collecting elements.
                Some(RawToken::Keyword(_)) | Some(RawToken::DictEnd) => {}
            }
        }
    }

    fn finish_dict(&mut self) -> Result<Dict> {
        let mut items = Vec::new();
        loop {
            match self.lex_raw()? {
                None => return Err(PdfError::UnexpectedEof),
                Some(RawToken::DictEnd) => return Ok(Self::pair_entries(items)),
                Some(RawToken::Literal(obj)) => items.push(obj),
                Some(RawToken::ArrayStart) => {
                    items.push(Object::Array(self.finish_array()?));
                }
                Some(RawToken::DictStart) => {
                    items.push(Object::Dict(self.finish_dict()?));
                }
                Some(RawToken::Keyword(_)) | Some(RawToken::ArrayEnd) => {}
            }
        }
    }

    /// Build a dictionary from `[key, value, key, value, ...]`, keeping only
    /// name keys that have a value.
    pub(crate) fn pair_entries(items: Vec<Object>) -> Dict {
        let mut dict = Dict::new();
        let mut iter = items.into_iter();
        while let Some(key) = iter.next() {
            if let Object::Name(name) = key
                && let Some(value) = iter.next()
            {
                dict.insert(name, value);
            }
        }
        dict
    }

    // === raw lexing ===

    fn lex_raw(&mut self) -> Result<Option<RawToken>> {
        self.skip_whitespace();
        let Some(b) = self.peek() else {
            return Ok(None);
        };

        let token = match b {
            b'/' => RawToken::Literal(self.parse_name()?),
            b'(' => RawToken::Literal(self.parse_string()?),
            b'<' => {
                if self.peek_at(1) == Some(b'<') {
                    self.pos += 2;
                    RawToken::DictStart
                } else {
                    RawToken::Literal(self.parse_hex_string()?)
                }
            }
            b'>' => {
                if self.peek_at(1) == Some(b'>') {
                    self.pos += 2;
                    RawToken::DictEnd
                } else {
                    self.pos += 1;
                    RawToken::Keyword(b">".to_vec())
                }
            }
            b'[' => {
                self.pos += 1;
                RawToken::ArrayStart
            }
            b']' => {
                self.pos += 1;
                RawToken::ArrayEnd
            }
            // A stray ')' has no opening partner; surface it like any other
            // unrecognized token instead of stalling.
            b')' => {
                self.pos += 1;
                RawToken::Keyword(b")".to_vec())
            }
            b'+' | b'-' => {
                if matches!(self.peek_at(1), Some(c) if c.is_ascii_digit() || c == b'.') {
                    self.parse_number().map(RawToken::Literal)?
                } else {
                    RawToken::Keyword(self.parse_keyword())
                }
            }
            b'.' => {
                if matches!(self.peek_at(1), Some(c) if c.is_ascii_digit()) {
                    self.parse_number().map(RawToken::Literal)?
                } else {
                    RawToken::Keyword(self.parse_keyword())
                }
            }
            c if c.is_ascii_digit() => self.parse_number().map(RawToken::Literal)?,
            b'{' | b'}' => {
                self.pos += 1;
                RawToken::Keyword(vec![b])
            }
            _ => {
                let bytes = self.parse_keyword();
                match bytes.as_slice() {
                    b"true" => RawToken::Literal(Object::Bool(true)),
                    b"false" => RawToken::Literal(Object::Bool(false)),
                    b"null" => RawToken::Literal(Object::Null),
                    _ => RawToken::Keyword(bytes),
                }
            }
        };
        Ok(Some(token))
    }

    fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek() {
            if b == b'%' {
                while let Some(c) = self.peek() {
                    self.pos += 1;
                    if c == b'\n' || c == b'\r' {
                        break;
                    }
                }
            } else if is_whitespace(b) {
                self.pos += 1;
            } else {
                return;
            }
        }
    }

    fn parse_name(&mut self) -> Result<Object> {
        self.pos += 1; // skip '/'
        let mut name = Vec::with_capacity(16);
        while let Some(b) = self.peek() {
            if is_whitespace(b) || is_delimiter(b) {
                break;
            }
            if b == b'#'
                && let (Some(h1), Some(h2)) = (
                    self.peek_at(1).and_then(hex_value),
                    self.peek_at(2).and_then(hex_value),
                )
            {
                self.pos += 3;
                name.push((h1 << 4) | h2);
                continue;
            }
            name.push(b);
            self.pos += 1;
        }
        Ok(Object::Name(String::from_utf8_lossy(&name).into_owned()))
    }

    fn parse_number(&mut self) -> Result<Object> {
        let mut negative = false;
        match self.peek() {
            Some(b'-') => {
                negative = true;
                self.pos += 1;
            }
            Some(b'+') => self.pos += 1,
            _ => {}
        }

        let mut int_part: i64 = 0;
        while let Some(b) = self.peek() {
            if b.is_ascii_digit() {
                int_part = int_part.wrapping_mul(10).wrapping_add((b - b'0') as i64);
                self.pos += 1;
            } else {
                break;
            }
        }

        if self.peek() == Some(b'.') {
            self.pos += 1;
            let mut frac: f64 = 0.0;
            let mut scale = 0.1;
            while let Some(b) = self.peek() {
                if b.is_ascii_digit() {
                    frac += (b - b'0') as f64 * scale;
                    scale *= 0.1;
                    self.pos += 1;
                } else {
                    break;
                }
            }
            let mut value = int_part as f64 + frac;
            if negative {
                value = -value;
            }
            Ok(Object::Real(value))
        } else {
            Ok(Object::Int(if negative { -int_part } else { int_part }))
        }
    }

    fn parse_string(&mut self) -> Result<Object> {
        self.pos += 1; // skip '('
        let mut result = Vec::with_capacity(32);
        let mut depth = 1usize;

        while depth > 0 {
            match self.advance_one() {
                Some(b'(') => {
                    depth += 1;
                    result.push(b'(');
                }
                Some(b')') => {
                    depth -= 1;
                    if depth > 0 {
                        result.push(b')');
                    }
                }
                Some(b'\\') => match self.advance_one() {
                    Some(b'n') => result.push(b'\n'),
                    Some(b'r') => result.push(b'\r'),
                    Some(b't') => result.push(b'\t'),
                    Some(b'b') => result.push(0x08),
                    Some(b'f') => result.push(0x0c),
                    Some(b'(') => result.push(b'('),
                    Some(b')') => result.push(b')'),
                    Some(b'\\') => result.push(b'\\'),
                    Some(b'\r') => {
                        if self.peek() == Some(b'\n') {
                            self.pos += 1;
                        }
                    }
                    Some(b'\n') => {}
                    Some(c) if (b'0'..b'8').contains(&c) => {
                        let mut octal = (c - b'0') as u32;
                        for _ in 0..2 {
                            match self.peek() {
                                Some(d) if (b'0'..b'8').contains(&d) => {
                                    self.pos += 1;
                                    octal = octal * 8 + (d - b'0') as u32;
                                }
                                _ => break,
                            }
                        }
                        result.push((octal & 0xff) as u8);
                    }
                    Some(c) => result.push(c),
                    None => return Err(PdfError::UnexpectedEof),
                },
                Some(c) => result.push(c),
                None => return Err(PdfError::UnexpectedEof),
            }
        }

        Ok(Object::String(result))
    }

    fn parse_hex_string(&mut self) -> Result<Object> {
        self.pos += 1; // skip '<'
        let mut result = Vec::new();
        let mut pending: Option<u8> = None;

        loop {
            match self.advance_one() {
                Some(b'>') => break,
                Some(c) => {
                    if let Some(nibble) = hex_value(c) {
                        match pending.take() {
                            Some(high) => result.push((high << 4) | nibble),
                            None => pending = Some(nibble),
                        }
                    }
                    // Whitespace and junk inside hex strings are ignored.
                }
                None => return Err(PdfError::UnexpectedEof),
            }
        }

        if let Some(high) = pending {
            result.push(high << 4);
        }
        Ok(Object::String(result))
    }

    fn parse_keyword(&mut self) -> Vec<u8> {
        // `'` and `"` are operators of their own despite being neither
        // regular nor delimiter characters in the PDF grammar.
        if let Some(b @ (b'\'' | b'"')) = self.peek() {
            self.pos += 1;
            return vec![b];
        }
        let mut bytes = Vec::with_capacity(8);
        while let Some(b) = self.peek() {
            if is_whitespace(b) || is_delimiter(b) || b == b'\'' || b == b'"' {
                break;
            }
            bytes.push(b);
            self.pos += 1;
        }
        bytes
    }

    fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.data.get(self.pos + offset).copied()
    }

    fn advance_one(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }
}

/// Check if byte is PDF whitespace.
pub(crate) const fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n' | b'\x00' | b'\x0c')
}

const fn is_delimiter(b: u8) -> bool {
    matches!(
        b,
        b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%'
    )
}

const fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}
