//! PDF object types.
//!
//! The fundamental value model for everything the walker touches: a tagged
//! variant covering every PDF object kind, plus the stream wrapper that pairs
//! an attribute dictionary with its (possibly filtered) payload.

use crate::error::{PdfError, Result};
use crate::model::filters;
use bytes::Bytes;
use std::collections::HashMap;

/// Dictionary mapping names to objects. Insertion order is irrelevant.
pub type Dict = HashMap<String, Object>;

/// PDF object - the fundamental value type in PDF.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    /// Null object
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Real (floating point) value
    Real(f64),
    /// Name object (e.g., /Type, /Font)
    Name(String),
    /// String (byte sequence, not necessarily text)
    String(Vec<u8>),
    /// Array of objects
    Array(Vec<Self>),
    /// Dictionary (name -> object mapping)
    Dict(Dict),
    /// Stream (dictionary + binary payload)
    Stream(Box<Stream>),
    /// Indirect object reference
    Ref(ObjRef),
}

impl Object {
    /// Check if this is a null object.
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Get as boolean.
    pub const fn as_bool(&self) -> Result<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(PdfError::TypeError {
                expected: "bool",
                got: self.type_name(),
            }),
        }
    }

    /// Get as integer.
    pub const fn as_int(&self) -> Result<i64> {
        match self {
            Self::Int(n) => Ok(*n),
            _ => Err(PdfError::TypeError {
                expected: "int",
                got: self.type_name(),
            }),
        }
    }

    /// Get numeric value (int or real coerced to f64).
    pub const fn as_num(&self) -> Result<f64> {
        match self {
            Self::Int(n) => Ok(*n as f64),
            Self::Real(n) => Ok(*n),
            _ => Err(PdfError::TypeError {
                expected: "number",
                got: self.type_name(),
            }),
        }
    }

    /// Get as name string.
    pub fn as_name(&self) -> Result<&str> {
        match self {
            Self::Name(s) => Ok(s),
            _ => Err(PdfError::TypeError {
                expected: "name",
                got: self.type_name(),
            }),
        }
    }

    /// Get as byte string.
    pub fn as_string(&self) -> Result<&[u8]> {
        match self {
            Self::String(s) => Ok(s),
            _ => Err(PdfError::TypeError {
                expected: "string",
                got: self.type_name(),
            }),
        }
    }

    /// Get as array.
    pub const fn as_array(&self) -> Result<&Vec<Self>> {
        match self {
            Self::Array(arr) => Ok(arr),
            _ => Err(PdfError::TypeError {
                expected: "array",
                got: self.type_name(),
            }),
        }
    }

    /// Get as dictionary.
    pub const fn as_dict(&self) -> Result<&Dict> {
        match self {
            Self::Dict(d) => Ok(d),
            _ => Err(PdfError::TypeError {
                expected: "dict",
                got: self.type_name(),
            }),
        }
    }

    /// Get as stream.
    pub fn as_stream(&self) -> Result<&Stream> {
        match self {
            Self::Stream(s) => Ok(s),
            _ => Err(PdfError::TypeError {
                expected: "stream",
                got: self.type_name(),
            }),
        }
    }

    /// Get as object reference.
    pub const fn as_objref(&self) -> Result<&ObjRef> {
        match self {
            Self::Ref(r) => Ok(r),
            _ => Err(PdfError::TypeError {
                expected: "ref",
                got: self.type_name(),
            }),
        }
    }

    /// Get type name for error messages.
    pub(crate) const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Real(_) => "real",
            Self::Name(_) => "name",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Dict(_) => "dict",
            Self::Stream(_) => "stream",
            Self::Ref(_) => "ref",
        }
    }
}

/// PDF indirect object reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjRef {
    /// Object ID
    pub objid: u32,
    /// Generation number
    pub genno: u32,
}

impl ObjRef {
    /// Create a new object reference.
    pub const fn new(objid: u32, genno: u32) -> Self {
        Self { objid, genno }
    }
}

/// PDF stream - dictionary attributes + binary payload.
///
/// The payload is kept exactly as stored in the document; filters named by
/// the `Filter` entry are applied on demand by [`Stream::unfiltered_data`].
#[derive(Debug, Clone, PartialEq)]
pub struct Stream {
    /// Stream dictionary attributes
    pub attrs: Dict,
    /// Raw (possibly filtered) payload
    rawdata: Bytes,
}

impl Stream {
    /// Create a new stream.
    pub fn new(attrs: Dict, rawdata: impl Into<Bytes>) -> Self {
        Self {
            attrs,
            rawdata: rawdata.into(),
        }
    }

    /// Get the raw (still filtered) payload.
    pub fn rawdata(&self) -> &[u8] {
        self.rawdata.as_ref()
    }

    /// Get attribute by name.
    pub fn get(&self, name: &str) -> Option<&Object> {
        self.attrs.get(name)
    }

    /// Get the payload with every filter in the `Filter` chain applied.
    ///
    /// `Filter` may be a single name or an array of names applied in order.
    /// An unknown filter is a [`PdfError::DecodeError`].
    pub fn unfiltered_data(&self) -> Result<Vec<u8>> {
        let mut data = self.rawdata.to_vec();
        for filter in self.filter_chain() {
            data = filters::decode(&data, &filter)?;
        }
        Ok(data)
    }

    fn filter_chain(&self) -> Vec<String> {
        match self.attrs.get("Filter") {
            Some(Object::Name(name)) => vec![name.clone()],
            Some(Object::Array(names)) => names
                .iter()
                .filter_map(|n| n.as_name().ok().map(str::to_owned))
                .collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessor_type_errors_name_the_actual_type() {
        let obj = Object::Name("Font".into());
        match obj.as_int() {
            Err(PdfError::TypeError { expected, got }) => {
                assert_eq!(expected, "int");
                assert_eq!(got, "name");
            }
            other => panic!("expected TypeError, got {other:?}"),
        }
    }

    #[test]
    fn test_as_num_coerces_ints() {
        assert_eq!(Object::Int(7).as_num().unwrap(), 7.0);
        assert_eq!(Object::Real(1.5).as_num().unwrap(), 1.5);
    }

    #[test]
    fn test_unfiltered_data_without_filter_is_identity() {
        let stream = Stream::new(Dict::new(), b"raw bytes".as_slice().to_vec());
        assert_eq!(stream.unfiltered_data().unwrap(), b"raw bytes");
    }
}
