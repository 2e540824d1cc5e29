//! sucre - event-driven PDF page-tree walking and content-stream
//! interpretation.
//!
//! Given a parsed PDF object graph (an [`Xref`] populated with indirect
//! objects), a [`Walker`] recurses the document's page tree, resolves
//! inherited resources for each page, tokenizes every content stream into
//! operators and operand stacks, and dispatches each event to a pluggable
//! [`Receiver`]. Text operands are decoded to UTF-8 through per-font
//! encodings and ToUnicode CMaps; inline images and Form XObjects are
//! handled in stride.
//!
//! ```
//! use sucre::{Dict, Object, Receiver, Walker, Xref};
//!
//! #[derive(Default)]
//! struct TextCollector(String);
//!
//! impl Receiver for TextCollector {
//!     fn show_text(&mut self, operands: &[Object]) {
//!         if let Some(Object::String(bytes)) = operands.first() {
//!             self.0.push_str(&String::from_utf8_lossy(bytes));
//!         }
//!     }
//! }
//!
//! let xref = Xref::new("1.4");
//! let mut collector = TextCollector::default();
//! let mut walker = Walker::new(&xref, &mut collector);
//! walker.document(&Dict::new()).unwrap();
//! ```

pub mod document;
pub mod error;
pub mod font;
pub mod interp;
pub mod model;
pub mod parser;
pub mod utils;

pub use document::walker::Walker;
pub use document::xref::Xref;
pub use error::{PdfError, Result};
pub use font::{Font, FontMap};
pub use interp::operators::{Callback, OPERATOR_TABLE, OperatorTable};
pub use interp::receiver::Receiver;
pub use model::{Dict, ObjRef, Object, Stream};
