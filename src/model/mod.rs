//! PDF value model: object variants and stream filter decoding.

pub mod filters;
pub mod objects;

pub use objects::{Dict, ObjRef, Object, Stream};
