//! Document-level services: cross-reference resolution and the page-tree
//! walker.

pub mod walker;
pub mod xref;

pub use walker::Walker;
pub use xref::Xref;
