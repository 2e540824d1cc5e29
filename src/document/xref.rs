//! Cross-reference service.
//!
//! An in-memory object store standing in for a document's cross-reference
//! table: indirect references resolve through it, everything else passes
//! through untouched. Embedders (and tests) populate it from whatever
//! loader produced the object graph.

use crate::model::{Dict, Object};
use std::collections::HashMap;

/// Resolves indirect references to concrete objects.
#[derive(Debug, Default)]
pub struct Xref {
    objects: HashMap<u32, Object>,
    version: String,
}

impl Xref {
    /// Create an empty xref reporting the given PDF version.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            objects: HashMap::new(),
            version: version.into(),
        }
    }

    /// Register an object under its object ID.
    pub fn insert(&mut self, objid: u32, obj: Object) {
        self.objects.insert(objid, obj);
    }

    /// The document's version string, e.g. `"1.4"`.
    pub fn pdf_version(&self) -> &str {
        &self.version
    }

    /// Dereference `obj` if it is an indirect reference (chasing chains of
    /// references); return it unchanged otherwise. A dangling reference
    /// resolves to null.
    pub fn object(&self, obj: &Object) -> Object {
        let mut current = obj;
        loop {
            match current {
                Object::Ref(r) => match self.objects.get(&r.objid) {
                    Some(target) => current = target,
                    None => return Object::Null,
                },
                concrete => return concrete.clone(),
            }
        }
    }

    /// Recursively replace every indirect reference inside `obj` with its
    /// resolved object. Stream attribute dictionaries are resolved in
    /// place; stream payloads are untouched.
    ///
    /// Reference cycles are not guarded against; PDF resource graphs do not
    /// contain them in practice.
    pub fn resolve_references(&self, obj: &Object) -> Object {
        match obj {
            Object::Ref(_) => self.resolve_references(&self.object(obj)),
            Object::Array(items) => {
                Object::Array(items.iter().map(|o| self.resolve_references(o)).collect())
            }
            Object::Dict(dict) => Object::Dict(self.resolve_dict(dict)),
            Object::Stream(stream) => {
                let mut resolved = (**stream).clone();
                resolved.attrs = self.resolve_dict(&stream.attrs);
                Object::Stream(Box::new(resolved))
            }
            other => other.clone(),
        }
    }

    fn resolve_dict(&self, dict: &Dict) -> Dict {
        dict.iter()
            .map(|(k, v)| (k.clone(), self.resolve_references(v)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ObjRef, Stream};

    #[test]
    fn test_object_is_identity_for_concrete_values() {
        let xref = Xref::new("1.7");
        assert_eq!(xref.object(&Object::Int(5)), Object::Int(5));
        assert_eq!(xref.pdf_version(), "1.7");
    }

    #[test]
    fn test_object_chases_reference_chains() {
        let mut xref = Xref::new("1.4");
        xref.insert(1, Object::Ref(ObjRef::new(2, 0)));
        xref.insert(2, Object::Name("target".into()));
        assert_eq!(
            xref.object(&Object::Ref(ObjRef::new(1, 0))),
            Object::Name("target".into())
        );
        assert_eq!(xref.object(&Object::Ref(ObjRef::new(99, 0))), Object::Null);
    }

    #[test]
    fn test_resolve_references_descends_containers() {
        let mut xref = Xref::new("1.4");
        xref.insert(3, Object::Int(42));

        let mut inner = Dict::new();
        inner.insert("Deep".into(), Object::Ref(ObjRef::new(3, 0)));
        let obj = Object::Array(vec![
            Object::Dict(inner),
            Object::Ref(ObjRef::new(3, 0)),
            Object::Bool(true),
        ]);

        let mut expected_inner = Dict::new();
        expected_inner.insert("Deep".into(), Object::Int(42));
        assert_eq!(
            xref.resolve_references(&obj),
            Object::Array(vec![
                Object::Dict(expected_inner),
                Object::Int(42),
                Object::Bool(true),
            ])
        );
    }

    #[test]
    fn test_resolve_references_keeps_stream_payload() {
        let mut xref = Xref::new("1.4");
        xref.insert(7, Object::Name("Form".into()));

        let mut attrs = Dict::new();
        attrs.insert("Subtype".into(), Object::Ref(ObjRef::new(7, 0)));
        let stream = Object::Stream(Box::new(Stream::new(attrs, b"q Q".as_slice().to_vec())));

        match xref.resolve_references(&stream) {
            Object::Stream(resolved) => {
                assert_eq!(resolved.attrs.get("Subtype"), Some(&Object::Name("Form".into())));
                assert_eq!(resolved.rawdata(), b"q Q");
            }
            other => panic!("expected stream, got {other:?}"),
        }
    }
}
