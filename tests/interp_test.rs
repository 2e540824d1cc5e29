//! Tests for content-stream interpretation: operand handling, text
//! decoding, and inline images, driven through the page walker.

use sucre::model::Stream;
use sucre::{Dict, ObjRef, Object, PdfError, Receiver, Walker, Xref};

/// Records (callback, operands) pairs for the events under test.
#[derive(Default)]
struct Events {
    calls: Vec<(&'static str, Vec<Object>)>,
}

impl Events {
    fn push(&mut self, name: &'static str, operands: &[Object]) {
        self.calls.push((name, operands.to_vec()));
    }

    fn names(&self) -> Vec<&'static str> {
        self.calls.iter().map(|(name, _)| *name).collect()
    }

    fn operands_of(&self, name: &str) -> Option<&[Object]> {
        self.calls
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, ops)| ops.as_slice())
    }
}

impl Receiver for Events {
    fn begin_text_object(&mut self, operands: &[Object]) {
        self.push("begin_text_object", operands);
    }
    fn end_text_object(&mut self, operands: &[Object]) {
        self.push("end_text_object", operands);
    }
    fn set_text_font_and_size(&mut self, operands: &[Object]) {
        self.push("set_text_font_and_size", operands);
    }
    fn show_text(&mut self, operands: &[Object]) {
        self.push("show_text", operands);
    }
    fn show_text_with_positioning(&mut self, operands: &[Object]) {
        self.push("show_text_with_positioning", operands);
    }
    fn move_to_next_line_and_show_text(&mut self, operands: &[Object]) {
        self.push("move_to_next_line_and_show_text", operands);
    }
    fn set_spacing_next_line_show_text(&mut self, operands: &[Object]) {
        self.push("set_spacing_next_line_show_text", operands);
    }
    fn move_text_position(&mut self, operands: &[Object]) {
        self.push("move_text_position", operands);
    }
    fn begin_inline_image(&mut self, operands: &[Object]) {
        self.push("begin_inline_image", operands);
    }
    fn begin_inline_image_data(&mut self, operands: &[Object]) {
        self.push("begin_inline_image_data", operands);
    }
    fn end_inline_image(&mut self, operands: &[Object]) {
        self.push("end_inline_image", operands);
    }
    fn save_graphics_state(&mut self, operands: &[Object]) {
        self.push("save_graphics_state", operands);
    }
    fn restore_graphics_state(&mut self, operands: &[Object]) {
        self.push("restore_graphics_state", operands);
    }
    fn end_page(&mut self) {
        self.push("end_page", &[]);
    }
    fn end_document(&mut self) {
        self.push("end_document", &[]);
    }
}

fn name(s: &str) -> Object {
    Object::Name(s.into())
}

fn dict(entries: &[(&str, Object)]) -> Dict {
    entries
        .iter()
        .map(|(k, v)| ((*k).to_string(), v.clone()))
        .collect()
}

fn win_ansi_font() -> Object {
    Object::Dict(dict(&[
        ("Type", name("Font")),
        ("Subtype", name("Type1")),
        ("BaseFont", name("Helvetica")),
        ("Encoding", name("WinAnsiEncoding")),
    ]))
}

/// One catalog, one page, one content stream, optional page resources.
fn single_page_doc(content: &[u8], resources: Option<Dict>) -> (Xref, Dict) {
    let mut xref = Xref::new("1.4");

    let mut page = dict(&[
        ("Type", name("Page")),
        ("Parent", Object::Ref(ObjRef::new(1, 0))),
        ("Contents", Object::Ref(ObjRef::new(3, 0))),
    ]);
    if let Some(res) = resources {
        page.insert("Resources".into(), Object::Dict(res));
    }

    xref.insert(
        1,
        Object::Dict(dict(&[
            ("Type", name("Pages")),
            ("Kids", Object::Array(vec![Object::Ref(ObjRef::new(2, 0))])),
            ("Count", Object::Int(1)),
        ])),
    );
    xref.insert(2, Object::Dict(page));
    xref.insert(
        3,
        Object::Stream(Box::new(Stream::new(Dict::new(), content.to_vec()))),
    );

    let root = dict(&[
        ("Type", name("Catalog")),
        ("Pages", Object::Ref(ObjRef::new(1, 0))),
    ]);
    (xref, root)
}

fn walk(content: &[u8], resources: Option<Dict>) -> Events {
    let (xref, root) = single_page_doc(content, resources);
    let mut events = Events::default();
    let mut walker = Walker::new(&xref, &mut events);
    walker.document(&root).expect("walk failed");
    events
}

fn text_resources() -> Dict {
    dict(&[("Font", Object::Dict(dict(&[("F1", win_ansi_font())])))])
}

#[test]
fn test_text_object_event_order() {
    // BT /F1 12 Tf (Hi) Tj ET
    let events = walk(b"BT /F1 12 Tf (Hi) Tj ET", Some(text_resources()));
    let operator_events: Vec<_> = events
        .names()
        .into_iter()
        .filter(|n| !matches!(*n, "end_page" | "end_document"))
        .collect();
    assert_eq!(
        operator_events,
        vec![
            "begin_text_object",
            "set_text_font_and_size",
            "show_text",
            "end_text_object",
        ]
    );
    assert_eq!(
        events.operands_of("set_text_font_and_size").unwrap(),
        &[name("F1"), Object::Int(12)]
    );
    assert_eq!(
        events.operands_of("show_text").unwrap(),
        &[Object::String(b"Hi".to_vec())]
    );
}

#[test]
fn test_show_text_decodes_through_win_ansi() {
    let events = walk(b"BT /F1 12 Tf (\xe9) Tj ET", Some(text_resources()));
    assert_eq!(
        events.operands_of("show_text").unwrap(),
        &[Object::String(vec![0xc3, 0xa9])]
    );
}

#[test]
fn test_show_text_without_current_font_passes_raw() {
    let events = walk(b"BT (\xe9) Tj ET", Some(text_resources()));
    assert_eq!(
        events.operands_of("show_text").unwrap(),
        &[Object::String(vec![0xe9])]
    );
}

#[test]
fn test_show_text_with_unknown_font_label_passes_raw() {
    let events = walk(b"BT /F9 12 Tf (\xe9) Tj ET", Some(text_resources()));
    assert_eq!(
        events.operands_of("show_text").unwrap(),
        &[Object::String(vec![0xe9])]
    );
}

#[test]
fn test_positioning_array_decodes_strings_keeps_numbers() {
    let events = walk(
        b"BT /F1 12 Tf [(\xe9) -120 (x)] TJ ET",
        Some(text_resources()),
    );
    assert_eq!(
        events.operands_of("show_text_with_positioning").unwrap(),
        &[Object::Array(vec![
            Object::String(vec![0xc3, 0xa9]),
            Object::Int(-120),
            Object::String(b"x".to_vec()),
        ])]
    );
}

#[test]
fn test_quote_operators_decode_too() {
    let events = walk(
        b"BT /F1 12 Tf (\xe9) ' 2 3 (\xe9) \" ET",
        Some(text_resources()),
    );
    assert_eq!(
        events.operands_of("move_to_next_line_and_show_text").unwrap(),
        &[Object::String(vec![0xc3, 0xa9])]
    );
    assert_eq!(
        events.operands_of("set_spacing_next_line_show_text").unwrap(),
        &[
            Object::Int(2),
            Object::Int(3),
            Object::String(vec![0xc3, 0xa9]),
        ]
    );
}

#[test]
fn test_operator_with_no_operands_gets_empty_stack() {
    let events = walk(b"BT ET", None);
    assert_eq!(events.operands_of("begin_text_object").unwrap(), &[]);
    assert_eq!(events.operands_of("end_text_object").unwrap(), &[]);
}

#[test]
fn test_operands_before_unknown_operator_leak_into_next_dispatch() {
    // "frobnicate" is not in the operator table, so its operands (and the
    // keyword itself) ride into the Td that follows.
    let events = walk(b"7 frobnicate 1 2 Td", None);
    assert_eq!(
        events.operands_of("move_text_position").unwrap(),
        &[
            Object::Int(7),
            name("frobnicate"),
            Object::Int(1),
            Object::Int(2),
        ]
    );
}

#[test]
fn test_inline_image_sequence() {
    let events = walk(b"BI /W 2 /H 2 /CS /G /BPC 8 ID \x00\x01\x02\x03 EI", None);
    assert_eq!(
        events.names(),
        vec![
            "begin_inline_image",
            "begin_inline_image_data",
            "end_inline_image",
            "end_page",
            "end_document",
        ]
    );
    assert_eq!(events.operands_of("begin_inline_image").unwrap(), &[]);

    let operands = events.operands_of("begin_inline_image_data").unwrap();
    assert_eq!(operands.len(), 2);
    let expected = dict(&[
        ("W", Object::Int(2)),
        ("H", Object::Int(2)),
        ("CS", name("G")),
        ("BPC", Object::Int(8)),
    ]);
    assert_eq!(operands[0], Object::Dict(expected));
    assert_eq!(operands[1], Object::String(vec![0x00, 0x01, 0x02, 0x03]));
    assert_eq!(events.operands_of("end_inline_image").unwrap(), &[]);
}

#[test]
fn test_truncated_stream_is_malformed_pdf() {
    let (xref, root) = single_page_doc(b"BT (oh no", Some(text_resources()));
    let mut events = Events::default();
    let mut walker = Walker::new(&xref, &mut events);

    let err = walker.document(&root).unwrap_err();
    match err {
        PdfError::MalformedPdf(msg) => {
            assert_eq!(msg, "End Of File while processing a content stream");
        }
        other => panic!("expected MalformedPdf, got {other:?}"),
    }
    assert_eq!(walker.resource_depth(), 0);
    // No partial dispatch after the error, and no end-of-scope callbacks.
    assert_eq!(events.names(), vec!["begin_text_object"]);
}

#[test]
fn test_contents_array_resets_operands_between_streams() {
    let mut xref = Xref::new("1.4");
    xref.insert(
        1,
        Object::Dict(dict(&[
            ("Type", name("Pages")),
            ("Kids", Object::Array(vec![Object::Ref(ObjRef::new(2, 0))])),
            ("Count", Object::Int(1)),
        ])),
    );
    xref.insert(
        2,
        Object::Dict(dict(&[
            ("Type", name("Page")),
            (
                "Contents",
                Object::Array(vec![
                    Object::Ref(ObjRef::new(3, 0)),
                    Object::Ref(ObjRef::new(4, 0)),
                ]),
            ),
        ])),
    );
    // Operands left dangling at the end of the first stream are dropped.
    xref.insert(
        3,
        Object::Stream(Box::new(Stream::new(Dict::new(), b"1 2".to_vec()))),
    );
    xref.insert(
        4,
        Object::Stream(Box::new(Stream::new(Dict::new(), b"3 4 Td".to_vec()))),
    );
    let root = dict(&[("Pages", Object::Ref(ObjRef::new(1, 0)))]);

    let mut events = Events::default();
    let mut walker = Walker::new(&xref, &mut events);
    walker.document(&root).unwrap();

    assert_eq!(
        events.operands_of("move_text_position").unwrap(),
        &[Object::Int(3), Object::Int(4)]
    );
}
