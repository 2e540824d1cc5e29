//! Benchmarks for content-stream tokenization and the page walker.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use sucre::model::Stream;
use sucre::parser::lexer::ContentLexer;
use sucre::{Dict, OPERATOR_TABLE, ObjRef, Object, Receiver, Walker, Xref};

/// Generate a content stream with realistic text operations.
fn generate_text_ops(n: usize) -> Vec<u8> {
    let mut stream = Vec::with_capacity(n * 100);
    for i in 0..n {
        stream.extend_from_slice(b"BT\n/F1 12 Tf\n");
        let x = (i % 10) * 60 + 72;
        let y = 720 - (i / 10) * 14;
        stream.extend_from_slice(format!("1 0 0 1 {x} {y} Tm\n").as_bytes());
        stream.extend_from_slice(b"(Hello World) Tj\n[(kerned) -120 (text)] TJ\nET\n");
    }
    stream
}

/// Generate a content stream with graphics operations.
fn generate_graphics_ops(n: usize) -> Vec<u8> {
    let mut stream = Vec::with_capacity(n * 120);
    for i in 0..n {
        stream.extend_from_slice(b"q\n");
        let scale = 1.0 + (i % 10) as f64 * 0.1;
        stream.extend_from_slice(format!("{scale:.2} 0 0 {scale:.2} 0 0 cm\n").as_bytes());
        stream.extend_from_slice(b"0.5 0.5 0.5 RG\n0.8 0.8 0.8 rg\n");
        let x = (i % 10) * 50 + 72;
        let y = 720 - (i / 10) * 50;
        stream.extend_from_slice(format!("{x} {y} 40 30 re\n").as_bytes());
        stream.extend_from_slice(b"B\nQ\n");
    }
    stream
}

struct CountingReceiver {
    operators: usize,
}

impl Receiver for CountingReceiver {
    fn show_text(&mut self, _operands: &[Object]) {
        self.operators += 1;
    }
    fn show_text_with_positioning(&mut self, _operands: &[Object]) {
        self.operators += 1;
    }
    fn append_rectangle(&mut self, _operands: &[Object]) {
        self.operators += 1;
    }
}

fn single_page_doc(content: Vec<u8>) -> (Xref, Dict) {
    let mut xref = Xref::new("1.7");
    let mut font = Dict::new();
    font.insert("Type".into(), Object::Name("Font".into()));
    font.insert("Subtype".into(), Object::Name("Type1".into()));
    font.insert("Encoding".into(), Object::Name("WinAnsiEncoding".into()));
    let mut fonts = Dict::new();
    fonts.insert("F1".into(), Object::Dict(font));
    let mut resources = Dict::new();
    resources.insert("Font".into(), Object::Dict(fonts));

    let mut pages = Dict::new();
    pages.insert("Type".into(), Object::Name("Pages".into()));
    pages.insert(
        "Kids".into(),
        Object::Array(vec![Object::Ref(ObjRef::new(2, 0))]),
    );
    xref.insert(1, Object::Dict(pages));

    let mut page = Dict::new();
    page.insert("Type".into(), Object::Name("Page".into()));
    page.insert("Resources".into(), Object::Dict(resources));
    page.insert("Contents".into(), Object::Ref(ObjRef::new(3, 0)));
    xref.insert(2, Object::Dict(page));
    xref.insert(3, Object::Stream(Box::new(Stream::new(Dict::new(), content))));

    let mut root = Dict::new();
    root.insert("Pages".into(), Object::Ref(ObjRef::new(1, 0)));
    (xref, root)
}

fn bench_lexer(c: &mut Criterion) {
    let mut group = c.benchmark_group("content_lexer");
    for (label, data) in [
        ("text_1k", generate_text_ops(1000)),
        ("graphics_1k", generate_graphics_ops(1000)),
    ] {
        group.bench_function(label, |b| {
            b.iter(|| {
                let mut lexer = ContentLexer::new(black_box(&data), &OPERATOR_TABLE);
                let mut count = 0usize;
                while let Ok(Some(token)) = lexer.next_token() {
                    black_box(&token);
                    count += 1;
                }
                count
            })
        });
    }
    group.finish();
}

fn bench_walker(c: &mut Criterion) {
    let mut group = c.benchmark_group("walker");
    let (xref, root) = single_page_doc(generate_text_ops(1000));
    group.bench_function("text_page_1k", |b| {
        b.iter(|| {
            let mut receiver = CountingReceiver { operators: 0 };
            let mut walker = Walker::new(&xref, &mut receiver);
            walker.document(black_box(&root)).unwrap();
            receiver.operators
        })
    });
    group.finish();
}

criterion_group!(benches, bench_lexer, bench_walker);
criterion_main!(benches);
