//! Tests for the content-stream tokenizer.

use sucre::parser::lexer::{ContentLexer, Token};
use sucre::{Callback, OPERATOR_TABLE, Object, PdfError};

fn tokens(data: &[u8]) -> Vec<Token> {
    let mut lexer = ContentLexer::new(data, &OPERATOR_TABLE);
    let mut out = Vec::new();
    while let Some(token) = lexer.next_token().expect("lex error") {
        out.push(token);
    }
    out
}

#[test]
fn test_simple_text_stream() {
    let tokens = tokens(b"BT /F1 12 Tf 100 700 Td (Hello) Tj ET");
    assert_eq!(
        tokens,
        vec![
            Token::Operator(Callback::BeginTextObject),
            Token::Object(Object::Name("F1".into())),
            Token::Object(Object::Int(12)),
            Token::Operator(Callback::SetTextFontAndSize),
            Token::Object(Object::Int(100)),
            Token::Object(Object::Int(700)),
            Token::Operator(Callback::MoveTextPosition),
            Token::Object(Object::String(b"Hello".to_vec())),
            Token::Operator(Callback::ShowText),
            Token::Operator(Callback::EndTextObject),
        ]
    );
}

#[test]
fn test_number_forms() {
    let tokens = tokens(b"+17 -98 0.5 -.002 34.5 4.");
    assert_eq!(
        tokens,
        vec![
            Token::Object(Object::Int(17)),
            Token::Object(Object::Int(-98)),
            Token::Object(Object::Real(0.5)),
            Token::Object(Object::Real(-0.002)),
            Token::Object(Object::Real(34.5)),
            Token::Object(Object::Real(4.0)),
        ]
    );
}

#[test]
fn test_string_escapes() {
    let tokens = tokens(b"(a\\(b\\)c) (nest(ed)) (oct\\101l) (line\\\ncont)");
    assert_eq!(
        tokens,
        vec![
            Token::Object(Object::String(b"a(b)c".to_vec())),
            Token::Object(Object::String(b"nest(ed)".to_vec())),
            Token::Object(Object::String(b"octAl".to_vec())),
            Token::Object(Object::String(b"linecont".to_vec())),
        ]
    );
}

#[test]
fn test_hex_strings() {
    let tokens = tokens(b"<48656C6C6F> <90 1F a>");
    assert_eq!(
        tokens,
        vec![
            Token::Object(Object::String(b"Hello".to_vec())),
            Token::Object(Object::String(vec![0x90, 0x1F, 0xA0])),
        ]
    );
}

#[test]
fn test_names_with_hex_escapes() {
    let tokens = tokens(b"/Name1 /A#20B /Fo#6Et");
    assert_eq!(
        tokens,
        vec![
            Token::Object(Object::Name("Name1".into())),
            Token::Object(Object::Name("A B".into())),
            Token::Object(Object::Name("Font".into())),
        ]
    );
}

#[test]
fn test_positioning_array_is_one_operand() {
    let tokens = tokens(b"[(H) 50 (ello)] TJ");
    assert_eq!(
        tokens,
        vec![
            Token::Object(Object::Array(vec![
                Object::String(b"H".to_vec()),
                Object::Int(50),
                Object::String(b"ello".to_vec()),
            ])),
            Token::Operator(Callback::ShowTextWithPositioning),
        ]
    );
}

#[test]
fn test_dictionary_operand() {
    let tokens = tokens(b"/OC << /Type /OCG /Nested << /A 1 >> >> BDC");
    assert_eq!(tokens.len(), 3);
    match &tokens[1] {
        Token::Object(Object::Dict(dict)) => {
            assert_eq!(dict.get("Type"), Some(&Object::Name("OCG".into())));
            match dict.get("Nested") {
                Some(Object::Dict(nested)) => {
                    assert_eq!(nested.get("A"), Some(&Object::Int(1)));
                }
                other => panic!("expected nested dict, got {other:?}"),
            }
        }
        other => panic!("expected dict operand, got {other:?}"),
    }
    assert_eq!(tokens[2], Token::Operator(Callback::BeginMarkedContentWithPl));
}

#[test]
fn test_comments_and_booleans() {
    let tokens = tokens(b"q % save state\ntrue false null Q");
    assert_eq!(
        tokens,
        vec![
            Token::Operator(Callback::SaveGraphicsState),
            Token::Object(Object::Bool(true)),
            Token::Object(Object::Bool(false)),
            Token::Object(Object::Null),
            Token::Operator(Callback::RestoreGraphicsState),
        ]
    );
}

#[test]
fn test_unknown_keyword_is_not_an_operator() {
    let tokens = tokens(b"1 2 frobnicate 3 Td");
    assert_eq!(
        tokens,
        vec![
            Token::Object(Object::Int(1)),
            Token::Object(Object::Int(2)),
            Token::Other(b"frobnicate".to_vec()),
            Token::Object(Object::Int(3)),
            Token::Operator(Callback::MoveTextPosition),
        ]
    );
}

#[test]
fn test_quote_operators() {
    let tokens = tokens(b"(x) ' 1 2 (y) \"");
    assert_eq!(tokens[1], Token::Operator(Callback::MoveToNextLineAndShowText));
    assert_eq!(
        tokens.last(),
        Some(&Token::Operator(Callback::SetSpacingNextLineShowText))
    );
}

#[test]
fn test_unterminated_string_is_premature_eof() {
    let mut lexer = ContentLexer::new(b"BT (oh no", &OPERATOR_TABLE);
    assert!(matches!(
        lexer.next_token(),
        Ok(Some(Token::Operator(Callback::BeginTextObject)))
    ));
    assert!(matches!(lexer.next_token(), Err(PdfError::UnexpectedEof)));
}

#[test]
fn test_read_inline_data_stops_at_sentinel() {
    let mut lexer = ContentLexer::new(b" \x00\x01\x02\x03 EI Q", &OPERATOR_TABLE);
    let data = lexer.read_inline_data(b"EI").unwrap();
    assert_eq!(data, vec![0x00, 0x01, 0x02, 0x03]);
    // The sentinel itself is still tokenized.
    assert!(matches!(
        lexer.next_token(),
        Ok(Some(Token::Operator(Callback::EndInlineImage)))
    ));
    assert!(matches!(
        lexer.next_token(),
        Ok(Some(Token::Operator(Callback::RestoreGraphicsState)))
    ));
}

#[test]
fn test_read_inline_data_skips_ei_inside_binary_run() {
    // "EI" not followed by whitespace is part of the data.
    let mut lexer = ContentLexer::new(b" AEIOU EI", &OPERATOR_TABLE);
    let data = lexer.read_inline_data(b"EI").unwrap();
    assert_eq!(data, b"AEIOU");
}

#[test]
fn test_read_inline_data_missing_sentinel() {
    let mut lexer = ContentLexer::new(b" \x00\x01\x02", &OPERATOR_TABLE);
    assert!(matches!(
        lexer.read_inline_data(b"EI"),
        Err(PdfError::UnexpectedEof)
    ));
}
