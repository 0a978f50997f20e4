//! Codec Tests
//!
//! Tests verify:
//! - Parsing of headers, pairs, comments and blank lines
//! - Tolerance of malformed input
//! - Inline comment policies
//! - Deterministic, idempotent serialization

use inistore::codec::{parse, serialize, Parser};
use inistore::document::Document;
use inistore::InlineComments;

// =============================================================================
// Parser Tests
// =============================================================================

#[test]
fn test_parse_empty_text() {
    let document = parse("");
    assert!(document.is_empty());
}

#[test]
fn test_parse_basic_sections() {
    let text = "[Application]\nName=MyApp\nVersion=1.0\n\n[Database]\nTimeout=30\n";
    let document = parse(text);

    assert_eq!(document.section_labels(), vec!["Application", "Database"]);
    assert_eq!(
        document.section("Application").unwrap().keys(),
        vec!["Name", "Version"]
    );
    assert_eq!(document.get("Application", "Name"), Some("MyApp"));
    assert_eq!(document.get("Database", "Timeout"), Some("30"));
}

#[test]
fn test_parse_crlf_line_endings() {
    let document = parse("[S]\r\nKey=Value\r\nOther=x\r\n");

    assert_eq!(document.get("S", "Key"), Some("Value"));
    assert_eq!(document.get("S", "Other"), Some("x"));
}

#[test]
fn test_parse_skips_whole_line_comments() {
    let text = "# leading comment\n[S]\n   # indented comment\nKey=Value\n#Key2=Hidden\n";
    let document = parse(text);

    assert_eq!(document.section("S").unwrap().keys(), vec!["Key"]);
}

#[test]
fn test_parse_custom_comment_marker() {
    let parser = Parser::new(';', InlineComments::Retain);
    let document = parser.parse("; comment\n[S]\n;Hidden=1\n#Visible=2\n");

    assert_eq!(document.get("S", "Hidden"), None);
    assert_eq!(document.get("S", "#Visible"), Some("2"));
}

#[test]
fn test_parse_splits_on_first_equals_only() {
    let document = parse("[S]\nkey=value=another\n");

    assert_eq!(document.get("S", "key"), Some("value=another"));
}

#[test]
fn test_parse_value_is_verbatim() {
    let document = parse("[S]\n  Key  =  spaced value  \nEmpty=\n");

    assert_eq!(document.get("S", "Key"), Some("  spaced value  "));
    assert_eq!(document.get("S", "Empty"), Some(""));
}

#[test]
fn test_parse_header_label_trimmed() {
    let document = parse("  [  Spaced  ]  \nKey=Value\n");

    assert_eq!(document.section_labels(), vec!["Spaced"]);
}

#[test]
fn test_parse_drops_orphan_keys() {
    let document = parse("Orphan=1\n[S]\nKey=Value\n");

    assert_eq!(document.section_labels(), vec!["S"]);
    assert_eq!(document.entry_count(), 1);
}

#[test]
fn test_parse_ignores_malformed_lines() {
    let document = parse("[S]\njust some words\n=no key\nKey=Value\n[unterminated\n");

    assert_eq!(document.section("S").unwrap().keys(), vec!["Key"]);
}

#[test]
fn test_parse_empty_header_orphans_following_keys() {
    let document = parse("[S]\nA=1\n[]\nB=2\n");

    assert_eq!(document.section_labels(), vec!["S"]);
    assert_eq!(document.get("S", "B"), None);
}

#[test]
fn test_parse_duplicate_key_updates_in_place() {
    let document = parse("[S]\nA=1\nB=2\na=3\n");

    assert_eq!(document.section("S").unwrap().keys(), vec!["A", "B"]);
    assert_eq!(document.get("S", "A"), Some("3"));
}

#[test]
fn test_parse_repeated_section_merges() {
    let document = parse("[Main]\nA=1\n[Other]\nX=x\n[MAIN]\nB=2\n");

    assert_eq!(document.section_labels(), vec!["Main", "Other"]);
    assert_eq!(document.section("main").unwrap().keys(), vec!["A", "B"]);
}

#[test]
fn test_parse_value_with_brackets() {
    let document = parse("[S]\nKey=[Value]\n");

    assert_eq!(document.get("S", "Key"), Some("[Value]"));
    assert_eq!(document.len(), 1);
}

// =============================================================================
// Inline Comment Tests
// =============================================================================

#[test]
fn test_inline_comment_stripped_by_default() {
    let document = parse("[TestSection]\nTestKey=TestValue # This is a comment\n");

    assert_eq!(document.get("TestSection", "TestKey"), Some("TestValue "));
}

#[test]
fn test_inline_comment_retained_when_configured() {
    let parser = Parser::new('#', InlineComments::Retain);
    let document = parser.parse("[TestSection]\nTestKey=TestValue # This is a comment\n");

    assert_eq!(
        document.get("TestSection", "TestKey"),
        Some("TestValue # This is a comment")
    );
}

#[test]
fn test_inline_comment_strip_without_marker() {
    let parser = Parser::new('#', InlineComments::Strip);
    let document = parser.parse("[S]\nKey=Plain\n");

    assert_eq!(document.get("S", "Key"), Some("Plain"));
}

// =============================================================================
// Serializer Tests
// =============================================================================

#[test]
fn test_serialize_empty_document() {
    assert_eq!(serialize(&Document::new()), "");
}

#[test]
fn test_serialize_format() {
    let mut document = Document::new();
    document.set("Application", "Name", "MyApp");
    document.set("Application", "Version", "1.0");
    document.set("Database", "Timeout", "30");

    assert_eq!(
        serialize(&document),
        "[Application]\nName=MyApp\nVersion=1.0\n\n[Database]\nTimeout=30\n"
    );
}

#[test]
fn test_serialize_empty_section() {
    let mut document = Document::new();
    document.set("S", "Key", "Value");
    document.remove("S", "Key");

    assert_eq!(serialize(&document), "[S]\n");
}

#[test]
fn test_serialize_is_idempotent() {
    let mut document = Document::new();
    document.set("A", "Key", "  padded  ");
    document.set("B", "Url", "a=b=c");
    document.set("B", "Empty", "");

    let first = serialize(&document);
    let second = serialize(&document);
    assert_eq!(first, second);

    // Parsing our own output reproduces the same text
    let reparsed = parse(&first);
    assert_eq!(serialize(&reparsed), first);
    assert_eq!(reparsed.get("a", "key"), Some("  padded  "));
}

#[test]
fn test_serialize_normalizes_hand_written_text() {
    let text = "# header comment\n\n[S]\n  Key = value\n\n\n[T]\nX=1";
    let normalized = serialize(&parse(text));

    assert_eq!(normalized, "[S]\nKey= value\n\n[T]\nX=1\n");
    assert_eq!(serialize(&parse(&normalized)), normalized);
}
