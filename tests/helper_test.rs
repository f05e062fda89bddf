//! Public API tests.
//!
//! Exercises the helpers the way a caller building single-quoted literals
//! would, through the crate-root re-exports.

use strhelp::{
    Error, escape_break_line, escape_special_character, first_element, try_first_element,
};

/// Wrap text in a single-quoted literal, escaping as a code generator would.
fn quote_literal(text: &str) -> String {
    let lines = escape_break_line(text);
    format!("'{}'", escape_special_character(&lines))
}

// ============================================================================
// Escaping Tests
// ============================================================================

#[test]
fn test_documented_cases() {
    assert_eq!(escape_break_line("a\nb"), "a\\nb");
    assert_eq!(escape_special_character("it's"), "it\\'s");
    assert_eq!(escape_break_line(""), "");
}

#[test]
fn test_quote_literal_single_line() {
    assert_eq!(quote_literal("don't"), "'don\\'t'");
}

#[test]
fn test_quote_literal_multi_line() {
    let text = "line one\nit's line two\n";
    let literal = quote_literal(text);

    assert_eq!(literal, "'line one\\nit\\'s line two\\n'");
    assert!(!literal.contains('\n'));
}

#[test]
fn test_escapes_compose_in_either_order() {
    let text = "a'b\nc'";
    let lines_first = escape_special_character(&escape_break_line(text)).into_owned();
    let quotes_first = escape_break_line(&escape_special_character(text)).into_owned();
    assert_eq!(lines_first, quotes_first);
}

#[test]
fn test_escaped_output_usable_as_owned_string() {
    let owned: String = escape_break_line("x\ny").into_owned();
    assert_eq!(owned, "x\\ny");
}

// ============================================================================
// Sequence Tests
// ============================================================================

#[test]
fn test_first_element_documented_cases() {
    assert_eq!(first_element(&[1, 2, 3]), Some(&1));
    assert_eq!(first_element(Vec::<i32>::new()), None);
}

#[test]
fn test_first_element_of_escaped_lines() {
    let lines: Vec<String> = "one's\ntwo"
        .lines()
        .map(|line| escape_special_character(line).into_owned())
        .collect();

    assert_eq!(first_element(&lines).map(String::as_str), Some("one\\'s"));
}

#[test]
fn test_try_first_element_error() {
    let err = try_first_element(Vec::<u8>::new()).unwrap_err();
    assert_eq!(err, Error::EmptySequence);
    assert_eq!(err.to_string(), "sequence is empty");
}
