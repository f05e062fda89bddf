//! Escaping for embedding text in single-quoted string literals.
//!
//! Both substitutions target a single ASCII byte, so they can be located with
//! `memchr` directly on the UTF-8 bytes of the input. A byte match is always a
//! character boundary. When nothing needs escaping the input is returned
//! borrowed.

use std::borrow::Cow;

use bstr::ByteSlice;

const NEWLINE_ESCAPE: &str = "\\n";
const QUOTE_ESCAPE: &str = "\\'";

/// Escape every newline as the two-character literal `\n`.
///
/// Carriage returns and existing backslashes are left alone.
///
/// # Examples
///
/// ```
/// use strhelp::escape_break_line;
///
/// assert_eq!(escape_break_line("a\nb"), "a\\nb");
/// assert_eq!(escape_break_line("no breaks"), "no breaks");
/// ```
pub fn escape_break_line(input: &str) -> Cow<'_, str> {
    escape_ascii(input, b'\n', NEWLINE_ESCAPE)
}

/// Escape every single quote as `\'`.
///
/// Existing backslashes are not doubled, so an already escaped `\'` becomes
/// `\\'`.
///
/// # Examples
///
/// ```
/// use strhelp::escape_special_character;
///
/// assert_eq!(escape_special_character("it's"), "it\\'s");
/// ```
pub fn escape_special_character(input: &str) -> Cow<'_, str> {
    escape_ascii(input, b'\'', QUOTE_ESCAPE)
}

/// Byte form of [`escape_break_line`] for input that may not be UTF-8.
pub fn escape_break_line_bytes(input: &[u8]) -> Cow<'_, [u8]> {
    escape_ascii_bytes(input, b'\n', NEWLINE_ESCAPE)
}

/// Byte form of [`escape_special_character`] for input that may not be UTF-8.
pub fn escape_special_character_bytes(input: &[u8]) -> Cow<'_, [u8]> {
    escape_ascii_bytes(input, b'\'', QUOTE_ESCAPE)
}

/// Replace every occurrence of the ASCII byte `needle` with `replacement`.
fn escape_ascii<'a>(input: &'a str, needle: u8, replacement: &str) -> Cow<'a, str> {
    debug_assert!(needle.is_ascii());

    let bytes = input.as_bytes();
    let mut hits = memchr::memchr_iter(needle, bytes).peekable();
    if hits.peek().is_none() {
        return Cow::Borrowed(input);
    }

    // Each hit grows the output by replacement.len() - 1; reserve for a few.
    let mut result = String::with_capacity(input.len() + input.len() / 16 + replacement.len());
    let mut last = 0;
    for pos in hits {
        result.push_str(&input[last..pos]);
        result.push_str(replacement);
        last = pos + 1;
    }
    result.push_str(&input[last..]);

    Cow::Owned(result)
}

fn escape_ascii_bytes<'a>(input: &'a [u8], needle: u8, replacement: &str) -> Cow<'a, [u8]> {
    if memchr::memchr(needle, input).is_none() {
        return Cow::Borrowed(input);
    }
    Cow::Owned(input.replace([needle], replacement))
}
