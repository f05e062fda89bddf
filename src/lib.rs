//! # strhelp
//!
//! Small, allocation-aware helpers for preparing text to be embedded in
//! single-quoted string literals, plus safe access to the head of a sequence.
//!
//! ## Quick Start
//!
//! ```
//! use strhelp::{escape_break_line, escape_special_character, first_element};
//!
//! let line = escape_break_line("first\nsecond");
//! assert_eq!(line, "first\\nsecond");
//!
//! let quoted = format!("'{}'", escape_special_character("it's"));
//! assert_eq!(quoted, "'it\\'s'");
//!
//! assert_eq!(first_element(&[10, 20]), Some(&10));
//! ```
//!
//! The escaping functions return [`Cow<str>`](std::borrow::Cow): input with
//! nothing to escape comes back borrowed, without allocating.

pub mod error;
pub mod escape;
pub mod seq;

pub use error::{Error, Result};
pub use escape::{
    escape_break_line, escape_break_line_bytes, escape_special_character,
    escape_special_character_bytes,
};
pub use seq::{first_element, try_first_element};
