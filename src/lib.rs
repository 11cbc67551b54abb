//! This library parses JSON documents that carry `//` line comments and
//! `/* ... */` block comments, as commonly found in hand-maintained
//! configuration files.
//!
//! It consists of
//! - __scanner__: A single-pass, line-oriented state machine that removes
//!   comments and blank lines from the raw text.
//! - __parse__: Thin entry points that run the scanner and hand the result
//!   to [serde_json](https://crates.io/crates/serde_json).
//!
//! ## Getting Started
//! Parse a string into a [`serde_json::Value`]:
//! ```
//! let value = jsonc_lines::parse(r#"{
//!     // how many workers to spawn
//!     "workers": 4
//! }"#, jsonc_lines::ParseOptions::default()).unwrap();
//!
//! assert_eq!(value["workers"], 4);
//! ```
//! Or deserialize into your own type with [`parse_as`], and read directly
//! from disk with [`parse_from_file`] / [`parse_from_file_as`].
//!
//! Files that use `\r\n` line endings must say so:
//! ```
//! use jsonc_lines::{Eol, ParseOptions};
//!
//! let options = ParseOptions { eol: Eol::Crlf };
//! let value = jsonc_lines::parse("{\r\n// note\r\n\"on\": true\r\n}", options).unwrap();
//! assert_eq!(value["on"], true);
//! ```
//!
//! ## Known limitations
//! Comment detection is a line-scoped heuristic, not a JSON lexer:
//! - Comment markers inside quoted string values (`"url": "http://..."`)
//!   are treated as comments and stripped. Documents whose string values
//!   contain `//` or `/*` will be mangled and typically fail to decode.
//! - A block comment that never closes silently swallows the rest of the
//!   input; the error, if any, comes from the JSON decoder afterwards.

#![deny(missing_docs)]

pub mod error;
pub mod scanner;

mod parse;

pub use error::ParseError;
pub use parse::{parse, parse_as, parse_from_file, parse_from_file_as, ParseOptions};
pub use scanner::{strip_comments, Eol};
