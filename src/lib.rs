#![forbid(unsafe_code)]
#![warn(clippy::all)]
//! This crate is a small JSON codec: it decodes JSON text into a [`value::Value`] tree and encodes such a tree back into text. Every parse error tells you exactly where it happened, as a character offset plus line and column number, and what went wrong, as one of a closed set of [`error::Kind`]s.
//!
//! ## Why use it ?
//!
//! Most of the time you want [serde](https://serde.rs/) to map JSON straight into your own types. This crate is for the times you don't: inspecting documents of unknown shape, re-emitting them with member order intact, or reporting syntax errors to users with a precise position instead of a guess.
//!
//! ## How to use it ?
//!
//! ### Parsing
//!
//! ```rust
//! use json_codec::parse;
//!
//! let parsed = parse(r#"{"hello": "world", "count": 2}"#).unwrap();
//!
//! assert_eq!(parsed.as_object().unwrap()["hello"].as_str(), Some("world"));
//! ```
//!
//! Errors carry the exact failure position:
//!
//! ```rust
//! use json_codec::{error::Kind, parse};
//!
//! let err = parse(r#"{"a" 1}"#).unwrap_err();
//!
//! assert_eq!(err.kind, Kind::ExpectedColon);
//! assert_eq!(err.offset, 5);
//! assert_eq!((err.line, err.col), (1, 6));
//! ```
//!
//! ### Serializing
//!
//! Object members keep their insertion order, so a decode/encode round trip
//! leaves a document's member order untouched:
//!
//! ```rust
//! use json_codec::{parse, stringify};
//!
//! let text = r#"{"b":2,"a":[1,true,null]}"#;
//!
//! assert_eq!(stringify(&parse(text).unwrap()), text);
//! ```
//!
//! ### Serializing in a struct
//!
//! [`value::Value`] implements [Serialize](https://docs.rs/serde/latest/serde/trait.Serialize.html), so a parsed document can be handed to any serde consumer:
//!
//! ```rust
//! use serde::Deserialize;
//! use json_codec::parse;
//!
//! #[derive(Deserialize)]
//! struct Test {
//!     pub hello: String,
//! }
//!
//! let json = r#"{"hello": "world"}"#;
//!
//! let parsed = parse(json).unwrap();
//!
//! let test: Test = serde_json::from_value(serde_json::to_value(parsed).unwrap()).unwrap();
//!
//! assert_eq!(test.hello, "world");
//! ```

extern crate bytecount;
extern crate indexmap;
extern crate memchr;
extern crate nom;
extern crate serde;
extern crate thiserror;

mod input;
mod parser;
mod ser;

pub mod error;
pub mod value;

pub use parser::parse;
pub use ser::stringify;
