//! jsdoc - JSDoc-style docstring parser
//!
//! Splits documentation comment text into a description and a list of
//! `@tag` entries, and interprets the `{type}` and `[name=default]`
//! micro-syntax of param, return, throws and deprecated tags.
//!
//! # Examples
//!
//! ```
//! let doc = jsdoc::parse("Greets.\n@param {string} [who=world] name to greet").unwrap();
//! let param = doc.params()[0];
//! assert_eq!(param.arg_name.as_deref(), Some("who"));
//! assert_eq!(param.default.as_deref(), Some("world"));
//! assert!(param.is_optional);
//! ```

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::{parse, Docstring, DocstringMeta};
pub use error::{JsdocError, ParseError};
