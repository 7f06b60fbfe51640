//! YAML subset decoder that keeps every scalar as text.
//!
//! ```
//! use textyaml::yaml::{Mapping, Value, parse};
//!
//! let value = parse("foo: 1\nbar: [a, b]").unwrap();
//! let expected = Mapping::from_iter([
//! 	("foo", Value::from("1")),
//! 	("bar", Value::Sequence(vec!["a".into(), "b".into()])),
//! ]);
//! assert_eq!(value, Value::Mapping(expected));
//! ```

/// Text-only decoder over the yaml-rust2 event stream, value tree, and errors.
pub mod yaml;

/// Binding-level entry point, same as [`yaml::parse`].
pub use yaml::parse;
