use std::fmt;

use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Position inside the decoded text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
	/// Byte offset from the start of the text.
	pub offset: usize,
	/// One-based line number.
	pub line: usize,
	/// One-based column, counted in characters.
	pub column: usize,
}

impl fmt::Display for Mark {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "line {}, column {}", self.line, self.column)
	}
}

/// Errors produced while decoding YAML text.
#[derive(Debug, Error)]
pub enum DecodeError {
	/// Reading the source failed or the source is not UTF-8.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input is outside the supported grammar.
	#[error("syntax error at {mark}: {message}")]
	Syntax {
		/// Where the problem was detected.
		mark: Mark,
		/// Human-readable description.
		message: String,
	},
	/// A mapping or sequence appeared in mapping-key position.
	#[error("unhashable key at {mark}: a {kind} cannot be used as a mapping key")]
	UnhashableKey {
		/// Start of the offending key.
		mark: Mark,
		/// Kind of the composite key (`mapping` or `sequence`).
		kind: &'static str,
	},
	/// Same key appeared twice in one mapping while duplicates are rejected.
	#[error("duplicate mapping key {key:?} at {mark}")]
	DuplicateKey {
		/// Start of the second occurrence.
		mark: Mark,
		/// Repeated key text.
		key: String,
	},
	/// Nesting exceeded the configured depth.
	#[error("nesting depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
}

impl DecodeError {
	/// Stable snake_case label for this error kind.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Io(_) => "io",
			Self::Syntax { .. } => "syntax",
			Self::UnhashableKey { .. } => "unhashable_key",
			Self::DuplicateKey { .. } => "duplicate_key",
			Self::DepthExceeded { .. } => "depth_exceeded",
		}
	}

	/// Source position of the error, when it has one.
	pub fn mark(&self) -> Option<Mark> {
		match self {
			Self::Syntax { mark, .. } | Self::UnhashableKey { mark, .. } | Self::DuplicateKey { mark, .. } => Some(*mark),
			Self::Io(_) | Self::DepthExceeded { .. } => None,
		}
	}
}
