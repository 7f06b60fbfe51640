use std::borrow::Cow;
use std::io::Read;

use log::debug;
use yaml_rust2::parser::Parser;

use crate::yaml::loader::Loader;
use crate::yaml::source::Source;
use crate::yaml::{Result, Value};

/// Limits and policy switches for decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum nesting of collections.
	pub max_depth: u32,
	/// Fail with [`DecodeError::DuplicateKey`](crate::yaml::DecodeError::DuplicateKey)
	/// instead of keeping the last value for a repeated key.
	pub reject_duplicate_keys: bool,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: 128,
			reject_duplicate_keys: false,
		}
	}
}

impl DecodeOptions {
	/// Preset that rejects duplicate keys.
	pub fn strict() -> Self {
		Self {
			reject_duplicate_keys: true,
			..Self::default()
		}
	}
}

/// Decode YAML text into a value tree. Every scalar stays text.
pub fn parse(text: &str) -> Result<Value> {
	decode(text)
}

/// Decode with default options.
pub fn decode(text: &str) -> Result<Value> {
	decode_with(text, &DecodeOptions::default())
}

/// Decode with explicit options.
///
/// A leading byte-order mark is ignored and `\r\n`/`\r` breaks are read as
/// `\n`; error positions refer to the text after that normalization.
pub fn decode_with(text: &str, opt: &DecodeOptions) -> Result<Value> {
	debug!(
		"decoding {} bytes (max_depth={}, reject_duplicate_keys={})",
		text.len(),
		opt.max_depth,
		opt.reject_duplicate_keys
	);

	let text = text.strip_prefix('\u{feff}').unwrap_or(text);
	let text = normalize_breaks(text);
	let source = Source::new(&text);
	let mut loader = Loader::new(&source, opt);
	let scanned = Parser::new_from_str(&text).load(&mut loader, true);
	// Receiver errors come from earlier events than any later scan failure.
	let value = loader.finish()?;
	scanned.map_err(|err| source.scan_error(&err))?;

	debug!("decoded {} root", value.kind());
	Ok(value)
}

/// Read all of `reader` as UTF-8 and decode it.
pub fn decode_reader<R: Read>(mut reader: R, opt: &DecodeOptions) -> Result<Value> {
	let mut text = String::new();
	reader.read_to_string(&mut text)?;
	decode_with(&text, opt)
}

fn normalize_breaks(text: &str) -> Cow<'_, str> {
	if text.contains('\r') {
		Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
	} else {
		Cow::Borrowed(text)
	}
}
