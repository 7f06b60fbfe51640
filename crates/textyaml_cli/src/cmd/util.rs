use std::fs::File;
use std::io;

use serde::Serialize;
use textyaml::yaml::{DecodeOptions, Result, Value, decode_reader};

/// Decoder flags shared by every subcommand.
#[derive(clap::Args, Debug, Clone, Copy)]
pub struct DecodeFlags {
	/// Maximum collection nesting depth.
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
	/// Fail on a key that repeats within one mapping.
	#[arg(long = "reject-duplicate-keys")]
	pub reject_duplicate_keys: bool,
}

impl DecodeFlags {
	/// Build decoder options, keeping library defaults for unset flags.
	pub(crate) fn options(self) -> DecodeOptions {
		let mut opt = DecodeOptions::default();
		if let Some(max_depth) = self.max_depth {
			opt.max_depth = max_depth;
		}
		opt.reject_duplicate_keys = self.reject_duplicate_keys;
		opt
	}
}

/// Decode one input; `-` reads standard input.
pub(crate) fn decode_input(input: &str, opt: &DecodeOptions) -> Result<Value> {
	if input == "-" {
		return decode_reader(io::stdin().lock(), opt);
	}
	decode_reader(File::open(input)?, opt)
}

/// Convert a decoded tree into JSON, keeping mapping order.
pub(crate) fn value_to_json(value: &Value) -> serde_json::Value {
	match value {
		Value::Scalar(text) => serde_json::Value::String(text.clone()),
		Value::Sequence(items) => serde_json::Value::Array(items.iter().map(value_to_json).collect()),
		Value::Mapping(map) => serde_json::Value::Object(map.iter().map(|(key, item)| (key.to_owned(), value_to_json(item))).collect()),
	}
}

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: Serialize>(payload: &T) -> serde_json::Result<()> {
	let text = serde_json::to_string_pretty(payload)?;
	println!("{text}");
	Ok(())
}
