use crate::cmd::print::render_value;
use crate::cmd::util::{DecodeFlags, decode_input, emit_json, value_to_json};
use crate::error::Result;

#[derive(clap::Args)]
pub struct Args {
	/// Input path, or `-` for standard input.
	pub input: String,
	#[arg(long)]
	pub json: bool,
	#[command(flatten)]
	pub flags: DecodeFlags,
}

/// Decode one document and print it as a text tree or JSON.
pub fn run(args: Args) -> Result<()> {
	let Args { input, json, flags } = args;

	let value = decode_input(&input, &flags.options())?;
	log::info!("decoded {input} into a {}", value.kind());

	if json {
		emit_json(&value_to_json(&value))?;
		return Ok(());
	}

	print!("{}", render_value(&value));
	Ok(())
}
