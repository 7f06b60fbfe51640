use textyaml::yaml::DecodeOptions;

use crate::cmd::util::{DecodeFlags, decode_input, emit_json};
use crate::error::Result;

#[derive(clap::Args)]
pub struct Args {
	/// Input paths, `-` for standard input.
	#[arg(required = true)]
	pub inputs: Vec<String>,
	#[arg(long)]
	pub json: bool,
	#[command(flatten)]
	pub flags: DecodeFlags,
}

/// Decode every input and report per-input status, returning the failure count.
pub fn run(args: Args) -> Result<usize> {
	let Args { inputs, json, flags } = args;
	let opt = flags.options();

	let rows: Vec<CheckRow> = inputs.into_iter().map(|input| check_one(input, &opt)).collect();
	let failed = rows.iter().filter(|row| !row.ok).count();

	if json {
		emit_json(&rows)?;
	} else {
		for row in &rows {
			match &row.error {
				None => println!("ok {}", row.path),
				Some(message) => println!("error {}: {message}", row.path),
			}
		}
	}

	if failed > 0 {
		log::warn!("{failed} of {} inputs failed to decode", rows.len());
	}
	Ok(failed)
}

fn check_one(path: String, opt: &DecodeOptions) -> CheckRow {
	match decode_input(&path, opt) {
		Ok(_) => CheckRow {
			path,
			ok: true,
			kind: None,
			error: None,
		},
		Err(err) => CheckRow {
			path,
			ok: false,
			kind: Some(err.kind()),
			error: Some(err.to_string()),
		},
	}
}

#[derive(serde::Serialize)]
struct CheckRow {
	path: String,
	ok: bool,
	kind: Option<&'static str>,
	error: Option<String>,
}
