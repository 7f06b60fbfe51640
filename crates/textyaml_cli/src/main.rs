#![allow(missing_docs)]

use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;

mod cmd;
mod error;

#[derive(Parser)]
#[command(name = "textyaml", about = "Decode YAML documents into text-only trees")]
struct Cli {
	/// Raise log verbosity (`-v` info, `-vv` debug, `-vvv` trace).
	#[arg(short, long, global = true, action = ArgAction::Count)]
	verbose: u8,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Decode one document and print its tree.
	Parse(cmd::parse::Args),
	/// Decode each input and report whether it is valid.
	Check(cmd::check::Args),
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(err) => {
			eprintln!("error: {err}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> error::Result<ExitCode> {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	match cli.command {
		Commands::Parse(args) => cmd::parse::run(args).map(|()| ExitCode::SUCCESS),
		Commands::Check(args) => {
			let failed = cmd::check::run(args)?;
			Ok(if failed == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE })
		}
	}
}

fn init_logging(verbose: u8) {
	let level = match verbose {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Info,
		2 => LevelFilter::Debug,
		_ => LevelFilter::Trace,
	};
	env_logger::builder().filter_level(level).parse_default_env().init();
}
