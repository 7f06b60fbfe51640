use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

use textyaml_testkit::target_dir;

static TEXTYAML_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn fixture_path(name: &str) -> PathBuf {
	textyaml_testkit::fixture_path(name)
}

pub(crate) fn run_textyaml(args: &[&str]) -> Output {
	Command::new(textyaml_bin()).args(args).output().expect("textyaml command executes")
}

fn textyaml_bin() -> &'static PathBuf {
	TEXTYAML_BIN.get_or_init(resolve_textyaml_bin)
}

fn resolve_textyaml_bin() -> PathBuf {
	if let Ok(path) = std::env::var("CARGO_BIN_EXE_textyaml") {
		return PathBuf::from(path);
	}

	let mut bin = target_dir().join("debug");
	bin.push(if cfg!(windows) { "textyaml.exe" } else { "textyaml" });

	let status = Command::new("cargo")
		.current_dir(env!("CARGO_MANIFEST_DIR"))
		.args(["build", "--quiet", "--bin", "textyaml"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build textyaml binary at {}", bin.display());

	bin
}
