use thiserror::Error;

/// Failures surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Reading or decoding an input failed.
	#[error(transparent)]
	Decode(#[from] textyaml::yaml::DecodeError),
	/// Rendering JSON output failed.
	#[error("json output: {0}")]
	Json(#[from] serde_json::Error),
}

/// CLI-local result type.
pub type Result<T> = std::result::Result<T, CliError>;
