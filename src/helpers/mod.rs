use std::io;
use std::path::PathBuf;
use std::process;
use thiserror::Error;

pub const EXIT_FAILURE: i32 = 1;

#[derive(Debug, Error)]
pub enum AgentError {
	#[error("Could not read {} file: {source}", path.display())]
	EnvFileUnreadable {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("Missing {var} in {} file", path.display())]
	MissingCredential {
		var: String,
		path: PathBuf,
	},
	#[error("IO error: {0}")]
	Io(#[from] io::Error),
	#[error("Serde error: {0}")]
	Serde(#[from] serde_json::Error),
}

impl AgentError {
	pub fn exit_code(&self) -> i32 {
		EXIT_FAILURE
	}
}

/// Print the diagnostic for `err` on stderr and terminate the process.
pub fn exit_with(err: &AgentError) -> ! {
	eprintln!("{}", err);
	process::exit(err.exit_code())
}
