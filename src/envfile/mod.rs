use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::helpers::AgentError;

pub const DEFAULT_ENV_FILE: &str = ".env";

/// Key/value pairs read from a `.env` style file.
///
/// Each line is split on its first `=`. Both halves are trimmed and the pair
/// is kept only when the value is non-empty and does not start with `#`.
/// Lines without a separator are skipped. Note that the comment marker is
/// only honoured on the value side: `# FOO=bar` is stored under the key
/// `# FOO`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvFile {
	path: PathBuf,
	vars: HashMap<String, String>,
}

impl EnvFile {
	pub fn load(path: impl AsRef<Path>) -> Result<Self, AgentError> {
		let path = path.as_ref();
		let bytes = fs::read(path).map_err(|source| AgentError::EnvFileUnreadable {
			path: path.to_path_buf(),
			source,
		})?;
		// stray non-UTF-8 bytes are replaced, never fatal
		let contents = String::from_utf8_lossy(&bytes);
		let env_file = Self::parse(path, &contents);
		log::debug!("loaded {} variable(s) from {}", env_file.len(), path.display());
		Ok(env_file)
	}

	pub fn parse(path: impl Into<PathBuf>, contents: &str) -> Self {
		let mut vars = HashMap::new();
		for (lineno, line) in contents.split('\n').enumerate() {
			let Some((key, value)) = line.split_once('=') else {
				continue;
			};
			let key = key.trim();
			let value = value.trim();
			if value.is_empty() || value.starts_with('#') {
				log::trace!("line {}: no usable value for {:?}", lineno + 1, key);
				continue;
			}
			if key.is_empty() {
				log::trace!("line {}: empty key", lineno + 1);
				continue;
			}
			// last occurrence wins
			vars.insert(key.to_string(), value.to_string());
		}
		EnvFile { path: path.into(), vars }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.vars.get(key).map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.vars.len()
	}
}
