use std::collections::HashMap;
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use serde::Serializer;
use serde_derive::Serialize;
use url::Url;

use crate::envfile::EnvFile;
use crate::helpers::AgentError;

pub const DEFAULT_API_KEY_VAR: &str = "API_KEY";
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";
pub const MODEL_VAR: &str = "MODEL_NAME";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o";

const REDACTED: &str = "********";

/// Named variable lookup. Empty values are treated the same as missing ones
/// by [`Config::resolve`].
pub trait VarSource {
	fn var(&self, key: &str) -> Option<String>;
}

/// The ambient process environment.
pub struct ProcessEnv;

impl VarSource for ProcessEnv {
	fn var(&self, key: &str) -> Option<String> {
		env::var(key).ok()
	}
}

impl VarSource for HashMap<String, String> {
	fn var(&self, key: &str) -> Option<String> {
		self.get(key).cloned()
	}
}

impl VarSource for EnvFile {
	fn var(&self, key: &str) -> Option<String> {
		self.get(key).map(str::to_string)
	}
}

/// Values from the env file take precedence over the fallback source.
pub struct Layered<'a, F: VarSource> {
	pub file: &'a EnvFile,
	pub fallback: F,
}

impl<'a, F: VarSource> VarSource for Layered<'a, F> {
	fn var(&self, key: &str) -> Option<String> {
		self.file.var(key).or_else(|| self.fallback.var(key))
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
	/// Only the credential key is resolved
	Generic,
	/// Credential plus OpenAI-compatible base URL and model name
	#[value(name = "openai")]
	#[serde(rename = "openai")]
	OpenAi,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenAiSettings {
	pub base_url: String,
	pub model: String,
}

#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Config {
	pub env_file: PathBuf,
	pub provider: Provider,
	pub api_key_var: String,
	#[serde(serialize_with = "redact")]
	pub api_key: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub openai: Option<OpenAiSettings>,
}

fn redact<S: Serializer>(_value: &str, serializer: S) -> Result<S::Ok, S::Error> {
	serializer.serialize_str(REDACTED)
}

impl fmt::Debug for Config {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Config")
			.field("env_file", &self.env_file)
			.field("provider", &self.provider)
			.field("api_key_var", &self.api_key_var)
			.field("api_key", &REDACTED)
			.field("openai", &self.openai)
			.finish()
	}
}

fn non_empty(value: Option<String>) -> Option<String> {
	value.filter(|v| !v.is_empty())
}

impl Config {
	/// Read `path` and resolve the configuration with the process environment
	/// as fallback for keys the file does not set.
	pub fn load(path: impl AsRef<Path>, api_key_var: &str, provider: Provider) -> Result<Self, AgentError> {
		let file = EnvFile::load(path)?;
		let source = Layered { file: &file, fallback: ProcessEnv };
		Self::resolve(&source, file.path(), api_key_var, provider)
	}

	pub fn resolve<S: VarSource>(source: &S, env_file: &Path, api_key_var: &str, provider: Provider) -> Result<Self, AgentError> {
		let api_key = non_empty(source.var(api_key_var)).ok_or_else(|| AgentError::MissingCredential {
			var: api_key_var.to_string(),
			path: env_file.to_path_buf(),
		})?;

		let openai = match provider {
			Provider::Generic => None,
			Provider::OpenAi => {
				let base_url = non_empty(source.var(BASE_URL_VAR)).unwrap_or_else(|| {
					log::debug!("{} not set, using {}", BASE_URL_VAR, DEFAULT_BASE_URL);
					DEFAULT_BASE_URL.to_string()
				});
				let model = non_empty(source.var(MODEL_VAR)).unwrap_or_else(|| {
					log::debug!("{} not set, using {}", MODEL_VAR, DEFAULT_MODEL);
					DEFAULT_MODEL.to_string()
				});
				Some(OpenAiSettings { base_url, model })
			},
		};

		Ok(Config {
			env_file: env_file.to_path_buf(),
			provider,
			api_key_var: api_key_var.to_string(),
			api_key,
			openai,
		})
	}

	/// `<base>/chat/completions` for the OpenAI-compatible variant.
	pub fn chat_completions_url(&self) -> Option<Result<Url, url::ParseError>> {
		self.openai.as_ref().map(|settings| {
			let url_base = format!("{}/chat/completions", settings.base_url.trim_end_matches('/'));
			Url::parse(&url_base)
		})
	}
}
