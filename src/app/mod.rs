use clap::Parser;
use std::path::PathBuf;
use tokio::io::{self, AsyncWriteExt, BufReader};

use crate::config::{self, Config, Provider};
use crate::envfile;
use crate::helpers::AgentError;
use crate::repl;

#[derive(Parser, Debug)]
#[clap(about = "Prompt loop for an LLM agent configured from a .env file")]
pub struct Cli {
	/// File holding KEY=value lines
	#[clap(long, default_value = envfile::DEFAULT_ENV_FILE)]
	pub env_file: PathBuf,
	/// Name of the variable that must hold the API key
	#[clap(long, default_value = config::DEFAULT_API_KEY_VAR)]
	pub api_key_var: String,
	/// Override which variables are resolved (defaults to the binary's variant)
	#[clap(long, value_enum)]
	pub provider: Option<Provider>,
	#[clap(long)]
	/// print the resolved configuration as JSON (API key redacted) and exit
	pub print_config: bool,
}

pub fn init_logging() {
	let env = env_logger::Env::default().default_filter_or("warn");
	let _ = env_logger::Builder::from_env(env).try_init();
}

pub async fn run(args: Cli, default_provider: Provider) -> Result<(), AgentError> {
	let provider = args.provider.unwrap_or(default_provider);
	let config = Config::load(&args.env_file, &args.api_key_var, provider)?;
	log::info!("configuration resolved: {:?}", config);

	if let Some(endpoint) = config.chat_completions_url() {
		match endpoint {
			Ok(url) => log::debug!("chat completions endpoint: {}", url),
			Err(err) => log::debug!("{} does not form a valid URL: {}", config::BASE_URL_VAR, err),
		}
	}

	if args.print_config {
		let serialised = serde_json::to_string_pretty(&config)?;
		let mut stdout = io::stdout();
		stdout.write_all(serialised.as_bytes()).await?;
		stdout.write_all(b"\n").await?;
		stdout.flush().await?;
		return Ok(());
	}

	let mut handler = repl::Placeholder;
	repl::run_loop(BufReader::new(io::stdin()), io::stdout(), &mut handler).await?;
	Ok(())
}
