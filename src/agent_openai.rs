use clap::Parser;

mod app;
mod config;
mod envfile;
mod helpers;
mod repl;

// Same agent, resolving OPENAI_BASE_URL and MODEL_NAME as well.
#[tokio::main(flavor = "current_thread")]
async fn main() {
	app::init_logging();
	let args = app::Cli::parse();

	if let Err(e) = app::run(args, config::Provider::OpenAi).await {
		helpers::exit_with(&e);
	}
}
