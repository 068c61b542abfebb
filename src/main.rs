use clap::Parser;

mod app;
mod config;
mod envfile;
mod helpers;
mod repl;


#[tokio::main(flavor = "current_thread")]
async fn main() {
	app::init_logging();
	let args = app::Cli::parse();

	if let Err(e) = app::run(args, config::Provider::Generic).await {
		helpers::exit_with(&e);
	}
}
