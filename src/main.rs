mod cli;
mod error;
mod fmt;
mod models;
mod reconciler;
mod reports;
mod session;
mod settings;
mod suggester;

use clap::{CommandFactory, Parser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use cli::{Cli, Commands};

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter),
        )
        .init();
}

fn main() {
    setup_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Suggest {
            draft,
            predictions,
            select,
            json,
        } => cli::suggest::run(draft, predictions, select, json),
        Commands::Reconcile { file, json } => cli::reconcile::run(&file, json),
        Commands::Request { draft, create } => cli::request::run(draft, create),
        Commands::Dashboard { file } => cli::dashboard::run(&file),
        Commands::Transactions { file } => cli::transactions::run(&file),
        Commands::Init {
            currency,
            recent,
            api_url,
        } => cli::init::run(currency, recent, api_url),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "fintrack", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
