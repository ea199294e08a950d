use clap::Parser;
use homework_watch::cli::{self, CheckCommand, Cli, Commands};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let parsed = Cli::parse();

    let result = match parsed.command {
        Commands::Run(args) => cli::run::execute(&args).await,
        Commands::Check(CheckCommand::Config(args)) => cli::check::execute_config(&args.config),
        Commands::Check(CheckCommand::Telegram(args)) => check_telegram(&args.config).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(feature = "telegram")]
async fn check_telegram(path: &std::path::Path) -> homework_watch::error::Result<()> {
    cli::check::execute_telegram(path).await
}

#[cfg(not(feature = "telegram"))]
async fn check_telegram(_path: &std::path::Path) -> homework_watch::error::Result<()> {
    eprintln!("Built without the telegram feature");
    std::process::exit(1);
}
