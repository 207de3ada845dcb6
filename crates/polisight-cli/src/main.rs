//! Polisight CLI - Command-line interface for the insurance extraction pipeline.

use clap::Parser;
use polisight_cli::{commands, Cli, Command, Config};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> polisight_cli::Result<()> {
    let cli = Cli::parse();

    // Load or create config
    let mut config = Config::load().unwrap_or_else(|_| {
        let cfg = Config::default();
        cfg.save().ok();
        cfg
    });

    // Apply command-line overrides
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(model) = cli.model {
        config.model = model;
    }
    if let Some(api_key) = cli.api_key {
        config.azure.api_key = api_key;
    }

    match cli.command {
        Command::Extract(args) => commands::execute_extract(args, &config),
        Command::Review(args) => commands::execute_review(args, &config),
        Command::Status(args) => commands::execute_status(args, &config),
        Command::Suggest(args) => commands::execute_suggest(args, &config),
        Command::List => commands::execute_list(&config),
        Command::Export(args) => commands::execute_export(args, &config),
    }
}
