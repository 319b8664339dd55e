//! crmseed - populate a CRM test environment with demonstration data

use clap::Parser;
use log::{LevelFilter, debug};

mod cli;
mod client;
mod config;
mod error;
mod output;
mod seed;

use cli::{Cli, OutputFormat};
use client::CrmClient;
use config::Settings;
use error::Result;
use output::{ConsoleReporter, ProgressReporter, SilentReporter};
use seed::{SeedRunner, SleepPacer};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` applies unless `--debug` is given
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error"));
    if debug {
        builder.filter_module("crmseed", LevelFilter::Debug);
    }
    builder.init();
}

async fn run(cli: Cli) -> Result<()> {
    let settings = Settings::resolve(&cli)?;
    debug!("Resolved settings: {:?}", settings);

    let client = CrmClient::new(&settings.api_base, settings.timeout)?;
    let pacer = SleepPacer::new(settings.delay);
    let reporter: &dyn ProgressReporter = match cli.format {
        OutputFormat::Pretty => &ConsoleReporter,
        OutputFormat::Json => &SilentReporter,
    };

    let report = SeedRunner::new(&client, &pacer, reporter, settings.policy)
        .run()
        .await?;

    if cli.format == OutputFormat::Json {
        println!("{}", output::json::format_json(&report)?);
    }

    Ok(())
}
