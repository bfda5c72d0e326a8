use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tracing::{debug, info};

use greeter::{app, cli::CliArgs, config::Config};

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the status lines
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = CliArgs::parse();

    if args.init_config {
        // Regenerate from defaults so a broken file can be replaced
        let path = Config::path_for(&args)?;
        Config::from_cli(&args).save(&path)?;
        debug!("Wrote config to {}", path.display());
        println!("Wrote config to {}", path.display());
        return Ok(());
    }

    let config = Config::from_cli_and_file(&args).context("Failed to load configuration")?;

    info!("Starting greeter");

    let stdout = io::stdout();
    app::run(&mut stdout.lock(), &config).context("Failed to write to stdout")?;

    info!("greeter finished");
    Ok(())
}
