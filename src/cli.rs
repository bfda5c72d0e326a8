use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, PartialEq, Default)]
#[command(name = "greeter")]
#[command(about = "Prints a greeting and a few getting-started hints")]
pub struct CliArgs {
    /// Name to greet (overrides config)
    #[arg(long)]
    pub name: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the effective configuration to the config path and exit
    #[arg(long)]
    pub init_config: bool,
}
