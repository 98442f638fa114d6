mod commands;
mod prompt;
mod summary;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "edgemap", about = "Sobel edge map extraction tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect edges in an image and save the map as text
    Detect(commands::detect::DetectArgs),
    /// Print or save a default detection config (TOML)
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match &cli.command {
        Commands::Detect(args) => commands::detect::run(args),
        Commands::Config(args) => commands::config::run(args),
    };

    // Failures are reported with a usage reminder; no distinct exit code.
    if let Err(err) = result {
        eprintln!("Error: {err:#}");
        eprintln!("{}", Cli::command().render_usage());
    }
    Ok(())
}
