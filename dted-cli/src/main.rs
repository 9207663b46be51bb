use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

/// DTED elevation file inspector
#[derive(Parser)]
#[command(name = "dted")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory containing DTED cells
    #[arg(short, long, env = "DTED_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display header metadata and elevation statistics of a DTED cell
    Info {
        /// Path to a .dt0/.dt1/.dt2 file, or cell name (e.g., N59)
        cell: String,

        /// DTED level used to resolve a bare cell name
        #[arg(short, long, default_value = "2", value_parser = clap::value_parser!(u8).range(0..=2))]
        level: u8,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dted=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Info { cell, level, json } => commands::info::run(cli.data_dir, cell, level, json),
    }
}
