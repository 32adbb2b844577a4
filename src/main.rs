use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use standard_atmosphere::report_system::table_export::{DEFAULT_END_HEIGHT, DEFAULT_STEP};
use standard_atmosphere::*;

#[derive(Parser)]
#[command(name = "isa")]
#[command(version = "0.1.0")]
#[command(about = "International Standard Atmosphere calculator (0 - 105 km)", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read geometric altitudes from stdin and print the atmosphere at each
    Prompt,

    /// Write a CSV table of the atmosphere from sea level upwards
    Table {
        /// Destination file
        #[arg(short = 'o', long)]
        output: PathBuf,

        /// Last geometric altitude to sample (m)
        #[arg(short = 'e', long, default_value_t = DEFAULT_END_HEIGHT)]
        end: f64,

        /// Distance between samples (m)
        #[arg(short = 's', long, default_value_t = DEFAULT_STEP)]
        step: f64,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Prompt) {
        Commands::Prompt => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            run_prompt(stdin.lock(), &mut stdout)?;
        }
        Commands::Table { output, end, step } => {
            let config = TableConfig::new(end, step)?;
            let rows = export_table(&output, &config)
                .with_context(|| format!("failed to export table to {}", output.display()))?;
            info!("wrote {} rows to {}", rows, output.display());
        }
    }

    Ok(())
}
