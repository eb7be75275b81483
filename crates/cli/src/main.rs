//! chainlab CLI entry point.

use clap::Parser;

mod action;
mod commands;
mod config;
mod render;
mod repl;

use crate::config::{CliConfig, OutputFormat};

#[derive(Parser)]
#[command(name = "chainlab")]
#[command(about = "Interactive blockchain lesson widgets in the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<commands::Commands>,
}

fn main() {
    let cli = Cli::parse();

    let config = CliConfig::new(cli.format, cli.no_color, &cli.log_level);
    config.install();

    tracing::debug!(?config, "starting chainlab");

    match cli.command {
        Some(cmd) => {
            if let Err(e) = commands::run(cmd, &config) {
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        }
        None => {
            println!("chainlab - Interactive blockchain lesson widgets");
            println!("Run 'chainlab --help' for usage information.");
        }
    }
}
