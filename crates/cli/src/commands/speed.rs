//! Throughput comparison command.

use crate::config::CliConfig;
use crate::render;
use anyhow::Result;
use chainlab_core::PLATFORMS;
use colored::Colorize;

pub fn run(config: &CliConfig) -> Result<()> {
    if config.is_json() {
        println!("{}", serde_json::to_string_pretty(&PLATFORMS)?);
        return Ok(());
    }

    println!();
    println!("{}", "Throughput:".bold().cyan());
    println!();
    println!("{}", render::speed(&PLATFORMS));
    println!();

    Ok(())
}
