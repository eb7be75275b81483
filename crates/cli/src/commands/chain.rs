//! Chain strip command.

use crate::config::CliConfig;
use crate::render;
use anyhow::Result;
use chainlab_core::{block_label, ChainStrip, MAX_BLOCKS};
use clap::Args;
use colored::Colorize;

#[derive(Args)]
pub struct ChainArgs {
    /// Number of blocks to append
    #[arg(short, long, default_value = "0")]
    add: usize,

    /// Reset to a single block after appending
    #[arg(short, long)]
    reset: bool,
}

pub fn run(args: ChainArgs, config: &CliConfig) -> Result<()> {
    let mut strip = ChainStrip::new();

    let mut added = Vec::new();
    let mut refused = 0;
    for _ in 0..args.add {
        match strip.add_block() {
            Some(n) => added.push(n),
            None => refused += 1,
        }
    }
    if args.reset {
        strip.reset();
    }

    if config.is_json() {
        let blocks: Vec<_> = strip
            .blocks()
            .iter()
            .map(|n| serde_json::json!({ "number": n, "label": block_label(*n) }))
            .collect();
        let json = serde_json::json!({
            "blocks": blocks,
            "added": added,
            "refused": refused,
            "can_grow": strip.can_grow(),
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    println!();
    println!("{}", "Chain:".bold().cyan());
    println!();
    println!("{}", render::chain(&strip));
    if refused > 0 {
        println!(
            "  {} chain holds at most {} blocks, {} not added",
            "·".bright_black(),
            MAX_BLOCKS,
            refused
        );
    }
    println!();

    Ok(())
}
