//! Ledger ring command.

use crate::config::CliConfig;
use crate::render;
use anyhow::{bail, Result};
use chainlab_core::{LedgerRing, NODE_COUNT};
use clap::Args;
use colored::Colorize;

#[derive(Args)]
pub struct LedgerArgs {
    /// Pulse every node
    #[arg(short, long)]
    sync: bool,

    /// Highlight one node
    #[arg(long)]
    hover: Option<usize>,
}

pub fn run(args: LedgerArgs, config: &CliConfig) -> Result<()> {
    let mut ring = LedgerRing::new();

    if let Some(i) = args.hover {
        if !ring.hover(i) {
            bail!("No node {} (ring has {} nodes)", i, NODE_COUNT);
        }
    }
    if args.sync {
        ring.sync();
    }

    if config.is_json() {
        let json = serde_json::json!({
            "positions": ring.positions(),
            "hovered": ring.hovered(),
            "pulses": ring.pulses(),
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    println!();
    println!("{}", "Distributed Ledger:".bold().cyan());
    println!();
    println!("{}", render::ledger(&ring));
    println!();

    Ok(())
}
