//! Merkle builder command.

use crate::action::collect_actions;
use crate::config::CliConfig;
use crate::render;
use anyhow::Result;
use chainlab_core::{MerkleBuilder, Outcome};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Args)]
pub struct MerkleArgs {
    /// Actions in order: a letter places it, `-N` or `rmN` clears slot N, `reset` starts over
    #[arg(allow_negative_numbers = true)]
    actions: Vec<String>,

    /// Read further actions from a script file
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Print only the final state, not each outcome
    #[arg(short, long)]
    pub(super) quiet: bool,
}

/// Parse every action up front, then apply them to a fresh builder.
pub(super) fn apply_all(args: &MerkleArgs) -> Result<(MerkleBuilder, Vec<Outcome>)> {
    let actions = collect_actions(&args.actions, args.script.as_deref())?;
    tracing::info!(count = actions.len(), "applying actions");

    let mut builder = MerkleBuilder::new();
    let outcomes = actions
        .into_iter()
        .map(|action| action.apply(&mut builder))
        .collect();

    Ok((builder, outcomes))
}

pub(super) fn print_outcomes(outcomes: &[Outcome], quiet: bool) {
    if quiet {
        return;
    }
    for outcome in outcomes {
        println!("{}", render::outcome(outcome));
    }
    if !outcomes.is_empty() {
        println!();
    }
}

pub fn run(args: MerkleArgs, config: &CliConfig) -> Result<()> {
    let (builder, outcomes) = apply_all(&args)?;

    if config.is_json() {
        let json = serde_json::json!({
            "outcomes": outcomes,
            "state": builder.snapshot(),
            "complete": builder.is_complete(),
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    print_outcomes(&outcomes, args.quiet);
    println!("{}", "Merkle Tree:".bold().cyan());
    println!();
    println!("{}", render::tree(&builder.snapshot()));
    println!();

    Ok(())
}
