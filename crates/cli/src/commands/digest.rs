//! Toy labels next to real Blake3 digests.

use super::merkle::{apply_all, print_outcomes, MerkleArgs};
use crate::config::CliConfig;
use crate::render;
use anyhow::Result;
use chainlab_core::{tree_digest, SLOT_COUNT};
use colored::Colorize;

pub fn run(args: MerkleArgs, config: &CliConfig) -> Result<()> {
    let (builder, outcomes) = apply_all(&args)?;
    let tree = tree_digest(builder.slots());

    let proofs_valid = tree.as_ref().map(|t| {
        (0..SLOT_COUNT)
            .filter_map(|i| t.proof(i))
            .all(|p| t.verify_proof(&p))
    });

    if config.is_json() {
        let json = serde_json::json!({
            "outcomes": outcomes,
            "labels": builder.labels(),
            "digest": tree,
            "proofs_valid": proofs_valid,
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    print_outcomes(&outcomes, args.quiet);
    println!("{}", "Display labels:".bold().cyan());
    println!();
    println!("{}", render::tree(&builder.snapshot()));
    println!();
    println!("{}", render::digest(tree.as_ref()));
    if let Some(valid) = proofs_valid {
        let mark = if valid {
            "✓".green().bold()
        } else {
            "✗".red().bold()
        };
        println!("{}  inclusion proofs for all {} leaves", mark, SLOT_COUNT);
    }
    println!();

    Ok(())
}
