//! CLI commands module.

use crate::config::CliConfig;
use anyhow::Result;
use clap::Subcommand;

mod chain;
mod digest;
mod ledger;
mod merkle;
mod session;
mod speed;

#[derive(Subcommand)]
pub enum Commands {
    /// Apply actions to the Merkle tree builder and print the result
    Merkle(merkle::MerkleArgs),
    /// Like `merkle`, but also compute real Blake3 digests
    Digest(merkle::MerkleArgs),
    /// Interactive Merkle tree builder
    Repl,
    /// Grow or reset the block chain strip
    Chain(chain::ChainArgs),
    /// Show the distributed ledger ring
    Ledger(ledger::LedgerArgs),
    /// Compare platform throughput
    Speed,
}

pub fn run(cmd: Commands, config: &CliConfig) -> Result<()> {
    match cmd {
        Commands::Merkle(args) => merkle::run(args, config),
        Commands::Digest(args) => digest::run(args, config),
        Commands::Repl => session::run(config),
        Commands::Chain(args) => chain::run(args, config),
        Commands::Ledger(args) => ledger::run(args, config),
        Commands::Speed => speed::run(config),
    }
}
