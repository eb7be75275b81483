//! Interactive builder command.

use crate::config::CliConfig;
use crate::repl;
use anyhow::Result;
use std::io;

pub fn run(config: &CliConfig) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::run(stdin.lock(), stdout.lock(), config)
}
