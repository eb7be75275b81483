//! Interactive Merkle builder session.

use crate::action::Action;
use crate::config::CliConfig;
use crate::render;
use anyhow::Result;
use chainlab_core::{tree_digest, MerkleBuilder};
use colored::Colorize;
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  add <L>    place symbol L (A-F) in the next empty slot
  rm <N>     clear slot N (0-3)
  reset      start over
  show       print the tree
  digest     print the real Blake3 tree
  help       show this help
  quit       leave the session
A bare token such as `C`, `-1` or `reset` also works.";

/// What the loop should do after a line.
enum Step {
    Continue,
    Quit,
}

/// Run a session reading commands from `input` until EOF or `quit`.
pub fn run<R: BufRead, W: Write>(input: R, mut out: W, config: &CliConfig) -> Result<()> {
    let mut builder = MerkleBuilder::new();

    if !config.is_json() {
        writeln!(out, "{}", "Merkle tree builder".bold().cyan())?;
        writeln!(out, "Type 'help' for commands.")?;
        writeln!(out)?;
        writeln!(out, "{}", render::tree(&builder.snapshot()))?;
    }

    for line in input.lines() {
        let line = line?;
        match handle_line(line.trim(), &mut builder, &mut out, config)? {
            Step::Continue => {}
            Step::Quit => break,
        }
    }

    Ok(())
}

fn handle_line<W: Write>(
    line: &str,
    builder: &mut MerkleBuilder,
    out: &mut W,
    config: &CliConfig,
) -> Result<Step> {
    let mut words = line.split_whitespace();
    let Some(cmd) = words.next() else {
        return Ok(Step::Continue);
    };
    let arg = words.next();
    let extra: Vec<&str> = words.collect();

    let action = match (cmd.to_ascii_lowercase().as_str(), arg) {
        ("quit" | "exit" | "q", _) => return Ok(Step::Quit),
        ("help" | "?", _) => {
            writeln!(out, "{}", HELP)?;
            return Ok(Step::Continue);
        }
        ("show", _) => {
            print_state(builder, out, config)?;
            return Ok(Step::Continue);
        }
        ("digest", _) => {
            print_digest(builder, out, config)?;
            return Ok(Step::Continue);
        }
        ("add" | "rm", Some(_)) if !extra.is_empty() => {
            report_error(out, config, &format!("unexpected arguments: {}", extra.join(" ")))?;
            return Ok(Step::Continue);
        }
        ("add", Some(symbol)) => symbol.parse::<Action>(),
        ("rm", Some(slot)) => format!("-{}", slot).parse::<Action>(),
        _ => line.parse::<Action>(),
    };

    let action = match action {
        Ok(Action::Clear(_)) if cmd.eq_ignore_ascii_case("add") => {
            report_error(out, config, "expected a symbol after 'add'")?;
            return Ok(Step::Continue);
        }
        Ok(action) => action,
        Err(e) => {
            // Typos never end the session.
            report_error(out, config, &format!("{:#}", e))?;
            return Ok(Step::Continue);
        }
    };

    let outcome = action.apply(builder);
    if config.is_json() {
        let line = serde_json::json!({
            "outcome": outcome,
            "state": builder.snapshot(),
        });
        writeln!(out, "{}", line)?;
    } else {
        writeln!(out, "{}", render::outcome(&outcome))?;
        writeln!(out, "{}", render::tree(&builder.snapshot()))?;
    }

    Ok(Step::Continue)
}

/// Errors stay on the same stream as results; one JSON object per line in JSON mode.
fn report_error<W: Write>(out: &mut W, config: &CliConfig, message: &str) -> Result<()> {
    if config.is_json() {
        writeln!(out, "{}", serde_json::json!({ "error": message }))?;
    } else {
        writeln!(out, "{} {}", "✗".red().bold(), message)?;
    }
    Ok(())
}

fn print_state<W: Write>(builder: &MerkleBuilder, out: &mut W, config: &CliConfig) -> Result<()> {
    if config.is_json() {
        writeln!(out, "{}", serde_json::to_string(&builder.snapshot())?)?;
    } else {
        writeln!(out, "{}", render::tree(&builder.snapshot()))?;
    }
    Ok(())
}

fn print_digest<W: Write>(builder: &MerkleBuilder, out: &mut W, config: &CliConfig) -> Result<()> {
    let tree = tree_digest(builder.slots());
    if config.is_json() {
        writeln!(out, "{}", serde_json::to_string(&tree)?)?;
    } else {
        writeln!(out, "{}", render::digest(tree.as_ref()))?;
    }
    Ok(())
}
