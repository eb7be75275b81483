//! Builder actions parsed from command-line tokens or script files.

use anyhow::{bail, Context, Result};
use chainlab_core::{MerkleBuilder, Outcome, Symbol};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// A single user interaction with the Merkle builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move a symbol from the pool into the next empty slot.
    Place(Symbol),
    /// Clear a slot by index.
    Clear(usize),
    Reset,
}

impl Action {
    pub fn apply(self, builder: &mut MerkleBuilder) -> Outcome {
        match self {
            Action::Place(symbol) => builder.place_symbol(symbol),
            Action::Clear(slot) => builder.clear_slot(slot),
            Action::Reset => builder.reset(),
        }
    }
}

impl FromStr for Action {
    type Err = anyhow::Error;

    /// `A` places A, `-2` or `rm2` clears slot 2, `reset` resets.
    fn from_str(token: &str) -> Result<Self> {
        let token = token.trim();

        if token.eq_ignore_ascii_case("reset") {
            return Ok(Action::Reset);
        }

        let index = token
            .strip_prefix('-')
            .or_else(|| token.strip_prefix("rm"));
        if let Some(index) = index {
            let slot = index
                .parse::<usize>()
                .with_context(|| format!("Invalid slot index in {:?}", token))?;
            return Ok(Action::Clear(slot));
        }

        let symbol = token
            .parse::<Symbol>()
            .with_context(|| format!("Unknown action {:?}", token))?;
        Ok(Action::Place(symbol))
    }
}

/// Parse every token, failing on the first bad one.
pub fn parse_actions<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Action>> {
    tokens.iter().map(|t| t.as_ref().parse()).collect()
}

/// Parse a script: tokens separated by whitespace or commas, `#` comments.
pub fn parse_script(text: &str) -> Result<Vec<Action>> {
    let mut actions = Vec::new();

    for (n, line) in text.lines().enumerate() {
        let code = line.split('#').next().unwrap_or_default();
        for token in code
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
        {
            let action = token
                .parse()
                .with_context(|| format!("Line {}", n + 1))?;
            actions.push(action);
        }
    }

    Ok(actions)
}

/// Read and parse a script file.
pub fn load_script(path: &Path) -> Result<Vec<Action>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read script: {}", path.display()))?;
    let actions = parse_script(&text)?;
    if actions.is_empty() {
        bail!("Script {} contains no actions", path.display());
    }
    Ok(actions)
}

/// Actions from inline tokens followed by those from an optional script.
pub fn collect_actions(tokens: &[String], script: Option<&Path>) -> Result<Vec<Action>> {
    let mut actions = parse_actions(tokens)?;
    if let Some(path) = script {
        actions.extend(load_script(path)?);
    }
    Ok(actions)
}
