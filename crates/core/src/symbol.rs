//! Leaf symbols used as placeholder transactions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when parsing a [`Symbol`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolError {
    #[error("empty symbol")]
    Empty,

    #[error("expected a single letter A-F, got {0:?}")]
    Invalid(String),
}

/// A placeholder transaction from the fixed alphabet `A..F`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Symbol {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Symbol {
    /// The full alphabet, in order.
    pub const ALL: [Symbol; 6] = [
        Symbol::A,
        Symbol::B,
        Symbol::C,
        Symbol::D,
        Symbol::E,
        Symbol::F,
    ];

    /// The letter this symbol is displayed as.
    pub fn letter(self) -> char {
        match self {
            Symbol::A => 'A',
            Symbol::B => 'B',
            Symbol::C => 'C',
            Symbol::D => 'D',
            Symbol::E => 'E',
            Symbol::F => 'F',
        }
    }

    /// Look up a symbol by letter, ignoring case.
    pub fn from_letter(c: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.letter() == c.to_ascii_uppercase())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Symbol {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(SymbolError::Empty),
            (Some(c), None) => Self::from_letter(c).ok_or_else(|| SymbolError::Invalid(s.into())),
            _ => Err(SymbolError::Invalid(s.into())),
        }
    }
}
