//! Interactive four-leaf Merkle tree builder.
//!
//! The builder owns a pool of unplaced symbols and four leaf slots. Placing a
//! symbol moves it from the pool into the lowest empty slot; clearing a slot
//! moves it back. Invalid actions never fail: they are reported as
//! [`Outcome::Ignored`] and leave the state untouched.

use crate::derive::{derive_parents, edges, EdgeSet, ParentLabels};
use crate::symbol::Symbol;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use tracing::{debug, trace};

/// Number of leaf slots in the tree.
pub const SLOT_COUNT: usize = 4;

/// Leaf slots, left to right.
pub type Slots = [Option<Symbol>; SLOT_COUNT];

/// Why an action was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// All four slots already hold a symbol.
    SlotsFull,
    /// The symbol is already placed.
    NotInPool(Symbol),
    /// The slot holds nothing to clear.
    SlotEmpty(usize),
    /// The slot index is outside `0..SLOT_COUNT`.
    NoSuchSlot(usize),
    /// The builder is already in its initial state.
    AlreadyReset,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IgnoreReason::SlotsFull => write!(f, "all slots are full"),
            IgnoreReason::NotInPool(s) => write!(f, "{} is not in the pool", s),
            IgnoreReason::SlotEmpty(i) => write!(f, "slot {} is already empty", i),
            IgnoreReason::NoSuchSlot(i) => write!(f, "there is no slot {}", i),
            IgnoreReason::AlreadyReset => write!(f, "nothing to reset"),
        }
    }
}

/// Result of a builder action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Placed { symbol: Symbol, slot: usize },
    Cleared { symbol: Symbol, slot: usize },
    Reset,
    Ignored { reason: IgnoreReason },
}

impl Outcome {
    /// Whether the action changed the builder.
    pub fn changed(&self) -> bool {
        !matches!(self, Outcome::Ignored { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Placed { symbol, slot } => write!(f, "placed {} in slot {}", symbol, slot),
            Outcome::Cleared { symbol, slot } => {
                write!(f, "cleared slot {} ({} back to pool)", slot, symbol)
            }
            Outcome::Reset => write!(f, "reset"),
            Outcome::Ignored { reason } => write!(f, "ignored: {}", reason),
        }
    }
}

/// State of the Merkle builder widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleBuilder {
    /// Symbols not currently placed. Ordered, so the pool is always sorted.
    pool: BTreeSet<Symbol>,
    /// Leaf slots.
    slots: Slots,
    /// Labels derived from `slots` after the last mutation.
    labels: ParentLabels,
}

impl Default for MerkleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MerkleBuilder {
    /// Create a builder with every symbol in the pool and all slots empty.
    pub fn new() -> Self {
        Self {
            pool: Symbol::ALL.into_iter().collect(),
            slots: [None; SLOT_COUNT],
            labels: ParentLabels::default(),
        }
    }

    /// Symbols available for placement, alphabetically.
    pub fn pool(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.pool.iter().copied()
    }

    /// Whether a symbol is in the pool.
    pub fn in_pool(&self, symbol: Symbol) -> bool {
        self.pool.contains(&symbol)
    }

    /// Current leaf slots.
    pub fn slots(&self) -> &Slots {
        &self.slots
    }

    /// Labels derived from the current slots.
    pub fn labels(&self) -> &ParentLabels {
        &self.labels
    }

    /// Edge visibility for the current state.
    pub fn edges(&self) -> EdgeSet {
        edges(&self.slots, &self.labels)
    }

    /// Number of filled slots.
    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// True once all slots are filled and the root exists.
    pub fn is_complete(&self) -> bool {
        self.labels.root.is_some()
    }

    /// Move `symbol` from the pool into the lowest empty slot.
    pub fn place_symbol(&mut self, symbol: Symbol) -> Outcome {
        let Some(slot) = self.slots.iter().position(Option::is_none) else {
            return self.ignore(IgnoreReason::SlotsFull);
        };
        if !self.pool.remove(&symbol) {
            return self.ignore(IgnoreReason::NotInPool(symbol));
        }

        self.slots[slot] = Some(symbol);
        self.recompute();

        debug!(%symbol, slot, "placed symbol");
        Outcome::Placed { symbol, slot }
    }

    /// Return the symbol in slot `index` to the pool.
    pub fn clear_slot(&mut self, index: usize) -> Outcome {
        let Some(entry) = self.slots.get_mut(index) else {
            return self.ignore(IgnoreReason::NoSuchSlot(index));
        };
        let Some(symbol) = entry.take() else {
            return self.ignore(IgnoreReason::SlotEmpty(index));
        };

        self.pool.insert(symbol);
        self.recompute();

        debug!(%symbol, slot = index, "cleared slot");
        Outcome::Cleared {
            symbol,
            slot: index,
        }
    }

    /// Restore the initial state. Ignored when nothing is placed.
    pub fn reset(&mut self) -> Outcome {
        if self.filled() == 0 {
            return self.ignore(IgnoreReason::AlreadyReset);
        }
        *self = Self::new();
        debug!("reset builder");
        Outcome::Reset
    }

    /// Capture the current state for rendering.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pool: self.pool().collect(),
            slots: self.slots,
            labels: self.labels.clone(),
            edges: self.edges(),
        }
    }

    fn recompute(&mut self) {
        self.labels = derive_parents(&self.slots);
    }

    fn ignore(&self, reason: IgnoreReason) -> Outcome {
        trace!(%reason, "ignored action");
        Outcome::Ignored { reason }
    }
}

/// Serializable view of the builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub pool: Vec<Symbol>,
    pub slots: Slots,
    pub labels: ParentLabels,
    pub edges: EdgeSet,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Symbol::*;

    fn filled(symbols: &[Symbol]) -> MerkleBuilder {
        let mut builder = MerkleBuilder::new();
        for s in symbols {
            builder.place_symbol(*s);
        }
        builder
    }

    #[test]
    fn test_initial_state() {
        let builder = MerkleBuilder::new();
        assert_eq!(builder.pool().collect::<Vec<_>>(), Symbol::ALL.to_vec());
        assert_eq!(builder.slots(), &[None; SLOT_COUNT]);
        assert_eq!(builder.labels(), &ParentLabels::default());
        assert!(!builder.is_complete());
    }

    #[test]
    fn test_place_fills_lowest_empty_slot() {
        let mut builder = MerkleBuilder::new();
        assert_eq!(builder.place_symbol(C), Outcome::Placed { symbol: C, slot: 0 });
        assert_eq!(builder.place_symbol(A), Outcome::Placed { symbol: A, slot: 1 });
        assert!(!builder.in_pool(C));

        builder.clear_slot(0);
        assert_eq!(builder.place_symbol(F), Outcome::Placed { symbol: F, slot: 0 });
    }

    #[test]
    fn test_left_parent_from_first_pair() {
        let builder = filled(&[A, B]);
        assert_eq!(builder.labels().left.as_deref(), Some("H(AB)"));
        assert!(builder.labels().right.is_none());
        assert!(builder.labels().root.is_none());
    }

    #[test]
    fn test_full_tree_has_root() {
        let builder = filled(&[A, B, C, D]);
        assert_eq!(builder.labels().right.as_deref(), Some("H(CD)"));
        assert_eq!(builder.labels().root.as_deref(), Some("H(ABCD)"));
        assert!(builder.is_complete());
        assert_eq!(builder.pool().collect::<Vec<_>>(), vec![E, F]);
    }

    #[test]
    fn test_clear_slot_zero_keeps_right_parent() {
        let mut builder = filled(&[A, B, C, D]);
        assert_eq!(builder.clear_slot(0), Outcome::Cleared { symbol: A, slot: 0 });

        assert!(builder.labels().left.is_none());
        assert!(builder.labels().root.is_none());
        assert_eq!(builder.labels().right.as_deref(), Some("H(CD)"));
        assert_eq!(builder.pool().collect::<Vec<_>>(), vec![A, E, F]);
    }

    #[test]
    fn test_place_symbol_not_in_pool_is_noop() {
        let mut builder = filled(&[A]);
        let before = builder.clone();
        assert_eq!(
            builder.place_symbol(A),
            Outcome::Ignored {
                reason: IgnoreReason::NotInPool(A)
            }
        );
        assert_eq!(builder, before);
    }

    #[test]
    fn test_place_when_full_is_noop() {
        let mut builder = filled(&[A, B, C, D]);
        let before = builder.clone();
        for s in Symbol::ALL {
            let outcome = builder.place_symbol(s);
            assert_eq!(
                outcome,
                Outcome::Ignored {
                    reason: IgnoreReason::SlotsFull
                }
            );
            assert!(!outcome.changed());
        }
        assert_eq!(builder, before);
    }

    #[test]
    fn test_clear_empty_or_missing_slot_is_noop() {
        let mut builder = filled(&[A]);
        let before = builder.clone();
        assert_eq!(
            builder.clear_slot(2),
            Outcome::Ignored {
                reason: IgnoreReason::SlotEmpty(2)
            }
        );
        assert_eq!(
            builder.clear_slot(9),
            Outcome::Ignored {
                reason: IgnoreReason::NoSuchSlot(9)
            }
        );
        assert_eq!(builder, before);
    }

    #[test]
    fn test_reset() {
        let mut builder = filled(&[E, F, A]);
        assert_eq!(builder.reset(), Outcome::Reset);
        assert_eq!(builder, MerkleBuilder::new());
    }

    #[test]
    fn test_reset_when_initial_is_ignored() {
        let mut builder = MerkleBuilder::new();
        let outcome = builder.reset();
        assert_eq!(
            outcome,
            Outcome::Ignored {
                reason: IgnoreReason::AlreadyReset
            }
        );
        assert!(!outcome.changed());
        assert_eq!(builder, MerkleBuilder::new());
    }

    #[test]
    fn test_snapshot_json() {
        let builder = filled(&[A, B]);
        let json = serde_json::to_value(builder.snapshot()).unwrap();
        assert_eq!(json["pool"], serde_json::json!(["C", "D", "E", "F"]));
        assert_eq!(json["slots"], serde_json::json!(["A", "B", null, null]));
        assert_eq!(json["labels"]["left"], "H(AB)");
        assert_eq!(json["edges"]["leaf_edges"], serde_json::json!([true, true, false, false]));
    }

    #[test]
    fn test_outcome_json_is_tagged() {
        let json = serde_json::to_value(Outcome::Placed { symbol: B, slot: 1 }).unwrap();
        assert_eq!(json, serde_json::json!({"outcome": "placed", "symbol": "B", "slot": 1}));
    }
}
