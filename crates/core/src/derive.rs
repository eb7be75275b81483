//! Parent and root label derivation for the Merkle builder.
//!
//! Labels are display strings such as `H(AB)`. They only mimic the shape of
//! a hash and carry no cryptographic meaning; see [`crate::digest`] for real
//! Blake3 digests over the same leaves.

use crate::builder::{Slots, SLOT_COUNT};
use serde::{Deserialize, Serialize};

/// Labels derived from the current slot contents.
///
/// A field is `None` whenever either of its inputs is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentLabels {
    /// Derived from slots 0 and 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    /// Derived from slots 2 and 3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
    /// Derived from the left and right parents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
}

impl ParentLabels {
    /// Parent label by index (0 = left, 1 = right).
    pub fn parent(&self, index: usize) -> Option<&str> {
        match index {
            0 => self.left.as_deref(),
            1 => self.right.as_deref(),
            _ => None,
        }
    }
}

/// Format a label from two inputs.
fn combine(left: &str, right: &str) -> String {
    format!("H({}{})", left, right)
}

/// The leaf letters wrapped inside a derived label (`"H(AB)"` -> `"AB"`).
fn inner(label: &str) -> &str {
    label.get(2..4).unwrap_or(label)
}

/// Compute every label that the given slots support.
///
/// Recomputes from scratch on every call.
pub fn derive_parents(slots: &Slots) -> ParentLabels {
    let pair = |a: usize, b: usize| match (slots[a], slots[b]) {
        (Some(x), Some(y)) => Some(combine(&x.to_string(), &y.to_string())),
        _ => None,
    };

    let left = pair(0, 1);
    let right = pair(2, 3);
    let root = match (&left, &right) {
        (Some(l), Some(r)) => Some(combine(inner(l), inner(r))),
        _ => None,
    };

    ParentLabels { left, right, root }
}

/// Visibility of the connecting edges in the tree drawing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSet {
    /// Edge from leaf slot `i` up to parent `i / 2`.
    pub leaf_edges: [bool; SLOT_COUNT],
    /// Edge from parent `j` up to the root.
    pub parent_edges: [bool; 2],
}

impl EdgeSet {
    /// Number of visible edges.
    pub fn visible_count(&self) -> usize {
        self.leaf_edges
            .iter()
            .chain(self.parent_edges.iter())
            .filter(|v| **v)
            .count()
    }
}

/// An edge is visible iff both of its endpoints currently exist.
pub fn edges(slots: &Slots, labels: &ParentLabels) -> EdgeSet {
    let mut set = EdgeSet::default();

    for (i, slot) in slots.iter().enumerate() {
        set.leaf_edges[i] = slot.is_some() && labels.parent(i / 2).is_some();
    }

    let has_root = labels.root.is_some();
    for (j, edge) in set.parent_edges.iter_mut().enumerate() {
        *edge = labels.parent(j).is_some() && has_root;
    }

    set
}
