//! Distributed ledger ring: peers laid out on a circle.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Number of peers on the ring.
pub const NODE_COUNT: usize = 5;

/// Ring radius, as a percentage of the drawing area.
const RADIUS: f64 = 35.0;

/// Position of a node, in percent of the drawing area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodePosition {
    pub top: f64,
    pub left: f64,
}

/// Position of node `i` on the ring.
pub fn node_position(i: usize) -> NodePosition {
    let angle = (i as f64 * 2.0 * PI) / NODE_COUNT as f64;
    NodePosition {
        top: 50.0 + RADIUS * angle.sin(),
        left: 50.0 + RADIUS * angle.cos(),
    }
}

/// Interaction state of the ring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRing {
    hovered: Option<usize>,
    /// Incremented on every sync; all nodes pulse together.
    pulses: u64,
}

impl LedgerRing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlight node `i`. Out of range indices are ignored.
    pub fn hover(&mut self, i: usize) -> bool {
        if i >= NODE_COUNT {
            return false;
        }
        self.hovered = Some(i);
        true
    }

    pub fn unhover(&mut self) {
        self.hovered = None;
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Pulse every node at once.
    pub fn sync(&mut self) {
        self.pulses += 1;
    }

    pub fn pulses(&self) -> u64 {
        self.pulses
    }

    /// All node positions, in index order.
    pub fn positions(&self) -> Vec<NodePosition> {
        (0..NODE_COUNT).map(node_position).collect()
    }
}
