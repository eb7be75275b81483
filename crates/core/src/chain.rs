//! A strip of linked blocks that grows one block at a time.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Maximum number of blocks the strip holds.
pub const MAX_BLOCKS: usize = 6;

/// Blocks numbered `1..=len`, always starting with block 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainStrip {
    blocks: Vec<u32>,
}

impl Default for ChainStrip {
    fn default() -> Self {
        Self::new()
    }
}

impl ChainStrip {
    /// A strip holding only block 1.
    pub fn new() -> Self {
        Self { blocks: vec![1] }
    }

    /// Block numbers in order.
    pub fn blocks(&self) -> &[u32] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Never true; the strip always keeps block 1.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Whether another block can be appended.
    pub fn can_grow(&self) -> bool {
        self.blocks.len() < MAX_BLOCKS
    }

    /// Number of connectors drawn between consecutive blocks.
    pub fn connectors(&self) -> usize {
        self.blocks.len().saturating_sub(1)
    }

    /// Append the next block. Returns its number, or `None` when full.
    pub fn add_block(&mut self) -> Option<u32> {
        if !self.can_grow() {
            return None;
        }
        let next = self.blocks.len() as u32 + 1;
        self.blocks.push(next);
        debug!(block = next, "appended block");
        Some(next)
    }

    /// Back to a single block.
    pub fn reset(&mut self) {
        self.blocks.truncate(1);
    }
}

/// Illustrative hash label shown when hovering a block.
pub fn block_label(number: u32) -> String {
    format!("Hash: {}x3f9a", number)
}
