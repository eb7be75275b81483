//! Interactive blockchain lesson widgets for chainlab.
//!
//! This crate provides the state behind the lesson widgets:
//! - Merkle tree builder (leaf pool, four slots, derived labels)
//! - Real Blake3 digests over the same leaves, for comparison
//! - Chain strip, ledger ring and throughput table
//!
//! # Example
//!
//! ```rust
//! use chainlab_core::{MerkleBuilder, Symbol};
//!
//! let mut builder = MerkleBuilder::new();
//! for s in [Symbol::A, Symbol::B, Symbol::C, Symbol::D] {
//!     builder.place_symbol(s);
//! }
//! assert_eq!(builder.labels().root.as_deref(), Some("H(ABCD)"));
//!
//! builder.clear_slot(0);
//! assert!(builder.labels().root.is_none());
//! assert_eq!(builder.labels().right.as_deref(), Some("H(CD)"));
//! ```

pub mod builder;
pub mod chain;
pub mod derive;
pub mod digest;
pub mod ledger;
pub mod speed;
pub mod symbol;

// Re-export commonly used types at the crate root
pub use builder::{IgnoreReason, MerkleBuilder, Outcome, Slots, Snapshot, SLOT_COUNT};
pub use chain::{block_label, ChainStrip, MAX_BLOCKS};
pub use derive::{derive_parents, edges, EdgeSet, ParentLabels};
pub use digest::{leaf_digest, tree_digest, Digest, DigestProof, DigestTree};
pub use ledger::{node_position, LedgerRing, NodePosition, NODE_COUNT};
pub use speed::{platform, PlatformStat, PLATFORMS};
pub use symbol::{Symbol, SymbolError};
