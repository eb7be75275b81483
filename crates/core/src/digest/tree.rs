//! Blake3 Merkle tree over a full set of leaf slots.

use super::{hash_pair, leaf_digest, Digest};
use crate::builder::{Slots, SLOT_COUNT};
use serde::{Deserialize, Serialize};

/// A Merkle tree over four leaves, built bottom-up with pairwise hashing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestTree {
    pub leaves: [Digest; SLOT_COUNT],
    pub parents: [Digest; 2],
    pub root: Digest,
}

/// Which side the sibling sits on when folding a proof.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

/// Inclusion proof for one leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestProof {
    /// The leaf being proven.
    pub leaf: Digest,
    /// Sibling digests from leaf to root, with the side each sits on.
    pub siblings: Vec<(Digest, Side)>,
}

/// Build the digest tree, or `None` unless every slot is filled.
pub fn tree_digest(slots: &Slots) -> Option<DigestTree> {
    let mut leaves = [Digest::default(); SLOT_COUNT];
    for (leaf, slot) in leaves.iter_mut().zip(slots) {
        *leaf = leaf_digest((*slot)?);
    }

    let parents = [
        hash_pair(&leaves[0], &leaves[1]),
        hash_pair(&leaves[2], &leaves[3]),
    ];
    let root = hash_pair(&parents[0], &parents[1]);

    Some(DigestTree {
        leaves,
        parents,
        root,
    })
}

impl DigestTree {
    /// Generate a proof for the leaf at `index`.
    pub fn proof(&self, index: usize) -> Option<DigestProof> {
        let leaf = *self.leaves.get(index)?;

        let side = |i: usize| if i % 2 == 0 { Side::Right } else { Side::Left };
        let siblings = vec![
            (self.leaves[index ^ 1], side(index)),
            (self.parents[(index / 2) ^ 1], side(index / 2)),
        ];

        Some(DigestProof { leaf, siblings })
    }

    /// Verify a proof against this tree's root.
    pub fn verify_proof(&self, proof: &DigestProof) -> bool {
        verify_proof(&self.root, proof)
    }
}

/// Fold a proof up to a root and compare.
pub fn verify_proof(root: &Digest, proof: &DigestProof) -> bool {
    let computed = proof
        .siblings
        .iter()
        .fold(proof.leaf, |current, (sibling, side)| match side {
            Side::Right => hash_pair(&current, sibling),
            Side::Left => hash_pair(sibling, &current),
        });

    computed == *root
}
