use chainlab_core::{tree_digest, MerkleBuilder, Outcome, Symbol, SLOT_COUNT};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

/// Apply a random place, clear or reset action.
fn random_action(builder: &mut MerkleBuilder, rng: &mut StdRng) -> Outcome {
    let roll = rng.gen_range(0..20);
    if roll == 0 {
        builder.reset()
    } else if roll < 12 {
        let symbol = Symbol::ALL[rng.gen_range(0..Symbol::ALL.len())];
        builder.place_symbol(symbol)
    } else {
        // Include one out-of-range index.
        builder.clear_slot(rng.gen_range(0..=SLOT_COUNT))
    }
}

fn check_invariants(builder: &MerkleBuilder) {
    let pool: BTreeSet<Symbol> = builder.pool().collect();
    let placed: Vec<Symbol> = builder.slots().iter().flatten().copied().collect();
    let placed_set: BTreeSet<Symbol> = placed.iter().copied().collect();

    // No symbol placed twice.
    assert_eq!(placed.len(), placed_set.len());
    // Disjoint, and together they cover the alphabet.
    assert!(pool.is_disjoint(&placed_set));
    let union: BTreeSet<Symbol> = pool.union(&placed_set).copied().collect();
    assert_eq!(union, Symbol::ALL.into_iter().collect::<BTreeSet<_>>());

    // Pool iterates alphabetically.
    let listed: Vec<Symbol> = builder.pool().collect();
    let mut sorted = listed.clone();
    sorted.sort();
    assert_eq!(listed, sorted);

    // Each label exists iff both of its inputs exist.
    let slots = builder.slots();
    let labels = builder.labels();
    assert_eq!(labels.left.is_some(), slots[0].is_some() && slots[1].is_some());
    assert_eq!(labels.right.is_some(), slots[2].is_some() && slots[3].is_some());
    assert_eq!(
        labels.root.is_some(),
        labels.left.is_some() && labels.right.is_some()
    );

    // Edges follow their endpoints.
    let edges = builder.edges();
    for (i, visible) in edges.leaf_edges.iter().enumerate() {
        assert_eq!(*visible, slots[i].is_some() && labels.parent(i / 2).is_some());
    }
    for (j, visible) in edges.parent_edges.iter().enumerate() {
        assert_eq!(*visible, labels.parent(j).is_some() && labels.root.is_some());
    }

    // The real digest tree only exists for a full set of leaves.
    assert_eq!(tree_digest(slots).is_some(), builder.filled() == SLOT_COUNT);
}

#[test]
fn test_invariants_hold_after_every_action() {
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut builder = MerkleBuilder::new();
        check_invariants(&builder);

        for _ in 0..200 {
            let before = builder.clone();
            let outcome = random_action(&mut builder, &mut rng);
            if !outcome.changed() {
                assert_eq!(builder, before, "ignored action must not change state");
            }
            check_invariants(&builder);
        }
    }
}

#[test]
fn test_labels_do_not_remember_history() {
    let mut a = MerkleBuilder::new();
    for s in [Symbol::E, Symbol::F, Symbol::A, Symbol::B] {
        a.place_symbol(s);
    }
    a.clear_slot(0);
    a.clear_slot(1);
    a.place_symbol(Symbol::C);
    a.place_symbol(Symbol::D);

    let mut b = MerkleBuilder::new();
    b.place_symbol(Symbol::C);
    b.place_symbol(Symbol::D);
    b.place_symbol(Symbol::A);
    b.place_symbol(Symbol::B);

    assert_eq!(a.slots(), b.slots());
    assert_eq!(a.labels(), b.labels());
    assert_eq!(a.labels().root.as_deref(), Some("H(CDAB)"));
}

#[test]
fn test_fill_then_drain() {
    let mut builder = MerkleBuilder::new();
    for s in Symbol::ALL {
        builder.place_symbol(s);
    }
    assert_eq!(builder.filled(), SLOT_COUNT);
    assert_eq!(builder.pool().collect::<Vec<_>>(), vec![Symbol::E, Symbol::F]);

    for i in (0..SLOT_COUNT).rev() {
        assert!(builder.clear_slot(i).changed());
    }
    assert_eq!(builder, MerkleBuilder::new());
}
