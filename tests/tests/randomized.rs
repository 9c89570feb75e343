//! Randomised hierarchy checks against a fixpoint oracle.

use onto_tests::prelude::*;
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

const SEEDS: std::ops::Range<u64> = 0..40;

fn relations() -> impl Iterator<Item = (u64, Relation)> {
    SEEDS.map(|seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        let nodes = 4 + (seed as usize % 12);
        (seed, Relation::random(&mut rng, nodes, nodes * 2))
    })
}

// ========== TEST: closure_matches_oracle ==========
#[test]
fn test_closure_matches_oracle() {
    init_tracing();
    for (seed, relation) in relations() {
        for root in relation.nodes() {
            let walked: Vec<Node> = tree_nodes(root.clone(), relation.lister(), false, true)
                .collect::<GraphResult<_>>()
                .unwrap();
            let unique: HashSet<Node> = walked.iter().cloned().collect();

            assert_eq!(walked.len(), unique.len(), "seed {seed}, root {root}: duplicates");
            assert_eq!(unique, relation.reachable(&root), "seed {seed}, root {root}");
            for node in &relation.nodes() {
                assert_eq!(
                    contains(&root, node, relation.lister(), false, true).unwrap(),
                    unique.contains(node),
                    "seed {seed}, root {root}, node {node}"
                );
            }
        }
    }
}

// ========== TEST: direct_sets_are_well_formed ==========
#[test]
fn test_direct_sets_are_well_formed() {
    for (seed, relation) in relations() {
        for root in relation.nodes() {
            let closure = relation.reachable(&root);
            let one_hop: HashSet<Node> = (relation.lister())(&root).unwrap().into_iter().collect();

            let builtin: Vec<Node> = tree_nodes(root.clone(), relation.lister(), true, true)
                .collect::<GraphResult<_>>()
                .unwrap();
            let standard: Vec<Node> = tree_nodes(root.clone(), relation.lister(), true, false)
                .collect::<GraphResult<_>>()
                .unwrap();

            // never the root, never a node in a cycle with it, always reachable
            for node in builtin.iter().chain(&standard) {
                assert_ne!(node, &root, "seed {seed}");
                assert!(closure.contains(node), "seed {seed}, root {root}, node {node}");
                let mutual = relation.reachable(node).contains(&root);
                assert!(!mutual || !builtin.contains(node), "seed {seed}, root {root}, node {node}");
            }
            // the standard set only holds one-hop children
            assert!(standard.iter().all(|n| one_hop.contains(n)), "seed {seed}, root {root}");
            // built-in membership agrees with enumeration
            for node in &relation.nodes() {
                assert_eq!(
                    contains(&root, node, relation.lister(), true, true).unwrap(),
                    builtin.contains(node),
                    "seed {seed}, root {root}, node {node}"
                );
            }
        }
    }
}

// ========== TEST: all_nodes_inclusive_is_union_of_closures ==========
#[test]
fn test_all_nodes_inclusive_is_union_of_closures() {
    for (seed, relation) in relations() {
        let roots: Vec<Node> = relation.nodes().into_iter().take(3).collect();

        let all = all_nodes_inclusive(roots.clone(), relation.lister()).unwrap();

        let mut expected: HashSet<Node> = roots.iter().cloned().collect();
        for root in &roots {
            expected.extend(relation.reachable(root));
        }
        assert_eq!(all, expected, "seed {seed}");
    }
}
