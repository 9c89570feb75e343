//! Direct-children computations.

use crate::cache::ChildrenCache;
use crate::tree::HierarchyTree;
use std::hash::Hash;

/// Direct children of `root`, equivalence-aware.
///
/// Children in the same cycle as `root` are never direct. A child cycle is
/// returned whole, and it is dropped if some other child reaches it.
/// Nodes come back in breadth-first discovery order.
///
/// The shadowing check walks the tree once per candidate class, so the cost
/// is `O(classes * (V + E))` over the nodes reachable from `root`.
pub fn direct_nodes_builtin<N, F, I, E>(root: &N, list_children: F) -> Result<Vec<N>, E>
where
    N: Clone + Eq + Hash,
    F: FnMut(&N) -> Result<I, E>,
    I: IntoIterator<Item = N>,
{
    let mut cache = ChildrenCache::new(list_children);
    let tree = HierarchyTree::build(root.clone(), &mut cache)?;
    Ok(tree.direct_children())
}

/// Direct children of `root` using one-hop edges only.
///
/// A child is dropped when it is mutual with `root`, or when another child
/// lists it as a one-hop child. Two children that list each other are
/// equivalents and neither shadows the other: both are kept, where a plain
/// one-hop shadow rule would drop both.
pub fn direct_nodes_standard<N, F, I, E>(root: &N, list_children: F) -> Result<Vec<N>, E>
where
    N: Clone + Eq + Hash,
    F: FnMut(&N) -> Result<I, E>,
    I: IntoIterator<Item = N>,
{
    let mut cache = ChildrenCache::new(list_children);
    let mut candidates = Vec::new();
    for child in cache.children(root)?.to_vec() {
        if child == *root || cache.has_child(&child, root)? {
            continue;
        }
        candidates.push(child);
    }

    let mut direct = Vec::with_capacity(candidates.len());
    'candidates: for child in &candidates {
        for other in &candidates {
            if other == child {
                continue;
            }
            if cache.has_child(other, child)? && !cache.has_child(child, other)? {
                continue 'candidates;
            }
        }
        direct.push(child.clone());
    }
    Ok(direct)
}
