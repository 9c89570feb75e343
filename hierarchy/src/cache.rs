//! Per-call memo of listed children.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Children already listed during one top-level query.
///
/// Each node's children are listed at most once and stored without
/// duplicates, in first-seen order.
pub(crate) struct ChildrenCache<N, F> {
    list_children: F,
    cache: HashMap<N, Vec<N>>,
}

impl<N, F> ChildrenCache<N, F>
where
    N: Clone + Eq + Hash,
{
    pub fn new(list_children: F) -> Self {
        Self {
            list_children,
            cache: HashMap::new(),
        }
    }

    /// The distinct children of `node`.
    pub fn children<I, E>(&mut self, node: &N) -> Result<&[N], E>
    where
        F: FnMut(&N) -> Result<I, E>,
        I: IntoIterator<Item = N>,
    {
        if !self.cache.contains_key(node) {
            let mut seen = HashSet::new();
            let listed: Vec<N> = (self.list_children)(node)?
                .into_iter()
                .filter(|child| seen.insert(child.clone()))
                .collect();
            self.cache.insert(node.clone(), listed);
        }
        Ok(self.cache.get(node).map_or(&[][..], Vec::as_slice))
    }

    /// Check whether `child` is a one-hop child of `node`.
    pub fn has_child<I, E>(&mut self, node: &N, child: &N) -> Result<bool, E>
    where
        F: FnMut(&N) -> Result<I, E>,
        I: IntoIterator<Item = N>,
    {
        Ok(self.children(node)?.contains(child))
    }

    #[cfg(test)]
    pub fn listed(&self) -> usize {
        self.cache.len()
    }
}
