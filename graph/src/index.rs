//! Indexes for efficient triple lookups.

use onto_core::{Node, Triple, TriplePattern};
use std::collections::{HashMap, HashSet};

/// Position index: Node -> Set<Triple> having that node in one position.
#[derive(Debug, Default)]
pub struct PositionIndex {
    index: HashMap<Node, HashSet<Triple>>,
}

impl PositionIndex {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node: &Node, triple: &Triple) {
        self.index
            .entry(node.clone())
            .or_default()
            .insert(triple.clone());
    }

    pub fn remove(&mut self, node: &Node, triple: &Triple) {
        if let Some(set) = self.index.get_mut(node) {
            set.remove(triple);
            if set.is_empty() {
                self.index.remove(node);
            }
        }
    }

    /// Number of triples with this node in the indexed position.
    pub fn count(&self, node: &Node) -> usize {
        self.index.get(node).map_or(0, HashSet::len)
    }

    pub fn get(&self, node: &Node) -> impl Iterator<Item = &Triple> + '_ {
        self.index.get(node).into_iter().flat_map(|set| set.iter())
    }

    pub fn clear(&mut self) {
        self.index.clear();
    }
}

/// Subject, predicate and object indexes kept in step.
#[derive(Debug, Default)]
pub struct TripleIndex {
    subjects: PositionIndex,
    predicates: PositionIndex,
    objects: PositionIndex,
}

impl TripleIndex {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, triple: &Triple) {
        self.subjects.insert(&triple.subject, triple);
        self.predicates.insert(&triple.predicate, triple);
        self.objects.insert(&triple.object, triple);
    }

    pub fn remove(&mut self, triple: &Triple) {
        self.subjects.remove(&triple.subject, triple);
        self.predicates.remove(&triple.predicate, triple);
        self.objects.remove(&triple.object, triple);
    }

    pub fn clear(&mut self) {
        self.subjects.clear();
        self.predicates.clear();
        self.objects.clear();
    }

    /// Candidate triples for a pattern, taken from the most selective bound
    /// position. Returns `None` when no position is bound.
    ///
    /// Candidates still have to be checked against the full pattern.
    pub fn candidates<'a>(
        &'a self,
        pattern: &TriplePattern,
    ) -> Option<Box<dyn Iterator<Item = &'a Triple> + 'a>> {
        let bound = [
            (pattern.subject.as_ref(), &self.subjects),
            (pattern.predicate.as_ref(), &self.predicates),
            (pattern.object.as_ref(), &self.objects),
        ];
        let (node, index) = bound
            .into_iter()
            .filter_map(|(node, index)| node.map(|n| (n, index)))
            .min_by_key(|(node, index)| index.count(node))?;
        Some(Box::new(index.get(node)))
    }
}
