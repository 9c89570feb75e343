//! Lazy pattern matching across the leaves of a union graph.

use crate::graph_ref::read;
use onto_core::{GraphResult, Triple, TriplePattern};
use onto_graph::{SharedGraph, TripleIter};
use std::collections::HashSet;
use std::iter;
use std::rc::Rc;

/// Iterator returned by [`crate::UnionGraph::find`].
///
/// Leaves are queried one at a time, only when the previous leaf is
/// exhausted. In distinct mode a triple already yielded by this iterator is
/// skipped. A leaf error is yielded once and ends the iteration.
pub struct FindIter {
    pattern: TriplePattern,
    leaves: Rc<[SharedGraph]>,
    next_leaf: usize,
    current: Option<TripleIter>,
    seen: Option<HashSet<Triple>>,
}

impl FindIter {
    /// Results of a single graph, passed through untouched.
    pub(crate) fn single(found: TripleIter) -> Self {
        Self {
            pattern: TriplePattern::ANY,
            leaves: Rc::from(Vec::new()),
            next_leaf: 0,
            current: Some(found),
            seen: None,
        }
    }

    pub(crate) fn over_leaves(pattern: TriplePattern, leaves: Rc<[SharedGraph]>, distinct: bool) -> Self {
        Self {
            pattern,
            leaves,
            next_leaf: 0,
            current: None,
            seen: distinct.then(HashSet::new),
        }
    }

    fn open_next_leaf(&mut self) -> bool {
        let Some(leaf) = self.leaves.get(self.next_leaf) else {
            return false;
        };
        self.next_leaf += 1;
        let found: TripleIter = match read(leaf) {
            Ok(graph) => graph.find(&self.pattern),
            Err(e) => Box::new(iter::once(Err(e))),
        };
        self.current = Some(found);
        true
    }

    fn stop(&mut self) {
        self.current = None;
        self.next_leaf = self.leaves.len();
    }
}

impl Iterator for FindIter {
    type Item = GraphResult<Triple>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(current) = self.current.as_mut() {
                match current.next() {
                    Some(Ok(triple)) => {
                        if let Some(seen) = self.seen.as_mut() {
                            if !seen.insert(triple.clone()) {
                                continue;
                            }
                        }
                        return Some(Ok(triple));
                    }
                    Some(Err(e)) => {
                        self.stop();
                        return Some(Err(e));
                    }
                    None => self.current = None,
                }
            }
            if !self.open_next_leaf() {
                return None;
            }
        }
    }
}
