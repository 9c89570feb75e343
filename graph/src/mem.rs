//! In-memory graph storage.

use crate::index::TripleIndex;
use crate::{Graph, TripleIter};
use onto_core::{GraphError, GraphResult, Triple, TriplePattern};
use std::collections::HashSet;
use std::iter;

/// The in-memory triple store.
#[derive(Debug, Default)]
pub struct MemGraph {
    /// Triple storage
    triples: HashSet<Triple>,
    /// Position indexes
    index: TripleIndex,
    /// Set once by `close`
    closed: bool,
}

impl MemGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from an iterator of triples.
    pub fn from_triples(iter: impl IntoIterator<Item = Triple>) -> Self {
        let mut graph = Self::new();
        for triple in iter {
            graph.insert(triple);
        }
        graph
    }

    fn insert(&mut self, triple: Triple) {
        if !self.triples.contains(&triple) {
            self.index.insert(&triple);
            self.triples.insert(triple);
        }
    }

    fn check_open(&self) -> GraphResult<()> {
        if self.closed {
            return Err(GraphError::Closed);
        }
        Ok(())
    }

    fn matching(&self, pattern: &TriplePattern) -> Vec<Triple> {
        if let (Some(s), Some(p), Some(o)) = (&pattern.subject, &pattern.predicate, &pattern.object) {
            let probe = Triple::new(s.clone(), p.clone(), o.clone());
            return self.triples.get(&probe).cloned().into_iter().collect();
        }
        match self.index.candidates(pattern) {
            Some(candidates) => candidates
                .filter(|t| pattern.matches(t))
                .cloned()
                .collect(),
            None => self.triples.iter().cloned().collect(),
        }
    }
}

impl Graph for MemGraph {
    // Results are a snapshot: the store may be mutated while they are consumed.
    fn find(&self, pattern: &TriplePattern) -> TripleIter {
        if self.closed {
            return Box::new(iter::once(Err(GraphError::Closed)));
        }
        Box::new(self.matching(pattern).into_iter().map(Ok))
    }

    fn contains(&self, triple: &Triple) -> GraphResult<bool> {
        self.check_open()?;
        Ok(self.triples.contains(triple))
    }

    fn add(&mut self, triple: Triple) -> GraphResult<()> {
        self.check_open()?;
        tracing::trace!(%triple, "mem graph add");
        self.insert(triple);
        Ok(())
    }

    fn delete(&mut self, triple: &Triple) -> GraphResult<()> {
        self.check_open()?;
        if self.triples.remove(triple) {
            tracing::trace!(%triple, "mem graph delete");
            self.index.remove(triple);
        }
        Ok(())
    }

    fn size(&self) -> GraphResult<usize> {
        self.check_open()?;
        Ok(self.triples.len())
    }

    fn clear(&mut self) -> GraphResult<()> {
        self.check_open()?;
        self.triples.clear();
        self.index.clear();
        Ok(())
    }

    fn close(&mut self) {
        self.closed = true;
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}
