//! The graph capability consumed by the core.

use onto_core::{GraphResult, Triple, TriplePattern};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// An owned stream of `find` results.
///
/// Items are results so a store can fail part-way through a scan.
pub type TripleIter = Box<dyn Iterator<Item = GraphResult<Triple>>>;

/// A triple store with pattern matching.
///
/// This is the whole surface the union graph needs from a leaf. Anything
/// about prefixes, serialization or vocabularies belongs to the layers above.
pub trait Graph: fmt::Debug {
    /// Find all triples matching the pattern.
    fn find(&self, pattern: &TriplePattern) -> TripleIter;

    /// Check whether the triple is present.
    fn contains(&self, triple: &Triple) -> GraphResult<bool>;

    /// Insert a triple. Inserting a present triple is a no-op.
    fn add(&mut self, triple: Triple) -> GraphResult<()>;

    /// Delete a triple. Deleting an absent triple is a no-op.
    fn delete(&mut self, triple: &Triple) -> GraphResult<()>;

    /// Number of triples.
    fn size(&self) -> GraphResult<usize>;

    fn is_empty(&self) -> GraphResult<bool> {
        Ok(self.size()? == 0)
    }

    /// Delete every triple.
    fn clear(&mut self) -> GraphResult<()> {
        let all = self.find(&TriplePattern::ANY).collect::<GraphResult<Vec<_>>>()?;
        for triple in &all {
            self.delete(triple)?;
        }
        Ok(())
    }

    /// Release the store. Irreversible.
    fn close(&mut self);

    fn is_closed(&self) -> bool;
}

/// A graph shared between several composites.
pub type SharedGraph = Rc<RefCell<dyn Graph>>;

/// Wrap a graph so it can be shared.
pub fn shared<G: Graph + 'static>(graph: G) -> SharedGraph {
    Rc::new(RefCell::new(graph))
}

/// Identity key of a shared graph (two handles to one store compare equal).
pub fn graph_key(graph: &SharedGraph) -> usize {
    Rc::as_ptr(graph) as *const () as usize
}

/// Check whether two handles refer to the same store.
pub fn same_graph(a: &SharedGraph, b: &SharedGraph) -> bool {
    graph_key(a) == graph_key(b)
}
