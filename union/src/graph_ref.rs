//! Leaf or composite graph handle.

use crate::UnionGraph;
use onto_core::messages::ERR_GRAPH_BUSY;
use onto_core::{GraphError, GraphResult, Triple, TriplePattern};
use onto_graph::{graph_key, Graph, SharedGraph, TripleIter};
use std::cell::{Ref, RefMut};
use std::fmt;
use std::iter;

/// A graph that can take part in a union: either an indivisible store or
/// another union graph.
///
/// Equality is identity: two handles are equal when they point at the same
/// store or the same composite.
#[derive(Clone)]
pub enum GraphRef {
    Leaf(SharedGraph),
    Composite(UnionGraph),
}

impl GraphRef {
    /// Identity key, stable for the lifetime of the graph.
    pub fn id(&self) -> usize {
        match self {
            GraphRef::Leaf(graph) => graph_key(graph),
            GraphRef::Composite(union) => union.id(),
        }
    }

    pub fn as_union(&self) -> Option<&UnionGraph> {
        match self {
            GraphRef::Composite(union) => Some(union),
            GraphRef::Leaf(_) => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&SharedGraph> {
        match self {
            GraphRef::Leaf(graph) => Some(graph),
            GraphRef::Composite(_) => None,
        }
    }

    pub fn find(&self, pattern: &TriplePattern) -> TripleIter {
        match self {
            GraphRef::Leaf(graph) => match read(graph) {
                Ok(graph) => graph.find(pattern),
                Err(e) => Box::new(iter::once(Err(e))),
            },
            GraphRef::Composite(union) => match union.find(pattern) {
                Ok(found) => Box::new(found),
                Err(e) => Box::new(iter::once(Err(e))),
            },
        }
    }

    pub fn contains(&self, triple: &Triple) -> GraphResult<bool> {
        match self {
            GraphRef::Leaf(graph) => read(graph)?.contains(triple),
            GraphRef::Composite(union) => union.contains(triple),
        }
    }

    pub fn add(&self, triple: Triple) -> GraphResult<()> {
        match self {
            GraphRef::Leaf(graph) => write(graph)?.add(triple),
            GraphRef::Composite(union) => union.add(triple),
        }
    }

    pub fn delete(&self, triple: &Triple) -> GraphResult<()> {
        match self {
            GraphRef::Leaf(graph) => write(graph)?.delete(triple),
            GraphRef::Composite(union) => union.delete(triple),
        }
    }

    pub fn clear(&self) -> GraphResult<()> {
        match self {
            GraphRef::Leaf(graph) => write(graph)?.clear(),
            GraphRef::Composite(union) => union.clear(),
        }
    }

    pub fn size(&self) -> GraphResult<usize> {
        match self {
            GraphRef::Leaf(graph) => read(graph)?.size(),
            GraphRef::Composite(union) => union.size(),
        }
    }

    pub fn is_empty(&self) -> GraphResult<bool> {
        match self {
            GraphRef::Leaf(graph) => read(graph)?.is_empty(),
            GraphRef::Composite(union) => union.is_empty(),
        }
    }

    pub fn is_closed(&self) -> bool {
        match self {
            GraphRef::Leaf(graph) => graph.try_borrow().map_or(false, |g| g.is_closed()),
            GraphRef::Composite(union) => union.is_closed(),
        }
    }
}

/// Borrow a leaf for reading.
pub(crate) fn read(graph: &SharedGraph) -> GraphResult<Ref<'_, dyn Graph + 'static>> {
    graph
        .try_borrow()
        .map_err(|_| GraphError::contract(ERR_GRAPH_BUSY))
}

/// Borrow a leaf for writing.
pub(crate) fn write(graph: &SharedGraph) -> GraphResult<RefMut<'_, dyn Graph + 'static>> {
    graph
        .try_borrow_mut()
        .map_err(|_| GraphError::contract(ERR_GRAPH_BUSY))
}

impl PartialEq for GraphRef {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (GraphRef::Leaf(_), GraphRef::Leaf(_)) | (GraphRef::Composite(_), GraphRef::Composite(_))
        ) && self.id() == other.id()
    }
}

impl Eq for GraphRef {}

impl fmt::Debug for GraphRef {
    // Leaf contents are not printed; a store may be large.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphRef::Leaf(graph) => write!(f, "Leaf(@{:x})", graph_key(graph)),
            GraphRef::Composite(union) => write!(f, "{union:?}"),
        }
    }
}

impl From<SharedGraph> for GraphRef {
    fn from(graph: SharedGraph) -> Self {
        GraphRef::Leaf(graph)
    }
}

impl From<&SharedGraph> for GraphRef {
    fn from(graph: &SharedGraph) -> Self {
        GraphRef::Leaf(graph.clone())
    }
}

impl From<UnionGraph> for GraphRef {
    fn from(union: UnionGraph) -> Self {
        GraphRef::Composite(union)
    }
}

impl From<&UnionGraph> for GraphRef {
    fn from(union: &UnionGraph) -> Self {
        GraphRef::Composite(union.clone())
    }
}
