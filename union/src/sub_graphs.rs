//! Ordered sub-graph container.

use crate::GraphRef;
use onto_core::{GraphResult, Triple};

/// The sub-graphs of a union graph, in insertion order.
///
/// The same graph may be present more than once.
#[derive(Debug, Clone, Default)]
pub struct SubGraphs {
    graphs: Vec<GraphRef>,
}

impl SubGraphs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, graph: GraphRef) {
        self.graphs.push(graph);
    }

    /// Remove the first entry identical to `graph`.
    pub fn remove(&mut self, graph: &GraphRef) -> bool {
        match self.graphs.iter().position(|g| g == graph) {
            Some(at) => {
                self.graphs.remove(at);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, graph: &GraphRef) -> bool {
        self.graphs.iter().any(|g| g == graph)
    }

    /// Check whether any sub-graph holds the triple.
    pub fn contains_triple(&self, triple: &Triple) -> GraphResult<bool> {
        for graph in &self.graphs {
            if graph.contains(triple)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    pub fn graphs(&self) -> &[GraphRef] {
        &self.graphs
    }

    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.graphs.len()
    }
}

impl FromIterator<GraphRef> for SubGraphs {
    fn from_iter<T: IntoIterator<Item = GraphRef>>(iter: T) -> Self {
        Self {
            graphs: iter.into_iter().collect(),
        }
    }
}
