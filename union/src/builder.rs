//! Union graph construction.

use crate::{EventManager, GraphRef, SubGraphs, UnionGraph};
use onto_core::messages::{ERR_CLOSED_BASE, ERR_CLOSED_SUB_GRAPH};
use onto_core::{GraphError, GraphResult, ModelControls};
use std::rc::Rc;

/// Builder for [`UnionGraph`].
///
/// Defaults: distinct, no sub-graphs, a fresh event manager.
#[derive(Debug)]
pub struct UnionGraphBuilder {
    base: GraphRef,
    sub_graphs: SubGraphs,
    events: Option<Rc<EventManager>>,
    distinct: bool,
}

impl UnionGraphBuilder {
    pub(crate) fn new(base: GraphRef) -> Self {
        Self {
            base,
            sub_graphs: SubGraphs::new(),
            events: None,
            distinct: true,
        }
    }

    /// Whether `find` drops triples already yielded by another leaf.
    pub fn distinct(mut self, distinct: bool) -> Self {
        self.distinct = distinct;
        self
    }

    /// Initial sub-graphs.
    pub fn sub_graphs(mut self, sub_graphs: SubGraphs) -> Self {
        self.sub_graphs = sub_graphs;
        self
    }

    /// Share an event manager with other union graphs.
    pub fn event_manager(mut self, events: Rc<EventManager>) -> Self {
        self.events = Some(events);
        self
    }

    /// Take the `distinct` flag from model controls.
    pub fn controls(mut self, controls: &ModelControls) -> Self {
        self.distinct = controls.distinct_union;
        self
    }

    pub fn build(self) -> GraphResult<UnionGraph> {
        if self.base.is_closed() {
            return Err(GraphError::configuration(ERR_CLOSED_BASE));
        }
        if self.sub_graphs.graphs().iter().any(GraphRef::is_closed) {
            return Err(GraphError::configuration(ERR_CLOSED_SUB_GRAPH));
        }
        let union = UnionGraph::assemble(
            self.base,
            self.sub_graphs,
            self.events.unwrap_or_default(),
            self.distinct,
        );
        tracing::debug!(
            union = union.id(),
            distinct = union.is_distinct(),
            sub_graphs = union.sub_graphs().len(),
            "union graph built"
        );
        Ok(union)
    }
}
