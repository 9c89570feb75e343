//! The union graph.

use crate::find::FindIter;
use crate::graph_ref::{read, write};
use crate::{EventManager, GraphRef, SubGraphs, UnionGraphBuilder, UnionGraphListener};
use onto_core::messages::ERR_CLOSED_SUB_GRAPH;
use onto_core::{GraphError, GraphResult, Triple, TriplePattern};
use onto_graph::{graph_key, SharedGraph};
use std::cell::{Cell, RefCell};
use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::rc::{Rc, Weak};

/// A mutable base graph layered over read-only sub-graphs.
///
/// `UnionGraph` is a handle: cloning it gives another handle to the same
/// composite. Reads see the base and every sub-graph, recursively; writes
/// only reach the base.
///
/// # Example
///
/// ```
/// use onto_core::{triple, TriplePattern};
/// use onto_graph::{shared, MemGraph};
/// use onto_union::UnionGraph;
///
/// let imports = UnionGraph::new(shared(MemGraph::from_triples([triple!("A", "subClassOf", "B")]))).unwrap();
/// let ontology = UnionGraph::new(shared(MemGraph::new())).unwrap();
/// ontology.add_sub_graph(&imports).unwrap();
///
/// ontology.add(triple!("C", "subClassOf", "A")).unwrap();
/// assert_eq!(ontology.size().unwrap(), 2);
/// assert_eq!(ontology.base_graph().size().unwrap(), 1);
/// ```
#[derive(Clone)]
pub struct UnionGraph {
    inner: Rc<Inner>,
}

struct Inner {
    base: GraphRef,
    sub_graphs: RefCell<SubGraphs>,
    /// Composites that list this one as a sub-graph
    parents: RefCell<Vec<Weak<Inner>>>,
    /// Flattened leaves, base first; `None` until computed
    descendant_bases: RefCell<Option<Rc<[SharedGraph]>>>,
    distinct: bool,
    closed: Cell<bool>,
    events: Rc<EventManager>,
}

impl UnionGraph {
    /// Create a distinct union graph over `base` with no sub-graphs.
    pub fn new(base: impl Into<GraphRef>) -> GraphResult<Self> {
        Self::builder(base).build()
    }

    pub fn builder(base: impl Into<GraphRef>) -> UnionGraphBuilder {
        UnionGraphBuilder::new(base.into())
    }

    /// Assemble a union graph from validated parts.
    pub(crate) fn assemble(base: GraphRef, sub_graphs: SubGraphs, events: Rc<EventManager>, distinct: bool) -> Self {
        let union = Self {
            inner: Rc::new(Inner {
                base,
                sub_graphs: RefCell::new(SubGraphs::new()),
                parents: RefCell::new(Vec::new()),
                descendant_bases: RefCell::new(None),
                distinct,
                closed: Cell::new(false),
                events,
            }),
        };
        for graph in sub_graphs.graphs().iter().chain([&union.inner.base]) {
            if let Some(child) = graph.as_union() {
                child.add_parent(&union);
            }
        }
        *union.inner.sub_graphs.borrow_mut() = sub_graphs;
        union
    }

    /// Identity key, stable for the lifetime of the composite.
    pub fn id(&self) -> usize {
        Rc::as_ptr(&self.inner) as usize
    }

    /// Check whether two handles refer to the same composite.
    pub fn ptr_eq(&self, other: &UnionGraph) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn base_graph(&self) -> &GraphRef {
        &self.inner.base
    }

    pub fn is_distinct(&self) -> bool {
        self.inner.distinct
    }

    pub fn event_manager(&self) -> &Rc<EventManager> {
        &self.inner.events
    }

    pub fn is_closed(&self) -> bool {
        self.inner.closed.get()
    }

    /// Snapshot of the sub-graphs, in insertion order.
    pub fn sub_graphs(&self) -> Vec<GraphRef> {
        self.inner.sub_graphs.borrow().graphs().to_vec()
    }

    pub fn has_sub_graph(&self) -> bool {
        !self.inner.sub_graphs.borrow().is_empty()
    }

    /// The live composites that list this graph as a sub-graph.
    pub fn super_graphs(&self) -> Vec<UnionGraph> {
        let mut parents = self.inner.parents.borrow_mut();
        parents.retain(|parent| parent.strong_count() > 0);
        parents
            .iter()
            .filter_map(Weak::upgrade)
            .map(|inner| UnionGraph { inner })
            .collect()
    }

    fn check_open(&self) -> GraphResult<()> {
        if self.is_closed() {
            return Err(GraphError::Closed);
        }
        Ok(())
    }

    fn dispatch(&self, event: impl Fn(&dyn UnionGraphListener)) {
        self.inner.events.dispatch(event);
    }

    // ------------------------------------------------------------------
    // Structure
    // ------------------------------------------------------------------

    /// Append a sub-graph. The same graph may be added more than once.
    pub fn add_sub_graph(&self, graph: impl Into<GraphRef>) -> GraphResult<()> {
        let graph = graph.into();
        self.check_open()?;
        if graph.is_closed() {
            return Err(GraphError::configuration(ERR_CLOSED_SUB_GRAPH));
        }
        self.dispatch(|l| l.on_add_sub_graph(self, &graph));
        self.inner.sub_graphs.borrow_mut().add(graph.clone());
        if let Some(child) = graph.as_union() {
            child.add_parent(self);
        }
        self.reset_graphs_cache();
        tracing::debug!(union = self.id(), sub_graph = graph.id(), "sub-graph added");
        self.dispatch(|l| l.notify_sub_graph_added(self, &graph));
        if let Some(child) = graph.as_union() {
            child.dispatch(|l| l.notify_super_graph_added(child, self));
        }
        Ok(())
    }

    /// Remove the first occurrence of a sub-graph. Absent graphs are ignored.
    pub fn remove_sub_graph(&self, graph: impl Into<GraphRef>) -> GraphResult<()> {
        let graph = graph.into();
        self.check_open()?;
        self.dispatch(|l| l.on_remove_sub_graph(self, &graph));
        let still_present = {
            let mut sub_graphs = self.inner.sub_graphs.borrow_mut();
            sub_graphs.remove(&graph);
            sub_graphs.contains(&graph)
        };
        if let Some(child) = graph.as_union() {
            if !still_present {
                child.remove_parent(self);
            }
        }
        self.reset_graphs_cache();
        tracing::debug!(union = self.id(), sub_graph = graph.id(), "sub-graph removed");
        self.dispatch(|l| l.notify_sub_graph_removed(self, &graph));
        Ok(())
    }

    fn add_parent(&self, parent: &UnionGraph) {
        let mut parents = self.inner.parents.borrow_mut();
        parents.retain(|p| p.strong_count() > 0);
        if !parents.iter().any(|p| p.as_ptr() == Rc::as_ptr(&parent.inner)) {
            parents.push(Rc::downgrade(&parent.inner));
        }
    }

    fn remove_parent(&self, parent: &UnionGraph) {
        self.inner
            .parents
            .borrow_mut()
            .retain(|p| p.strong_count() > 0 && p.as_ptr() != Rc::as_ptr(&parent.inner));
    }

    /// Every composite connected to this one through sub-graph or base
    /// links in either direction, itself included.
    fn linked_union_graphs(&self) -> Vec<UnionGraph> {
        let mut visited = HashSet::from([self.id()]);
        let mut found = vec![self.clone()];
        let mut queue = VecDeque::from([self.clone()]);
        while let Some(next) = queue.pop_front() {
            let mut neighbours: Vec<UnionGraph> = next
                .inner
                .sub_graphs
                .borrow()
                .graphs()
                .iter()
                .chain(std::iter::once(&next.inner.base))
                .filter_map(GraphRef::as_union)
                .cloned()
                .collect();
            neighbours.extend(next.super_graphs());
            for union in neighbours {
                if visited.insert(union.id()) {
                    found.push(union.clone());
                    queue.push_back(union);
                }
            }
        }
        found
    }

    fn reset_graphs_cache(&self) {
        let linked = self.linked_union_graphs();
        for union in &linked {
            union.inner.descendant_bases.borrow_mut().take();
        }
        tracing::trace!(union = self.id(), linked = linked.len(), "graphs cache reset");
    }

    /// Every indivisible graph in the composition, each once, base first.
    ///
    /// The result is cached until the structure of any linked composite
    /// changes.
    pub fn list_sub_graph_bases(&self) -> Rc<[SharedGraph]> {
        if let Some(cached) = self.inner.descendant_bases.borrow().as_ref() {
            return Rc::clone(cached);
        }
        let bases: Rc<[SharedGraph]> = self.collect_bases().into();
        *self.inner.descendant_bases.borrow_mut() = Some(Rc::clone(&bases));
        bases
    }

    fn collect_bases(&self) -> Vec<SharedGraph> {
        let mut bases = Vec::new();
        let mut seen_leaves = HashSet::new();
        let mut visited = HashSet::new();
        let mut queue = VecDeque::from([GraphRef::Composite(self.clone())]);
        while let Some(next) = queue.pop_front() {
            match next {
                GraphRef::Composite(union) => {
                    if visited.insert(union.id()) {
                        queue.push_back(union.inner.base.clone());
                        queue.extend(union.inner.sub_graphs.borrow().graphs().iter().cloned());
                    }
                }
                GraphRef::Leaf(graph) => {
                    if seen_leaves.insert(graph_key(&graph)) {
                        bases.push(graph);
                    }
                }
            }
        }
        bases
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// Find the triples matching `pattern` in the whole composition.
    pub fn find(&self, pattern: &TriplePattern) -> GraphResult<FindIter> {
        self.check_open()?;
        if !self.has_sub_graph() {
            return Ok(FindIter::single(self.inner.base.find(pattern)));
        }
        Ok(FindIter::over_leaves(
            pattern.clone(),
            self.list_sub_graph_bases(),
            self.inner.distinct,
        ))
    }

    pub fn contains(&self, triple: &Triple) -> GraphResult<bool> {
        self.check_open()?;
        if self.inner.base.contains(triple)? {
            return Ok(true);
        }
        if !self.has_sub_graph() {
            return Ok(false);
        }
        let base = self.inner.base.as_leaf();
        for leaf in self.list_sub_graph_bases().iter() {
            if base.map_or(false, |b| Rc::ptr_eq(b, leaf)) {
                continue;
            }
            if read(leaf)?.contains(triple)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Number of triples. Without distinct mode a triple held by several
    /// leaves is counted once per leaf.
    pub fn size(&self) -> GraphResult<usize> {
        self.check_open()?;
        if !self.has_sub_graph() {
            return self.inner.base.size();
        }
        self.find(&TriplePattern::ANY)?
            .try_fold(0, |count, found| found.map(|_| count + 1))
    }

    pub fn is_empty(&self) -> GraphResult<bool> {
        self.check_open()?;
        if !self.has_sub_graph() {
            return self.inner.base.is_empty();
        }
        Ok(self.find(&TriplePattern::ANY)?.next().transpose()?.is_none())
    }

    // ------------------------------------------------------------------
    // Writes
    // ------------------------------------------------------------------

    /// Add a triple to the base, unless a sub-graph already supplies it.
    pub fn add(&self, triple: Triple) -> GraphResult<()> {
        self.check_open()?;
        self.dispatch(|l| l.on_add_triple(self, &triple));
        let sub_graphs = self.inner.sub_graphs.borrow().clone();
        if !sub_graphs.contains_triple(&triple)? {
            tracing::trace!(union = self.id(), %triple, "add to base");
            self.inner.base.add(triple.clone())?;
        }
        self.dispatch(|l| l.notify_triple_added(self, &triple));
        Ok(())
    }

    /// Delete a triple from the base. Sub-graphs are never touched.
    pub fn delete(&self, triple: &Triple) -> GraphResult<()> {
        self.check_open()?;
        self.dispatch(|l| l.on_delete_triple(self, triple));
        tracing::trace!(union = self.id(), %triple, "delete from base");
        self.inner.base.delete(triple)?;
        self.dispatch(|l| l.notify_triple_deleted(self, triple));
        Ok(())
    }

    /// Delete from the base every triple of the composition matching
    /// `pattern`.
    pub fn remove(&self, pattern: &TriplePattern) -> GraphResult<()> {
        self.check_open()?;
        let matching = self.find(pattern)?.collect::<GraphResult<Vec<_>>>()?;
        for triple in &matching {
            self.delete(triple)?;
        }
        tracing::debug!(union = self.id(), %pattern, removed = matching.len(), "pattern removed");
        self.dispatch(|l| l.notify_removed(self, pattern));
        Ok(())
    }

    /// Delete every triple of the base.
    pub fn clear(&self) -> GraphResult<()> {
        self.check_open()?;
        self.dispatch(|l| l.on_clear(self));
        self.inner.base.clear()?;
        self.dispatch(|l| l.notify_cleared(self));
        Ok(())
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Close every leaf of the composition and every linked composite.
    ///
    /// Irreversible. Closing a closed graph does nothing. Every leaf is
    /// borrowed before any is closed: if one is busy nothing changes.
    pub fn close(&self) -> GraphResult<()> {
        if self.is_closed() {
            return Ok(());
        }
        let leaves = self.list_sub_graph_bases();
        let mut held = leaves.iter().map(write).collect::<GraphResult<Vec<_>>>()?;
        for leaf in &mut held {
            leaf.close();
        }
        drop(held);
        let linked = self.linked_union_graphs();
        for union in &linked {
            union.inner.closed.set(true);
        }
        tracing::debug!(
            union = self.id(),
            leaves = leaves.len(),
            composites = linked.len(),
            "union graph closed"
        );
        Ok(())
    }
}

impl PartialEq for UnionGraph {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for UnionGraph {}

impl fmt::Debug for UnionGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnionGraph(@{:x})", self.id())
    }
}
