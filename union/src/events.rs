//! Union graph events.
//!
//! Listeners hear about triple mutations and structural changes. The
//! `on_*` hooks fire before a change is applied, the `notify_*` hooks after.

use crate::{GraphRef, UnionGraph};
use onto_core::{Triple, TriplePattern};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Receives union graph events. Every method defaults to doing nothing.
pub trait UnionGraphListener {
    fn on_add_triple(&self, _graph: &UnionGraph, _triple: &Triple) {}

    fn on_delete_triple(&self, _graph: &UnionGraph, _triple: &Triple) {}

    fn notify_triple_added(&self, _graph: &UnionGraph, _triple: &Triple) {}

    fn notify_triple_deleted(&self, _graph: &UnionGraph, _triple: &Triple) {}

    fn on_add_sub_graph(&self, _graph: &UnionGraph, _sub_graph: &GraphRef) {}

    fn notify_sub_graph_added(&self, _graph: &UnionGraph, _sub_graph: &GraphRef) {}

    fn on_remove_sub_graph(&self, _graph: &UnionGraph, _sub_graph: &GraphRef) {}

    fn notify_sub_graph_removed(&self, _graph: &UnionGraph, _sub_graph: &GraphRef) {}

    /// `graph` was attached as a sub-graph of `super_graph`.
    fn notify_super_graph_added(&self, _graph: &UnionGraph, _super_graph: &UnionGraph) {}

    fn on_clear(&self, _graph: &UnionGraph) {}

    fn notify_cleared(&self, _graph: &UnionGraph) {}

    /// Every base triple matching `pattern` was deleted.
    fn notify_removed(&self, _graph: &UnionGraph, _pattern: &TriplePattern) {}
}

/// Holds the listeners of one or more union graphs.
///
/// `off` parks every registered listener; `on` brings them back. A listener
/// registered while muted is active straight away.
#[derive(Default)]
pub struct EventManager {
    active: RefCell<Vec<Rc<dyn UnionGraphListener>>>,
    inactive: RefCell<Vec<Rc<dyn UnionGraphListener>>>,
}

impl EventManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, listener: Rc<dyn UnionGraphListener>) {
        let mut active = self.active.borrow_mut();
        active.push(listener);
        tracing::debug!(listeners = active.len(), "union graph listener registered");
    }

    /// Remove a listener, active or parked. Returns false if it was unknown.
    pub fn unregister(&self, listener: &Rc<dyn UnionGraphListener>) -> bool {
        let before = self.len();
        self.active.borrow_mut().retain(|l| !Rc::ptr_eq(l, listener));
        self.inactive.borrow_mut().retain(|l| !Rc::ptr_eq(l, listener));
        self.len() != before
    }

    /// Snapshot of the active listeners.
    pub fn listeners(&self) -> Vec<Rc<dyn UnionGraphListener>> {
        self.active.borrow().clone()
    }

    pub fn has_listeners(&self) -> bool {
        !self.active.borrow().is_empty()
    }

    pub fn off(&self) {
        let parked: Vec<_> = self.active.borrow_mut().drain(..).collect();
        self.inactive.borrow_mut().extend(parked);
    }

    pub fn on(&self) {
        let restored: Vec<_> = self.inactive.borrow_mut().drain(..).collect();
        self.active.borrow_mut().extend(restored);
    }

    /// Check whether `off` has parked any listener.
    pub fn is_muted(&self) -> bool {
        !self.inactive.borrow().is_empty()
    }

    fn len(&self) -> usize {
        self.active.borrow().len() + self.inactive.borrow().len()
    }

    /// Call `event` on every active listener.
    ///
    /// Works on a snapshot, so listeners may register or unregister while
    /// being notified.
    pub(crate) fn dispatch(&self, event: impl Fn(&dyn UnionGraphListener)) {
        for listener in self.listeners() {
            event(listener.as_ref());
        }
    }
}

impl fmt::Debug for EventManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventManager")
            .field("active", &self.active.borrow().len())
            .field("inactive", &self.inactive.borrow().len())
            .finish()
    }
}
