//! Reachability tree used by the built-in direct computation.
//!
//! Nodes live in an arena indexed by discovery order, so identity checks
//! and equivalence-class lookups are plain integer comparisons.

use crate::cache::ChildrenCache;
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

const ROOT: usize = 0;
const UNVISITED: usize = usize::MAX;

/// Everything reachable from one root, with one-hop edges.
pub(crate) struct HierarchyTree<N> {
    nodes: Vec<N>,
    index: HashMap<N, usize>,
    children: Vec<Vec<usize>>,
}

impl<N> HierarchyTree<N>
where
    N: Clone + Eq + Hash,
{
    /// Walk breadth-first from `root`, listing each node's children once.
    pub fn build<F, I, E>(root: N, cache: &mut ChildrenCache<N, F>) -> Result<Self, E>
    where
        F: FnMut(&N) -> Result<I, E>,
        I: IntoIterator<Item = N>,
    {
        let mut tree = Self {
            nodes: vec![root.clone()],
            index: HashMap::from([(root, ROOT)]),
            children: vec![Vec::new()],
        };
        let mut queue = VecDeque::from([ROOT]);
        while let Some(id) = queue.pop_front() {
            let listed = cache.children(&tree.nodes[id])?.to_vec();
            let mut edges = Vec::with_capacity(listed.len());
            for child in listed {
                let child_id = match tree.index.get(&child) {
                    Some(&existing) => existing,
                    None => {
                        let fresh = tree.nodes.len();
                        tree.index.insert(child.clone(), fresh);
                        tree.nodes.push(child);
                        tree.children.push(Vec::new());
                        queue.push_back(fresh);
                        fresh
                    }
                };
                edges.push(child_id);
            }
            tree.children[id] = edges;
        }
        tracing::trace!(
            nodes = tree.nodes.len(),
            edges = tree.children.iter().map(Vec::len).sum::<usize>(),
            "hierarchy tree built"
        );
        Ok(tree)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Equivalence class of every node (strongly connected components).
    ///
    /// Tarjan's algorithm driven by an explicit stack of `(node, next edge)`
    /// frames, so deep hierarchies cannot overflow the call stack.
    pub fn components(&self) -> Vec<usize> {
        let n = self.nodes.len();
        let mut order = vec![UNVISITED; n];
        let mut low = vec![0; n];
        let mut on_stack = vec![false; n];
        let mut stack = Vec::new();
        let mut component = vec![UNVISITED; n];
        let mut next_order = 0;
        let mut next_component = 0;

        for start in 0..n {
            if order[start] != UNVISITED {
                continue;
            }
            let mut work = vec![(start, 0usize)];
            while let Some(&(v, edge)) = work.last() {
                if edge == 0 && order[v] == UNVISITED {
                    order[v] = next_order;
                    low[v] = next_order;
                    next_order += 1;
                    stack.push(v);
                    on_stack[v] = true;
                }
                if let Some(&w) = self.children[v].get(edge) {
                    if let Some(frame) = work.last_mut() {
                        frame.1 += 1;
                    }
                    if order[w] == UNVISITED {
                        work.push((w, 0));
                    } else if on_stack[w] {
                        low[v] = low[v].min(order[w]);
                    }
                    continue;
                }
                work.pop();
                if let Some(&(parent, _)) = work.last() {
                    low[parent] = low[parent].min(low[v]);
                }
                if low[v] == order[v] {
                    while let Some(w) = stack.pop() {
                        on_stack[w] = false;
                        component[w] = next_component;
                        if w == v {
                            break;
                        }
                    }
                    next_component += 1;
                }
            }
        }
        component
    }

    /// Direct children of the root, equivalents included.
    ///
    /// A child class is direct when it is not the root's own class and no
    /// other node outside the root's class reaches it without passing
    /// through the class itself.
    pub fn direct_children(&self) -> Vec<N> {
        let component = self.components();
        let root_class = component[ROOT];

        let mut candidates = Vec::new();
        for (id, children) in self.children.iter().enumerate() {
            if component[id] != root_class {
                continue;
            }
            for &child in children {
                let class = component[child];
                if class != root_class && !candidates.contains(&class) {
                    candidates.push(class);
                }
            }
        }

        let mut direct = Vec::new();
        for class in candidates {
            if self.is_shadowed(class, root_class, &component) {
                continue;
            }
            direct.extend(
                (0..self.nodes.len())
                    .filter(|&id| component[id] == class)
                    .map(|id| self.nodes[id].clone()),
            );
        }
        direct
    }

    /// Check whether `class` is reachable along a path that leaves the
    /// root's class before entering it.
    fn is_shadowed(&self, class: usize, root_class: usize, component: &[usize]) -> bool {
        let mut seen = vec![false; self.nodes.len()];
        seen[ROOT] = true;
        let mut queue = VecDeque::from([ROOT]);
        while let Some(id) = queue.pop_front() {
            let outside_root = component[id] != root_class;
            for &child in &self.children[id] {
                if component[child] == class {
                    if outside_root {
                        return true;
                    }
                    continue;
                }
                if !seen[child] {
                    seen[child] = true;
                    queue.push_back(child);
                }
            }
        }
        false
    }
}
