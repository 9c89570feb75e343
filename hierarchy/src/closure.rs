//! Transitive closure traversal.

use crate::direct::{direct_nodes_builtin, direct_nodes_standard};
use std::collections::{HashSet, VecDeque};
use std::hash::Hash;
use std::mem;

/// Lazy sequence of hierarchy nodes, root excluded.
///
/// Produced by [`crate::tree_nodes`]. In closure mode nodes are discovered
/// breadth-first while the sequence is consumed; in direct mode the direct
/// set is computed on the first call to `next`. After an error the sequence
/// is finished.
pub struct TreeNodes<N, F> {
    state: State<N, F>,
}

enum State<N, F> {
    Closure(ClosureWalk<N, F>),
    Direct {
        root: N,
        list_children: F,
        builtin: bool,
    },
    Ready(std::vec::IntoIter<N>),
    Done,
}

/// Breadth-first walk. Every node is expanded at most once.
struct ClosureWalk<N, F> {
    list_children: F,
    queue: VecDeque<N>,
    seen: HashSet<N>,
    ready: VecDeque<N>,
}

impl<N, F> TreeNodes<N, F>
where
    N: Clone + Eq + Hash,
{
    pub(crate) fn closure(root: N, list_children: F) -> Self {
        let mut seen = HashSet::new();
        seen.insert(root.clone());
        Self {
            state: State::Closure(ClosureWalk {
                queue: VecDeque::from([root]),
                list_children,
                seen,
                ready: VecDeque::new(),
            }),
        }
    }

    pub(crate) fn direct(root: N, list_children: F, builtin: bool) -> Self {
        Self {
            state: State::Direct {
                root,
                list_children,
                builtin,
            },
        }
    }
}

impl<N, F, I, E> Iterator for TreeNodes<N, F>
where
    N: Clone + Eq + Hash,
    F: FnMut(&N) -> Result<I, E>,
    I: IntoIterator<Item = N>,
{
    type Item = Result<N, E>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match &mut self.state {
                State::Closure(walk) => {
                    if let Some(node) = walk.ready.pop_front() {
                        return Some(Ok(node));
                    }
                    let current = match walk.queue.pop_front() {
                        Some(current) => current,
                        None => {
                            self.state = State::Done;
                            return None;
                        }
                    };
                    let children = match (walk.list_children)(&current) {
                        Ok(children) => children,
                        Err(e) => {
                            self.state = State::Done;
                            return Some(Err(e));
                        }
                    };
                    for child in children {
                        if walk.seen.insert(child.clone()) {
                            walk.queue.push_back(child.clone());
                            walk.ready.push_back(child);
                        }
                    }
                }
                State::Direct { .. } => {
                    if let State::Direct {
                        root,
                        list_children,
                        builtin,
                    } = mem::replace(&mut self.state, State::Done)
                    {
                        let computed = if builtin {
                            direct_nodes_builtin(&root, list_children)
                        } else {
                            direct_nodes_standard(&root, list_children)
                        };
                        match computed {
                            Ok(nodes) => self.state = State::Ready(nodes.into_iter()),
                            Err(e) => return Some(Err(e)),
                        }
                    }
                }
                State::Ready(nodes) => {
                    let next = nodes.next();
                    if next.is_none() {
                        self.state = State::Done;
                    }
                    return next.map(Ok);
                }
                State::Done => return None,
            }
        }
    }
}

/// All nodes reachable from any of `roots`, the roots themselves included.
///
/// An empty forest yields an empty set.
pub fn all_nodes_inclusive<N, F, I, E>(
    roots: impl IntoIterator<Item = N>,
    mut list_children: F,
) -> Result<HashSet<N>, E>
where
    N: Clone + Eq + Hash,
    F: FnMut(&N) -> Result<I, E>,
    I: IntoIterator<Item = N>,
{
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    for root in roots {
        if seen.insert(root.clone()) {
            queue.push_back(root);
        }
    }
    while let Some(current) = queue.pop_front() {
        for child in list_children(&current)? {
            if seen.insert(child.clone()) {
                queue.push_back(child);
            }
        }
    }
    Ok(seen)
}
