//! Entry points for hierarchy queries.

use crate::closure::TreeNodes;
use crate::direct::direct_nodes_builtin;
use onto_core::ModelControls;
use std::hash::Hash;

/// Check whether `test` is a (direct) child of `root`.
///
/// With `direct` unset this is closure membership. With `direct` set and
/// `use_builtin` set, `test` must be in the equivalence-aware direct set;
/// otherwise it only has to be a one-hop child. A node is never its own
/// child, whatever the relation says.
pub fn contains<N, F, I, E>(
    root: &N,
    test: &N,
    mut list_children: F,
    direct: bool,
    use_builtin: bool,
) -> Result<bool, E>
where
    N: Clone + Eq + Hash,
    F: FnMut(&N) -> Result<I, E>,
    I: IntoIterator<Item = N>,
{
    if root == test {
        return Ok(false);
    }
    if !direct {
        for node in TreeNodes::closure(root.clone(), list_children) {
            if node? == *test {
                return Ok(true);
            }
        }
        return Ok(false);
    }
    if use_builtin {
        return Ok(direct_nodes_builtin(root, list_children)?.contains(test));
    }
    Ok(list_children(root)?.into_iter().any(|child| child == *test))
}

/// Lazy sequence of the children of `root`, root excluded.
///
/// With `direct` unset the sequence is the transitive closure. With
/// `direct` set it is the built-in or the standard direct set, depending
/// on `use_builtin`.
pub fn tree_nodes<N, F>(root: N, list_children: F, direct: bool, use_builtin: bool) -> TreeNodes<N, F>
where
    N: Clone + Eq + Hash,
{
    if direct {
        TreeNodes::direct(root, list_children, use_builtin)
    } else {
        TreeNodes::closure(root, list_children)
    }
}

/// How a hierarchy query walks the relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Traversal {
    pub direct: bool,
    pub builtin: bool,
}

impl Traversal {
    /// Full transitive closure.
    pub const fn closure() -> Self {
        Self {
            direct: false,
            builtin: true,
        }
    }

    /// Direct children only.
    pub const fn direct(builtin: bool) -> Self {
        Self { direct: true, builtin }
    }

    pub fn from_controls(controls: &ModelControls, direct: bool) -> Self {
        Self {
            direct,
            builtin: controls.use_builtin_hierarchy_support,
        }
    }

    pub fn contains<N, F, I, E>(&self, root: &N, test: &N, list_children: F) -> Result<bool, E>
    where
        N: Clone + Eq + Hash,
        F: FnMut(&N) -> Result<I, E>,
        I: IntoIterator<Item = N>,
    {
        contains(root, test, list_children, self.direct, self.builtin)
    }

    pub fn tree_nodes<N, F>(&self, root: N, list_children: F) -> TreeNodes<N, F>
    where
        N: Clone + Eq + Hash,
    {
        tree_nodes(root, list_children, self.direct, self.builtin)
    }
}

impl Default for Traversal {
    fn default() -> Self {
        Self::closure()
    }
}
