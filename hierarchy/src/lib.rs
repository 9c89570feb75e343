//! Onto Hierarchy Support
//!
//! Closure and direct-child queries over a caller-supplied relation
//! ("list the children of this node"). The relation may contain cycles,
//! self-loops and redundant edges:
//! - Transitive closure: every node reachable in one or more hops, root excluded
//! - Direct children (built-in): children of the root's equivalence class that
//!   are not shadowed by a longer path, materialised as whole equivalence classes
//! - Direct children (standard): one-hop children with one-hop shadow and
//!   mutual-edge filtering, for relations that are already materialised
//!
//! The relation is a closure `FnMut(&N) -> Result<I, E>`. Its errors are
//! returned to the caller untouched. Every top-level call owns its own memo
//! of listed children and drops it on return.

mod cache;
mod closure;
mod direct;
mod support;
mod tree;

pub use closure::{all_nodes_inclusive, TreeNodes};
pub use direct::{direct_nodes_builtin, direct_nodes_standard};
pub use support::{contains, tree_nodes, Traversal};
