//! Onto Union Graph
//!
//! A composite graph made of one mutable base graph and any number of
//! read-only sub-graphs. Sub-graphs may themselves be union graphs, so a
//! composition forms a graph of graphs that can contain cycles:
//! - Pattern matching across every leaf, with optional de-duplication
//! - Writes only ever reach the base graph
//! - A cached flattened view of the leaves, reset on any structural change
//! - Weak links back to the composites that include a union graph
//! - Listener notification with an on/off switch
//!
//! Handles are single-threaded (`Rc`) and cheap to clone.

mod builder;
mod composite;
mod events;
mod find;
mod graph_ref;
mod sub_graphs;

pub use builder::UnionGraphBuilder;
pub use composite::UnionGraph;
pub use events::{EventManager, UnionGraphListener};
pub use find::FindIter;
pub use graph_ref::GraphRef;
pub use sub_graphs::SubGraphs;
