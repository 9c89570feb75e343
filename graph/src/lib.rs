//! Onto Graph Storage
//!
//! This crate provides the minimal graph capability the core consumes and an
//! indexed in-memory implementation of it:
//! - Graph trait: find / contains / add / delete / size / close
//! - Shared graph handles with identity comparison
//! - Subject, predicate and object indexes for pattern lookups

mod graph;
mod index;
mod mem;

pub use graph::*;
pub use mem::*;
