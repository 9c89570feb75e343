//! Onto Core Types
//!
//! This crate provides the foundational types shared by the hierarchy and
//! union-graph crates:
//! - Opaque graph vertices (Node)
//! - Triples and triple patterns (Triple, TriplePattern)
//! - Model-level controls (ModelControls)
//! - Common error types

mod config;
mod error;
pub mod messages;
mod triple;

pub use config::*;
pub use error::*;
pub use triple::*;
