//! Weighted, undirected graph with O(1) vertex and edge updates.
//!
//! [`WUGraph`] indexes vertices and edges by hash and keeps a linked
//! adjacency list per vertex, with edges and list nodes cross-referenced
//! through stable arena handles. [`KruskalEdge`] is the weight-ordered edge
//! record consumed by minimum spanning tree routines.
pub mod datastructures;
pub mod generate;
pub mod graph;
pub mod io;
#[cfg(feature = "logging")]
pub mod logging;

pub use graph::{KruskalEdge, Neighbors, UnorderedPair, WUGraph, Weight};
