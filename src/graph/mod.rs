pub use kruskal_edge::KruskalEdge;
pub use unordered_pair::UnorderedPair;
pub use wu_graph::{Neighbors, WUGraph};

/// Edge weight.
pub type Weight = i32;

mod kruskal_edge;
mod records;
mod unordered_pair;
mod wu_graph;
