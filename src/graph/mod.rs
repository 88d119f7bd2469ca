pub mod adjacency_list;
pub mod adjacency_matrix;
pub mod base_graph;
pub mod directed_graph;
pub mod error;
pub mod mutable_graph;
pub mod undirected_graph;
pub mod weighted_graph;

pub use adjacency_list::AdjacencyList;
pub use adjacency_matrix::{checked_order, AdjacencyMatrix};
pub use base_graph::{BaseGraph, GraphKind};
pub use directed_graph::DirectedGraph;
pub use error::{GraphError, GraphErrorKind};
pub use mutable_graph::MutableGraph;
pub use undirected_graph::UndirectedGraph;
pub use weighted_graph::WeightedGraph;

/// Edge weight stored in the adjacency matrix. `0` marks a missing edge.
pub type Weight = i32;

/// Weight given to edges of unweighted graphs.
pub const DEFAULT_WEIGHT: Weight = 1;
