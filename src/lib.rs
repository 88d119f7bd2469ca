pub mod generator;
pub mod graph;
pub mod render;

#[cfg(feature = "logging")]
pub mod logging;

pub use generator::ErdosRenyi;
pub use graph::{
    AdjacencyList, AdjacencyMatrix, BaseGraph, DirectedGraph, GraphError, GraphErrorKind,
    GraphKind, MutableGraph, UndirectedGraph, WeightedGraph,
};
