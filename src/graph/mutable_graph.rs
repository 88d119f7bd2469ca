use crate::graph::base_graph::BaseGraph;
use crate::graph::error::GraphError;
use crate::graph::{Weight, DEFAULT_WEIGHT};

pub trait MutableGraph: BaseGraph {
    fn new(order: usize) -> Self;

    /// Appends an isolated vertex and returns its index, always `order() - 1`.
    fn add_vertex(&mut self) -> usize;

    /// Removes `u` together with all incident edges. Vertices above `u` are
    /// renumbered down by one.
    fn remove_vertex(&mut self, u: usize) -> Result<(), GraphError>;

    /// Out-of-range endpoints are ignored.
    fn add_weighted_edge(&mut self, u: usize, v: usize, weight: Weight);

    /// Out-of-range endpoints are ignored.
    fn remove_edge(&mut self, u: usize, v: usize);

    fn add_edge(&mut self, u: usize, v: usize) {
        self.add_weighted_edge(u, v, DEFAULT_WEIGHT);
    }

    fn add_edges(&mut self, edges: &[(usize, usize)]) {
        for (u, v) in edges {
            self.add_edge(*u, *v);
        }
    }
}
