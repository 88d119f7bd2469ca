use crate::graph::adjacency_matrix::{checked_order, AdjacencyMatrix};
use crate::graph::base_graph::{BaseGraph, GraphKind};
use crate::graph::error::GraphError;
use crate::graph::mutable_graph::MutableGraph;
use crate::graph::Weight;
use crate::render;
use std::convert::TryFrom;
use std::fmt;

/// Directed graph whose edges carry arbitrary nonzero weights.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeightedGraph {
    matrix: AdjacencyMatrix,
}

impl TryFrom<i64> for WeightedGraph {
    type Error = GraphError;

    fn try_from(order: i64) -> Result<Self, Self::Error> {
        Ok(Self::new(checked_order(order)?))
    }
}

impl WeightedGraph {
    /// All edges as `(u, v, weight)` in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, Weight)> + '_ {
        self.matrix.entries()
    }

    pub fn total_weight(&self) -> i64 {
        self.edges().map(|(_, _, w)| w as i64).sum()
    }
}

impl BaseGraph for WeightedGraph {
    fn kind(&self) -> GraphKind {
        GraphKind::Weighted
    }

    fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }
}

impl MutableGraph for WeightedGraph {
    fn new(order: usize) -> Self {
        Self {
            matrix: AdjacencyMatrix::new(order),
        }
    }

    fn add_vertex(&mut self) -> usize {
        self.matrix.push_vertex()
    }

    fn remove_vertex(&mut self, u: usize) -> Result<(), GraphError> {
        self.matrix.remove_vertex(u)
    }

    fn add_weighted_edge(&mut self, u: usize, v: usize, weight: Weight) {
        self.matrix.set(u, v, weight);
    }

    fn remove_edge(&mut self, u: usize, v: usize) {
        self.matrix.set(u, v, 0);
    }
}

impl fmt::Display for WeightedGraph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&render::graph(self.kind(), &self.matrix))
    }
}
