use crate::graph::adjacency_matrix::{checked_order, AdjacencyMatrix};
use crate::graph::base_graph::{BaseGraph, GraphKind};
use crate::graph::error::GraphError;
use crate::graph::mutable_graph::MutableGraph;
use crate::graph::Weight;
use crate::render;
use std::convert::TryFrom;
use std::fmt;

/// Every edge is stored at both `(u, v)` and `(v, u)`, so the matrix stays
/// symmetric.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UndirectedGraph {
    matrix: AdjacencyMatrix,
}

impl TryFrom<i64> for UndirectedGraph {
    type Error = GraphError;

    fn try_from(order: i64) -> Result<Self, Self::Error> {
        Ok(Self::new(checked_order(order)?))
    }
}

impl UndirectedGraph {
    fn set_both(&mut self, u: usize, v: usize, weight: Weight) {
        if self.matrix.set(u, v, weight) {
            self.matrix.set(v, u, weight);
        }
    }
}

impl BaseGraph for UndirectedGraph {
    fn kind(&self) -> GraphKind {
        GraphKind::Undirected
    }

    fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }
}

impl MutableGraph for UndirectedGraph {
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
        self.set_both(u, v, weight);
    }

    fn remove_edge(&mut self, u: usize, v: usize) {
        self.set_both(u, v, 0);
    }
}

impl fmt::Display for UndirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&render::graph(self.kind(), &self.matrix))
    }
}
