use crate::graph::adjacency_matrix::{checked_order, AdjacencyMatrix};
use crate::graph::base_graph::{BaseGraph, GraphKind};
use crate::graph::error::GraphError;
use crate::graph::mutable_graph::MutableGraph;
use crate::graph::Weight;
use crate::render;
use std::convert::TryFrom;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectedGraph {
    matrix: AdjacencyMatrix,
}

impl TryFrom<i64> for DirectedGraph {
    type Error = GraphError;

    fn try_from(order: i64) -> Result<Self, Self::Error> {
        Ok(Self::new(checked_order(order)?))
    }
}

impl BaseGraph for DirectedGraph {
    fn kind(&self) -> GraphKind {
        GraphKind::Directed
    }

    fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }
}

impl MutableGraph for DirectedGraph {
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

impl fmt::Display for DirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&render::graph(self.kind(), &self.matrix))
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::base_graph::BaseGraph;
    use crate::graph::directed_graph::DirectedGraph;
    use crate::graph::error::GraphErrorKind;
    use crate::graph::mutable_graph::MutableGraph;
    use std::convert::TryFrom;

    #[test]
    fn test_order() {
        let mut graph = DirectedGraph::new(0);
        assert_eq!(graph.order(), 0);

        assert_eq!(graph.add_vertex(), 0);
        assert_eq!(graph.add_vertex(), 1);
        assert_eq!(graph.order(), 2);
        graph.remove_vertex(0).unwrap();
        assert_eq!(graph.order(), 1);

        let err = DirectedGraph::try_from(-3).unwrap_err();
        assert_eq!(err.kind(), GraphErrorKind::InvalidArgument);
    }

    #[test]
    fn edges_are_one_way() {
        let mut graph = DirectedGraph::new(3);
        graph.add_weighted_edge(0, 1, 4);
        graph.add_weighted_edge(1, 0, 9);
        assert_eq!(graph.weight(0, 1), Some(4));
        assert_eq!(graph.weight(1, 0), Some(9));

        graph.remove_edge(0, 1);
        assert!(!graph.has_edge(0, 1));
        assert!(graph.has_edge(1, 0));

        graph.add_edge(2, 0);
        assert_eq!(graph.weight(2, 0), Some(1));
        assert_eq!(graph.weight(0, 2), Some(0));
    }

    #[test]
    fn out_of_range_edges_are_ignored() {
        let mut graph = DirectedGraph::new(3);
        graph.add_edge(0, 1);
        let before = graph.clone();

        graph.add_edge(0, 3);
        graph.add_weighted_edge(7, 1, 2);
        graph.remove_edge(0, 3);
        graph.remove_edge(3, 0);
        assert_eq!(graph, before);
    }

    #[test]
    fn remove_vertex_drops_incident_edges() {
        let mut graph = DirectedGraph::new(3);
        graph.add_edges(&[(0, 1), (1, 2), (2, 0)]);
        graph.remove_vertex(1).unwrap();
        let neighbors: Vec<_> = graph.neighborhood(1).collect();
        assert_eq!(neighbors, vec![0]);
        assert_eq!(graph.edge_count(), 1);

        let err = graph.remove_vertex(2).unwrap_err();
        assert_eq!(err.kind(), GraphErrorKind::OutOfRange);
        assert_eq!(graph.order(), 2);
    }
}
