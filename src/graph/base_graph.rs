use crate::graph::adjacency_list::AdjacencyList;
use crate::graph::adjacency_matrix::AdjacencyMatrix;
use crate::graph::error::GraphError;
use crate::graph::Weight;
use std::fmt;
use std::fmt::Debug;
use std::str::FromStr;

/// The closed set of graph variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GraphKind {
    Directed,
    Undirected,
    Weighted,
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::Directed => f.write_str("directed"),
            Self::Undirected => f.write_str("undirected"),
            Self::Weighted => f.write_str("weighted"),
        }
    }
}

impl FromStr for GraphKind {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "directed" => Ok(Self::Directed),
            "undirected" => Ok(Self::Undirected),
            "weighted" => Ok(Self::Weighted),
            _ => {
                let msg = format!("Unknown graph kind '{}'.", s);
                Err(GraphError::invalid_argument(&msg))
            }
        }
    }
}

pub trait BaseGraph: Clone + Debug {
    fn kind(&self) -> GraphKind;
    fn matrix(&self) -> &AdjacencyMatrix;

    fn order(&self) -> usize {
        self.matrix().order()
    }

    fn has_vertex(&self, u: usize) -> bool {
        self.matrix().contains(u)
    }

    /// Weight of `u -> v`, `Some(0)` when absent, `None` when either index
    /// is not a vertex.
    fn weight(&self, u: usize, v: usize) -> Option<Weight> {
        self.matrix().get(u, v)
    }

    fn has_edge(&self, u: usize, v: usize) -> bool {
        matches!(self.weight(u, v), Some(w) if w != 0)
    }

    /// Number of nonzero matrix entries. An undirected edge counts twice.
    fn edge_count(&self) -> usize {
        self.matrix().nonzero_count()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = usize>> {
        Box::new(0..self.order())
    }

    fn neighborhood(&self, u: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(
            self.matrix()
                .row(u)
                .iter()
                .enumerate()
                .filter(|(_, w)| **w != 0)
                .map(|(v, _)| v),
        )
    }

    fn adjacency_list(&self) -> AdjacencyList {
        self.matrix().adjacency_list()
    }
}
