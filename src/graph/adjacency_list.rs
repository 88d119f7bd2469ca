use crate::graph::Weight;
use std::ops::Index;

/// Per-vertex `(neighbor, weight)` pairs derived from an adjacency matrix.
///
/// Neighbors appear in ascending order. The list is a snapshot: later
/// mutations of the graph it was taken from are not reflected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    lists: Vec<Vec<(usize, Weight)>>,
}

impl From<Vec<Vec<(usize, Weight)>>> for AdjacencyList {
    fn from(lists: Vec<Vec<(usize, Weight)>>) -> Self {
        Self { lists }
    }
}

impl AdjacencyList {
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn neighbors(&self, u: usize) -> &[(usize, Weight)] {
        self.lists[u].as_slice()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[(usize, Weight)])> + '_ {
        self.lists
            .iter()
            .enumerate()
            .map(|(u, list)| (u, list.as_slice()))
    }
}

impl Index<usize> for AdjacencyList {
    type Output = [(usize, Weight)];

    fn index(&self, u: usize) -> &Self::Output {
        self.neighbors(u)
    }
}
