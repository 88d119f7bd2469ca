use crate::graph::adjacency_list::AdjacencyList;
use crate::graph::error::GraphError;
use crate::graph::Weight;
use std::convert::TryFrom;

#[cfg(feature = "log")]
use log::debug;

/// Validates a signed vertex count.
pub fn checked_order(order: i64) -> Result<usize, GraphError> {
    if order < 0 {
        let msg = format!("Vertex count must be non-negative, got {}.", order);
        return Err(GraphError::invalid_argument(&msg));
    }
    usize::try_from(order).map_err(|_| {
        let msg = format!("Vertex count {} does not fit into memory.", order);
        GraphError::invalid_argument(&msg)
    })
}

/// Square weight table shared by every graph variant.
///
/// Entry `(u, v)` holds the weight of the edge `u -> v`, `0` meaning the
/// edge is absent. The matrix is always `order() x order()`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AdjacencyMatrix {
    data: Vec<Vec<Weight>>,
}

impl TryFrom<i64> for AdjacencyMatrix {
    type Error = GraphError;

    fn try_from(order: i64) -> Result<Self, Self::Error> {
        Ok(Self::new(checked_order(order)?))
    }
}

impl AdjacencyMatrix {
    pub fn new(order: usize) -> Self {
        Self {
            data: vec![vec![0; order]; order],
        }
    }

    pub fn order(&self) -> usize {
        self.data.len()
    }

    pub fn contains(&self, u: usize) -> bool {
        u < self.data.len()
    }

    pub fn get(&self, u: usize, v: usize) -> Option<Weight> {
        self.data.get(u).and_then(|row| row.get(v)).copied()
    }

    pub fn row(&self, u: usize) -> &[Weight] {
        self.data[u].as_slice()
    }

    pub fn rows(&self) -> &[Vec<Weight>] {
        self.data.as_slice()
    }

    /// Nonzero entries as `(u, v, weight)` in row-major order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize, Weight)> + '_ {
        self.data.iter().enumerate().flat_map(|(u, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, w)| **w != 0)
                .map(move |(v, w)| (u, v, *w))
        })
    }

    pub fn nonzero_count(&self) -> usize {
        self.data
            .iter()
            .map(|row| row.iter().filter(|w| **w != 0).count())
            .sum()
    }

    pub fn is_symmetric(&self) -> bool {
        let n = self.order();
        (0..n).all(|u| ((u + 1)..n).all(|v| self.data[u][v] == self.data[v][u]))
    }

    pub fn adjacency_list(&self) -> AdjacencyList {
        let lists = self
            .data
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|(_, w)| **w != 0)
                    .map(|(v, w)| (v, *w))
                    .collect()
            })
            .collect::<Vec<Vec<_>>>();
        AdjacencyList::from(lists)
    }

    /// Writes `weight` at `(u, v)` when both indices are vertices of the
    /// matrix. Returns `false` and leaves the matrix untouched otherwise.
    pub(crate) fn set(&mut self, u: usize, v: usize, weight: Weight) -> bool {
        if self.contains(u) && self.contains(v) {
            self.data[u][v] = weight;
            true
        } else {
            #[cfg(feature = "log")]
            debug!(
                "ignoring write of ({}, {}) in a graph with {} vertices",
                u,
                v,
                self.order()
            );
            false
        }
    }

    /// Appends an isolated vertex and returns its index.
    pub(crate) fn push_vertex(&mut self) -> usize {
        let order = self.data.len() + 1;
        for row in self.data.iter_mut() {
            row.push(0);
        }
        self.data.push(vec![0; order]);
        #[cfg(feature = "log")]
        debug!("added vertex {}", order - 1);
        order - 1
    }

    /// Removes row and column `u`. Every vertex above `u` moves down by one.
    pub(crate) fn remove_vertex(&mut self, u: usize) -> Result<(), GraphError> {
        if !self.contains(u) {
            let msg = format!(
                "Vertex {} is out of range for a graph with {} vertices.",
                u,
                self.order()
            );
            return Err(GraphError::out_of_range(&msg));
        }
        self.data.remove(u);
        for row in self.data.iter_mut() {
            row.remove(u);
        }
        #[cfg(feature = "log")]
        debug!("removed vertex {}, {} vertices left", u, self.order());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::adjacency_matrix::AdjacencyMatrix;
    use crate::graph::error::GraphErrorKind;
    use std::convert::TryFrom;

    #[test]
    fn new_is_all_zero() {
        for n in 0..6 {
            let matrix = AdjacencyMatrix::new(n);
            assert_eq!(matrix.order(), n);
            assert_eq!(matrix.rows().len(), n);
            assert!(matrix.rows().iter().all(|row| row.len() == n));
            assert_eq!(matrix.nonzero_count(), 0);
        }
    }

    #[test]
    fn negative_order() {
        let err = AdjacencyMatrix::try_from(-1).unwrap_err();
        assert_eq!(err.kind(), GraphErrorKind::InvalidArgument);
        assert_eq!(AdjacencyMatrix::try_from(3).unwrap(), AdjacencyMatrix::new(3));
    }

    #[test]
    fn push_then_remove_newest_restores() {
        let mut matrix = AdjacencyMatrix::new(3);
        matrix.set(0, 2, 4);
        matrix.set(2, 1, 1);
        let before = matrix.clone();

        let v = matrix.push_vertex();
        assert_eq!(v, 3);
        assert_eq!(matrix.order(), 4);
        assert!(matrix.rows().iter().all(|row| row.len() == 4));

        matrix.remove_vertex(v).unwrap();
        assert_eq!(matrix, before);
    }

    #[test]
    fn remove_shifts_higher_vertices() {
        let mut matrix = AdjacencyMatrix::new(4);
        matrix.set(0, 1, 1);
        matrix.set(2, 3, 5);
        matrix.remove_vertex(1).unwrap();

        assert_eq!(matrix.order(), 3);
        assert_eq!(matrix.get(1, 2), Some(5));
        assert_eq!(matrix.nonzero_count(), 1);
    }

    #[test]
    fn remove_out_of_range_keeps_matrix() {
        let mut matrix = AdjacencyMatrix::new(2);
        matrix.set(0, 1, 1);
        let before = matrix.clone();

        let err = matrix.remove_vertex(2).unwrap_err();
        assert_eq!(err.kind(), GraphErrorKind::OutOfRange);
        assert_eq!(matrix, before);
    }

    #[test]
    fn set_out_of_range_is_ignored() {
        let mut matrix = AdjacencyMatrix::new(2);
        assert!(!matrix.set(0, 2, 1));
        assert!(!matrix.set(5, 0, 1));
        assert_eq!(matrix, AdjacencyMatrix::new(2));
    }

    #[test]
    fn entries_are_row_major() {
        let mut matrix = AdjacencyMatrix::new(3);
        matrix.set(2, 0, 3);
        matrix.set(0, 2, 1);
        matrix.set(1, 1, 2);
        let entries: Vec<_> = matrix.entries().collect();
        assert_eq!(entries, vec![(0, 2, 1), (1, 1, 2), (2, 0, 3)]);
        assert!(!matrix.is_symmetric());
    }

    #[test]
    fn adjacency_list_follows_rows() {
        let mut matrix = AdjacencyMatrix::new(3);
        matrix.set(0, 2, 1);
        matrix.set(0, 1, 9);
        let list = matrix.adjacency_list();
        assert_eq!(list.len(), 3);
        assert_eq!(list.neighbors(0), &[(1, 9), (2, 1)]);
        assert!(list.neighbors(1).is_empty());
        assert!(list.neighbors(2).is_empty());
    }
}
