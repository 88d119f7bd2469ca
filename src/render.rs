//! Text rendering of graphs. Everything here is a pure function of the
//! graph kind and its matrix, so output can be checked without building a
//! graph.
use crate::graph::{AdjacencyList, AdjacencyMatrix, GraphKind};

/// `order` lines of `order` space-separated weights.
pub fn matrix(matrix: &AdjacencyMatrix) -> String {
    let mut out = String::new();
    for row in matrix.rows() {
        let values: Vec<_> = row.iter().map(|w| w.to_string()).collect();
        out.push_str(&values.join(" "));
        out.push('\n');
    }
    out
}

/// One `u -> v (weight: w)` line per edge in row-major order, or a single
/// `graph is empty` line.
pub fn weighted_edges(matrix: &AdjacencyMatrix) -> String {
    let mut out = String::new();
    for (u, v, w) in matrix.entries() {
        out.push_str(&format!("{} -> {} (weight: {})\n", u, v, w));
    }
    if out.is_empty() {
        out.push_str("graph is empty\n");
    }
    out
}

pub fn graph(kind: GraphKind, adjacency: &AdjacencyMatrix) -> String {
    let mut out = String::from("adjacency matrix:\n");
    out.push_str(&matrix(adjacency));
    if kind == GraphKind::Weighted {
        out.push_str("weighted directed edges:\n");
        out.push_str(&weighted_edges(adjacency));
    }
    out
}

pub fn adjacency_list(list: &AdjacencyList) -> String {
    let mut out = String::from("adjacency list:\n");
    for (u, neighbors) in list.iter() {
        out.push_str(&format!("vertex {}:", u));
        for (v, w) in neighbors {
            out.push_str(&format!(" ({}, {})", v, w));
        }
        out.push('\n');
    }
    out
}
