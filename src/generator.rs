//! Erdős–Rényi random graphs: every possible edge is included
//! independently with probability `p`.
use crate::graph::{
    DirectedGraph, GraphError, MutableGraph, UndirectedGraph, Weight, WeightedGraph,
    DEFAULT_WEIGHT,
};
use rand::prelude::StdRng;
use rand::{Rng, SeedableRng};

#[cfg(feature = "log")]
use crate::graph::BaseGraph;
#[cfg(feature = "log")]
use log::info;

pub const DEFAULT_SEED: u64 = 1337;

fn check_probability(p: f64) -> Result<(), GraphError> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        let msg = format!("Edge probability must lie in [0, 1], got {}.", p);
        Err(GraphError::invalid_argument(&msg))
    }
}

fn check_weights(min_weight: Weight, max_weight: Weight) -> Result<(), GraphError> {
    if min_weight <= max_weight {
        Ok(())
    } else {
        let msg = format!("Empty weight range [{}, {}].", min_weight, max_weight);
        Err(GraphError::invalid_argument(&msg))
    }
}

/// Random graph generator owning its random source.
///
/// Two generators built from the same seed produce the same sequence of
/// graphs, provided the calls are issued in the same order.
pub struct ErdosRenyi<R: Rng = StdRng> {
    rng: R,
}

impl ErdosRenyi<StdRng> {
    pub fn with_seed(seed: u64) -> Self {
        Self::new(SeedableRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl Default for ErdosRenyi<StdRng> {
    fn default() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }
}

impl<R: Rng> ErdosRenyi<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }

    /// Each ordered pair `(i, j)`, `i != j`, becomes a unit edge `i -> j`
    /// with probability `p`.
    pub fn directed(&mut self, n: usize, p: f64) -> Result<DirectedGraph, GraphError> {
        check_probability(p)?;
        #[cfg(feature = "log")]
        info!("generating directed graph with {} vertices, p = {}", n, p);
        let graph: DirectedGraph = self.ordered_pairs(n, p, None);
        #[cfg(feature = "log")]
        info!("generated {} edges", graph.edge_count());
        Ok(graph)
    }

    /// Each unordered pair `{i, j}` is visited once and becomes a unit edge
    /// with probability `p`.
    pub fn undirected(&mut self, n: usize, p: f64) -> Result<UndirectedGraph, GraphError> {
        check_probability(p)?;
        #[cfg(feature = "log")]
        info!("generating undirected graph with {} vertices, p = {}", n, p);
        let mut graph = UndirectedGraph::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                if self.include(p) {
                    graph.add_edge(i, j);
                }
            }
        }
        #[cfg(feature = "log")]
        info!("generated {} edges", graph.edge_count() / 2);
        Ok(graph)
    }

    /// Like [`ErdosRenyi::directed`], but every included edge draws its
    /// weight uniformly from `[min_weight, max_weight]`.
    pub fn weighted(
        &mut self,
        n: usize,
        p: f64,
        min_weight: Weight,
        max_weight: Weight,
    ) -> Result<WeightedGraph, GraphError> {
        check_probability(p)?;
        check_weights(min_weight, max_weight)?;
        #[cfg(feature = "log")]
        info!(
            "generating weighted graph with {} vertices, p = {}, weights in [{}, {}]",
            n, p, min_weight, max_weight
        );
        let graph: WeightedGraph = self.ordered_pairs(n, p, Some((min_weight, max_weight)));
        #[cfg(feature = "log")]
        info!("generated {} edges", graph.edge_count());
        Ok(graph)
    }

    fn include(&mut self, p: f64) -> bool {
        self.rng.gen::<f64>() < p
    }

    fn ordered_pairs<G: MutableGraph>(
        &mut self,
        n: usize,
        p: f64,
        weights: Option<(Weight, Weight)>,
    ) -> G {
        let mut graph = G::new(n);
        for i in 0..n {
            for j in 0..n {
                if i != j && self.include(p) {
                    let weight = match weights {
                        Some((lo, hi)) => self.rng.gen_range(lo..=hi),
                        None => DEFAULT_WEIGHT,
                    };
                    graph.add_weighted_edge(i, j, weight);
                }
            }
        }
        graph
    }
}
