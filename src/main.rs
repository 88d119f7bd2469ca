use matrix_graph::graph::checked_order;
use matrix_graph::render;
use matrix_graph::{
    BaseGraph, DirectedGraph, ErdosRenyi, GraphKind, MutableGraph, UndirectedGraph,
    WeightedGraph,
};
use std::io;

use structopt::StructOpt;

#[cfg(not(target_env = "msvc"))]
use jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "matrix-graph-cli",
    about = "Builds adjacency-matrix graphs and samples Erdős–Rényi random graphs."
)]
struct Opt {
    /// Seed of the random generator. Drawn from OS entropy if not specified.
    #[structopt(short, long)]
    seed: Option<u64>,

    /// Runs the scripted demonstration instead of generating a single graph.
    #[structopt(long)]
    demo: bool,

    /// Kind of graph to generate: directed, undirected or weighted.
    #[structopt(short, long, default_value = "directed")]
    kind: GraphKind,

    /// Number of vertices.
    #[structopt(short = "n", long, default_value = "6", allow_hyphen_values = true)]
    vertices: i64,

    /// Probability of including each possible edge.
    #[structopt(short, long, default_value = "0.5")]
    probability: f64,

    /// Smallest weight of a weighted edge.
    #[structopt(long, default_value = "1", allow_hyphen_values = true)]
    min_weight: i32,

    /// Largest weight of a weighted edge.
    #[structopt(long, default_value = "10", allow_hyphen_values = true)]
    max_weight: i32,

    /// Also prints the adjacency list of the generated graph.
    #[structopt(short, long)]
    adjacency_list: bool,

    /// Logs at debug level. Requires the `logging` feature.
    #[structopt(short, long)]
    verbose: bool,
}

fn print_graph<G: BaseGraph + std::fmt::Display>(graph: &G, with_list: bool) {
    print!("{}", graph);
    if with_list {
        print!("{}", render::adjacency_list(&graph.adjacency_list()));
    }
}

fn demo(generator: &mut ErdosRenyi) -> io::Result<()> {
    println!("##### directed graph #####");
    let mut dg = DirectedGraph::new(6);
    dg.add_edges(&[(0, 1), (2, 3), (2, 4), (3, 5)]);
    dg.add_vertex();
    dg.add_vertex();
    dg.add_vertex();
    dg.remove_vertex(1)?;
    dg.remove_edge(2, 3);
    print_graph(&dg, false);

    println!("\n##### undirected graph #####");
    let mut ug = UndirectedGraph::new(4);
    ug.add_edges(&[(0, 1), (1, 2), (2, 3)]);
    ug.add_vertex();
    print_graph(&ug, false);

    println!("\n##### weighted directed graph #####");
    let mut wg = WeightedGraph::new(4);
    wg.add_weighted_edge(0, 1, 5);
    wg.add_weighted_edge(2, 3, 7);
    print_graph(&wg, true);

    println!("\n##### Erdős–Rényi graphs #####");
    print_graph(&generator.directed(4, 0.6)?, false);
    println!("##########");
    print_graph(&generator.undirected(5, 0.3)?, false);
    println!("##########");
    print_graph(&generator.weighted(6, 0.45, 2, 5)?, false);
    Ok(())
}

fn main() -> io::Result<()> {
    let opt = Opt::from_args();

    #[cfg(feature = "logging")]
    {
        if opt.verbose {
            matrix_graph::logging::build_logger_for_level(log::LevelFilter::Debug);
        } else {
            matrix_graph::logging::build_logger();
        }
    }
    #[cfg(not(feature = "logging"))]
    let _ = opt.verbose;

    let mut generator = match opt.seed {
        Some(seed) => ErdosRenyi::with_seed(seed),
        None => ErdosRenyi::from_entropy(),
    };

    if opt.demo {
        return demo(&mut generator);
    }

    let n = checked_order(opt.vertices)?;
    match opt.kind {
        GraphKind::Directed => {
            print_graph(&generator.directed(n, opt.probability)?, opt.adjacency_list)
        }
        GraphKind::Undirected => {
            print_graph(&generator.undirected(n, opt.probability)?, opt.adjacency_list)
        }
        GraphKind::Weighted => {
            let graph =
                generator.weighted(n, opt.probability, opt.min_weight, opt.max_weight)?;
            print_graph(&graph, opt.adjacency_list)
        }
    }
    Ok(())
}
