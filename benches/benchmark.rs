use criterion::{black_box, criterion_group, criterion_main, Criterion};
use matrix_graph::{BaseGraph, ErdosRenyi, MutableGraph};

fn generation(c: &mut Criterion) {
    let mut generator = ErdosRenyi::with_seed(1337);

    c.bench_function("erdos_renyi_directed_200", |b| {
        b.iter(|| generator.directed(black_box(200), 0.1))
    });

    c.bench_function("erdos_renyi_undirected_200", |b| {
        b.iter(|| generator.undirected(black_box(200), 0.1))
    });

    c.bench_function("erdos_renyi_weighted_200", |b| {
        b.iter(|| generator.weighted(black_box(200), 0.1, 1, 100))
    });
}

fn conversion(c: &mut Criterion) {
    let graph = ErdosRenyi::with_seed(42).weighted(300, 0.05, 1, 9).unwrap();

    c.bench_function("adjacency_list_300", |b| b.iter(|| graph.adjacency_list()));

    c.bench_function("add_remove_vertex_300", |b| {
        let mut graph = graph.clone();
        b.iter(|| {
            let v = graph.add_vertex();
            graph.remove_vertex(black_box(v)).unwrap();
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = generation, conversion
}
criterion_main!(benches);
