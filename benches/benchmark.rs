use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wugraph::generate::random_graph;
use wugraph::{KruskalEdge, WUGraph};

fn build(c: &mut Criterion) {
    c.bench_function("random_graph_1000", |b| {
        b.iter(|| random_graph(black_box(1000), 0.01, 100, 7))
    });

    let edges = random_graph(1000, 0.01, 100, 7).kruskal_edges();
    c.bench_function("add_edges_1000", |b| {
        b.iter(|| {
            let graph: WUGraph<usize> = edges.iter().map(|e| (e.u, e.v, e.weight)).collect();
            graph
        })
    });
}

fn queries(c: &mut Criterion) {
    let graph = random_graph(1000, 0.01, 100, 7);

    c.bench_function("is_edge", |b| {
        b.iter(|| {
            let mut count = 0;
            for u in 0..100 {
                for v in 0..100 {
                    if graph.is_edge(&u, &v) {
                        count += 1;
                    }
                }
            }
            count
        })
    });

    c.bench_function("get_neighbors", |b| {
        b.iter(|| {
            graph
                .vertices()
                .filter_map(|v| graph.get_neighbors(v))
                .map(|n| n.len())
                .sum::<usize>()
        })
    });

    c.bench_function("sorted_kruskal_edges", |b| {
        b.iter(|| {
            let mut edges = graph.kruskal_edges();
            KruskalEdge::sort_by_weight(&mut edges);
            edges
        })
    });
}

fn removals(c: &mut Criterion) {
    let graph = random_graph(1000, 0.01, 100, 7);

    c.bench_function("remove_all_vertices", |b| {
        b.iter(|| {
            let mut graph = graph.clone();
            for v in 0..1000 {
                graph.remove_vertex(&v);
            }
            graph
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = build, queries, removals
}
criterion_main!(benches);
