//! Criterion benchmarks for graph algorithms
//!
//! Tracks scaling on Erdős–Rényi graphs:
//! - Traversals and Dijkstra: near-linear in |V| + |E|
//! - Bellman-Ford: O(V * E)
//! - Floyd-Warshall: O(V^3) on the dense matrix
//! - Kruskal vs Prim on the same undirected input

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use trueno_graph_algos::bench::ErdosRenyi;
use trueno_graph_algos::{
    bellman_ford, bfs, dfs, dijkstra, floyd_warshall, kruskal, prim, toposort, Graph, GraphKind,
    VertexId,
};

/// Sparse random graph with an average degree of about 6
fn sparse_graph(vertices: usize, kind: GraphKind) -> Graph {
    let p = (6.0 / vertices as f64).min(1.0);
    ErdosRenyi::new(vertices)
        .probability(p)
        .kind(kind)
        .seed(12345)
        .generate()
}

/// Benchmark: graph construction from a generated edge list
fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for size in [100, 1000, 5000].iter() {
        let edges: Vec<_> = sparse_graph(*size, GraphKind::Directed)
            .edges()
            .iter()
            .map(|e| (e.source, e.target, e.weight))
            .collect();

        group.bench_with_input(BenchmarkId::new("from_edge_list", size), &edges, |b, edges| {
            b.iter(|| {
                let graph = Graph::from_edge_list(GraphKind::Directed, black_box(edges));
                black_box(graph);
            });
        });
    }

    group.finish();
}

/// Benchmark: BFS and DFS traversal
fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");

    for size in [100, 1000, 5000].iter() {
        let graph = sparse_graph(*size, GraphKind::Undirected);

        group.bench_with_input(BenchmarkId::new("bfs", size), &graph, |b, graph| {
            b.iter(|| black_box(bfs(black_box(graph), VertexId(0)).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("dfs", size), &graph, |b, graph| {
            b.iter(|| black_box(dfs(black_box(graph), None).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark: single-source shortest paths
fn bench_single_source(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_source");

    for size in [100, 500, 1000].iter() {
        let graph = sparse_graph(*size, GraphKind::Directed);

        group.bench_with_input(BenchmarkId::new("dijkstra", size), &graph, |b, graph| {
            b.iter(|| black_box(dijkstra(black_box(graph), VertexId(0)).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("bellman_ford", size), &graph, |b, graph| {
            b.iter(|| black_box(bellman_ford(black_box(graph), VertexId(0)).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark: all-pairs shortest paths (small sizes, cubic)
fn bench_floyd_warshall(c: &mut Criterion) {
    let mut group = c.benchmark_group("floyd_warshall");

    for size in [50, 100, 200].iter() {
        let graph = sparse_graph(*size, GraphKind::Directed);

        group.bench_with_input(BenchmarkId::new("all_pairs", size), &graph, |b, graph| {
            b.iter(|| black_box(floyd_warshall(black_box(graph)).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark: Kruskal vs Prim
fn bench_spanning_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("spanning_tree");

    for size in [100, 1000, 5000].iter() {
        let graph = sparse_graph(*size, GraphKind::Undirected);

        group.bench_with_input(BenchmarkId::new("kruskal", size), &graph, |b, graph| {
            b.iter(|| black_box(kruskal(black_box(graph)).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("prim", size), &graph, |b, graph| {
            b.iter(|| black_box(prim(black_box(graph), None).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark: Kahn topological sort on generated DAGs
fn bench_toposort(c: &mut Criterion) {
    let mut group = c.benchmark_group("toposort");

    for size in [100, 1000, 5000].iter() {
        let graph = sparse_graph(*size, GraphKind::Directed);

        group.bench_with_input(BenchmarkId::new("kahn", size), &graph, |b, graph| {
            b.iter(|| black_box(toposort(black_box(graph)).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_construction,
    bench_traversal,
    bench_single_source,
    bench_floyd_warshall,
    bench_spanning_tree,
    bench_toposort
);
criterion_main!(benches);
