//! Graph algorithms example
//!
//! Runs every algorithm on a small road network and a build graph, then a
//! short benchmark
//!
//! Run with: RUST_LOG=debug cargo run --example graph_algorithms

use tracing_subscriber::EnvFilter;
use trueno_graph_algos::bench::{run_benchmark, BenchmarkConfig};
use trueno_graph_algos::{
    bellman_ford, bfs, dfs, dijkstra, floyd_warshall, kruskal, prim, toposort, Graph, VertexId,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("🦀 trueno-graph-algos: Graph Algorithms\n");

    // 1. Build a road network
    println!("📊 Building road network...");
    let names = ["A", "B", "C", "D", "E", "F"];
    let roads = [
        (0, 1, 4.0),
        (0, 2, 2.0),
        (1, 2, 1.0),
        (1, 3, 5.0),
        (2, 3, 8.0),
        (2, 4, 10.0),
        (3, 4, 2.0),
        (3, 5, 6.0),
        (4, 5, 3.0),
    ];
    let mut graph = Graph::undirected();
    for (src, dst, km) in roads {
        graph.add_edge(VertexId(src), VertexId(dst), km);
    }
    for (id, name) in (0u32..).zip(names) {
        graph.set_vertex_name(VertexId(id), name)?;
    }
    let label = |v: VertexId| graph.vertex_name(v).unwrap_or("?").to_string();

    println!(
        "  ✅ Graph built: {} vertices, {} edges, connected: {}\n",
        graph.vertex_count(),
        graph.edge_count(),
        graph.is_connected()
    );

    // 2. Traversals
    println!("🔍 BFS and DFS from A...");
    let breadth = bfs(&graph, VertexId(0))?;
    let depth = dfs(&graph, Some(VertexId(0)))?;
    let show = |order: &[VertexId]| order.iter().map(|&v| label(v)).collect::<Vec<_>>().join(" → ");
    println!("  BFS: {}", show(&breadth.order));
    println!("  DFS: {}", show(&depth.order));

    // 3. Shortest paths
    println!("\n🛣️  Shortest paths from A...");
    let paths = dijkstra(&graph, VertexId(0))?;
    let bellman = bellman_ford(&graph, VertexId(0))?;
    let all_pairs = floyd_warshall(&graph)?;
    for &target in graph.vertices() {
        println!(
            "  {} = {:>4} via {}   (bellman-ford {}, floyd-warshall {})",
            label(target),
            paths.distance(target).unwrap_or(f64::INFINITY),
            show(&paths.shortest_path(target)),
            bellman.paths.distance(target).unwrap_or(f64::INFINITY),
            all_pairs.distance(VertexId(0), target)
        );
    }

    // 4. Spanning trees
    println!("\n🌲 Minimum spanning trees...");
    for (name, tree) in [("Kruskal", kruskal(&graph)?), ("Prim", prim(&graph, None)?)] {
        let edges: Vec<_> = tree
            .edges
            .iter()
            .map(|e| format!("{}-{}({})", label(e.source), label(e.target), e.weight))
            .collect();
        println!("  {name}: total {} [{}]", tree.total_weight, edges.join(", "));
    }

    // 5. Build order for a crate dependency graph
    println!("\n📦 Build order...");
    let crates = ["core", "parser", "runtime", "compiler", "app"];
    let mut deps = Graph::directed();
    for (src, dst) in [(0, 1), (0, 2), (1, 3), (3, 4), (2, 4)] {
        deps.add_edge(VertexId(src), VertexId(dst), 1.0);
    }
    let topo = toposort(&deps)?;
    let order: Vec<_> = topo.order.iter().map(|v| crates[v.0 as usize]).collect();
    println!("  {} (cycle: {})", order.join(" → "), topo.has_cycle);

    // 6. Benchmark
    println!("\n⏱️  Benchmarking on random graphs...");
    let report = run_benchmark(&BenchmarkConfig {
        vertex_counts: vec![50, 100, 200],
        edge_probability: 0.05,
        parallel: true,
        ..BenchmarkConfig::default()
    })?;
    for (name, summary) in report.summary() {
        println!(
            "  {name:<18} runs {:>2}  mean {:>10.2?}  best {:>10.2?}  worst {:>10.2?}",
            summary.runs, summary.mean, summary.best, summary.worst
        );
    }

    println!("\n✨ Done!");
    Ok(())
}
