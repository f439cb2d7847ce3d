//! Property-based tests for trueno-graph-algos
//!
//! Cross-checks algorithms against each other and against brute force on
//! arbitrary small graphs

use proptest::prelude::*;
use std::collections::{HashMap, HashSet, VecDeque};
use trueno_graph_algos::{
    bellman_ford, bfs, dfs, dijkstra, floyd_warshall, kruskal, prim, toposort, Graph, GraphKind,
    VertexId,
};

// Property: BFS hop counts match brute-force path enumeration
proptest! {
    #[test]
    fn prop_bfs_matches_brute_force(edges in prop_edge_list(0usize..30usize, 1u32..8u32)) {
        let graph = Graph::from_edge_list(GraphKind::Directed, &edges);
        prop_assume!(!graph.is_empty());

        let source = graph.vertices()[0];
        let result = bfs(&graph, source).unwrap();
        let expected = brute_force_hops(&graph, source);

        for &vertex in graph.vertices() {
            prop_assert_eq!(result.distance(vertex), expected.get(&vertex).copied());
        }
        prop_assert_eq!(result.order.len(), expected.len());
    }
}

// Property: Dijkstra, Bellman-Ford and Floyd-Warshall agree on non-negative weights
proptest! {
    #[test]
    fn prop_shortest_paths_agree(
        edges in prop_edge_list(0usize..40usize, 1u32..10u32),
        directed in any::<bool>(),
    ) {
        let kind = if directed { GraphKind::Directed } else { GraphKind::Undirected };
        let graph = Graph::from_edge_list(kind, &edges);
        prop_assume!(!graph.is_empty());

        let source = graph.vertices()[0];
        let dijkstra = dijkstra(&graph, source).unwrap();
        let bellman = bellman_ford(&graph, source).unwrap();
        let all_pairs = floyd_warshall(&graph).unwrap();

        prop_assert!(!bellman.has_negative_cycle);
        for &vertex in graph.vertices() {
            let d = dijkstra.distance(vertex).unwrap();
            let b = bellman.paths.distance(vertex).unwrap();
            let f = all_pairs.distance(source, vertex);
            prop_assert!(same_distance(d, b), "dijkstra {} vs bellman-ford {}", d, b);
            prop_assert!(same_distance(d, f), "dijkstra {} vs floyd-warshall {}", d, f);
        }
    }
}

// Property: re-summing a reconstructed path gives the reported distance
proptest! {
    #[test]
    fn prop_path_weight_round_trip(edges in prop_edge_list(0usize..40usize, 1u32..10u32)) {
        let graph = Graph::from_edge_list(GraphKind::Directed, &edges);
        prop_assume!(!graph.is_empty());

        let source = graph.vertices()[0];
        let paths = dijkstra(&graph, source).unwrap();

        for &target in graph.vertices() {
            let path = paths.shortest_path(target);
            let distance = paths.distance(target).unwrap();
            if distance.is_infinite() {
                prop_assert!(path.is_empty());
                continue;
            }

            prop_assert_eq!(path.first(), Some(&source));
            prop_assert_eq!(path.last(), Some(&target));
            let total: f64 = path.windows(2).map(|w| graph.edge_weight(w[0], w[1])).sum();
            prop_assert!(same_distance(total, distance), "path sums to {} not {}", total, distance);
        }
    }
}

// Property: Kruskal and Prim agree on connected graphs and span them
proptest! {
    #[test]
    fn prop_mst_weights_agree(edges in prop_edge_list(1usize..40usize, 2u32..10u32)) {
        let graph = Graph::from_edge_list(GraphKind::Undirected, &edges);
        prop_assume!(!graph.is_empty());
        prop_assume!(graph.is_connected());

        let k = kruskal(&graph).unwrap();
        let p = prim(&graph, None).unwrap();

        prop_assert_eq!(k.edges.len(), graph.vertex_count() - 1);
        prop_assert_eq!(p.edges.len(), graph.vertex_count() - 1);
        prop_assert!(same_distance(k.total_weight, p.total_weight),
            "kruskal {} vs prim {}", k.total_weight, p.total_weight);
        prop_assert!(k.is_spanning_tree(graph.vertex_count()));
    }
}

// Property: without a cycle, every edge points forward in the topological order
proptest! {
    #[test]
    fn prop_toposort_linearizes(edges in prop_edge_list(0usize..40usize, 1u32..12u32)) {
        let graph = Graph::from_edge_list(GraphKind::Directed, &edges);
        let topo = toposort(&graph).unwrap();

        if topo.has_cycle {
            prop_assert!(topo.order.len() < graph.vertex_count());
            prop_assert!(dfs(&graph, None).unwrap().has_back_edge());
        } else {
            prop_assert_eq!(topo.order.len(), graph.vertex_count());
            let position: HashMap<_, _> =
                topo.order.iter().enumerate().map(|(i, &v)| (v, i)).collect();
            for edge in graph.edges() {
                prop_assert!(position[&edge.source] < position[&edge.target]);
            }
        }
    }
}

// Property: a reachable negative cycle always raises the Bellman-Ford flag
proptest! {
    #[test]
    fn prop_negative_cycle_detected(
        edges in prop_edge_list(0usize..20usize, 1u32..8u32),
        cycle_len in 2u32..5u32,
    ) {
        let mut graph = Graph::from_edge_list(GraphKind::Directed, &edges);

        // Fresh ids 100.. form a cycle of total weight -1, reachable from the root
        let root = VertexId(99);
        let cycle: Vec<_> = (0..cycle_len).map(|i| VertexId(100 + i)).collect();
        graph.add_edge(root, cycle[0], 1.0);
        for window in cycle.windows(2) {
            graph.add_edge(window[0], window[1], 1.0);
        }
        graph.add_edge(cycle[cycle.len() - 1], cycle[0], -f64::from(cycle_len));

        let result = bellman_ford(&graph, root).unwrap();
        prop_assert!(result.has_negative_cycle);
    }
}

// Property: DFS visits every vertex exactly once with nested timestamps
proptest! {
    #[test]
    fn prop_dfs_covers_graph(edges in prop_edge_list(0usize..40usize, 1u32..12u32)) {
        let graph = Graph::from_edge_list(GraphKind::Directed, &edges);
        let result = dfs(&graph, None).unwrap();

        let unique: HashSet<_> = result.order.iter().collect();
        prop_assert_eq!(unique.len(), graph.vertex_count());
        prop_assert_eq!(result.order.len(), graph.vertex_count());

        for &vertex in graph.vertices() {
            prop_assert!(result.discovery[&vertex] < result.finish[&vertex]);
        }
    }
}

/// Generate arbitrary edge lists with non-negative weights
fn prop_edge_list(
    num_edges: impl Strategy<Value = usize>,
    max_node: impl Strategy<Value = u32>,
) -> impl Strategy<Value = Vec<(VertexId, VertexId, f64)>> {
    (num_edges, max_node).prop_flat_map(|(n, max_node)| {
        // Ensure max_node is at least 1 to avoid empty range
        let max_node = max_node.max(1);
        prop::collection::vec(
            (0..max_node, 0..max_node, 0u32..100u32)
                .prop_map(|(src, dst, weight)| (VertexId(src), VertexId(dst), f64::from(weight))),
            0..=n,
        )
    })
}

/// Fewest hops to each reachable vertex, minimized over every simple path
fn brute_force_hops(graph: &Graph, source: VertexId) -> HashMap<VertexId, usize> {
    let mut best = HashMap::from([(source, 0)]);
    let mut frontier = VecDeque::from([vec![source]]);

    while let Some(path) = frontier.pop_front() {
        let last = *path.last().unwrap();
        for (next, _) in graph.neighbors(last).unwrap() {
            if path.contains(&next) {
                continue;
            }
            let hops = path.len();
            if best.get(&next).map_or(true, |&h| hops < h) {
                best.insert(next, hops);
            }
            let mut extended = path.clone();
            extended.push(next);
            frontier.push_back(extended);
        }
    }
    best
}

fn same_distance(a: f64, b: f64) -> bool {
    (a.is_infinite() && b.is_infinite()) || (a - b).abs() < 1e-9
}
