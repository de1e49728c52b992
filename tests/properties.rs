use rand::{rngs::StdRng, Rng, SeedableRng};
use signed_paths::{
    search::{
        bellman_ford::BellmanFord, dijkstra::Dijkstra, floyd_warshall::FloydWarshall,
        johnson::Johnson,
    },
    AllPairsPaths, SingleSourcePaths, WeightedDirectedGraph, INFINITY,
};

/// Random graph with non-negative integer-valued weights, so every engine
/// is in contract and float sums are exact.
fn random_graph(seed: u64, vertices: u32, edges: usize) -> WeightedDirectedGraph<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = WeightedDirectedGraph::new();

    for _ in 0..edges {
        let tail = rng.gen_range(0..vertices);
        let head = rng.gen_range(0..vertices);
        let weight = rng.gen_range(0..=20) as f64;
        graph.add_edge(tail, head, weight);
    }

    graph
}

/// Random DAG with negative weights. Edges only go from smaller to larger
/// labels, so no cycle (and therefore no negative cycle) can exist.
fn random_negative_dag(seed: u64, vertices: u32, edges: usize) -> WeightedDirectedGraph<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = WeightedDirectedGraph::new();

    for _ in 0..edges {
        let tail = rng.gen_range(0..vertices - 1);
        let head = rng.gen_range(tail + 1..vertices);
        let weight = rng.gen_range(-5..=20) as f64;
        graph.add_edge(tail, head, weight);
    }

    graph
}

fn min_edge_weight(graph: &WeightedDirectedGraph<u32>, tail: u32, head: u32) -> f64 {
    let tail = graph.vertex(&tail).unwrap();
    let head = graph.vertex(&head).unwrap();
    graph
        .edges()
        .iter()
        .filter(|edge| edge.tail == tail && edge.head == head)
        .map(|edge| edge.weight)
        .fold(INFINITY, f64::min)
}

#[test]
fn all_four_engines_agree_on_non_negative_graphs() {
    for seed in 0..4 {
        let graph = random_graph(seed, 25, 120);
        let floyd_warshall = FloydWarshall::new(&graph).unwrap();
        let johnson = Johnson::new(&graph).unwrap();

        for source in graph.labels() {
            let dijkstra = Dijkstra::new(&graph, source).unwrap();
            let bellman_ford = BellmanFord::new(&graph, source).unwrap();

            for target in graph.labels() {
                let expected = dijkstra.distance_to(target).unwrap();
                assert_eq!(bellman_ford.distance_to(target).unwrap(), expected);
                assert_eq!(floyd_warshall.distance(source, target).unwrap(), expected);
                assert_eq!(johnson.distance(source, target).unwrap(), expected);
            }
        }
    }
}

#[test]
fn negative_tolerant_engines_agree_on_negative_dags() {
    for seed in 0..4 {
        let graph = random_negative_dag(seed, 20, 80);
        let floyd_warshall = FloydWarshall::new(&graph).unwrap();
        let johnson = Johnson::new(&graph).unwrap();

        for source in graph.labels() {
            let bellman_ford = BellmanFord::new(&graph, source).unwrap();

            for target in graph.labels() {
                let expected = bellman_ford.distance_to(target).unwrap();
                assert_eq!(floyd_warshall.distance(source, target).unwrap(), expected);
                assert_eq!(johnson.distance(source, target).unwrap(), expected);
            }
        }

        assert_eq!(floyd_warshall.min_distance(), johnson.min_distance());
    }
}

#[test]
fn triangle_inequality_holds() {
    let graph = random_negative_dag(7, 15, 60);
    let floyd_warshall = FloydWarshall::new(&graph).unwrap();

    for u in graph.labels() {
        for v in graph.labels() {
            for w in graph.labels() {
                let direct = floyd_warshall.distance(u, w).unwrap();
                let via = floyd_warshall.distance(u, v).unwrap()
                    + floyd_warshall.distance(v, w).unwrap();
                assert!(direct <= via + 1e-9, "d({u},{w}) > d({u},{v}) + d({v},{w})");
            }
        }
    }
}

#[test]
fn reconstructed_paths_sum_to_reported_distances() {
    let graph = random_negative_dag(11, 20, 80);
    let floyd_warshall = FloydWarshall::new(&graph).unwrap();
    let johnson = Johnson::new(&graph).unwrap();

    for source in graph.labels() {
        let bellman_ford = BellmanFord::new(&graph, source).unwrap();

        for target in graph.labels() {
            let distance = bellman_ford.distance_to(target).unwrap();
            if distance == INFINITY {
                continue;
            }

            for path in [
                bellman_ford.path_to(target).unwrap(),
                floyd_warshall.path(source, target).unwrap(),
                johnson.path(source, target).unwrap(),
            ] {
                assert_eq!(path.first(), Some(source));
                assert_eq!(path.last(), Some(target));
                let sum: f64 = path
                    .windows(2)
                    .map(|hop| min_edge_weight(&graph, hop[0], hop[1]))
                    .sum();
                assert!((sum - distance).abs() < 1e-9);
            }
        }
    }
}

#[test]
fn reruns_are_idempotent_on_random_graphs() {
    let graph = random_graph(3, 25, 120);

    for source in graph.labels() {
        let first = Dijkstra::new(&graph, source).unwrap();
        let second = Dijkstra::new(&graph, source).unwrap();
        assert_eq!(first.tree(), second.tree());
    }
}
