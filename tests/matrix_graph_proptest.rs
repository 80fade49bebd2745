use matgraph::{GraphError, MatrixGraph};
use petgraph::algo;
use petgraph::graph::DiGraph;
use proptest::collection::vec;
use proptest::prelude::*;

fn cell() -> impl Strategy<Value = u32> {
    prop_oneof![2 => Just(0u32), 1 => 1u32..=20]
}

fn shuffled(n: usize) -> impl Strategy<Value = Vec<usize>> {
    Just((0..n).collect::<Vec<_>>()).prop_shuffle()
}

/// Any square matrix with up to `max_n` vertices.
fn any_graph(max_n: usize) -> impl Strategy<Value = MatrixGraph> {
    (0..=max_n)
        .prop_flat_map(|n| (Just(n), vec(cell(), n * n)))
        .prop_map(|(n, weights)| MatrixGraph::new(weights, n).unwrap())
}

/// Upper-triangular edges relabelled by a random permutation, so the unique
/// valid order is hidden from the traversal.
fn dag(max_n: usize) -> impl Strategy<Value = MatrixGraph> {
    (1..=max_n)
        .prop_flat_map(|n| (Just(n), vec(cell(), n * n), shuffled(n)))
        .prop_map(|(n, cells, perm)| {
            let mut weights = vec![0; n * n];
            for i in 0..n {
                for j in (i + 1)..n {
                    weights[perm[i] * n + perm[j]] = cells[i * n + j];
                }
            }
            MatrixGraph::new(weights, n).unwrap()
        })
}

/// A random matrix with a cycle of length `k` (a self-loop when `k == 1`) forced in.
fn cyclic(max_n: usize) -> impl Strategy<Value = MatrixGraph> {
    (1..=max_n)
        .prop_flat_map(|n| (Just(n), vec(cell(), n * n), shuffled(n), 1..=n, 1u32..=20))
        .prop_map(|(n, mut weights, perm, k, w)| {
            for i in 0..k {
                weights[perm[i] * n + perm[(i + 1) % k]] = w;
            }
            MatrixGraph::new(weights, n).unwrap()
        })
}

/// Minimum path weight over all simple paths, by exhaustive search.
fn brute_force_distances(g: &MatrixGraph, start: usize) -> Vec<Option<u64>> {
    fn walk(g: &MatrixGraph, u: usize, cost: u64, on_path: &mut [bool], best: &mut [Option<u64>]) {
        if best[u].map_or(true, |b| cost < b) {
            best[u] = Some(cost);
        }
        for (v, w) in g.successors(u) {
            if !on_path[v] {
                on_path[v] = true;
                walk(g, v, cost + u64::from(w), on_path, best);
                on_path[v] = false;
            }
        }
    }

    let mut best = vec![None; g.size()];
    let mut on_path = vec![false; g.size()];
    on_path[start] = true;
    walk(g, start, 0, &mut on_path, &mut best);
    best
}

fn to_petgraph(g: &MatrixGraph) -> DiGraph<(), u64> {
    let mut pg = DiGraph::new();
    let nodes: Vec<_> = (0..g.size()).map(|_| pg.add_node(())).collect();
    for u in 0..g.size() {
        for (v, w) in g.successors(u) {
            pg.add_edge(nodes[u], nodes[v], u64::from(w));
        }
    }
    pg
}

proptest! {
    #[test]
    fn dijkstra_matches_exhaustive_search(g in any_graph(6)) {
        for start in 0..g.size() {
            let dist = g.dijkstra(start);
            prop_assert_eq!(dist[start], 0);

            let expected = brute_force_distances(&g, start);
            for v in 0..g.size() {
                let got = (dist[v] != u32::MAX).then(|| u64::from(dist[v]));
                prop_assert_eq!(got, expected[v], "distance {} -> {}", start, v);
            }
        }
    }

    #[test]
    fn dijkstra_all_rows_equal_single_source(g in any_graph(12)) {
        let all = g.dijkstra_all();
        prop_assert_eq!(all.len(), g.size());
        for (start, row) in all.iter().enumerate() {
            prop_assert_eq!(row, &g.dijkstra(start));
        }
    }

    #[test]
    fn dijkstra_out_of_bounds_start_reports_unreachable(g in any_graph(12), extra in 0usize..4) {
        prop_assert_eq!(g.dijkstra(g.size() + extra), vec![u32::MAX; g.size()]);
    }

    #[test]
    fn dags_get_a_valid_order(g in dag(16)) {
        let order = g.topological_sort_dfs().unwrap();

        let mut sorted = order.clone();
        sorted.sort_unstable();
        prop_assert_eq!(sorted, (0..g.size()).collect::<Vec<_>>());

        let mut position = vec![0; g.size()];
        for (pos, &v) in order.iter().enumerate() {
            position[v] = pos;
        }
        for u in 0..g.size() {
            for (v, _) in g.successors(u) {
                prop_assert!(position[u] < position[v], "edge {} -> {} points backward", u, v);
            }
        }
    }

    #[test]
    fn cycles_are_always_reported(g in cyclic(16)) {
        prop_assert_eq!(g.topological_sort_dfs(), Err(GraphError::Cycle));
    }

    #[test]
    fn acyclicity_agrees_with_petgraph(g in any_graph(10)) {
        let pg = to_petgraph(&g);
        prop_assert_eq!(g.is_acyclic(), !algo::is_cyclic_directed(&pg));
        prop_assert_eq!(g.is_acyclic(), algo::toposort(&pg, None).is_ok());
    }
}
