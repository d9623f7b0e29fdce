use rand::Rng;

use crate::*;

/// Creates a list of at most `m_ub` random edges without self-loops for nodes `0..n`.
/// Edges are deduplicated (and normalized if `undirected`), so the result is a simple graph.
pub(crate) fn random_simple_edges<R: Rng>(
    rng: &mut R,
    n: NumNodes,
    m_ub: NumEdges,
    undirected: bool,
) -> Vec<Edge> {
    let mut edges: Vec<Edge> = (0..m_ub)
        .filter_map(|_| {
            let u = rng.random_range(0..n);
            let v = rng.random_range(0..n);
            (u != v).then(|| if undirected { Edge(u, v).normalized() } else { Edge(u, v) })
        })
        .collect();
    edges.sort_unstable();
    edges.dedup();
    edges
}

/// Creates the edges of a random connected simple undirected graph on `0..n`: a random spanning
/// tree (every vertex `u > 0` attaches to some `v < u`) plus up to `extra` random edges.
pub(crate) fn random_connected_edges<R: Rng>(
    rng: &mut R,
    n: NumNodes,
    extra: NumEdges,
) -> Vec<Edge> {
    let mut edges: Vec<Edge> = (1..n).map(|u| Edge(rng.random_range(0..u), u)).collect();
    edges.extend(random_simple_edges(rng, n, extra, true));
    edges.sort_unstable();
    edges.dedup();
    edges
}

/// Checks that all views of a `GraphStore` agree with its edge list under random insertions and
/// removals. Run once per orientation.
macro_rules! test_store_views {
    ($env:ident, $directed:literal) => {
        mod $env {
            use crate::{ops::*, repr::*, testing::random_simple_edges, *};
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            fn assert_views_agree(graph: &GraphStore) {
                let n = graph.number_of_nodes();
                let matrix = graph.adjacency_matrix();
                let incidence = graph.incidence_matrix();

                assert_eq!(matrix.dimension(), n);
                assert_eq!(incidence.number_of_rows(), n);
                assert_eq!(incidence.number_of_columns(), graph.edge_list().len());

                for (col, rec) in graph.edge_list().iter().enumerate() {
                    let Edge(u, v) = rec.edge;
                    assert!(graph.has_edge(u, v).unwrap());
                    assert_eq!(matrix.weight(u, v), rec.weight);
                    if $directed {
                        assert_eq!(incidence.entry(u, col), 1);
                        assert_eq!(incidence.entry(v, col), -1);
                    } else {
                        assert!(graph.has_edge(v, u).unwrap());
                        assert_eq!(incidence.entry(u, col), 1);
                        assert_eq!(incidence.entry(v, col), 1);
                    }
                }

                // simple graphs: every matrix cell belongs to exactly one listed neighbor
                let cells_per_edge = if $directed { 1 } else { 2 };
                let expected_entries = cells_per_edge * graph.edge_list().len();
                assert_eq!(matrix.number_of_entries(), expected_entries);
                assert_eq!(
                    graph.degrees().map(|d| d as usize).sum::<usize>(),
                    expected_entries
                );
                for u in graph.vertices() {
                    for nb in graph.adjacency_list().weighted_neighbors_of(u) {
                        assert_eq!(matrix.weight(u, nb.node), nb.weight);
                    }
                }
            }

            #[test]
            fn graph_new() {
                for n in 0..20 {
                    let graph = GraphStore::new(n, $directed);

                    assert_eq!(graph.is_directed(), $directed);
                    assert_eq!(graph.number_of_edges(), 0);
                    assert_eq!(graph.number_of_nodes(), n);
                    assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                    assert!(graph.is_empty_graph());
                    assert_views_agree(&graph);
                }
            }

            #[test]
            fn views_agree_after_insertions() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [5 as NumNodes, 10, 20] {
                    for m_ub in [n, n * 3] {
                        for _ in 0..5 {
                            let edges = random_simple_edges(rng, n, m_ub, !$directed);
                            let mut graph = GraphStore::new(n, $directed);
                            for &Edge(u, v) in &edges {
                                let weight = rng.random_range(1..10);
                                graph.add_weighted_edge(u, v, weight, None).unwrap();
                            }

                            assert_eq!(graph.number_of_edges() as usize, edges.len());
                            assert_eq!(
                                graph.ordered_edges(!$directed),
                                edges.iter().copied().sorted().collect_vec()
                            );
                            assert_views_agree(&graph);
                        }
                    }
                }
            }

            #[test]
            fn views_agree_after_removals() {
                let rng = &mut Pcg64Mcg::seed_from_u64(4);

                for n in [5 as NumNodes, 10, 20] {
                    for _ in 0..5 {
                        let edges = random_simple_edges(rng, n, n * 3, !$directed);
                        let mut graph = GraphStore::from_edges(n, $directed, &edges).unwrap();

                        let mut m = graph.number_of_edges();
                        for _ in 0..(2 * m) {
                            let u = rng.random_range(0..n);
                            let v = rng.random_range(0..n);

                            let listed = graph.has_edge(u, v).unwrap();
                            let removed = graph.remove_edge(u, v).unwrap();
                            assert_eq!(removed.is_some(), listed);
                            if listed {
                                m -= 1;
                                assert!(!graph.has_edge(u, v).unwrap());
                            }

                            assert_eq!(m, graph.number_of_edges());
                            assert_views_agree(&graph);
                        }

                        for Edge(u, v) in graph.edge_list().iter().map(|rec| rec.edge).collect_vec() {
                            graph.remove_edge(u, v).unwrap();
                        }
                        assert!(graph.is_singleton_graph());
                        assert_eq!(graph.max_degree(), 0);
                        assert_views_agree(&graph);

                        // re-adding yields the same views again
                        graph.add_edges(&edges).unwrap();
                        assert_eq!(graph, GraphStore::from_edges(n, $directed, &edges).unwrap());
                    }
                }
            }
        }
    };
}

pub(crate) use test_store_views;
