/*!
# Graph Representation

A [`GraphStore`] owns the canonical, insertion-ordered edge list of a graph and keeps three
derived views of it:

- [`AdjacencyListView`]: ordered `(neighbor, weight)` sequences per vertex,
- [`AdjacencyMatrix`]: an `n x n` weight grid,
- [`IncidenceMatrix`]: vertices as rows, edge-list entries as columns.

All mutation funnels through the store. Consumers such as exporters get shared references to the
views, so they cannot modify them.

### Duplicate edges

The edge list accepts parallel edges. The adjacency list does not: inserting `(u, v)` while `u`
already lists `v` leaves the adjacency list untouched, while the edge list, the matrix and the
incidence matrix still record the insertion. Graph algorithms read the adjacency list only, so
for them a duplicate edge does not exist.
*/

use crate::{ops::*, *};

mod incidence;
mod matrix;
mod neighborhood;
mod store;

pub use incidence::*;
pub use matrix::*;
pub use neighborhood::*;
pub use store::*;

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::{error::GraphError, testing::test_store_views};

    test_store_views!(undirected_views, false);
    test_store_views!(directed_views, true);

    #[test]
    fn add_vertex_extends_every_view() {
        let mut graph = GraphStore::undirected(2);
        graph.add_edge(0, 1).unwrap();

        assert_eq!(graph.add_vertex(None), 2);
        assert_eq!(graph.add_vertex(Some("hub".into())), 3);

        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.labels(), &["V1", "V2", "V3", "hub"]);
        assert_eq!(graph.adjacency_list().number_of_nodes(), 4);
        assert_eq!(graph.adjacency_matrix().dimension(), 4);
        assert_eq!(graph.adjacency_matrix().row(3).collect_vec(), vec![0; 4]);
        assert_eq!(graph.incidence_matrix().number_of_rows(), 4);
        assert_eq!(graph.incidence_matrix().row(3).collect_vec(), vec![0]);

        graph.add_edge(3, 0).unwrap();
        assert!(graph.has_edge(0, 3).unwrap());
    }

    #[test]
    fn out_of_range_is_reported() {
        let mut graph = GraphStore::directed(3);
        let err = GraphError::NodeOutOfRange {
            node: 3,
            number_of_nodes: 3,
        };

        assert_eq!(graph.add_edge(0, 3), Err(err.clone()));
        assert_eq!(graph.remove_edge(3, 0), Err(err.clone()));
        assert_eq!(graph.has_edge(1, 3), Err(err.clone()));
        assert_eq!(graph.label_of(3), Err(err));
        assert_eq!(graph, GraphStore::directed(3));

        assert_eq!(
            GraphStore::from_edges(2, false, [(0, 1), (1, 2)]).unwrap_err(),
            GraphError::NodeOutOfRange {
                node: 2,
                number_of_nodes: 2
            }
        );
    }

    #[test]
    fn duplicate_edge_diverges_adjacency_list() {
        let mut graph = GraphStore::undirected(2);
        graph.add_weighted_edge(0, 1, 3, None).unwrap();
        graph.add_weighted_edge(0, 1, 5, Some("twin".into())).unwrap();

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.incidence_matrix().number_of_columns(), 2);
        assert_eq!(graph.adjacency_list().degree_of(0), 1);
        assert_eq!(graph.adjacency_list().degree_of(1), 1);
        assert_eq!(graph.adjacency_list().weighted_neighbors_of(0)[0].weight, 3);
        // the matrix keeps the weight of the latest insertion
        assert_eq!(graph.adjacency_matrix().weight(1, 0), 5);

        // removing once drops the adjacency entries although the edge list still has a copy
        let removed = graph.remove_edge(1, 0).unwrap().unwrap();
        assert_eq!(removed.weight, 3);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.adjacency_list().degree_of(0), 0);
        assert!(!graph.has_edge(0, 1).unwrap());
        assert!(graph.incidence_matrix().has_column(0, 1));

        let removed = graph.remove_edge(0, 1).unwrap().unwrap();
        assert_eq!(removed.label.as_deref(), Some("twin"));
        assert!(graph.is_empty_graph());
        assert_eq!(graph.remove_edge(0, 1), Ok(None));
    }

    #[test]
    fn reversed_duplicate_in_undirected_graph() {
        let mut graph = GraphStore::undirected(2);
        graph.add_edges([(0, 1), (1, 0)]).unwrap();

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.adjacency_list().degree_of(0), 1);
        assert_eq!(graph.adjacency_list().degree_of(1), 1);
        assert_eq!(graph.incidence_matrix().row(0).collect_vec(), vec![1, 1]);
    }

    #[test]
    fn remove_edge_matches_orientation() {
        let mut directed = GraphStore::directed(2);
        directed.add_edge(0, 1).unwrap();
        assert_eq!(directed.remove_edge(1, 0), Ok(None));
        assert!(directed.has_edge(0, 1).unwrap());

        let mut undirected = GraphStore::undirected(2);
        undirected.add_edge(0, 1).unwrap();
        let removed = undirected.remove_edge(1, 0).unwrap().unwrap();
        assert_eq!(removed.edge, Edge(0, 1));
        assert!(!undirected.has_edge(0, 1).unwrap());
        assert!(!undirected.has_edge(1, 0).unwrap());
        assert_eq!(undirected.adjacency_matrix().number_of_entries(), 0);
    }

    #[test]
    fn undirected_self_loop() {
        let mut graph = GraphStore::undirected(2);
        graph.add_edge(1, 1).unwrap();

        assert_eq!(graph.adjacency_list().neighbors_of(1).collect_vec(), vec![1, 1]);
        assert_eq!(graph.incidence_matrix().entry(1, 0), 1);
        assert!(graph.has_edge(1, 1).unwrap());

        graph.remove_edge(1, 1).unwrap();
        assert_eq!(graph.adjacency_list().degree_of(1), 0);
        assert!(graph.is_empty_graph());
    }

    #[test]
    fn detach_and_reattach_restores_exact_state() {
        let mut graph = GraphStore::undirected(5);
        graph
            .add_weighted_edge(0, 1, 2, Some("a".into()))
            .unwrap();
        graph.add_edges([(1, 2), (2, 0), (3, 1), (2, 3), (4, 4)]).unwrap();
        let before = graph.clone();

        for (u, v) in [(1, 0), (2, 1), (1, 3), (4, 4), (0, 1)] {
            let detached = graph.detach_edge(u, v).unwrap();
            assert!(!graph.has_edge(u, v).unwrap());
            assert_ne!(graph, before);
            graph.reattach_edge(detached);
            assert_eq!(graph, before);
        }

        assert!(graph.detach_edge(0, 3).is_none());
        assert_eq!(graph, before);
    }

    #[test]
    fn completeness() {
        assert!(GraphStore::undirected(0).is_complete());
        assert!(GraphStore::undirected(1).is_complete());

        let mut graph = GraphStore::undirected(3);
        graph.add_edges([(0, 1), (1, 2)]).unwrap();
        assert!(!graph.is_complete());
        graph.add_edge(2, 0).unwrap();
        assert!(graph.is_complete());

        let mut graph = GraphStore::directed(2);
        graph.add_edge(0, 1).unwrap();
        assert!(!graph.is_complete());
        graph.add_edge(1, 0).unwrap();
        assert!(graph.is_complete());
    }
}
