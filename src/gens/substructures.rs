/*!
# Substructure Generators

Utility methods that add common motifs (**paths** and **cycles**) to an existing graph, and the
chained-cycles workload used to compare the bridge detectors.

# Example

```rust
use mgraphs::{prelude::*, gens::*};

let mut g = GraphStore::directed(5);
g.connect_path([0, 1, 2]).unwrap();
g.connect_cycle([2, 3, 4]).unwrap();

assert_eq!(
    g.ordered_edges(false),
    vec![Edge(0, 1), Edge(1, 2), Edge(2, 3), Edge(3, 4), Edge(4, 2)]
);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles) inside an already existing
/// graph.
///
/// Implemented for all graphs that support edge editing.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a **simple path**.
    ///
    /// # Errors
    /// Stops at the first node that is not a vertex of the graph.
    fn connect_path<P>(&mut self, nodes_on_path: P) -> Result<()>
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a **cycle**: consecutive nodes are connected and the last
    /// node is connected back to the first. A single node receives a self-loop.
    ///
    /// # Errors
    /// Stops at the first node that is not a vertex of the graph.
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C) -> Result<()>
    where
        C: IntoIterator<Item = Node>;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<P>(&mut self, nodes_on_path: P) -> Result<()>
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.add_edge(u, v)?;
        }
        Ok(())
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C) -> Result<()>
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        // we use a rather tedious implementation to avoid needing to clone the iterator
        if let Some(first) = iter.next() {
            let mut prev = first;
            for cur in iter {
                self.add_edge(prev, cur)?;
                prev = cur;
            }

            self.add_edge(prev, first)?;
        }
        Ok(())
    }
}

impl GraphStore {
    /// Creates an undirected graph with `n` vertices containing `components` vertex-disjoint
    /// cycles of `n / components` consecutive vertices each. Consecutive cycles are joined by a
    /// single bridge from the last vertex of one cycle to the first vertex of the next.
    /// Left-over vertices stay isolated.
    ///
    /// This is the workload on which the bridge detectors are compared.
    ///
    /// # Errors
    /// Never fails for valid inputs; errors of the underlying edge insertions are propagated.
    pub fn chained_cycles(n: NumNodes, components: NumNodes) -> Result<Self> {
        let mut graph = Self::undirected(n);
        let size = n.checked_div(components).unwrap_or(0);
        if size == 0 {
            return Ok(graph);
        }

        for i in 0..components {
            graph.connect_cycle(i * size..(i + 1) * size)?;
        }
        for i in 1..components {
            graph.add_edge(i * size - 1, i * size)?;
        }

        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_path() {
        {
            let mut g = GraphStore::directed(6);
            g.connect_path([]).unwrap();
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = GraphStore::directed(6);
            g.connect_path([1]).unwrap();
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = GraphStore::directed(6);
            g.connect_path([2, 1]).unwrap();
            assert_eq!(g.number_of_edges(), 1);
            assert!(g.has_edge(2, 1).unwrap());
        }

        {
            let mut g = GraphStore::directed(6);
            g.connect_path([0, 3, 1, 4]).unwrap();
            assert_eq!(
                g.edges(false).collect_vec(),
                vec![Edge(0, 3), Edge(1, 4), Edge(3, 1)]
            );
        }

        {
            let mut g = GraphStore::directed(3);
            assert!(g.connect_path([0, 1, 5, 2]).is_err());
            assert_eq!(g.number_of_edges(), 1);
        }
    }

    #[test]
    fn test_connect_cycle() {
        {
            let mut g = GraphStore::directed(6);
            g.connect_cycle([]).unwrap();
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = GraphStore::directed(6);
            g.connect_cycle([1]).unwrap();
            assert_eq!(g.number_of_edges(), 1);
            assert!(g.has_edge(1, 1).unwrap());
        }

        {
            let mut g = GraphStore::directed(6);
            g.connect_cycle([0, 3, 1, 4]).unwrap();
            assert_eq!(
                g.edges(false).collect_vec(),
                vec![Edge(0, 3), Edge(1, 4), Edge(3, 1), Edge(4, 0)]
            );
        }
    }

    #[test]
    fn test_chained_cycles() {
        let g = GraphStore::chained_cycles(100, 5).unwrap();
        assert_eq!(g.number_of_nodes(), 100);
        assert_eq!(g.number_of_edges(), 100 + 4);
        assert!(g.is_undirected());
        for i in 1..5 {
            assert!(g.has_edge(20 * i - 1, 20 * i).unwrap());
        }
        assert!(g.has_edge(19, 0).unwrap());

        // left-over vertices stay isolated
        let g = GraphStore::chained_cycles(12, 5).unwrap();
        assert_eq!(g.number_of_edges(), 10 + 4);
        assert_eq!(g.degree_of(10), 0);
        assert_eq!(g.degree_of(11), 0);

        assert!(GraphStore::chained_cycles(3, 5).unwrap().is_empty_graph());
        assert!(GraphStore::chained_cycles(3, 0).unwrap().is_empty_graph());
    }
}
