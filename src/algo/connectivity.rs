use itertools::Itertools;
use tracing::debug;

use super::*;

/// Connectivity predicates and component decompositions.
///
/// Every predicate is vacuously *true* for a graph without vertices. On undirected graphs the
/// strong, weak and unilateral variants coincide with [`Connectivity::is_connected`].
pub trait Connectivity: IndexedAdjacencyList + GraphType {
    /// Returns *true* if a flood fill from vertex `0` that follows edges as stored visits every
    /// vertex. For directed graphs only outgoing edges are followed.
    fn is_connected(&self) -> bool;

    /// Partitions the vertices into strongly connected components using Kosaraju's two-pass
    /// algorithm. Components are emitted in the order pass two discovers them; vertices within
    /// a component in the order they were visited.
    fn kosaraju_scc(&self) -> Vec<Vec<Node>>;

    /// Directed: there is exactly one strongly connected component.
    fn is_strongly_connected(&self) -> bool;

    /// Directed: the graph is connected if edge directions are ignored.
    fn is_weakly_connected(&self) -> bool;

    /// Directed: a direction-ignoring flood fill from *every* vertex reaches all vertices.
    fn is_unilaterally_connected(&self) -> bool;

    /// Partitions the vertices into the connected components of the underlying undirected graph.
    /// Components are ordered by their smallest vertex.
    fn connected_components(&self) -> Vec<Vec<Node>>;

    /// Returns the number of components of [`Connectivity::connected_components`]
    fn number_of_connected_components(&self) -> usize {
        self.connected_components().len()
    }
}

impl<G> Connectivity for G
where
    G: IndexedAdjacencyList + GraphType,
{
    fn is_connected(&self) -> bool {
        if self.is_empty() {
            return true;
        }
        self.dfs(0).count() == self.len()
    }

    fn kosaraju_scc(&self) -> Vec<Vec<Node>> {
        let finish_order = finish_order(self);

        let transposed = AdjacencySnapshot::transposed(self);
        let mut dfs = DFS::unstarted(&transposed);

        let mut components = Vec::new();
        for &u in finish_order.iter().rev() {
            if dfs.restart_at(u) {
                components.push(dfs.by_ref().collect_vec());
            }
        }

        debug!(
            number_of_nodes = self.number_of_nodes(),
            components = components.len(),
            "kosaraju scc"
        );
        components
    }

    fn is_strongly_connected(&self) -> bool {
        if self.is_undirected() {
            return self.is_connected();
        }
        self.kosaraju_scc().len() <= 1
    }

    fn is_weakly_connected(&self) -> bool {
        if self.is_undirected() || self.is_empty() {
            return self.is_connected();
        }
        AdjacencySnapshot::symmetrized(self).dfs(0).count() == self.len()
    }

    fn is_unilaterally_connected(&self) -> bool {
        if self.is_undirected() {
            return self.is_connected();
        }
        let symmetrized = AdjacencySnapshot::symmetrized(self);
        self.vertices()
            .all(|u| symmetrized.dfs(u).count() == self.len())
    }

    fn connected_components(&self) -> Vec<Vec<Node>> {
        if self.is_undirected() {
            components_along_edges(self)
        } else {
            components_along_edges(&AdjacencySnapshot::symmetrized(self))
        }
    }
}

/// Components reached by flood fills along stored edges, restarting at the smallest unvisited
/// vertex. Only meaningful for symmetric adjacencies.
fn components_along_edges<G: AdjacencyList>(graph: &G) -> Vec<Vec<Node>> {
    let mut components = Vec::new();
    let mut dfs = DFS::unstarted(graph);
    while dfs.try_restart_at_unvisited() {
        components.push(dfs.by_ref().collect_vec());
    }
    components
}

/// First pass of Kosaraju: vertices in the order their exploration completes, covering all
/// vertices by restarting at the smallest unvisited vertex.
fn finish_order<G: IndexedAdjacencyList>(graph: &G) -> Vec<Node> {
    let mut visited = graph.vertex_bitset_unset();
    let mut order = Vec::with_capacity(graph.len());
    // (vertex, index of the next neighbor to inspect)
    let mut stack: Vec<(Node, NumNodes)> = Vec::with_capacity(32);

    for root in graph.vertices() {
        if visited.set_node(root) {
            continue;
        }
        stack.push((root, 0));

        while let Some((u, cursor)) = stack.last_mut() {
            let u = *u;
            if *cursor == graph.degree_of(u) {
                stack.pop();
                order.push(u);
                continue;
            }

            let v = graph.ith_neighbor(u, *cursor);
            *cursor += 1;
            if !visited.set_node(v) {
                stack.push((v, 0));
            }
        }
    }

    order
}

/// Sorts the nodes in each component increasingly and then the components themselves
/// lexicographically.
pub fn sort_components(mut components: Vec<Vec<Node>>) -> Vec<Vec<Node>> {
    components.iter_mut().for_each(|comp| comp.sort_unstable());
    components.sort_unstable();
    components
}
