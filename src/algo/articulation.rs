use tracing::debug;

use super::{bridges::NodeInfo, *};

/// Articulation points (cut vertices) via a single iterative DFS.
///
/// A non-root vertex `v` is an articulation point if some DFS child `w` has
/// `low[w] >= num[v]`; a DFS root is one iff it has more than one DFS child.
pub trait ArticulationPoints: IndexedAdjacencyList {
    /// Returns a bitset with the articulation points set
    fn compute_articulation_points(&self) -> NodeBitSet;

    /// Returns the articulation points in ascending order
    fn articulation_points(&self) -> Vec<Node> {
        self.compute_articulation_points().iter_nodes().collect()
    }
}

impl<G> ArticulationPoints for G
where
    G: IndexedAdjacencyList,
{
    fn compute_articulation_points(&self) -> NodeBitSet {
        let points = ArticulationPointSearch::new(self).compute();
        debug!(
            number_of_nodes = self.number_of_nodes(),
            articulation_points = points.count_ones(..),
            "articulation points"
        );
        points
    }
}

struct ArticulationPointSearch<'a, G>
where
    G: IndexedAdjacencyList,
{
    graph: &'a G,
    nodes_info: Vec<NodeInfo>,
    time: Node,
    stack: Vec<(Node, NumNodes)>,
    articulation_points: NodeBitSet,
}

impl<'a, G> ArticulationPointSearch<'a, G>
where
    G: IndexedAdjacencyList,
{
    fn new(graph: &'a G) -> Self {
        Self {
            graph,
            nodes_info: vec![NodeInfo::default(); graph.len()],
            time: 0,
            stack: Vec::with_capacity(32),
            articulation_points: graph.vertex_bitset_unset(),
        }
    }

    fn compute(mut self) -> NodeBitSet {
        for u in self.graph.vertices_with_neighbors() {
            if self.nodes_info[u as usize].is_visited() {
                continue;
            }
            self.compute_tree(u);
        }

        self.articulation_points
    }

    fn visit(&mut self, parent: Node, u: Node) {
        self.time += 1;
        self.nodes_info[u as usize] = NodeInfo {
            parent,
            discovery: self.time,
            low: self.time,
        };
        self.stack.push((u, 0));
    }

    fn compute_tree(&mut self, root: Node) {
        let mut root_children = 0;
        self.visit(INVALID_NODE, root);

        while let Some((u, cursor)) = self.stack.last_mut() {
            let u = *u;
            if *cursor < self.graph.degree_of(u) {
                let v = self.graph.ith_neighbor(u, *cursor);
                *cursor += 1;

                let info_u = self.nodes_info[u as usize];
                if !self.nodes_info[v as usize].is_visited() {
                    if u == root {
                        root_children += 1;
                    }
                    self.visit(u, v);
                } else if v != info_u.parent {
                    let v_disc = self.nodes_info[v as usize].discovery;
                    self.nodes_info[u as usize].update_low(v_disc);
                }
                continue;
            }

            self.stack.pop();
            let info_u = self.nodes_info[u as usize];
            let parent = info_u.parent;
            if parent == INVALID_NODE {
                continue;
            }

            self.nodes_info[parent as usize].update_low(info_u.low);
            if parent != root && info_u.low >= self.nodes_info[parent as usize].discovery {
                self.articulation_points.set_node(parent);
            }
        }

        if root_children > 1 {
            self.articulation_points.set_node(root);
        }
    }
}
