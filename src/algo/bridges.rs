use tracing::debug;

use super::*;

/// Linear-time bridge detection (Tarjan) on the adjacency list as stored.
///
/// The search skips *every* adjacency entry pointing back to the DFS parent. As the adjacency
/// list collapses parallel edges into a single entry anyway, a pair joined by parallel edges is
/// reported as a bridge whenever its single entry is one.
pub trait Bridges: IndexedAdjacencyList + GraphType {
    /// Returns all bridges in the order their DFS subtree is completed. For undirected graphs
    /// edges are normalized, i.e. `Edge(u, v)` with `u < v`.
    fn compute_bridges(&self) -> Vec<Edge>;
}

impl<G> Bridges for G
where
    G: IndexedAdjacencyList + GraphType,
{
    fn compute_bridges(&self) -> Vec<Edge> {
        let bridges = BridgeSearch::new(self).compute();
        debug!(
            number_of_nodes = self.number_of_nodes(),
            bridges = bridges.len(),
            "tarjan bridges"
        );
        bridges
    }
}

/// Bridge detection by trial removal: every edge is removed in turn, and is a bridge if the graph
/// is no longer connected as seen from vertex `0`.
///
/// This is the quadratic baseline to [`Bridges::compute_bridges`]. It works on a private copy of
/// the graph and puts every edge back exactly where it was, so the caller's graph is never touched.
/// If the graph is disconnected to begin with, every considered edge is reported.
pub trait NaiveBridges {
    /// Returns all bridges in the order `(u, v)` are considered: `u` ascending, `v` in `u`'s
    /// adjacency order; for undirected graphs only pairs with `u < v`.
    fn compute_bridges_naive(&self) -> Vec<Edge>;
}

impl NaiveBridges for GraphStore {
    fn compute_bridges_naive(&self) -> Vec<Edge> {
        let mut working = self.clone();
        let mut bridges = Vec::new();

        for u in self.vertices() {
            for v in self.neighbors_of(u) {
                if self.is_undirected() && u >= v {
                    continue;
                }

                let Some(detached) = working.detach_edge(u, v) else {
                    continue;
                };
                if !working.is_connected() {
                    bridges.push(Edge(u, v));
                }
                working.reattach_edge(detached);
            }
        }

        debug_assert_eq!(&working, self);
        debug!(
            number_of_nodes = self.number_of_nodes(),
            bridges = bridges.len(),
            "naive bridges"
        );
        bridges
    }
}

struct BridgeSearch<'a, G>
where
    G: IndexedAdjacencyList + GraphType,
{
    graph: &'a G,
    nodes_info: Vec<NodeInfo>,
    time: Node,
    stack: Vec<(Node, NumNodes)>,
    bridges: Vec<Edge>,
}

impl<'a, G> BridgeSearch<'a, G>
where
    G: IndexedAdjacencyList + GraphType,
{
    fn new(graph: &'a G) -> Self {
        Self {
            graph,
            nodes_info: vec![NodeInfo::default(); graph.len()],
            time: 0,
            stack: Vec::with_capacity(32),
            bridges: Vec::new(),
        }
    }

    fn compute(mut self) -> Vec<Edge> {
        for u in self.graph.vertices_with_neighbors() {
            if self.nodes_info[u as usize].is_visited() {
                continue;
            }
            self.compute_tree(u);
        }

        self.bridges
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
        self.visit(INVALID_NODE, root);

        while let Some((u, cursor)) = self.stack.last_mut() {
            let u = *u;
            if *cursor < self.graph.degree_of(u) {
                let v = self.graph.ith_neighbor(u, *cursor);
                *cursor += 1;

                let info_u = self.nodes_info[u as usize];
                if !self.nodes_info[v as usize].is_visited() {
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
            if info_u.low > self.nodes_info[parent as usize].discovery {
                let bridge = Edge(parent, u);
                self.bridges.push(if self.graph.is_undirected() {
                    bridge.normalized()
                } else {
                    bridge
                });
            }
        }
    }
}

/// DFS bookkeeping per vertex; `discovery == 0` means "not visited yet"
#[derive(Clone, Copy, Default)]
pub(super) struct NodeInfo {
    pub(super) low: Node,
    pub(super) discovery: Node,
    pub(super) parent: Node,
}

impl NodeInfo {
    pub(super) fn is_visited(&self) -> bool {
        self.discovery > 0
    }

    pub(super) fn update_low(&mut self, value: Node) {
        self.low = self.low.min(value);
    }
}
