use tracing::{debug, trace};

use super::*;

/// Why [`EulerianCircuits::eulerian_circuit`] refused to build a circuit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotEulerianReason {
    /// The graph is not connected (as seen from vertex `0`)
    Disconnected,
    /// This vertex has an odd number of adjacency entries
    OddDegree(Node),
}

/// Outcome of an Eulerian circuit request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EulerianCircuit {
    /// The traversed edges `(u, v)` in order, starting at vertex `0`
    Circuit(Vec<Edge>),
    /// The precondition failed; nothing was built
    NotEulerian(NotEulerianReason),
}

impl EulerianCircuit {
    /// Returns *true* if a circuit was built
    pub fn is_circuit(&self) -> bool {
        matches!(self, Self::Circuit(_))
    }

    /// Returns the circuit if one was built
    pub fn circuit(&self) -> Option<&[Edge]> {
        match self {
            Self::Circuit(edges) => Some(edges),
            Self::NotEulerian(_) => None,
        }
    }
}

/// Eulerian circuits via Fleury's algorithm
pub trait EulerianCircuits {
    /// Builds an Eulerian circuit starting at vertex `0`.
    ///
    /// The graph must be connected and every vertex must have an even number of adjacency
    /// entries; for directed graphs this is the out-degree. Otherwise the first violated
    /// condition is returned and nothing is built.
    ///
    /// The circuit is built on a private copy: from the current vertex, its adjacency entries are
    /// tried in order and an edge is taken if, after removing it, every vertex that still has
    /// edges is reachable from its far endpoint. An edge failing this test is only taken if no
    /// other one passes. Construction stops once the current vertex has no adjacency entries
    /// left, so edge-list entries hidden from the adjacency list (parallel edges) and edges of
    /// directed graphs whose in- and out-degrees differ may remain unused.
    fn eulerian_circuit(&self) -> EulerianCircuit;
}

impl EulerianCircuits for GraphStore {
    fn eulerian_circuit(&self) -> EulerianCircuit {
        if let Err(reason) = check_eulerian(self) {
            debug!(?reason, "graph is not eulerian");
            return EulerianCircuit::NotEulerian(reason);
        }

        let mut working = self.clone();
        let mut circuit = Vec::with_capacity(self.edge_count() as usize);
        let mut current: Node = 0;

        while !working.is_empty_graph() {
            let Some(v) = next_step(&mut working, current) else {
                break;
            };
            trace!(u = current, v, "fleury step");
            circuit.push(Edge(current, v));
            current = v;
        }

        debug!(edges = circuit.len(), "eulerian circuit");
        EulerianCircuit::Circuit(circuit)
    }
}

fn check_eulerian(graph: &GraphStore) -> Result<(), NotEulerianReason> {
    if !graph.is_connected() {
        return Err(NotEulerianReason::Disconnected);
    }

    match graph.vertices().find(|&u| graph.degree_of(u) % 2 == 1) {
        Some(u) => Err(NotEulerianReason::OddDegree(u)),
        None => Ok(()),
    }
}

/// Removes the next edge of the circuit at `u` from `working` and returns its far endpoint.
/// Returns `None` if `u` has no adjacency entries left.
fn next_step(working: &mut GraphStore, u: Node) -> Option<Node> {
    for i in 0..working.degree_of(u) {
        let v = working.ith_neighbor(u, i);
        let Some(detached) = working.detach_edge(u, v) else {
            continue;
        };

        if working.reaches_all_non_isolated(v) {
            return Some(v);
        }

        // bridge of the remaining graph
        working.reattach_edge(detached);
    }

    // only bridging edges left: take the first one
    let v = working.neighbors_of(u).next()?;
    working.detach_edge(u, v)?;
    Some(v)
}
