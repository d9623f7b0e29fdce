use std::fmt::{Debug, Display};

use crate::Node;

/// An edge is defined by two nodes/endpoints.
/// Whether an Edge is directed is decided by the graph it belongs to.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// Edge weights. Zero is reserved as "absent" in the adjacency matrix.
pub type Weight = i64;

/// Weight used whenever the caller does not specify one
pub const DEFAULT_WEIGHT: Weight = 1;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }

    /// Returns *true* if the edge connects `u` and `v`, ignoring orientation unless `directed`
    pub fn connects(&self, u: Node, v: Node, directed: bool) -> bool {
        (self.0 == u && self.1 == v) || (!directed && self.0 == v && self.1 == u)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

/// An entry of the canonical edge list: endpoints, weight and an optional label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeRecord {
    pub edge: Edge,
    pub weight: Weight,
    pub label: Option<String>,
}

impl EdgeRecord {
    pub fn new(edge: Edge, weight: Weight, label: Option<String>) -> Self {
        Self {
            edge,
            weight,
            label,
        }
    }

    /// Tail of the edge (`u` in `(u, v)`)
    pub fn source(&self) -> Node {
        self.edge.0
    }

    /// Head of the edge (`v` in `(u, v)`)
    pub fn target(&self) -> Node {
        self.edge.1
    }
}
