use smallvec::SmallVec;
use tracing::trace;

use super::*;
use crate::error::{GraphError, Result};

/// A graph that keeps its canonical edge list and three derived views in sync:
/// an [`AdjacencyListView`], an [`AdjacencyMatrix`] and an [`IncidenceMatrix`].
///
/// The edge list records every insertion (parallel edges included) in insertion order. The
/// matrix views follow every insertion as well, whereas the adjacency list suppresses a pair it
/// already lists; inserting a duplicate edge therefore makes the adjacency list hold fewer entries
/// than the other views. All graph algorithms of this crate read the adjacency list.
///
/// Vertices are never removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphStore {
    directed: bool,
    labels: Vec<String>,
    edges: Vec<EdgeRecord>,
    adjacency: AdjacencyListView,
    matrix: AdjacencyMatrix,
    incidence: IncidenceMatrix,
}

/// Everything [`GraphStore::detach_edge`] took out of the views, so that
/// [`GraphStore::reattach_edge`] can put it back at the exact same positions.
#[derive(Debug, Clone)]
pub(crate) struct DetachedEdge {
    /// Arguments of the detach call; may be the reverse of `record.edge` if undirected
    endpoints: (Node, Node),
    index: usize,
    record: EdgeRecord,
    column: IncidenceColumn,
    removed_at_u: RemovedNeighbors,
    removed_at_v: RemovedNeighbors,
    /// Previous matrix cells in the order they were cleared
    cells: SmallVec<[(Node, Node, Weight); 2]>,
}

fn default_label(u: Node) -> String {
    format!("V{}", u as u64 + 1)
}

impl GraphStore {
    /// Creates a graph with `n` isolated vertices labelled `V1, ..., Vn`
    pub fn new(n: NumNodes, directed: bool) -> Self {
        Self {
            directed,
            labels: (0..n).map(default_label).collect(),
            edges: Vec::new(),
            adjacency: AdjacencyListView::new(n, directed),
            matrix: AdjacencyMatrix::new(n),
            incidence: IncidenceMatrix::new(n, directed),
        }
    }

    /// Shorthand for `GraphStore::new(n, false)`
    pub fn undirected(n: NumNodes) -> Self {
        Self::new(n, false)
    }

    /// Shorthand for `GraphStore::new(n, true)`
    pub fn directed(n: NumNodes) -> Self {
        Self::new(n, true)
    }

    /// Creates a graph with `n` vertices and the given edges (default weight, no labels)
    ///
    /// # Errors
    /// Fails on the first edge with an endpoint `>= n`.
    pub fn from_edges<I>(n: NumNodes, directed: bool, edges: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        let mut graph = Self::new(n, directed);
        graph.add_edges(edges)?;
        Ok(graph)
    }

    /// Appends a new vertex and returns its index. Without a label, `V{index + 1}` is used.
    pub fn add_vertex(&mut self, label: Option<String>) -> Node {
        let u = self.number_of_nodes();
        self.labels.push(label.unwrap_or_else(|| default_label(u)));
        self.adjacency.add_node();
        self.matrix.add_node();
        self.incidence.add_row();
        trace!(u, "add vertex");
        u
    }

    /// Adds the edge *(u,v)* with the given weight and label.
    ///
    /// The edge list, adjacency matrix and incidence matrix always record the edge. The
    /// adjacency list only does if `u` does not list `v` yet.
    ///
    /// # Errors
    /// Fails if `u` or `v` is not a vertex; the graph is left unchanged.
    pub fn add_weighted_edge(
        &mut self,
        u: Node,
        v: Node,
        weight: Weight,
        label: Option<String>,
    ) -> Result<()> {
        self.check_node(u)?;
        self.check_node(v)?;

        let listed = self.adjacency.try_insert(u, v, weight);
        self.matrix.set(u, v, weight);
        if !self.directed {
            self.matrix.set(v, u, weight);
        }
        self.incidence.push_column(Edge(u, v).into());
        self.edges.push(EdgeRecord::new(Edge(u, v), weight, label));

        trace!(u, v, weight, listed, "add edge");
        Ok(())
    }

    /// Returns *true* only if the adjacency list, the adjacency matrix and the incidence matrix
    /// all report the edge *(u,v)*. Used to cross-check the views.
    ///
    /// # Errors
    /// Fails if `u` or `v` is not a vertex.
    pub fn has_edge(&self, u: Node, v: Node) -> Result<bool> {
        self.check_node(u)?;
        self.check_node(v)?;

        Ok(self.adjacency.has_neighbor(u, v)
            && self.matrix.has_entry(u, v)
            && self.incidence.has_column(u, v))
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> NumNodes {
        self.number_of_nodes()
    }

    /// Number of edge-list entries (parallel edges included)
    pub fn edge_count(&self) -> NumEdges {
        self.number_of_edges()
    }

    /// Returns *true* if the graph has no edges
    pub fn is_empty_graph(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns *true* if every vertex lists all `n - 1` other vertices
    pub fn is_complete(&self) -> bool {
        let target = self.number_of_nodes().saturating_sub(1);
        self.degrees().all(|d| d == target)
    }

    /// Returns the display label of `u`
    ///
    /// # Errors
    /// Fails if `u` is not a vertex.
    pub fn label_of(&self, u: Node) -> Result<&str> {
        self.check_node(u)?;
        Ok(&self.labels[u as usize])
    }

    /// All vertex labels in index order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The canonical edge list in insertion order
    pub fn edge_list(&self) -> &[EdgeRecord] {
        &self.edges
    }

    /// Read-only access to the adjacency-list view
    pub fn adjacency_list(&self) -> &AdjacencyListView {
        &self.adjacency
    }

    /// Read-only access to the adjacency-matrix view
    pub fn adjacency_matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }

    /// Read-only access to the incidence-matrix view
    pub fn incidence_matrix(&self) -> &IncidenceMatrix {
        &self.incidence
    }

    fn check_node(&self, u: Node) -> Result<()> {
        let number_of_nodes = self.number_of_nodes();
        if u < number_of_nodes {
            Ok(())
        } else {
            Err(GraphError::NodeOutOfRange {
                node: u,
                number_of_nodes,
            })
        }
    }

    /// Removes the first edge-list entry matching *(u,v)* (or *(v,u)* if undirected) from all
    /// views and records where everything was. Returns `None` (and changes nothing) if no entry
    /// matches. Endpoints must be valid.
    pub(crate) fn detach_edge(&mut self, u: Node, v: Node) -> Option<DetachedEdge> {
        let index = self
            .edges
            .iter()
            .position(|rec| rec.edge.connects(u, v, self.directed))?;

        let record = self.edges.remove(index);
        let column = self.incidence.remove_column(index);

        let removed_at_u = self.adjacency.remove_all(u, v);
        let removed_at_v = if self.directed {
            RemovedNeighbors::new()
        } else {
            self.adjacency.remove_all(v, u)
        };

        let mut cells = SmallVec::new();
        cells.push((u, v, self.matrix.set(u, v, 0)));
        if !self.directed {
            cells.push((v, u, self.matrix.set(v, u, 0)));
        }

        trace!(u, v, index, "detach edge");
        Some(DetachedEdge {
            endpoints: (u, v),
            index,
            record,
            column,
            removed_at_u,
            removed_at_v,
            cells,
        })
    }

    /// Undoes a [`GraphStore::detach_edge`]. Must be applied to the graph state directly after
    /// the detach (or after undoing all later detaches).
    pub(crate) fn reattach_edge(&mut self, detached: DetachedEdge) {
        let DetachedEdge {
            endpoints: (u, v),
            index,
            record,
            column,
            removed_at_u,
            removed_at_v,
            cells,
        } = detached;
        trace!(u, v, index, "reattach edge");

        for &(x, y, weight) in cells.iter().rev() {
            self.matrix.set(x, y, weight);
        }

        self.adjacency.restore(v, removed_at_v);
        self.adjacency.restore(u, removed_at_u);

        self.incidence.insert_column(index, column);
        self.edges.insert(index, record);
    }
}

impl GraphNodeOrder for GraphStore {
    fn number_of_nodes(&self) -> NumNodes {
        self.labels.len() as NumNodes
    }
}

impl GraphEdgeOrder for GraphStore {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}

impl GraphType for GraphStore {
    fn is_directed(&self) -> bool {
        self.directed
    }
}

impl AdjacencyList for GraphStore {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.adjacency.neighbors_of(u)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.adjacency.degree_of(u)
    }
}

impl IndexedAdjacencyList for GraphStore {
    #[inline]
    fn ith_neighbor(&self, u: Node, i: NumNodes) -> Node {
        self.adjacency.ith_neighbor(u, i)
    }
}

impl GraphEdgeEditing for GraphStore {
    fn add_edge(&mut self, u: Node, v: Node) -> Result<()> {
        self.add_weighted_edge(u, v, DEFAULT_WEIGHT, None)
    }

    fn remove_edge(&mut self, u: Node, v: Node) -> Result<Option<EdgeRecord>> {
        self.check_node(u)?;
        self.check_node(v)?;
        Ok(self.detach_edge(u, v).map(|detached| detached.record))
    }
}
