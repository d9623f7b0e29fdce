/*!
Stack-based graph traversal.

This module provides:
- [`DFS`], a flood-fill iterator that visits every vertex reachable from a start vertex exactly
  once, using an explicit stack (no recursion, so deep graphs are fine),
- [`AdjacencySnapshot`], an owned adjacency structure used to traverse the transposed graph or
  the underlying undirected graph of a directed graph,
- the [`Traversal`] trait that exposes these as methods on graphs.
*/

use super::*;

/// Flood-fill iterator over all vertices reachable from a start vertex.
///
/// Vertices are marked as visited when they are pushed onto the stack and yielded when they are
/// popped. Following edges as stored, a directed graph is traversed along outgoing edges only.
pub struct DFS<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: NodeBitSet,
    stack: Vec<Node>,
}

impl<'a, G> DFS<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new traversal starting in `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut dfs = Self::unstarted(graph);
        dfs.restart_at(start);
        dfs
    }

    /// Creates a traversal with an empty stack. Call [`DFS::restart_at`] to seed it.
    pub fn unstarted(graph: &'a G) -> Self {
        Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            stack: Vec::with_capacity(32),
        }
    }

    /// Pushes `u` onto the stack unless it was visited (or excluded) before.
    /// Returns *true* if the search was (re)started at `u`.
    pub fn restart_at(&mut self, u: Node) -> bool {
        if self.visited.set_node(u) {
            return false;
        }
        self.stack.push(u);
        true
    }

    /// Tries to restart the search at the unvisited vertex with smallest index and returns
    /// *true* iff successful. Requires that the search came to a hold earlier.
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        debug_assert!(self.stack.is_empty());
        match self.graph.vertices().find(|&u| !self.visited.has_node(u)) {
            Some(u) => self.restart_at(u),
            None => false,
        }
    }

    /// Excludes a vertex from the search. It is treated as if it was already visited, i.e. no
    /// edges to or from it are taken. Has no effect on a vertex already on the stack.
    pub fn exclude_node(&mut self, u: Node) {
        self.visited.set_node(u);
    }

    /// Builder variant of [`DFS::exclude_node`] for multiple vertices
    pub fn with_nodes_excluded<I>(mut self, us: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        for u in us {
            self.exclude_node(u);
        }
        self
    }

    /// Returns the set of vertices visited (or excluded) so far
    pub fn visited(&self) -> &NodeBitSet {
        &self.visited
    }

    /// Runs the search to completion and returns the set of visited vertices
    pub fn into_visited(mut self) -> NodeBitSet {
        self.by_ref().for_each(drop);
        self.visited
    }
}

impl<G> Iterator for DFS<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.stack.pop()?;

        for v in self.graph.neighbors_of(u) {
            if !self.visited.set_node(v) {
                self.stack.push(v);
            }
        }

        Some(u)
    }
}

/// An owned adjacency structure derived from another graph.
///
/// Neighbors are stored in the order they are discovered while scanning the source graph
/// vertex by vertex.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencySnapshot {
    nbs: Vec<Vec<Node>>,
}

impl AdjacencySnapshot {
    /// The transposed graph: `v` lists `u` for every stored edge `(u, v)`
    pub fn transposed<G: AdjacencyList>(graph: &G) -> Self {
        let mut nbs = vec![Vec::new(); graph.len()];
        for Edge(u, v) in graph.edges(false) {
            nbs[v as usize].push(u);
        }
        Self { nbs }
    }

    /// The underlying undirected graph: every vertex lists its out-neighbors followed by its
    /// in-neighbors. Vertices may occur twice in a neighborhood.
    pub fn symmetrized<G: AdjacencyList>(graph: &G) -> Self {
        let mut nbs: Vec<Vec<Node>> = graph
            .vertices()
            .map(|u| graph.neighbors_of(u).collect())
            .collect();
        for Edge(u, v) in graph.edges(false) {
            nbs[v as usize].push(u);
        }
        Self { nbs }
    }
}

impl GraphNodeOrder for AdjacencySnapshot {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl AdjacencyList for AdjacencySnapshot {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

impl IndexedAdjacencyList for AdjacencySnapshot {
    #[inline]
    fn ith_neighbor(&self, u: Node, i: NumNodes) -> Node {
        self.nbs[u as usize][i as usize]
    }
}

/// Traversal algorithms as methods on the graph itself
pub trait Traversal: AdjacencyList {
    /// Returns a flood-fill iterator over all vertices reachable from `start`
    /// ** Panics if `start >= n` **
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }

    /// Returns the set of vertices reachable from `start` (including `start`)
    /// ** Panics if `start >= n` **
    fn reachable_from(&self, start: Node) -> NodeBitSet {
        self.dfs(start).into_visited()
    }

    /// Returns *true* if every vertex with at least one (outgoing) neighbor is reachable from
    /// `start`. Isolated vertices are ignored.
    /// ** Panics if `start >= n` **
    fn reaches_all_non_isolated(&self, start: Node) -> bool {
        let visited = self.reachable_from(start);
        self.vertices_with_neighbors().all(|u| visited.has_node(u))
    }
}

impl<G: AdjacencyList> Traversal for G {}
