use smallvec::SmallVec;

use super::*;

/// An entry of the adjacency list: the neighbor and the weight of the connecting edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Neighbor {
    pub node: Node,
    pub weight: Weight,
}

/// Most vertices in the analysed graphs have small degree, so neighborhoods are stored inline
type Neighborhood = SmallVec<[Neighbor; 4]>;

/// Entries removed from a single neighborhood together with their former positions (ascending)
pub(crate) type RemovedNeighbors = SmallVec<[(usize, Neighbor); 2]>;

/// The adjacency-list view of a [`GraphStore`].
///
/// Every vertex owns an ordered sequence of `(neighbor, weight)` entries in insertion order.
/// Insertions of an ordered pair `(u, v)` are suppressed if `u` already lists `v`; for undirected
/// graphs every accepted insertion is mirrored into `v`'s sequence. This is the only view the
/// analysis algorithms read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyListView {
    nbs: Vec<Neighborhood>,
    directed: bool,
}

impl AdjacencyListView {
    pub(crate) fn new(n: NumNodes, directed: bool) -> Self {
        Self {
            nbs: vec![Neighborhood::new(); n as usize],
            directed,
        }
    }

    pub(crate) fn add_node(&mut self) {
        self.nbs.push(Neighborhood::new());
    }

    /// Returns the entries of `u` in storage order
    /// ** Panics if `u >= n` **
    pub fn weighted_neighbors_of(&self, u: Node) -> &[Neighbor] {
        self.nbs[u as usize].as_slice()
    }

    /// Returns *true* if `u`'s sequence lists `v`
    /// ** Panics if `u >= n` **
    pub fn has_neighbor(&self, u: Node, v: Node) -> bool {
        self.nbs[u as usize].iter().any(|nb| nb.node == v)
    }

    /// Inserts `(u, v)` unless `u` already lists `v`; mirrors into `v` for undirected graphs.
    /// Returns *true* if the entry was inserted.
    pub(crate) fn try_insert(&mut self, u: Node, v: Node, weight: Weight) -> bool {
        if self.has_neighbor(u, v) {
            return false;
        }

        self.nbs[u as usize].push(Neighbor { node: v, weight });
        if !self.directed {
            // an undirected self-loop is listed twice at its vertex
            self.nbs[v as usize].push(Neighbor { node: u, weight });
        }
        true
    }

    /// Removes every entry `v` from `u`'s sequence and returns them with their positions
    pub(crate) fn remove_all(&mut self, u: Node, v: Node) -> RemovedNeighbors {
        let mut removed = RemovedNeighbors::new();
        let mut pos = 0;
        self.nbs[u as usize].retain(|nb| {
            let keep = nb.node != v;
            if !keep {
                removed.push((pos, *nb));
            }
            pos += 1;
            keep
        });
        removed
    }

    /// Undoes [`AdjacencyListView::remove_all`]; entries end up at their former positions
    pub(crate) fn restore(&mut self, u: Node, removed: RemovedNeighbors) {
        let nbs = &mut self.nbs[u as usize];
        for (pos, nb) in removed {
            nbs.insert(pos, nb);
        }
    }
}

impl GraphNodeOrder for AdjacencyListView {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl AdjacencyList for AdjacencyListView {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].iter().map(|nb| nb.node)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

impl IndexedAdjacencyList for AdjacencyListView {
    #[inline]
    fn ith_neighbor(&self, u: Node, i: NumNodes) -> Node {
        self.nbs[u as usize][i as usize].node
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn insert_suppresses_listed_pairs() {
        let mut view = AdjacencyListView::new(3, true);
        assert!(view.try_insert(0, 1, 5));
        assert!(!view.try_insert(0, 1, 7));
        assert!(view.try_insert(1, 0, 2));

        assert_eq!(
            view.weighted_neighbors_of(0),
            &[Neighbor { node: 1, weight: 5 }]
        );
        assert_eq!(view.degree_of(1), 1);
        assert_eq!(view.degree_of(2), 0);
    }

    #[test]
    fn undirected_insert_is_mirrored() {
        let mut view = AdjacencyListView::new(3, false);
        assert!(view.try_insert(0, 2, 1));
        assert!(!view.try_insert(2, 0, 1));
        assert!(view.try_insert(1, 1, 1));

        assert_eq!(view.neighbors_of(2).collect_vec(), vec![0]);
        assert_eq!(view.neighbors_of(1).collect_vec(), vec![1, 1]);
    }

    #[test]
    fn remove_and_restore_positions() {
        let mut view = AdjacencyListView::new(5, true);
        for v in [3, 1, 4, 2] {
            view.try_insert(0, v, v as Weight);
        }
        let before = view.clone();

        let removed = view.remove_all(0, 4);
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].0, 2);
        assert_eq!(view.neighbors_of(0).collect_vec(), vec![3, 1, 2]);

        view.restore(0, removed);
        assert_eq!(view, before);

        assert!(view.remove_all(0, 0).is_empty());
        assert_eq!(view, before);
    }
}
