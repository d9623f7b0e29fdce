use fxhash::FxHashMap;

use super::*;

/// The adjacency-matrix view of a [`GraphStore`]: an `n x n` grid of weights where `0` means
/// "no edge".
///
/// Rows are stored sparsely so that graphs with many vertices stay cheap, but every cell can be
/// read as if the grid were dense.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    rows: Vec<FxHashMap<Node, Weight>>,
}

impl AdjacencyMatrix {
    pub(crate) fn new(n: NumNodes) -> Self {
        Self {
            rows: vec![FxHashMap::default(); n as usize],
        }
    }

    /// Appends an empty row and (implicitly) an empty column
    pub(crate) fn add_node(&mut self) {
        self.rows.push(FxHashMap::default());
    }

    /// Number of rows (= number of columns)
    pub fn dimension(&self) -> NumNodes {
        self.rows.len() as NumNodes
    }

    /// Returns the weight stored at `[u][v]`, `0` if empty
    /// ** Panics if `u >= n` **
    pub fn weight(&self, u: Node, v: Node) -> Weight {
        self.rows[u as usize].get(&v).copied().unwrap_or(0)
    }

    /// Returns *true* if `[u][v]` holds a non-zero weight
    /// ** Panics if `u >= n` **
    pub fn has_entry(&self, u: Node, v: Node) -> bool {
        self.weight(u, v) != 0
    }

    /// Returns row `u` as a dense sequence of `n` weights
    /// ** Panics if `u >= n` **
    pub fn row(&self, u: Node) -> impl Iterator<Item = Weight> + '_ {
        let row = &self.rows[u as usize];
        (0..self.dimension()).map(move |v| row.get(&v).copied().unwrap_or(0))
    }

    /// Returns the number of non-zero cells
    pub fn number_of_entries(&self) -> usize {
        self.rows.iter().map(|row| row.len()).sum()
    }

    /// Overwrites `[u][v]` and returns the previous weight
    pub(crate) fn set(&mut self, u: Node, v: Node, weight: Weight) -> Weight {
        let row = &mut self.rows[u as usize];
        let previous = if weight == 0 {
            row.remove(&v)
        } else {
            row.insert(v, weight)
        };
        previous.unwrap_or(0)
    }
}
