use super::*;

/// A column of the incidence matrix: the endpoints of one edge-list entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IncidenceColumn {
    pub tail: Node,
    pub head: Node,
}

impl From<Edge> for IncidenceColumn {
    fn from(Edge(tail, head): Edge) -> Self {
        Self { tail, head }
    }
}

/// The incidence-matrix view of a [`GraphStore`]: one row per vertex, one column per edge-list
/// entry (same order).
///
/// A directed edge `(u, v)` reads `+1` at row `u` and `-1` at row `v` (a directed self-loop reads
/// `-1`); an undirected edge reads `+1` at both rows. Each column has at most two non-zero
/// entries, so only the endpoints are stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncidenceMatrix {
    num_rows: NumNodes,
    directed: bool,
    columns: Vec<IncidenceColumn>,
}

impl IncidenceMatrix {
    pub(crate) fn new(n: NumNodes, directed: bool) -> Self {
        Self {
            num_rows: n,
            directed,
            columns: Vec::new(),
        }
    }

    /// Appends a row of zeros
    pub(crate) fn add_row(&mut self) {
        self.num_rows += 1;
    }

    pub(crate) fn push_column(&mut self, column: IncidenceColumn) {
        self.columns.push(column);
    }

    pub(crate) fn insert_column(&mut self, index: usize, column: IncidenceColumn) {
        self.columns.insert(index, column);
    }

    pub(crate) fn remove_column(&mut self, index: usize) -> IncidenceColumn {
        self.columns.remove(index)
    }

    /// Number of rows (vertices)
    pub fn number_of_rows(&self) -> NumNodes {
        self.num_rows
    }

    /// Number of columns (edge-list entries)
    pub fn number_of_columns(&self) -> usize {
        self.columns.len()
    }

    /// Returns the endpoints stored in column `col`
    /// ** Panics if `col` is out of range **
    pub fn column(&self, col: usize) -> IncidenceColumn {
        self.columns[col]
    }

    /// Returns the matrix entry at `(row, col)`
    /// ** Panics if `col` is out of range **
    pub fn entry(&self, row: Node, col: usize) -> i8 {
        let IncidenceColumn { tail, head } = self.columns[col];
        if self.directed {
            if row == head {
                -1
            } else if row == tail {
                1
            } else {
                0
            }
        } else if row == tail || row == head {
            1
        } else {
            0
        }
    }

    /// Returns row `row` as a dense sequence with one entry per column
    pub fn row(&self, row: Node) -> impl Iterator<Item = i8> + '_ {
        (0..self.columns.len()).map(move |col| self.entry(row, col))
    }

    /// Returns *true* if some column connects `u` and `v` (in either orientation if undirected)
    pub fn has_column(&self, u: Node, v: Node) -> bool {
        self.columns
            .iter()
            .any(|c| Edge(c.tail, c.head).connects(u, v, self.directed))
    }
}
