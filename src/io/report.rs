//! # Text Report
//!
//! Dumps all three views of a [`GraphStore`] as plain text. Vertices are printed 1-based.
//!
//! ```text
//! Graph: path
//! Directed: no
//! Vertices: 3
//! Edges: 2
//!
//! Adjacency list:
//! 1: 2(1)
//! 2: 1(1), 3(1)
//! 3: 2(1)
//!
//! Adjacency matrix:
//!       1   2   3
//!   1   0   1   0
//!   ...
//! ```
use itertools::Itertools;

use super::*;

/// A writer for human-readable reports
#[derive(Debug, Clone)]
pub struct TextReportWriter {
    title: String,
}

impl Default for TextReportWriter {
    fn default() -> Self {
        Self {
            title: String::from("graph"),
        }
    }
}

impl TextReportWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name printed in the first line
    pub fn title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = title.into();
        self
    }
}

/// Writes `rows` as a table with right-aligned columns of width 3 and 1-based headers
fn write_table<W, R, T>(writer: &mut W, num_columns: usize, rows: R) -> Result<()>
where
    W: Write,
    R: Iterator,
    R::Item: IntoIterator<Item = T>,
    T: std::fmt::Display,
{
    writeln!(
        writer,
        "    {}",
        (1..=num_columns).map(|c| format!("{c:>3}")).join(" ")
    )?;
    for (r, row) in rows.enumerate() {
        writeln!(
            writer,
            "{:>3} {}",
            r + 1,
            row.into_iter().map(|x| format!("{x:>3}")).join(" ")
        )?;
    }
    Ok(())
}

impl GraphWriter<GraphStore> for TextReportWriter {
    fn try_write_graph<W>(&self, graph: &GraphStore, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        let n = graph.number_of_nodes();

        writeln!(writer, "Graph: {}", self.title)?;
        writeln!(
            writer,
            "Directed: {}",
            if graph.is_directed() { "yes" } else { "no" }
        )?;
        writeln!(writer, "Vertices: {n}")?;
        writeln!(writer, "Edges: {}", graph.edge_list().len())?;

        writeln!(writer, "\nAdjacency list:")?;
        let adjacency = graph.adjacency_list();
        for u in 0..n {
            writeln!(
                writer,
                "{}: {}",
                u as u64 + 1,
                adjacency
                    .weighted_neighbors_of(u)
                    .iter()
                    .map(|nb| format!("{}({})", nb.node as u64 + 1, nb.weight))
                    .join(", ")
            )?;
        }

        writeln!(writer, "\nAdjacency matrix:")?;
        let matrix = graph.adjacency_matrix();
        write_table(&mut writer, n as usize, (0..n).map(|u| matrix.row(u)))?;

        writeln!(writer, "\nIncidence matrix:")?;
        let incidence = graph.incidence_matrix();
        if incidence.number_of_columns() == 0 {
            writeln!(writer, "No edges.")
        } else {
            write_table(
                &mut writer,
                incidence.number_of_columns(),
                (0..n).map(|u| incidence.row(u)),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(writer: &TextReportWriter, graph: &GraphStore) -> String {
        let mut buffer = Vec::new();
        writer.try_write_graph(graph, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn undirected_report() {
        let mut graph = GraphStore::undirected(3);
        graph.add_edge(0, 1).unwrap();
        graph.add_weighted_edge(1, 2, 7, None).unwrap();

        assert_eq!(
            report(&TextReportWriter::new().title("path"), &graph),
            "Graph: path
Directed: no
Vertices: 3
Edges: 2

Adjacency list:
1: 2(1)
2: 1(1), 3(7)
3: 2(7)

Adjacency matrix:
      1   2   3
  1   0   1   0
  2   1   0   7
  3   0   7   0

Incidence matrix:
      1   2
  1   1   0
  2   1   1
  3   0   1
"
        );
    }

    #[test]
    fn directed_incidence_signs() {
        let graph = GraphStore::from_edges(2, true, [(1, 0)]).unwrap();
        let text = report(&TextReportWriter::new(), &graph);

        assert!(text.starts_with("Graph: graph\nDirected: yes\n"));
        assert!(text.contains("1: \n2: 1(1)\n"));
        assert!(text.ends_with("Incidence matrix:\n      1\n  1  -1\n  2   1\n"));
    }

    #[test]
    fn report_without_edges() {
        let text = report(&TextReportWriter::new(), &GraphStore::undirected(0));
        assert!(text.contains("Vertices: 0\nEdges: 0\n"));
        assert!(text.ends_with("Incidence matrix:\nNo edges.\n"));
    }
}
