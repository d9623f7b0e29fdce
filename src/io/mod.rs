/*!
# IO

Utilities for writing a [`GraphStore`] to different file formats. Writers only read the store
through its shared accessors.

## Output Formats

- **Gexf**: the XML format of [Gephi](https://gexf.net/) with vertex labels and edge weights.
- **Ppm**: a binary `P6` raster image of the graph on a grid layout, optionally as a sequence of
  frames that add one edge at a time.
- **Report**: a plain-text dump of all three views of the store.

## Traits

To generalize over writing:
- [`GraphWriter`] is implemented by writers for a specific format.
- [`GraphWrite`] abstracts over writing using a given [`FileFormat`] with default settings.
*/

pub mod gexf;
pub mod ppm;
pub mod report;

use std::{
    fs::File,
    io::{BufWriter, Result, Write},
    path::Path,
    str::FromStr,
};

use crate::prelude::*;

pub use gexf::*;
pub use ppm::*;
pub use report::*;

/// Identifier for a graph file format.
///
/// Used in [`GraphWrite`] to determine the correct writer to use.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// GEXF (XML)
    Gexf,
    /// Binary portable pixmap
    Ppm,
    /// Plain-text report
    Report,
}

impl FromStr for FileFormat {
    type Err = std::io::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "gexf" => Ok(FileFormat::Gexf),
            "ppm" => Ok(FileFormat::Ppm),
            "txt" | "report" => Ok(FileFormat::Report),
            _ => Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Unknown FileFormat: {s}"),
            )),
        }
    }
}

/// Trait for types that can write graphs in a specific format.
///
/// This trait provides both a low-level method to write to any
/// [`Write`] instance and a convenience wrapper to write directly
/// to files.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered writer.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_graph(graph, &mut writer)?;
        writer.flush()
    }
}

/// Trait for writing graphs when only a [`FileFormat`] is known.
pub trait GraphWrite {
    /// Writes the graph to the given writer according to the specified [`FileFormat`] using the
    /// default settings of the respective writer.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write;

    /// Writes the graph to the given file according to the specified [`FileFormat`].
    ///
    /// Internally wraps the file in a buffered writer.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_to_file<P>(&self, path: P, format: FileFormat) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_to_writer(&mut writer, format)?;
        writer.flush()
    }
}

impl GraphWrite for GraphStore {
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write,
    {
        match format {
            FileFormat::Gexf => GexfWriter::new().try_write_graph(self, writer),
            FileFormat::Ppm => PpmWriter::new().try_write_graph(self, writer),
            FileFormat::Report => TextReportWriter::new().try_write_graph(self, writer),
        }
    }
}
