//! # Gexf
//!
//! Writes a [`GraphStore`] as a static GEXF 1.3 graph: one `node` per vertex with its label and
//! one `edge` per edge-list entry, in insertion order, carrying weight and label.
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <gexf xmlns="http://www.gexf.net/1.3draft" version="1.3">
//!   <graph mode="static" defaultedgetype="undirected">
//!     <nodes>
//!       <node id="0" label="V1" />
//!       ...
//!     </nodes>
//!     <edges>
//!       <edge id="0" source="0" target="1" weight="1" label="" />
//!       ...
//!     </edges>
//!   </graph>
//! </gexf>
//! ```
use std::borrow::Cow;

use super::*;

/// A writer for the GEXF format
#[derive(Debug, Clone)]
pub struct GexfWriter {
    /// Indent nested elements (default: *true*)
    indent: bool,
}

impl Default for GexfWriter {
    fn default() -> Self {
        Self { indent: true }
    }
}

impl GexfWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// If *false*, every element starts at the beginning of its line
    pub fn indent(mut self, indent: bool) -> Self {
        self.indent = indent;
        self
    }

    fn pad(&self, depth: usize) -> &'static str {
        const SPACES: &str = "        ";
        if self.indent { &SPACES[..2 * depth] } else { "" }
    }
}

/// Escapes the five XML special characters in attribute values
fn escape(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

impl GraphWriter<GraphStore> for GexfWriter {
    fn try_write_graph<W>(&self, graph: &GraphStore, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        let edge_type = if graph.is_directed() {
            "directed"
        } else {
            "undirected"
        };

        writeln!(writer, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            writer,
            r#"<gexf xmlns="http://www.gexf.net/1.3draft" version="1.3">"#
        )?;
        writeln!(
            writer,
            r#"{}<graph mode="static" defaultedgetype="{edge_type}">"#,
            self.pad(1)
        )?;

        writeln!(writer, "{}<nodes>", self.pad(2))?;
        for (u, label) in graph.labels().iter().enumerate() {
            writeln!(
                writer,
                r#"{}<node id="{u}" label="{}" />"#,
                self.pad(3),
                escape(label)
            )?;
        }
        writeln!(writer, "{}</nodes>", self.pad(2))?;

        writeln!(writer, "{}<edges>", self.pad(2))?;
        for (id, rec) in graph.edge_list().iter().enumerate() {
            writeln!(
                writer,
                r#"{}<edge id="{id}" source="{}" target="{}" weight="{}" label="{}" />"#,
                self.pad(3),
                rec.source(),
                rec.target(),
                rec.weight,
                escape(rec.label.as_deref().unwrap_or_default())
            )?;
        }
        writeln!(writer, "{}</edges>", self.pad(2))?;

        writeln!(writer, "{}</graph>", self.pad(1))?;
        writeln!(writer, "</gexf>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_gexf() {
        let mut graph = GraphStore::directed(2);
        graph.add_vertex(Some("a<b".into()));
        graph.add_weighted_edge(0, 2, 4, Some("x & y".into())).unwrap();
        graph.add_edge(1, 0).unwrap();

        let mut buffer = Vec::new();
        GexfWriter::new().try_write_graph(&graph, &mut buffer).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            r#"<?xml version="1.0" encoding="UTF-8"?>
<gexf xmlns="http://www.gexf.net/1.3draft" version="1.3">
  <graph mode="static" defaultedgetype="directed">
    <nodes>
      <node id="0" label="V1" />
      <node id="1" label="V2" />
      <node id="2" label="a&lt;b" />
    </nodes>
    <edges>
      <edge id="0" source="0" target="2" weight="4" label="x &amp; y" />
      <edge id="1" source="1" target="0" weight="1" label="" />
    </edges>
  </graph>
</gexf>
"#
        );
    }

    #[test]
    fn write_gexf_without_indent() {
        let graph = GraphStore::undirected(1);

        let mut buffer = Vec::new();
        GexfWriter::new()
            .indent(false)
            .try_write_graph(&graph, &mut buffer)
            .unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("\n<graph mode=\"static\" defaultedgetype=\"undirected\">\n"));
        assert!(text.contains("\n<node id=\"0\" label=\"V1\" />\n</nodes>\n<edges>\n</edges>\n"));
    }

    #[test]
    fn escape_only_when_needed() {
        assert!(matches!(escape("plain"), Cow::Borrowed("plain")));
        assert_eq!(escape(r#"'"'"#), "&apos;&quot;&apos;");
    }
}
