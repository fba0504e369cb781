//! Graphviz rendering of a graph with a highlighted vertex set

use std::{
    fs,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::error::Result;
use crate::graph::Graph;
use crate::mis::VertexSet;

/// fill colour of vertices outside the highlighted set
pub const BASE_COLOUR: &str = "#35ADC8";

/// Writes `graph` in DOT format, filling the vertices of `highlighted` with `colour`.
///
/// Every vertex is emitted, isolated ones included, and every edge once.
pub fn write_dot<G: Graph + ?Sized, W: Write>(
    writer: &mut W,
    graph: &G,
    highlighted: &VertexSet,
    colour: &str,
    title: &str,
) -> io::Result<()> {
    writeln!(writer, "graph mis {{")?;
    writeln!(writer, "    label=\"{}\";", title.replace('"', "\\\""))?;
    writeln!(writer, "    layout=neato;")?;
    writeln!(
        writer,
        "    node [shape=circle, style=filled, fillcolor=\"{BASE_COLOUR}\", fontname=\"Helvetica-Bold\"];"
    )?;

    for v in graph.vertices() {
        if highlighted.contains(&v) {
            writeln!(writer, "    {v} [fillcolor=\"{colour}\"];")?;
        } else {
            writeln!(writer, "    {v};")?;
        }
    }
    for u in graph.vertices() {
        for &v in graph.neighbors(u) {
            if u < v {
                writeln!(writer, "    {u} -- {v};")?;
            }
        }
    }
    writeln!(writer, "}}")
}

/// Writes the DOT rendering to `path`, creating parent directories as needed.
pub fn save_dot<G: Graph + ?Sized>(
    path: &Path,
    graph: &G,
    highlighted: &VertexSet,
    colour: &str,
    title: &str,
) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(fs::File::create(path)?);
    write_dot(&mut writer, graph, highlighted, colour, title)?;
    writer.flush()?;
    Ok(())
}
