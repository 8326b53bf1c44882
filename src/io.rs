use crate::graph::{KruskalEdge, WUGraph, Weight};
use std::convert::TryFrom;
use std::fmt::Display;
use std::hash::{BuildHasher, Hash};
use std::io;
use std::io::{BufRead, Write};
use std::str::FromStr;

#[cfg(feature = "log")]
use log::{info, warn};

fn invalid_input(line: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("Invalid line: {}", line),
    )
}

fn fields<'a>(line: &'a str, tag: &str, count: usize) -> Result<Vec<&'a str>, io::Error> {
    let mut tokens = line.split_whitespace();
    if tokens.next() != Some(tag) {
        return Err(invalid_input(line));
    }
    let fields: Vec<&str> = tokens.collect();
    if fields.len() != count {
        return Err(invalid_input(line));
    }
    Ok(fields)
}

fn parse<T: FromStr>(line: &str, field: &str) -> Result<T, io::Error> {
    field.parse().map_err(|_| invalid_input(line))
}

/// Parses a `p wug <vertices> <edges>` header.
pub fn header_p(line: &str) -> Result<(usize, usize), io::Error> {
    let tokens = fields(line, "p", 3)?;
    if tokens[0] != "wug" {
        return Err(invalid_input(line));
    }
    Ok((parse(line, tokens[1])?, parse(line, tokens[2])?))
}

/// Parses a `v <id>` vertex line.
pub fn vertex_v(line: &str) -> Result<usize, io::Error> {
    let tokens = fields(line, "v", 1)?;
    parse(line, tokens[0])
}

/// Parses an `e <u> <v> <weight>` edge line.
pub fn edge_e(line: &str) -> Result<(usize, usize, Weight), io::Error> {
    let tokens = fields(line, "e", 3)?;
    Ok((
        parse(line, tokens[0])?,
        parse(line, tokens[1])?,
        parse(line, tokens[2])?,
    ))
}

/// Reader for the weighted edge list format.
///
/// ```text
/// c comment
/// p wug 3 2
/// v 0
/// e 0 1 5
/// e 1 2 -3
/// ```
///
/// Edge lines add missing endpoints. The header is optional and only checked
/// against the parsed counts.
pub struct EdgeListReader<T: BufRead>(pub T);

impl<T: BufRead> TryFrom<EdgeListReader<T>> for WUGraph<usize> {
    type Error = io::Error;

    fn try_from(reader: EdgeListReader<T>) -> Result<Self, Self::Error> {
        let reader = reader.0;
        let mut graph = WUGraph::new();
        let mut header = None;
        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            match line.chars().next() {
                None | Some('c') => {}
                Some('p') => {
                    if header.is_some() {
                        return Err(invalid_input(line));
                    }
                    header = Some(header_p(line)?);
                }
                Some('v') => graph.add_vertex(vertex_v(line)?),
                Some('e') => {
                    let (u, v, w) = edge_e(line)?;
                    graph.add_vertex(u);
                    graph.add_vertex(v);
                    graph.add_edge(&u, &v, w);
                }
                _ => return Err(invalid_input(line)),
            }
        }
        #[cfg(feature = "log")]
        info!(
            "read graph with {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        if let Some((n, m)) = header {
            if n != graph.vertex_count() || m != graph.edge_count() {
                #[cfg(feature = "log")]
                warn!(
                    "header announced {} vertices and {} edges, found {} and {}",
                    n,
                    m,
                    graph.vertex_count(),
                    graph.edge_count()
                );
            }
        }
        Ok(graph)
    }
}

/// Writes a graph in the format read by [`EdgeListReader`].
pub struct EdgeListWriter<'a, K, S, W: Write> {
    graph: &'a WUGraph<K, S>,
    writer: W,
    sorted: bool,
}

impl<'a, K, S, W> EdgeListWriter<'a, K, S, W>
where
    K: Eq + Hash + Clone + Display,
    S: BuildHasher,
    W: Write,
{
    pub fn new(graph: &'a WUGraph<K, S>, writer: W) -> Self {
        Self {
            graph,
            writer,
            sorted: false,
        }
    }

    /// Emit edges in ascending weight order instead of insertion order.
    pub fn sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    pub fn output(mut self) -> io::Result<()> {
        let mut edges = self.graph.kruskal_edges();
        if self.sorted {
            KruskalEdge::sort_by_weight(&mut edges);
        }
        writeln!(
            self.writer,
            "p wug {} {}",
            self.graph.vertex_count(),
            self.graph.edge_count()
        )?;
        for v in self.graph.vertices() {
            writeln!(self.writer, "v {}", v)?;
        }
        for edge in edges {
            writeln!(self.writer, "e {} {} {}", edge.u, edge.v, edge.weight)?;
        }
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::WUGraph;
    use crate::io::{edge_e, header_p, vertex_v, EdgeListReader, EdgeListWriter};
    use std::convert::TryFrom;
    use std::io::BufReader;

    #[test]
    fn parse_lines() {
        assert_eq!(header_p("p wug 3 2").unwrap(), (3, 2));
        assert!(header_p("p tw 3 2").is_err());
        assert!(header_p("p wug 3").is_err());
        assert_eq!(vertex_v("v 12").unwrap(), 12);
        assert!(vertex_v("v x").is_err());
        assert_eq!(edge_e("e 0 1 -7").unwrap(), (0, 1, -7));
        assert!(edge_e("e 0 1").is_err());
        assert!(edge_e("e 0 1 2 3").is_err());
        assert!(edge_e("e -1 1 2").is_err());
    }

    #[test]
    fn read_graph() {
        let input = "c triangle with a loop\np wug 4 4\nv 3\ne 0 1 5\ne 1 2 3\n\n\
                     e 0 2 7\ne 2 2 1\ne 1 0 6\n";
        let graph: WUGraph<usize> =
            WUGraph::try_from(EdgeListReader(BufReader::new(input.as_bytes()))).unwrap();
        assert_eq!(graph.get_vertices(), vec![3, 0, 1, 2]);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.weight(&0, &1), 6);
        assert_eq!(graph.degree(&2), 3);
        assert_eq!(graph.degree(&3), 0);
    }

    #[test]
    fn reject_malformed() {
        for input in &["x 1 2", "e 1 2", "p wug 1 1\np wug 1 1", "v"] {
            let reader = EdgeListReader(BufReader::new(input.as_bytes()));
            let result: Result<WUGraph<usize>, _> = WUGraph::try_from(reader);
            assert!(result.is_err(), "accepted {:?}", input);
        }
    }

    #[test]
    fn header_mismatch_still_loads() {
        let input = "p wug 10 1\ne 0 1 2\ne 1 2 3\n";
        let reader = EdgeListReader(BufReader::new(input.as_bytes()));
        let graph: WUGraph<usize> = WUGraph::try_from(reader).unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.weight(&2, &1), 3);
    }

    #[test]
    fn write_then_read() {
        let mut graph: WUGraph<usize> = WUGraph::new();
        for v in 0..4 {
            graph.add_vertex(v);
        }
        graph.add_edge(&0, &1, 9);
        graph.add_edge(&1, &2, -2);
        graph.add_edge(&3, &3, 4);

        let mut buf = Vec::new();
        EdgeListWriter::new(&graph, &mut buf).output().unwrap();
        let text = String::from_utf8(buf.clone()).unwrap();
        assert_eq!(text, "p wug 4 3\nv 0\nv 1\nv 2\nv 3\ne 0 1 9\ne 1 2 -2\ne 3 3 4\n");

        let reader = EdgeListReader(BufReader::new(buf.as_slice()));
        let read: WUGraph<usize> = WUGraph::try_from(reader).unwrap();
        assert_eq!(read.get_vertices(), graph.get_vertices());
        assert_eq!(read.kruskal_edges().len(), 3);
        for e in graph.kruskal_edges() {
            assert_eq!(read.try_weight(&e.u, &e.v), Some(e.weight));
        }
    }

    #[test]
    fn write_sorted() {
        let graph: WUGraph<usize> = vec![(0, 1, 9), (1, 2, -2), (2, 0, 4)].into_iter().collect();
        let mut buf = Vec::new();
        EdgeListWriter::new(&graph, &mut buf)
            .sorted(true)
            .output()
            .unwrap();
        let text = String::from_utf8(buf).unwrap();
        let edges: Vec<_> = text.lines().filter(|l| l.starts_with('e')).collect();
        assert_eq!(edges, vec!["e 1 2 -2", "e 2 0 4", "e 0 1 9"]);
    }
}
