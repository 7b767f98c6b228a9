//! Reading and writing the file formats shared with the solver under test.
//!
//! A test-case input holds one edge per line:
//!
//! ```text
//! 1 -- 2 5
//! 2 -- 3 7
//! ```
//!
//! with 1-indexed vertices and a positive weight. An empty file denotes a
//! graph with zero edges. An answer file holds the single line
//! `graph is bipartite` or `graph is not bipartite`.
//!
//! Parsing fails fast and loudly: a line with the wrong shape is a
//! [MalformedRecord](crate::error::HarnessError::MalformedRecord), a
//! well-shaped line that breaks the data model (self-loop, duplicate edge,
//! zero vertex id, zero weight) is an
//! [InvalidGraph](crate::error::HarnessError::InvalidGraph). No partial
//! graph is ever handed to the oracle.
//!
//! Both formats can also be read and written gzipped; [LoadFromFile::from_file]
//! dispatches on the `.gz` extension.

use crate::algorithms::Verdict;
use crate::error::{HarnessError, Result};
use crate::graph::*;
use crate::wgraph::WeightedGraph;

use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

pub trait WriteToFile {
    fn write_txt(&self, filename: impl AsRef<Path>) -> Result<()> {
        let file = File::create(filename)?;
        let buf = BufWriter::new(file);
        self.write_buf(Box::new(buf))
    }

    fn write_gzipped(&self, filename: impl AsRef<Path>) -> Result<()> {
        let file = File::create(filename)?;
        let gz = GzEncoder::new(file, Compression::default());
        let buf = BufWriter::new(gz);
        self.write_buf(Box::new(buf))
    }

    fn write_buf(&self, buf: Box<dyn Write>) -> Result<()>;
}

pub trait LoadFromFile {
    fn from_txt(filename: impl AsRef<Path>) -> Result<Self>
    where
        Self: Sized,
    {
        let file = File::open(filename)?;
        Self::from_buf(Box::new(BufReader::new(file)))
    }

    fn from_gzipped(filename: impl AsRef<Path>) -> Result<Self>
    where
        Self: Sized,
    {
        let file = File::open(filename)?;
        let gz = GzDecoder::new(file);
        Self::from_buf(Box::new(BufReader::new(gz)))
    }

    /// Reads gzipped if the file name ends in `.gz`, plain text otherwise.
    fn from_file(filename: impl AsRef<Path>) -> Result<Self>
    where
        Self: Sized,
    {
        let extension = filename.as_ref().extension().and_then(OsStr::to_str);
        match extension {
            Some("gz") => Self::from_gzipped(filename),
            _ => Self::from_txt(filename),
        }
    }

    fn from_buf(buf: Box<dyn BufRead>) -> Result<Self>
    where
        Self: Sized;
}

impl LoadFromFile for WeightedGraph {
    fn from_buf(buf: Box<dyn BufRead>) -> Result<Self> {
        let mut G = WeightedGraph::new();
        for (lineno, line) in buf.lines().enumerate() {
            let line = line?;
            let record = line.trim();
            if record.is_empty() {
                continue;
            }

            let (u, v, w) = parse_edge_record(record, lineno + 1)?;
            if u == v {
                return Err(HarnessError::InvalidGraph {
                    line: lineno + 1,
                    reason: format!("self-loop at vertex {u}"),
                });
            }
            if G.adjacent(&u, &v) {
                return Err(HarnessError::InvalidGraph {
                    line: lineno + 1,
                    reason: format!("duplicate edge {u} -- {v}"),
                });
            }
            G.add_weighted_edge(&u, &v, w);
        }

        Ok(G)
    }
}

impl WriteToFile for WeightedGraph {
    fn write_buf(&self, mut buf: Box<dyn Write>) -> Result<()> {
        for (u, v, w) in self.weighted_edges() {
            buf.write_all(format!("{u} -- {v} {w}\n").as_bytes())?;
        }
        buf.flush()?;

        Ok(())
    }
}

impl LoadFromFile for Verdict {
    /// Reads an answer file. Anything but one of the two literal verdict
    /// lines is a [MalformedRecord](HarnessError::MalformedRecord) — in
    /// particular an empty (aborted, partial) file never turns into a
    /// verdict.
    fn from_buf(mut buf: Box<dyn BufRead>) -> Result<Self> {
        let mut line = String::new();
        buf.read_line(&mut line)?;

        match line.trim() {
            "graph is bipartite" => Ok(Verdict::Bipartite),
            "graph is not bipartite" => Ok(Verdict::NotBipartite),
            other => Err(HarnessError::MalformedRecord {
                line: 1,
                record: other.to_string(),
            }),
        }
    }
}

impl WriteToFile for Verdict {
    fn write_buf(&self, mut buf: Box<dyn Write>) -> Result<()> {
        buf.write_all(format!("{self}\n").as_bytes())?;
        buf.flush()?;

        Ok(())
    }
}

fn parse_edge_record(record: &str, lineno: usize) -> Result<WeightedEdge> {
    let tokens: Vec<&str> = record.split_whitespace().collect();
    if tokens.len() != 4 || tokens[1] != "--" {
        return Err(HarnessError::MalformedRecord {
            line: lineno,
            record: record.to_string(),
        });
    }

    let u = parse_vertex(tokens[0], record, lineno)?;
    let v = parse_vertex(tokens[2], record, lineno)?;
    let w = parse_weight(tokens[3], record, lineno)?;
    Ok((u, v, w))
}

fn parse_vertex(s: &str, record: &str, lineno: usize) -> Result<Vertex> {
    match s.parse::<Vertex>() {
        Ok(0) => Err(HarnessError::InvalidGraph {
            line: lineno,
            reason: "vertex ids start at 1".to_string(),
        }),
        Ok(x) => Ok(x),
        Err(_) => Err(HarnessError::MalformedRecord {
            line: lineno,
            record: record.to_string(),
        }),
    }
}

fn parse_weight(s: &str, record: &str, lineno: usize) -> Result<Weight> {
    match s.parse::<Weight>() {
        Ok(0) => Err(HarnessError::InvalidGraph {
            line: lineno,
            reason: "edge weights start at 1".to_string(),
        }),
        Ok(w) => Ok(w),
        Err(_) => Err(HarnessError::MalformedRecord {
            line: lineno,
            record: record.to_string(),
        }),
    }
}

//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithms::GraphAlgorithms;

    fn parse(input: &'static str) -> Result<WeightedGraph> {
        WeightedGraph::from_buf(Box::new(input.as_bytes()))
    }

    #[test]
    fn read_graph() {
        let G = parse("1 -- 2 5\n2 -- 3 7\n3 -- 4 1\n4 -- 1 2\n").unwrap();

        assert_eq!(G.num_vertices(), 4);
        assert_eq!(G.num_edges(), 4);
        assert_eq!(G.weight(&1, &2), Some(5));
        assert_eq!(G.weight(&4, &1), Some(2));
        assert_eq!(G.decide_bipartite(), Verdict::Bipartite);
    }

    #[test]
    fn blank_lines_and_padding() {
        let G = parse("\n  1 -- 2 5  \n\n2 -- 3 7\n\n").unwrap();
        assert_eq!(G.num_edges(), 2);
    }

    #[test]
    fn empty_input_is_edgeless() {
        let G = parse("").unwrap();
        assert_eq!(G.num_vertices(), 0);
        assert_eq!(G.num_edges(), 0);
        assert_eq!(G.decide_bipartite(), Verdict::Bipartite);
    }

    #[test]
    fn malformed_records() {
        let bad = [
            "1 - 2 3",     // wrong separator
            "1 -- 2",      // missing weight
            "1 -- 2 3 4",  // trailing token
            "a -- b 3",    // unparseable vertices
            "1 -- 2 x",    // unparseable weight
            "-1 -- 2 3",   // negative vertex
        ];
        for record in bad {
            assert!(
                matches!(parse(record), Err(HarnessError::MalformedRecord { line: 1, .. })),
                "accepted `{record}`"
            );
        }
    }

    #[test]
    fn invalid_graphs() {
        let bad = [
            "3 -- 3 1",            // self-loop
            "1 -- 2 5\n2 -- 1 6",  // duplicate edge, flipped
            "1 -- 2 5\n1 -- 2 5",  // duplicate edge, verbatim
            "0 -- 2 1",            // vertex out of range
            "1 -- 2 0",            // weight out of range
        ];
        for record in bad {
            assert!(
                matches!(parse(record), Err(HarnessError::InvalidGraph { .. })),
                "accepted `{record}`"
            );
        }

        // The error names the offending line
        let err = parse("1 -- 2 5\n3 -- 3 9\n").unwrap_err();
        assert!(matches!(err, HarnessError::InvalidGraph { line: 2, .. }));
    }

    #[test]
    fn write_and_reload() {
        let dir = tempfile::tempdir().unwrap();

        let mut G = WeightedGraph::new();
        G.add_weighted_edge(&1, &2, 5);
        G.add_weighted_edge(&2, &3, 7);
        G.add_weighted_edge(&3, &1, 9);

        let txt = dir.path().join("graph.in");
        let gz = dir.path().join("graph.in.gz");
        G.write_txt(&txt).unwrap();
        G.write_gzipped(&gz).unwrap();

        let H1 = WeightedGraph::from_file(&txt).unwrap();
        let H2 = WeightedGraph::from_file(&gz).unwrap();

        assert_eq!(G, H1);
        assert_eq!(H1, H2);
    }

    #[test]
    fn verdict_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("001.ans");

        for verdict in [Verdict::Bipartite, Verdict::NotBipartite] {
            verdict.write_txt(&path).unwrap();
            assert_eq!(Verdict::from_file(&path).unwrap(), verdict);
        }

        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw, "graph is not bipartite\n");
    }

    #[test]
    fn partial_answers_are_rejected() {
        assert!(matches!(
            Verdict::from_buf(Box::new("".as_bytes())),
            Err(HarnessError::MalformedRecord { .. })
        ));
        assert!(matches!(
            Verdict::from_buf(Box::new("graph is".as_bytes())),
            Err(HarnessError::MalformedRecord { .. })
        ));
    }
}
