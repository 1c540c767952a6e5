//! Reading topologies from text and writing flows out as Graphviz.
//! Nothing in the solver or the analytics depends on this module.

use regex::Regex;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::error::FlowError;
use crate::flow::FlowResult;
use crate::network::Graph;
use crate::types::{Labels, Node};

#[derive(Debug, Error)]
pub enum InputError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("line {line}: expected {expected}, but got \"{content}\"")]
    Malformed {
        line: usize,
        expected: &'static str,
        content: String,
    },
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error(transparent)]
    Network(#[from] FlowError),
}

/// Parses `from,to,capacity` lines with numeric site ids into a graph.
/// Blank lines and lines starting with `#` are skipped.
pub fn parse_edges_csv(input: &str) -> Result<Graph, InputError> {
    let re = edge_line_regex();
    let mut graph = Graph::new();
    for (line, content) in significant_lines(input) {
        let malformed = || InputError::Malformed {
            line,
            expected: "from,to,capacity",
            content: content.to_string(),
        };
        let captures = re.captures(content).ok_or_else(malformed)?;
        let from = captures[1].parse::<u32>().map_err(|_| malformed())?;
        let to = captures[2].parse::<u32>().map_err(|_| malformed())?;
        let capacity = captures[3].parse::<i64>().map_err(|_| malformed())?;
        graph.add_edge(Node::Site(from), Node::Site(to), capacity)?;
    }
    Ok(graph)
}

pub fn read_edges_csv(path: impl AsRef<Path>) -> Result<Graph, InputError> {
    parse_edges_csv(&fs::read_to_string(path)?)
}

/// Parses `id,label` lines. Labels may be quoted and may contain commas.
pub fn parse_labels_csv(input: &str) -> Result<Labels, InputError> {
    let re = label_line_regex();
    let mut labels = Labels::new();
    for (line, content) in significant_lines(input) {
        let malformed = || InputError::Malformed {
            line,
            expected: "id,label",
            content: content.to_string(),
        };
        let captures = re.captures(content).ok_or_else(malformed)?;
        let id = captures[1].parse::<u32>().map_err(|_| malformed())?;
        labels.insert(Node::Site(id), unescape(captures[2].trim()));
    }
    Ok(labels)
}

pub fn read_labels_csv(path: impl AsRef<Path>) -> Result<Labels, InputError> {
    parse_labels_csv(&fs::read_to_string(path)?)
}

/// Graphviz rendering of a solved network; edges are labelled `flow/capacity`
/// and edges carrying flow are drawn bold.
pub fn flow_to_dot(graph: &Graph, result: &FlowResult, labels: &Labels) -> String {
    let mut out = String::from("digraph flow {\n    rankdir=LR;\n");
    for node in graph.nodes() {
        let _ = writeln!(out, "    \"{node}\" [label=\"{}\"];", escape(&labels.name(node)));
    }
    for edge in graph.edges() {
        let flow = result.flow_of(&edge.from, &edge.to);
        let style = if flow > 0 { ", style=bold" } else { "" };
        let _ = writeln!(
            out,
            "    \"{}\" -> \"{}\" [label=\"{flow}/{}\"{style}];",
            edge.from, edge.to, edge.capacity
        );
    }
    out.push_str("}\n");
    out
}

pub fn write_dot(
    path: impl AsRef<Path>,
    graph: &Graph,
    result: &FlowResult,
    labels: &Labels,
) -> Result<(), io::Error> {
    fs::write(path, flow_to_dot(graph, result, labels))
}

fn significant_lines(input: &str) -> impl Iterator<Item = (usize, &str)> {
    input
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'))
}

fn edge_line_regex() -> Regex {
    Regex::new(r"^(\d+)\s*,\s*(\d+)\s*,\s*(-?\d+)$").expect("valid edge regex")
}

fn label_line_regex() -> Regex {
    Regex::new(r"^(\d+)\s*,(.+)$").expect("valid label regex")
}

fn unescape(input: &str) -> &str {
    match input.chars().next() {
        Some(q @ ('"' | '\'')) if input.len() >= 2 && input.ends_with(q) => &input[1..input.len() - 1],
        _ => input,
    }
}

fn escape(input: &str) -> String {
    input.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::flow::max_flow;

    #[test]
    fn edges() {
        let graph = parse_edges_csv("# terminals\n1,3,25\n\n 1 , 4 , 20 \n3,4,0\n").unwrap();
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.capacity(&Node::Site(1), &Node::Site(4)), Some(20));
        assert_eq!(graph.capacity(&Node::Site(3), &Node::Site(4)), Some(0));
    }

    #[test]
    fn malformed_edges() {
        match parse_edges_csv("1,2,3\n1,2\n") {
            Err(InputError::Malformed { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            parse_edges_csv("a,b,3"),
            Err(InputError::Malformed { line: 1, .. })
        ));
        assert!(matches!(
            parse_edges_csv("1,2,99999999999999999999"),
            Err(InputError::Malformed { .. })
        ));
    }

    #[test]
    fn invalid_edges() {
        assert!(matches!(
            parse_edges_csv("1,2,-3"),
            Err(InputError::Network(FlowError::InvalidCapacity { .. }))
        ));
        assert!(matches!(
            parse_edges_csv("1,2,3\n1,2,4"),
            Err(InputError::Network(FlowError::DuplicateEdge { .. }))
        ));
    }

    #[test]
    fn labels() {
        let labels = parse_labels_csv("1,Terminal 1\n7, \"Store, north\"\n").unwrap();
        assert_eq!(labels.name(&Node::Site(1)), "Terminal 1");
        assert_eq!(labels.name(&Node::Site(7)), "Store, north");
        assert!(parse_labels_csv("x,y").is_err());
    }

    #[test]
    fn dot() {
        let graph = parse_edges_csv("1,2,5\n2,3,4\n1,3,0").unwrap();
        let result = max_flow(&graph, &Node::Site(1), &Node::Site(3)).unwrap();
        let mut labels = Labels::new();
        labels.insert(Node::Site(1), "Terminal \"A\"");
        let dot = flow_to_dot(&graph, &result, &labels);
        assert!(dot.starts_with("digraph flow {\n"));
        assert!(dot.contains("\"1\" [label=\"Terminal \\\"A\\\"\"];"));
        assert!(dot.contains("\"1\" -> \"2\" [label=\"4/5\", style=bold];"));
        assert!(dot.contains("\"1\" -> \"3\" [label=\"0/0\"];"));
        assert!(dot.ends_with("}\n"));
    }
}
