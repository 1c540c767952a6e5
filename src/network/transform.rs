use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{FlowError, Result};
use crate::network::Graph;
use crate::types::{Capacity, Node};

/// Capacity of the edges that connect a synthetic terminal to the real nodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalCapacity {
    /// The total capacity of the real node's edges on the far side, i.e.
    /// outgoing capacity for a source and incoming capacity for a sink.
    /// This never constrains the flow.
    #[default]
    Incident,
    Fixed(Capacity),
}

/// Connects `Node::SuperSource` to each of `sources` and returns it.
/// On error the graph is left as it was.
pub fn add_super_source(
    graph: &mut Graph,
    sources: &[Node],
    capacity: TerminalCapacity,
) -> Result<Node> {
    let links = resolve(graph, sources, capacity, Graph::outgoing_capacity)?;
    connect_super_source(graph, &links)
}

/// Connects each of `sinks` to `Node::SuperSink` and returns it.
/// On error the graph is left as it was.
pub fn add_super_sink(graph: &mut Graph, sinks: &[Node], capacity: TerminalCapacity) -> Result<Node> {
    let links = resolve(graph, sinks, capacity, Graph::incoming_capacity)?;
    connect_super_sink(graph, &links)
}

/// Connects `Node::SuperSource` to each source with its own capacity.
pub fn connect_super_source(graph: &mut Graph, sources: &[(Node, Capacity)]) -> Result<Node> {
    let keys: Vec<(Node, Node)> = sources.iter().map(|(n, _)| (Node::SuperSource, *n)).collect();
    check_links(graph, &keys)?;
    for ((from, to), (_, c)) in keys.into_iter().zip(sources) {
        graph.insert_edge(from, to, *c)?;
    }
    Ok(Node::SuperSource)
}

/// Connects each sink to `Node::SuperSink` with its own capacity.
pub fn connect_super_sink(graph: &mut Graph, sinks: &[(Node, Capacity)]) -> Result<Node> {
    let keys: Vec<(Node, Node)> = sinks.iter().map(|(n, _)| (*n, Node::SuperSink)).collect();
    check_links(graph, &keys)?;
    for ((from, to), (_, c)) in keys.into_iter().zip(sinks) {
        graph.insert_edge(from, to, *c)?;
    }
    Ok(Node::SuperSink)
}

fn resolve(
    graph: &Graph,
    nodes: &[Node],
    capacity: TerminalCapacity,
    incident: fn(&Graph, &Node) -> Capacity,
) -> Result<Vec<(Node, Capacity)>> {
    nodes
        .iter()
        .map(|node| {
            check_real(graph, node)?;
            let c = match capacity {
                TerminalCapacity::Incident => incident(graph, node),
                TerminalCapacity::Fixed(c) => c,
            };
            Ok((*node, c))
        })
        .collect()
}

/// Everything `insert_edge` would reject, checked up front so that a batch of
/// terminal edges is inserted completely or not at all.
fn check_links(graph: &Graph, keys: &[(Node, Node)]) -> Result<()> {
    let mut seen = HashSet::new();
    for (from, to) in keys {
        let real = if from.is_synthetic() { to } else { from };
        check_real(graph, real)?;
        if graph.index_of(from, to).is_some() || !seen.insert((*from, *to)) {
            return Err(FlowError::DuplicateEdge { from: *from, to: *to });
        }
    }
    Ok(())
}

/// Returns a copy of `graph` with both synthetic terminals attached, leaving
/// the caller's topology untouched.
pub fn attach_terminals(
    graph: &Graph,
    sources: &[Node],
    sinks: &[Node],
    source_capacity: TerminalCapacity,
    sink_capacity: TerminalCapacity,
) -> Result<Graph> {
    let mut extended = graph.clone();
    add_super_sink(&mut extended, sinks, sink_capacity)?;
    add_super_source(&mut extended, sources, source_capacity)?;
    Ok(extended)
}

fn check_real(graph: &Graph, node: &Node) -> Result<()> {
    if node.is_synthetic() {
        return Err(FlowError::UnknownNode(*node));
    }
    graph.require_node(node)
}
