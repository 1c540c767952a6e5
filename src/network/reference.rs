//! The two-terminal, four-warehouse, fourteen-store distribution network used
//! for the standard report.

use crate::error::Result;
use crate::network::{attach_terminals, build_graph, Graph, TerminalCapacity};
use crate::types::{Capacity, Labels, Node};

/// Capacity of every synthetic edge in the standard report. Large enough to
/// never be the binding constraint.
pub const TERMINAL_EDGE_CAPACITY: Capacity = 1000;

const EDGES: [(u32, u32, i64); 20] = [
    // terminal -> warehouse
    (1, 3, 25),
    (1, 4, 20),
    (1, 5, 15),
    (2, 5, 15),
    (2, 6, 30),
    (2, 4, 10),
    // warehouse -> store
    (3, 7, 15),
    (3, 8, 10),
    (3, 9, 20),
    (4, 10, 15),
    (4, 11, 10),
    (4, 12, 25),
    (5, 13, 20),
    (5, 14, 15),
    (5, 15, 10),
    (6, 16, 20),
    (6, 17, 10),
    (6, 18, 15),
    (6, 19, 5),
    (6, 20, 10),
];

pub fn terminals() -> Vec<Node> {
    (1..=2).map(Node::Site).collect()
}

pub fn warehouses() -> Vec<Node> {
    (3..=6).map(Node::Site).collect()
}

pub fn stores() -> Vec<Node> {
    (7..=20).map(Node::Site).collect()
}

pub fn reference_network() -> Result<Graph> {
    build_graph(EDGES)
}

/// The reference network with a super-source feeding both terminals and every
/// store draining into a super-sink.
pub fn reference_flow_network() -> Result<Graph> {
    attach_terminals(
        &reference_network()?,
        &terminals(),
        &stores(),
        TerminalCapacity::Fixed(TERMINAL_EDGE_CAPACITY),
        TerminalCapacity::Fixed(TERMINAL_EDGE_CAPACITY),
    )
}

pub fn reference_labels() -> Labels {
    let mut labels = Labels::new();
    for (i, node) in terminals().into_iter().enumerate() {
        labels.insert(node, format!("Terminal {}", i + 1));
    }
    for (i, node) in warehouses().into_iter().enumerate() {
        labels.insert(node, format!("Warehouse {}", i + 1));
    }
    for (i, node) in stores().into_iter().enumerate() {
        labels.insert(node, format!("Store {}", i + 1));
    }
    labels.insert(Node::SuperSource, "Source");
    labels.insert(Node::SuperSink, "Sink");
    labels
}
