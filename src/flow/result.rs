use serde::Serialize;
use std::collections::HashMap;

use crate::network::Graph;
use crate::types::{Capacity, Edge, Node};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct EdgeFlow {
    #[serde(flatten)]
    pub edge: Edge,
    pub flow: Capacity,
}

impl EdgeFlow {
    pub fn is_saturated(&self) -> bool {
        self.edge.capacity > 0 && self.flow == self.edge.capacity
    }
}

/// The outcome of one max-flow computation: the flow on every edge, in the
/// graph's edge order, and the total value. Read-only once built.
#[derive(Clone, Debug, Serialize)]
pub struct FlowResult {
    source: Node,
    sink: Node,
    total_value: Capacity,
    assignment: Vec<EdgeFlow>,
    #[serde(skip)]
    index: HashMap<(Node, Node), usize>,
}

impl FlowResult {
    pub(crate) fn new(
        source: Node,
        sink: Node,
        total_value: Capacity,
        graph: &Graph,
        flow: Vec<Capacity>,
    ) -> FlowResult {
        let assignment: Vec<EdgeFlow> = graph
            .edges()
            .iter()
            .zip(flow)
            .map(|(edge, flow)| EdgeFlow { edge: *edge, flow })
            .collect();
        let index = assignment
            .iter()
            .enumerate()
            .map(|(i, ef)| (ef.edge.key(), i))
            .collect();
        FlowResult {
            source,
            sink,
            total_value,
            assignment,
            index,
        }
    }

    pub fn source(&self) -> Node {
        self.source
    }

    pub fn sink(&self) -> Node {
        self.sink
    }

    pub fn total_value(&self) -> Capacity {
        self.total_value
    }

    /// Flow on the edge `from -> to`, zero if there is no such edge.
    pub fn flow_of(&self, from: &Node, to: &Node) -> Capacity {
        self.index
            .get(&(*from, *to))
            .map_or(0, |i| self.assignment[*i].flow)
    }

    pub fn edge_flows(&self) -> &[EdgeFlow] {
        &self.assignment
    }

    /// Edges carrying positive flow, in edge order.
    pub fn used_edges(&self) -> impl Iterator<Item = &EdgeFlow> {
        self.assignment.iter().filter(|ef| ef.flow > 0)
    }

    pub fn outflow(&self, node: &Node) -> Capacity {
        self.assignment
            .iter()
            .filter(|ef| ef.edge.from == *node)
            .fold(0, |total: Capacity, ef| total.saturating_add(ef.flow))
    }

    pub fn inflow(&self, node: &Node) -> Capacity {
        self.assignment
            .iter()
            .filter(|ef| ef.edge.to == *node)
            .fold(0, |total: Capacity, ef| total.saturating_add(ef.flow))
    }
}
