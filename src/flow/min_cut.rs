use serde::Serialize;
use std::collections::{BTreeSet, VecDeque};

use crate::error::{FlowError, Result};
use crate::flow::adjacencies::Adjacencies;
use crate::flow::result::FlowResult;
use crate::network::Graph;
use crate::types::{Capacity, Edge, Node};

/// A source/sink partition whose crossing capacity equals the flow value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MinCut {
    pub source_side: BTreeSet<Node>,
    /// Edges from the source side to the sink side, in edge order.
    pub edges: Vec<Edge>,
    pub capacity: Capacity,
}

/// Reads the minimum cut off a maximum flow: the source side is everything
/// still reachable from the source in the residual graph.
pub fn min_cut(graph: &Graph, result: &FlowResult) -> Result<MinCut> {
    let source = result.source();
    graph.require_node(&source)?;
    let assignment = result.edge_flows();
    if assignment.len() != graph.edge_count()
        || assignment.iter().zip(graph.edges()).any(|(ef, e)| ef.edge != *e)
    {
        return Err(FlowError::MismatchedFlow);
    }
    let flow = assignment.iter().map(|ef| ef.flow).collect();
    let adjacencies = Adjacencies::with_flow(graph, flow)?;

    let mut source_side = BTreeSet::from([source]);
    let mut to_process = VecDeque::from([source]);
    while let Some(node) = to_process.pop_front() {
        for (target, _, _) in adjacencies.outgoing_residual_edges(&node) {
            if source_side.insert(target) {
                to_process.push_back(target);
            }
        }
    }

    let edges: Vec<Edge> = graph
        .edges()
        .iter()
        .filter(|e| source_side.contains(&e.from) && !source_side.contains(&e.to))
        .copied()
        .collect();
    let capacity = edges
        .iter()
        .fold(0, |total: Capacity, e| total.saturating_add(e.capacity));
    Ok(MinCut {
        source_side,
        edges,
        capacity,
    })
}
