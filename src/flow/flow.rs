use crate::call_context::CallContext;
use crate::error::{FlowError, Result};
use crate::flow::adjacencies::Adjacencies;
use crate::flow::augmenting_path::augmenting_path;
use crate::flow::result::FlowResult;
use crate::network::Graph;
use crate::types::{Capacity, Node};

/// Maximum flow from `source` to `sink` (Edmonds-Karp).
pub fn max_flow(graph: &Graph, source: &Node, sink: &Node) -> Result<FlowResult> {
    compute_flow(graph, source, sink, &CallContext::default())
}

/// Like `max_flow`, but logs through `call_context` and gives up with
/// `FlowError::Cancelled` once its cancellation flag is set. The flag is
/// checked before every breadth-first search.
pub fn compute_flow(
    graph: &Graph,
    source: &Node,
    sink: &Node,
    call_context: &CallContext,
) -> Result<FlowResult> {
    graph.require_node(source)?;
    graph.require_node(sink)?;

    let mut adjacencies = Adjacencies::new(graph);
    let mut flow: Capacity = 0;
    let mut augmentations = 0;
    loop {
        if call_context.is_cancelled() {
            call_context.log_message(&format!(
                "Cancelled after {augmentations} augmenting paths (flow so far: {flow})"
            ));
            return Err(FlowError::Cancelled);
        }
        let (new_flow, path) = augmenting_path(source, sink, &adjacencies);
        if new_flow == 0 {
            break;
        }
        flow = flow
            .checked_add(new_flow)
            .ok_or(FlowError::CapacityOverflow)?;
        augmentations += 1;
        for step in path {
            adjacencies.adjust_flow(step, new_flow);
        }
    }

    call_context.log_message(&format!(
        "Max flow {source} -> {sink}: {flow} ({augmentations} augmenting paths)"
    ));
    Ok(FlowResult::new(
        *source,
        *sink,
        flow,
        graph,
        adjacencies.into_flow(),
    ))
}
