use crate::flow::adjacencies::{Adjacencies, Step};
use crate::types::{Capacity, Node};
use std::cmp::min;
use std::collections::{HashMap, VecDeque};

/// Breadth-first search for a shortest augmenting path.
///
/// Returns the bottleneck capacity and the arcs of the path, sink first.
/// A zero bottleneck means the sink is unreachable.
pub fn augmenting_path(
    source: &Node,
    sink: &Node,
    adjacencies: &Adjacencies,
) -> (Capacity, Vec<Step>) {
    let mut parent: HashMap<Node, (Node, Step)> = HashMap::new();
    if *source == *sink {
        return (0, vec![]);
    }
    let mut queue = VecDeque::<(Node, Capacity)>::new();
    queue.push_back((*source, Capacity::MAX));
    while let Some((node, flow)) = queue.pop_front() {
        for (target, capacity, step) in adjacencies.outgoing_residual_edges(&node) {
            if target != *source && !parent.contains_key(&target) {
                parent.insert(target, (node, step));
                let new_flow = min(flow, capacity);
                if target == *sink {
                    return (new_flow, trace(&parent, source, sink));
                }
                queue.push_back((target, new_flow));
            }
        }
    }
    (0, vec![])
}

fn trace(parent: &HashMap<Node, (Node, Step)>, source: &Node, sink: &Node) -> Vec<Step> {
    let mut path = Vec::new();
    let mut node = *sink;
    while node != *source {
        let (prev, step) = parent[&node];
        path.push(step);
        node = prev;
    }
    path
}
