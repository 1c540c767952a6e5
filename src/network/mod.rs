use std::collections::HashMap;

use crate::error::{FlowError, Result};
use crate::types::{Capacity, Edge, Node};

pub mod reference;
pub mod transform;

pub use transform::{
    add_super_sink, add_super_source, attach_terminals, connect_super_sink, connect_super_source,
    TerminalCapacity,
};

/// Directed, capacitated graph without parallel edges or self-loops.
///
/// Edges keep their insertion order. Every query that returns edges returns
/// them in that order, which is what makes the solver's tie-breaking (and
/// hence the flow decomposition) reproducible.
#[derive(Debug, Default, Clone)]
pub struct Graph {
    edges: Vec<Edge>,
    nodes: Vec<Node>,
    outgoing: HashMap<Node, Vec<usize>>,
    incoming: HashMap<Node, Vec<usize>>,
    index: HashMap<(Node, Node), usize>,
}

/// Builds a graph of real sites from `(from, to, capacity)` triples, failing
/// on the first invalid one.
pub fn build_graph<I>(edges: I) -> Result<Graph>
where
    I: IntoIterator<Item = (u32, u32, i64)>,
{
    let mut graph = Graph::new();
    for (from, to, capacity) in edges {
        graph.add_edge(Node::Site(from), Node::Site(to), capacity)?;
    }
    Ok(graph)
}

impl Graph {
    pub fn new() -> Graph {
        Graph::default()
    }

    pub fn add_edge(&mut self, from: Node, to: Node, capacity: i64) -> Result<usize> {
        if capacity < 0 {
            return Err(FlowError::InvalidCapacity { from, to, capacity });
        }
        self.insert_edge(from, to, capacity as Capacity)
    }

    /// Same as `add_edge` for capacities that are non-negative by type.
    pub fn insert_edge(&mut self, from: Node, to: Node, capacity: Capacity) -> Result<usize> {
        if from == to {
            return Err(FlowError::SelfLoop(from));
        }
        if self.index.contains_key(&(from, to)) {
            return Err(FlowError::DuplicateEdge { from, to });
        }
        let i = self.edges.len();
        for node in [from, to] {
            if !self.outgoing.contains_key(&node) && !self.incoming.contains_key(&node) {
                self.nodes.push(node);
            }
        }
        self.outgoing.entry(from).or_default().push(i);
        self.incoming.entry(to).or_default().push(i);
        self.index.insert((from, to), i);
        self.edges.push(Edge::new(from, to, capacity));
        Ok(i)
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, index: usize) -> &Edge {
        &self.edges[index]
    }

    /// All nodes referenced by any edge, in order of first appearance.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn contains_node(&self, node: &Node) -> bool {
        self.outgoing.contains_key(node) || self.incoming.contains_key(node)
    }

    pub fn successors(&self, node: &Node) -> Vec<&Edge> {
        self.outgoing_indices(node)
            .iter()
            .map(|i| &self.edges[*i])
            .collect()
    }

    pub fn predecessors(&self, node: &Node) -> Vec<&Edge> {
        self.incoming_indices(node)
            .iter()
            .map(|i| &self.edges[*i])
            .collect()
    }

    pub fn capacity(&self, from: &Node, to: &Node) -> Option<Capacity> {
        self.index_of(from, to).map(|i| self.edges[i].capacity)
    }

    pub fn index_of(&self, from: &Node, to: &Node) -> Option<usize> {
        self.index.get(&(*from, *to)).copied()
    }

    /// Total capacity leaving `node`, saturating at `Capacity::MAX`.
    pub fn outgoing_capacity(&self, node: &Node) -> Capacity {
        self.successors(node)
            .iter()
            .fold(0, |total, e| total.saturating_add(e.capacity))
    }

    /// Total capacity entering `node`, saturating at `Capacity::MAX`.
    pub fn incoming_capacity(&self, node: &Node) -> Capacity {
        self.predecessors(node)
            .iter()
            .fold(0, |total, e| total.saturating_add(e.capacity))
    }

    pub(crate) fn outgoing_indices(&self, node: &Node) -> &[usize] {
        self.outgoing.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub(crate) fn incoming_indices(&self, node: &Node) -> &[usize] {
        self.incoming.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub(crate) fn require_node(&self, node: &Node) -> Result<()> {
        if self.contains_node(node) {
            Ok(())
        } else {
            Err(FlowError::UnknownNode(*node))
        }
    }
}

#[cfg(test)]
mod test {
    use super::{build_graph, Graph};
    use crate::error::FlowError;
    use crate::types::{Edge, Node};

    fn n(id: u32) -> Node {
        Node::Site(id)
    }

    #[test]
    fn insertion_order() {
        let graph = build_graph(vec![(1, 3, 5), (1, 2, 4), (2, 3, 1), (1, 4, 0)]).unwrap();
        let succ: Vec<Node> = graph.successors(&n(1)).iter().map(|e| e.to).collect();
        assert_eq!(succ, vec![n(3), n(2), n(4)]);
        let pred: Vec<Node> = graph.predecessors(&n(3)).iter().map(|e| e.from).collect();
        assert_eq!(pred, vec![n(1), n(2)]);
        assert_eq!(graph.nodes(), &[n(1), n(3), n(2), n(4)]);
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn capacity_lookup() {
        let graph = build_graph(vec![(1, 2, 7), (2, 1, 3)]).unwrap();
        assert_eq!(graph.capacity(&n(1), &n(2)), Some(7));
        assert_eq!(graph.capacity(&n(2), &n(1)), Some(3));
        assert_eq!(graph.capacity(&n(1), &n(3)), None);
        assert_eq!(graph.outgoing_capacity(&n(1)), 7);
        assert_eq!(graph.incoming_capacity(&n(1)), 3);
    }

    #[test]
    fn incident_capacity_saturates() {
        let graph = build_graph(vec![(1, 2, i64::MAX), (1, 3, i64::MAX), (1, 4, i64::MAX)]).unwrap();
        assert_eq!(graph.outgoing_capacity(&n(1)), u64::MAX);
        assert_eq!(graph.incoming_capacity(&n(2)), i64::MAX as u64);
    }

    #[test]
    fn rejects_duplicates() {
        let mut graph = Graph::new();
        graph.add_edge(n(1), n(2), 5).unwrap();
        assert_eq!(
            graph.add_edge(n(1), n(2), 6),
            Err(FlowError::DuplicateEdge { from: n(1), to: n(2) })
        );
        // The failed insertion leaves the graph untouched.
        assert_eq!(graph.edges(), &[Edge::new(n(1), n(2), 5)]);
    }

    #[test]
    fn rejects_negative_capacity() {
        let mut graph = Graph::new();
        assert_eq!(
            graph.add_edge(n(1), n(2), -1),
            Err(FlowError::InvalidCapacity {
                from: n(1),
                to: n(2),
                capacity: -1
            })
        );
        assert!(!graph.contains_node(&n(1)));
        assert!(build_graph(vec![(1, 2, 3), (2, 3, -4)]).is_err());
    }

    #[test]
    fn rejects_self_loop() {
        assert_eq!(
            build_graph(vec![(4, 4, 1)]).unwrap_err(),
            FlowError::SelfLoop(n(4))
        );
    }

    #[test]
    fn unknown_nodes() {
        let graph = build_graph(vec![(1, 2, 1)]).unwrap();
        assert!(graph.successors(&n(9)).is_empty());
        assert!(graph.predecessors(&n(1)).is_empty());
        assert_eq!(graph.require_node(&n(9)), Err(FlowError::UnknownNode(n(9))));
        assert_eq!(graph.require_node(&n(2)), Ok(()));
    }
}
