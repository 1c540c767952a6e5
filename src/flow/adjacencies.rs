use crate::error::{FlowError, Result};
use crate::network::Graph;
use crate::types::{Capacity, Node};

/// One arc of the residual graph, referring to the underlying edge by index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Along edge `i`, using its remaining capacity.
    Forward(usize),
    /// Against edge `i`, undoing flow already on it.
    Backward(usize),
}

/// The residual graph of `graph` under a flow assignment the solver owns.
/// The graph itself is never modified.
pub struct Adjacencies<'a> {
    graph: &'a Graph,
    flow: Vec<Capacity>,
}

impl<'a> Adjacencies<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Adjacencies {
            graph,
            flow: vec![0; graph.edge_count()],
        }
    }

    /// Starts from an existing assignment, one entry per edge of `graph`,
    /// none of them above its edge's capacity.
    pub fn with_flow(graph: &'a Graph, flow: Vec<Capacity>) -> Result<Self> {
        if flow.len() != graph.edge_count()
            || graph.edges().iter().zip(&flow).any(|(e, f)| *f > e.capacity)
        {
            return Err(FlowError::MismatchedFlow);
        }
        Ok(Adjacencies { graph, flow })
    }

    /// Residual arcs leaving `from` with positive residual capacity: forward
    /// arcs in edge insertion order, then backward arcs in edge insertion order.
    pub fn outgoing_residual_edges(&self, from: &Node) -> Vec<(Node, Capacity, Step)> {
        let forward = self.graph.outgoing_indices(from).iter().map(|i| {
            let edge = self.graph.edge(*i);
            (edge.to, edge.capacity - self.flow[*i], Step::Forward(*i))
        });
        let backward = self
            .graph
            .incoming_indices(from)
            .iter()
            .map(|i| (self.graph.edge(*i).from, self.flow[*i], Step::Backward(*i)));
        forward
            .chain(backward)
            .filter(|(_, residual, _)| *residual > 0)
            .collect()
    }

    pub fn adjust_flow(&mut self, step: Step, amount: Capacity) {
        match step {
            Step::Forward(i) => {
                debug_assert!(self.flow[i] + amount <= self.graph.edge(i).capacity);
                self.flow[i] += amount;
            }
            Step::Backward(i) => {
                debug_assert!(self.flow[i] >= amount);
                self.flow[i] -= amount;
            }
        }
    }

    pub fn into_flow(self) -> Vec<Capacity> {
        self.flow
    }
}
