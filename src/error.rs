use thiserror::Error;

use crate::types::Node;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("invalid capacity {capacity} on edge {from} -> {to}: capacities must be non-negative")]
    InvalidCapacity { from: Node, to: Node, capacity: i64 },
    #[error("duplicate edge {from} -> {to}")]
    DuplicateEdge { from: Node, to: Node },
    #[error("self-loop on node {0}")]
    SelfLoop(Node),
    #[error("unknown node {0}")]
    UnknownNode(Node),
    #[error("total flow exceeds {}", u64::MAX)]
    CapacityOverflow,
    #[error("flow result does not belong to this graph")]
    MismatchedFlow,
    #[error("computation cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, FlowError>;
