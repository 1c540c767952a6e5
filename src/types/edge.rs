use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::types::{Capacity, Node};

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Edge {
    pub from: Node,
    pub to: Node,
    pub capacity: Capacity,
}

impl Edge {
    pub fn new(from: Node, to: Node, capacity: Capacity) -> Edge {
        Edge { from, to, capacity }
    }

    /// True if either endpoint is a super-source or super-sink.
    pub fn is_synthetic(&self) -> bool {
        self.from.is_synthetic() || self.to.is_synthetic()
    }

    pub fn key(&self) -> (Node, Node) {
        (self.from, self.to)
    }
}

impl Display for Edge {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.capacity)
    }
}
