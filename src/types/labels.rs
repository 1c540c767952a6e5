use std::collections::HashMap;

use crate::types::Node;

/// Display names for nodes. Used only for reporting; the solver never looks at it.
#[derive(Debug, Default, Clone)]
pub struct Labels {
    names: HashMap<Node, String>,
}

impl Labels {
    pub fn new() -> Labels {
        Labels::default()
    }

    pub fn insert(&mut self, node: Node, name: impl Into<String>) {
        self.names.insert(node, name.into());
    }

    /// The registered name, or the node's own rendering when it has none.
    pub fn name(&self, node: &Node) -> String {
        match self.names.get(node) {
            Some(name) => name.clone(),
            None => node.to_string(),
        }
    }

    /// Takes over every name in `other`, replacing existing ones.
    pub fn merge(&mut self, other: Labels) {
        self.names.extend(other.names);
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(Node, String)> for Labels {
    fn from_iter<I: IntoIterator<Item = (Node, String)>>(iter: I) -> Self {
        Labels {
            names: iter.into_iter().collect(),
        }
    }
}
