use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A vertex of the distribution network.
///
/// Real locations (terminals, warehouses, stores) are `Site`s keyed by a small
/// integer. The synthetic terminals used to turn a multi-source or multi-sink
/// problem into a single-source, single-sink one live in their own variants so
/// they can never collide with a caller's ids.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Node {
    Site(u32),
    SuperSource,
    SuperSink,
}

impl Node {
    pub fn is_synthetic(&self) -> bool {
        !matches!(self, Node::Site(_))
    }
}

impl From<u32> for Node {
    fn from(id: u32) -> Self {
        Node::Site(id)
    }
}

impl FromStr for Node {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "super-source" => Ok(Node::SuperSource),
            "super-sink" => Ok(Node::SuperSink),
            _ => s.trim().parse::<u32>().map(Node::Site),
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Node::Site(id) => write!(f, "{id}"),
            Node::SuperSource => write!(f, "super-source"),
            Node::SuperSink => write!(f, "super-sink"),
        }
    }
}
