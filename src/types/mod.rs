pub mod edge;
pub mod labels;
pub mod node;

pub use edge::Edge;
pub use labels::Labels;
pub use node::Node;

/// Edge capacities and flow values. Always exact, never negative.
pub type Capacity = u64;
