pub mod adjacencies;
pub mod augmenting_path;
mod flow;
pub mod min_cut;
pub mod result;

pub use crate::flow::flow::{compute_flow, max_flow};
pub use crate::flow::min_cut::{min_cut, MinCut};
pub use crate::flow::result::{EdgeFlow, FlowResult};
