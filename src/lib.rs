pub mod analytics;
pub mod call_context;
pub mod config;
pub mod error;
pub mod flow;
pub mod io;
pub mod network;
pub mod types;

pub use analytics::{analyze, Analytics};
pub use error::{FlowError, Result};
pub use flow::{max_flow, FlowResult};
pub use network::{
    add_super_sink, add_super_source, build_graph, connect_super_sink, connect_super_source, Graph,
};
pub use types::{Capacity, Edge, Labels, Node};
