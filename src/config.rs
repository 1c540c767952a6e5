use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::analytics::DEFAULT_LOW_CAPACITY_THRESHOLD;
use crate::io::InputError;
use crate::network::reference::{self, TERMINAL_EDGE_CAPACITY};
use crate::network::TerminalCapacity;
use crate::types::{Capacity, Labels, Node};

/// Which nodes play which role in a report, and how to report on them.
///
/// Every field has a default, so `{}` is a valid configuration; the defaults
/// describe the reference network.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Site ids fed by the super-source.
    pub sources: Vec<u32>,
    /// Site ids drained into the super-sink.
    pub destinations: Vec<u32>,
    pub low_capacity_threshold: Capacity,
    pub source_capacity: TerminalCapacity,
    pub sink_capacity: TerminalCapacity,
    pub labels: BTreeMap<u32, String>,
}

impl Default for ReportConfig {
    fn default() -> ReportConfig {
        let ids = |nodes: Vec<Node>| -> Vec<u32> {
            nodes
                .into_iter()
                .filter_map(|node| match node {
                    Node::Site(id) => Some(id),
                    _ => None,
                })
                .collect()
        };
        ReportConfig {
            sources: ids(reference::terminals()),
            destinations: ids(reference::stores()),
            low_capacity_threshold: DEFAULT_LOW_CAPACITY_THRESHOLD,
            source_capacity: TerminalCapacity::Fixed(TERMINAL_EDGE_CAPACITY),
            sink_capacity: TerminalCapacity::Fixed(TERMINAL_EDGE_CAPACITY),
            labels: BTreeMap::new(),
        }
    }
}

impl ReportConfig {
    pub fn from_json_str(input: &str) -> Result<ReportConfig, InputError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<ReportConfig, InputError> {
        ReportConfig::from_json_str(&fs::read_to_string(path)?)
    }

    pub fn source_nodes(&self) -> Vec<Node> {
        self.sources.iter().copied().map(Node::Site).collect()
    }

    pub fn destination_nodes(&self) -> Vec<Node> {
        self.destinations.iter().copied().map(Node::Site).collect()
    }

    /// Adds the configured labels on top of `labels`.
    pub fn apply_labels(&self, labels: &mut Labels) {
        for (id, name) in &self.labels {
            labels.insert(Node::Site(*id), name.clone());
        }
    }
}

#[cfg(test)]
mod test {
    use super::ReportConfig;
    use crate::network::TerminalCapacity;
    use crate::types::{Labels, Node};

    #[test]
    fn empty_object_is_reference_config() {
        let config = ReportConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ReportConfig::default());
        assert_eq!(config.sources, vec![1, 2]);
        assert_eq!(config.destinations, (7..=20).collect::<Vec<u32>>());
        assert_eq!(config.low_capacity_threshold, 10);
        assert_eq!(config.source_capacity, TerminalCapacity::Fixed(1000));
    }

    #[test]
    fn parse() {
        let config = ReportConfig::from_json_str(
            r#"{
                "sources": [10],
                "destinations": [30, 31],
                "low_capacity_threshold": 4,
                "source_capacity": "incident",
                "sink_capacity": {"fixed": 50},
                "labels": {"10": "Depot"}
            }"#,
        )
        .unwrap();
        assert_eq!(config.source_nodes(), vec![Node::Site(10)]);
        assert_eq!(config.destination_nodes(), vec![Node::Site(30), Node::Site(31)]);
        assert_eq!(config.source_capacity, TerminalCapacity::Incident);
        assert_eq!(config.sink_capacity, TerminalCapacity::Fixed(50));
        let mut labels = Labels::new();
        config.apply_labels(&mut labels);
        assert_eq!(labels.name(&Node::Site(10)), "Depot");
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(ReportConfig::from_json_str(r#"{"threshold": 3}"#).is_err());
        assert!(ReportConfig::from_json_str(r#"{"sources": [-1]}"#).is_err());
    }
}
