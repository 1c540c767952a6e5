//! Reports derived from a solved flow: how much each source ships, which
//! routes are thin, which destinations are served least, and which edges are
//! at capacity.
//!
//! Everything here is a pure function of a `Graph` and a `FlowResult`.
//! Edges touching the synthetic super-source or super-sink are never listed.

use serde::Serialize;

use crate::error::Result;
use crate::flow::{EdgeFlow, FlowResult};
use crate::network::Graph;
use crate::types::{Capacity, Edge, Node};

pub mod report;

/// Threshold used by the standard report for low-capacity routes.
pub const DEFAULT_LOW_CAPACITY_THRESHOLD: Capacity = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Throughput {
    pub node: Node,
    pub flow: Capacity,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MinimumDelivery {
    /// `None` only when no destinations were designated.
    pub amount: Option<Capacity>,
    pub destinations: Vec<Node>,
}

/// A source -> intermediate -> destination delivery. `flow` is the flow on
/// the last leg, so an intermediate fed by several sources shows the same
/// leg under each of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Route {
    pub source: Node,
    pub via: Node,
    pub destination: Node,
    pub flow: Capacity,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Analytics {
    pub total_flow: Capacity,
    pub source_throughput: Vec<Throughput>,
    pub low_capacity_threshold: Capacity,
    pub low_capacity_routes: Vec<Edge>,
    pub minimum_delivery: MinimumDelivery,
    pub saturated_edges: Vec<EdgeFlow>,
    pub routes: Vec<Route>,
}

pub fn analyze(
    graph: &Graph,
    result: &FlowResult,
    sources: &[Node],
    destinations: &[Node],
    threshold: Capacity,
) -> Result<Analytics> {
    let analytics = Analytics {
        total_flow: result.total_value(),
        source_throughput: source_throughput(graph, result, sources)?,
        low_capacity_threshold: threshold,
        low_capacity_routes: low_capacity_routes(graph, threshold),
        minimum_delivery: minimum_delivery(graph, result, destinations)?,
        saturated_edges: saturated_edges(graph, result),
        routes: route_table(graph, result, sources, destinations)?,
    };
    log::debug!(
        "Analytics: {} low-capacity routes, {} saturated edges, {} minimally served",
        analytics.low_capacity_routes.len(),
        analytics.saturated_edges.len(),
        analytics.minimum_delivery.destinations.len()
    );
    Ok(analytics)
}

/// Total flow on the outgoing edges of each source, in the order given.
pub fn source_throughput(
    graph: &Graph,
    result: &FlowResult,
    sources: &[Node],
) -> Result<Vec<Throughput>> {
    sources
        .iter()
        .map(|source| -> Result<Throughput> {
            graph.require_node(source)?;
            let flow = graph
                .successors(source)
                .iter()
                .fold(0, |total: Capacity, e| {
                    total.saturating_add(result.flow_of(&e.from, &e.to))
                });
            Ok(Throughput {
                node: *source,
                flow,
            })
        })
        .collect()
}

/// Edges with `0 < capacity <= threshold`, in edge order.
pub fn low_capacity_routes(graph: &Graph, threshold: Capacity) -> Vec<Edge> {
    graph
        .edges()
        .iter()
        .filter(|e| !e.is_synthetic() && e.capacity > 0 && e.capacity <= threshold)
        .copied()
        .collect()
}

/// The destinations whose inflow equals the smallest inflow among
/// `destinations`. Unserved destinations count, with an inflow of zero.
pub fn minimum_delivery(
    graph: &Graph,
    result: &FlowResult,
    destinations: &[Node],
) -> Result<MinimumDelivery> {
    let mut delivered = Vec::with_capacity(destinations.len());
    for destination in destinations {
        graph.require_node(destination)?;
        let inflow: Capacity = graph
            .predecessors(destination)
            .iter()
            .fold(0, |total: Capacity, e| {
                total.saturating_add(result.flow_of(&e.from, &e.to))
            });
        delivered.push((*destination, inflow));
    }
    let amount = delivered.iter().map(|(_, inflow)| *inflow).min();
    let destinations = delivered
        .into_iter()
        .filter(|(_, inflow)| Some(*inflow) == amount)
        .map(|(node, _)| node)
        .collect();
    Ok(MinimumDelivery {
        amount,
        destinations,
    })
}

/// Edges whose flow equals their (positive) capacity, in edge order.
pub fn saturated_edges(graph: &Graph, result: &FlowResult) -> Vec<EdgeFlow> {
    graph
        .edges()
        .iter()
        .filter(|e| !e.is_synthetic())
        .map(|e| EdgeFlow {
            edge: *e,
            flow: result.flow_of(&e.from, &e.to),
        })
        .filter(EdgeFlow::is_saturated)
        .collect()
}

/// Two-hop deliveries from each source to designated destinations that
/// carry positive flow, ordered by source, then edge order.
pub fn route_table(
    graph: &Graph,
    result: &FlowResult,
    sources: &[Node],
    destinations: &[Node],
) -> Result<Vec<Route>> {
    let mut routes = Vec::new();
    for source in sources {
        graph.require_node(source)?;
        for first in graph.successors(source) {
            for last in graph.successors(&first.to) {
                if !destinations.contains(&last.to) {
                    continue;
                }
                let flow = result.flow_of(&last.from, &last.to);
                if flow > 0 {
                    routes.push(Route {
                        source: *source,
                        via: first.to,
                        destination: last.to,
                        flow,
                    });
                }
            }
        }
    }
    Ok(routes)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::FlowError;
    use crate::flow::max_flow;
    use crate::network::{add_super_source, build_graph, TerminalCapacity};

    fn n(id: u32) -> Node {
        Node::Site(id)
    }

    /// Two sources feeding a hub that fans out to three destinations.
    fn fan_out() -> (Graph, FlowResult) {
        let mut graph = build_graph(vec![
            (1, 3, 8),
            (2, 3, 4),
            (3, 4, 5),
            (3, 5, 10),
            (3, 6, 2),
            (4, 7, 100),
            (5, 7, 3),
            (6, 7, 100),
        ])
        .unwrap();
        let source = add_super_source(&mut graph, &[n(1), n(2)], TerminalCapacity::Incident).unwrap();
        let result = max_flow(&graph, &source, &n(7)).unwrap();
        (graph, result)
    }

    #[test]
    fn throughput() {
        let (graph, result) = fan_out();
        assert_eq!(result.total_value(), 10);
        let throughput = source_throughput(&graph, &result, &[n(1), n(2)]).unwrap();
        let total: Capacity = throughput.iter().map(|t| t.flow).sum();
        assert_eq!(total, 10);
        assert_eq!(throughput[0].node, n(1));
        assert_eq!(
            source_throughput(&graph, &result, &[n(42)]).unwrap_err(),
            FlowError::UnknownNode(n(42))
        );
    }

    #[test]
    fn low_capacity() {
        let (graph, _) = fan_out();
        let routes = low_capacity_routes(&graph, 5);
        assert_eq!(
            routes,
            vec![
                Edge::new(n(2), n(3), 4),
                Edge::new(n(3), n(4), 5),
                Edge::new(n(3), n(6), 2),
                Edge::new(n(5), n(7), 3),
            ]
        );
        assert!(low_capacity_routes(&graph, 1).is_empty());
    }

    #[test]
    fn zero_capacity_is_not_low_capacity() {
        let graph = build_graph(vec![(1, 2, 0), (2, 3, 1)]).unwrap();
        assert_eq!(low_capacity_routes(&graph, 10), vec![Edge::new(n(2), n(3), 1)]);
    }

    #[test]
    fn minimum_delivery_reports_ties() {
        let (graph, result) = fan_out();
        let minimum = minimum_delivery(&graph, &result, &[n(4), n(5), n(6)]).unwrap();
        assert_eq!(minimum.amount, Some(2));
        assert_eq!(minimum.destinations, vec![n(6)]);

        let graph = build_graph(vec![(1, 2, 4), (1, 3, 4), (1, 4, 9)]).unwrap();
        let result = max_flow(&graph, &n(1), &n(4)).unwrap();
        let minimum = minimum_delivery(&graph, &result, &[n(2), n(3), n(4)]).unwrap();
        assert_eq!(minimum.amount, Some(0));
        assert_eq!(minimum.destinations, vec![n(2), n(3)]);
    }

    #[test]
    fn minimum_delivery_without_destinations() {
        let (graph, result) = fan_out();
        assert_eq!(
            minimum_delivery(&graph, &result, &[]).unwrap(),
            MinimumDelivery::default()
        );
        assert!(minimum_delivery(&graph, &result, &[n(99)]).is_err());
    }

    #[test]
    fn saturated() {
        let (graph, result) = fan_out();
        let saturated: Vec<(Node, Node)> = saturated_edges(&graph, &result)
            .iter()
            .map(|ef| ef.edge.key())
            .collect();
        assert!(saturated.contains(&(n(3), n(4))));
        assert!(saturated.contains(&(n(3), n(6))));
        assert!(saturated.contains(&(n(5), n(7))));
        assert!(saturated.iter().all(|(from, _)| !from.is_synthetic()));
        for ef in saturated_edges(&graph, &result) {
            assert_eq!(ef.flow, ef.edge.capacity);
        }
    }

    #[test]
    fn zero_flow() {
        let graph = build_graph(vec![(1, 2, 3), (3, 4, 0)]).unwrap();
        let result = max_flow(&graph, &n(1), &n(4)).unwrap();
        let analytics = analyze(&graph, &result, &[n(1)], &[n(2), n(4)], 10).unwrap();
        assert_eq!(analytics.total_flow, 0);
        assert_eq!(analytics.source_throughput, vec![Throughput { node: n(1), flow: 0 }]);
        assert_eq!(analytics.minimum_delivery.amount, Some(0));
        assert_eq!(analytics.minimum_delivery.destinations, vec![n(2), n(4)]);
        assert!(analytics.saturated_edges.is_empty());
        assert!(analytics.routes.is_empty());
    }

    #[test]
    fn routes() {
        let (graph, result) = fan_out();
        let routes = route_table(&graph, &result, &[n(1), n(2)], &[n(4), n(5), n(6)]).unwrap();
        let route = |source, destination, flow| Route {
            source: n(source),
            via: n(3),
            destination: n(destination),
            flow,
        };
        // Both sources feed the hub, so each leg shows up under both.
        assert_eq!(
            routes,
            vec![
                route(1, 4, 5),
                route(1, 5, 3),
                route(1, 6, 2),
                route(2, 4, 5),
                route(2, 5, 3),
                route(2, 6, 2),
            ]
        );
    }
}
