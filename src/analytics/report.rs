use serde_json::{json, Value};
use std::fmt::Write;

use crate::analytics::Analytics;
use crate::types::Labels;

/// Plain-text report, one section per analytic.
pub fn render_text(analytics: &Analytics, labels: &Labels) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_text(&mut out, analytics, labels);
    out
}

fn write_text(out: &mut String, analytics: &Analytics, labels: &Labels) -> std::fmt::Result {
    writeln!(out, "Source\tVia\tDestination\tFlow")?;
    for route in &analytics.routes {
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            labels.name(&route.source),
            labels.name(&route.via),
            labels.name(&route.destination),
            route.flow
        )?;
    }
    writeln!(out, "\nTotal maximum flow: {}", analytics.total_flow)?;

    writeln!(out, "\nThroughput per source:")?;
    for t in &analytics.source_throughput {
        writeln!(out, "{}: {}", labels.name(&t.node), t.flow)?;
    }

    writeln!(
        out,
        "\nLow-capacity routes (<= {}):",
        analytics.low_capacity_threshold
    )?;
    for e in &analytics.low_capacity_routes {
        writeln!(
            out,
            "{} -> {}: {}",
            labels.name(&e.from),
            labels.name(&e.to),
            e.capacity
        )?;
    }

    writeln!(out, "\nMinimally served destinations:")?;
    if let Some(amount) = analytics.minimum_delivery.amount {
        for node in &analytics.minimum_delivery.destinations {
            writeln!(out, "{}: {}", labels.name(node), amount)?;
        }
    }

    writeln!(out, "\nSaturated edges:")?;
    for ef in &analytics.saturated_edges {
        writeln!(
            out,
            "{} -> {}: {}",
            labels.name(&ef.edge.from),
            labels.name(&ef.edge.to),
            ef.flow
        )?;
    }
    Ok(())
}

/// The same report as JSON, with node labels resolved.
pub fn render_json(analytics: &Analytics, labels: &Labels) -> Value {
    json!({
        "totalFlow": analytics.total_flow,
        "routes": analytics.routes.iter().map(|r| json!({
            "source": labels.name(&r.source),
            "via": labels.name(&r.via),
            "destination": labels.name(&r.destination),
            "flow": r.flow,
        })).collect::<Vec<_>>(),
        "sourceThroughput": analytics.source_throughput.iter().map(|t| json!({
            "node": labels.name(&t.node),
            "flow": t.flow,
        })).collect::<Vec<_>>(),
        "lowCapacityThreshold": analytics.low_capacity_threshold,
        "lowCapacityRoutes": analytics.low_capacity_routes.iter().map(|e| json!({
            "from": labels.name(&e.from),
            "to": labels.name(&e.to),
            "capacity": e.capacity,
        })).collect::<Vec<_>>(),
        "minimumDelivery": {
            "amount": analytics.minimum_delivery.amount,
            "destinations": analytics.minimum_delivery.destinations.iter()
                .map(|node| labels.name(node))
                .collect::<Vec<_>>(),
        },
        "saturatedEdges": analytics.saturated_edges.iter().map(|ef| json!({
            "from": labels.name(&ef.edge.from),
            "to": labels.name(&ef.edge.to),
            "flow": ef.flow,
        })).collect::<Vec<_>>(),
    })
}
