use clap::Parser;
use std::error::Error;
use std::path::PathBuf;

use distflow::analytics::analyze;
use distflow::analytics::report::{render_json, render_text};
use distflow::call_context::CallContext;
use distflow::config::ReportConfig;
use distflow::flow::{compute_flow, min_cut};
use distflow::io;
use distflow::network::{attach_terminals, reference};
use distflow::types::{Capacity, Labels, Node};

/// Maximum flow and bottleneck report for a distribution network.
///
/// Without --edges, reports on the built-in two-terminal reference network.
#[derive(Parser, Debug)]
#[command(name = "cli")]
struct Args {
    /// Edge list, one `from,to,capacity` per line.
    #[arg(long)]
    edges: Option<PathBuf>,
    /// Node labels, one `id,label` per line.
    #[arg(long)]
    labels: Option<PathBuf>,
    /// JSON report configuration (sources, destinations, threshold, ...).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Overrides the configured low-capacity threshold.
    #[arg(long)]
    threshold: Option<Capacity>,
    /// Also print the minimum cut.
    #[arg(long)]
    min_cut: bool,
    /// Print the report as JSON.
    #[arg(long)]
    json: bool,
    /// Write a Graphviz file with flow/capacity edge labels.
    #[arg(long)]
    dot: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ReportConfig::from_json_file(path)?,
        None => ReportConfig::default(),
    };
    if let Some(threshold) = args.threshold {
        config.low_capacity_threshold = threshold;
    }

    let (graph, mut labels) = match &args.edges {
        Some(path) => (io::read_edges_csv(path)?, Labels::new()),
        None => (reference::reference_network()?, reference::reference_labels()),
    };
    if let Some(path) = &args.labels {
        labels.merge(io::read_labels_csv(path)?);
    }
    config.apply_labels(&mut labels);
    log::info!("Read {} edges", graph.edge_count());

    let sources = config.source_nodes();
    let destinations = config.destination_nodes();
    let network = attach_terminals(
        &graph,
        &sources,
        &destinations,
        config.source_capacity,
        config.sink_capacity,
    )?;

    let result = {
        let call_context = CallContext::new("max_flow");
        compute_flow(&network, &Node::SuperSource, &Node::SuperSink, &call_context)?
    };
    let analytics = analyze(
        &network,
        &result,
        &sources,
        &destinations,
        config.low_capacity_threshold,
    )?;

    if args.json {
        let mut report = render_json(&analytics, &labels);
        if args.min_cut {
            report["minCut"] = serde_json::to_value(min_cut(&network, &result)?)?;
        }
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text(&analytics, &labels));
        if args.min_cut {
            let cut = min_cut(&network, &result)?;
            println!("\nMinimum cut (capacity {}):", cut.capacity);
            for e in &cut.edges {
                println!("{} -> {}: {}", labels.name(&e.from), labels.name(&e.to), e.capacity);
            }
        }
    }

    if let Some(dotfile) = &args.dot {
        io::write_dot(dotfile, &network, &result, &labels)?;
        println!("Wrote dotfile {}.", dotfile.display());
    }
    Ok(())
}
