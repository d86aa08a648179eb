//! Coherence-graph walkthrough over the experimental contexts.
//!
//! Prints the node and edge sets the rule table produces for each slit
//! and detector combination, including the single-node graph for the
//! everything-closed context.
//!
//! Run with:
//!   cargo run --example graph_contexts

use slit_coherence_sim::prelude::*;

fn describe(title: &str, config: &SlitConfig) {
    let graph = build_graph(config);

    println!("\n=== {} ===", title);
    let labels: Vec<&str> = graph.nodes.iter().map(|n| n.label()).collect();
    println!("nodes: {}", labels.join(", "));
    if graph.edges.is_empty() {
        println!("edges: (none)");
    } else {
        for (from, to) in &graph.edges {
            println!("  {} -> {}", from.label(), to.label());
        }
    }
}

fn main() {
    env_logger::init();

    let base = SlitConfig::default();

    describe("Both slits open, undetected", &base);
    describe(
        "Both slits open, left detector armed",
        &SlitConfig {
            detector_left: true,
            ..base.clone()
        },
    );
    describe(
        "Left slit only",
        &SlitConfig {
            right_open: false,
            ..base.clone()
        },
    );
    describe(
        "Right slit only",
        &SlitConfig {
            left_open: false,
            ..base.clone()
        },
    );
    describe(
        "Both slits closed",
        &SlitConfig {
            left_open: false,
            right_open: false,
            ..base.clone()
        },
    );
    describe(
        "Both slits open, classical framing",
        &SlitConfig {
            interpretation: Interpretation::Classical,
            ..base
        },
    );
}
