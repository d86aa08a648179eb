//! Screen-pattern comparison across slit configurations.
//!
//! Renders four canonical setups and prints each hit histogram as an
//! ASCII bar chart, showing fringes for the coherent double-slit case
//! and their collapse once a detector is armed.
//!
//! Run with:
//!   cargo run --example screen_pattern

use slit_coherence_sim::prelude::*;

fn print_histogram(output: &RenderOutput) {
    let max = output.histogram.max_count().max(1);
    let centers = output.histogram.bin_centers();
    // Downsample 100 bins to 50 rows to keep the chart readable.
    for (i, chunk) in output.histogram.counts.chunks(2).enumerate() {
        let count: u64 = chunk.iter().sum();
        let bar_len = (count * 60 / (2 * max)) as usize;
        println!("{:>6.2} | {}", centers[i * 2], "#".repeat(bar_len));
    }
}

fn main() {
    env_logger::init();

    let setups: Vec<(&str, SlitConfig)> = vec![
        ("Both slits, relational (fringes)", SlitConfig::default()),
        (
            "Both slits, classical (two bumps)",
            SlitConfig {
                interpretation: Interpretation::Classical,
                ..SlitConfig::default()
            },
        ),
        (
            "Both slits, left detector (collapse)",
            SlitConfig {
                detector_left: true,
                ..SlitConfig::default()
            },
        ),
        (
            "Left slit only",
            SlitConfig {
                right_open: false,
                ..SlitConfig::default()
            },
        ),
    ];

    for (title, slits) in setups {
        let config = RenderConfig {
            slits,
            seed: Some(42),
        };
        let output = run_render(&config).expect("valid demo config");

        println!("\n=== {} ===", title);
        println!(
            "{} hits | {} graph nodes | {} graph edges",
            output.hits.len(),
            output.graph.node_count(),
            output.graph.edge_count()
        );
        print_histogram(&output);
    }
}
