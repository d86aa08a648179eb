//! # slit-coherence-sim
//!
//! Numerical simulation of the double-slit experiment under two
//! interpretive framings: a standard classical/quantum reading and the
//! "Relational Coherence Engine" (RCE) narrative, where detections are
//! contextual actualizations in a small graph of relations rather than
//! wave-particle events.
//!
//! ## Model
//!
//! Each render is a pure function of one [`config::SlitConfig`]:
//!
//! 1. The pattern generator turns the slit configuration into a
//!    discretized intensity profile over the screen and draws particle
//!    hits from it (interference fringes only survive when both slits
//!    are open, no which-path detector is present, and the relational
//!    interpretation is selected — any detector collapses the fringes
//!    into two single-slit bumps).
//! 2. The graph builder derives the relational coherence graph
//!    (Source → slits → hits, plus an Interference node) from the same
//!    configuration via a declarative rule table.
//!
//! ## Usage
//!
//! ```no_run
//! use slit_coherence_sim::prelude::*;
//!
//! let config = RenderConfig {
//!     slits: SlitConfig::default(),
//!     seed: Some(42),
//! };
//! let output = run_render(&config).unwrap();
//! println!("{} hits on screen", output.hits.len());
//! println!("{} coherence edges", output.graph.edge_count());
//! ```

pub mod config;
pub mod graph;
pub mod pattern;
pub mod sampling;
pub mod simulation;

pub mod prelude {
    pub use crate::config::*;
    pub use crate::graph::*;
    pub use crate::pattern::*;
    pub use crate::sampling::*;
    pub use crate::simulation::*;
}
