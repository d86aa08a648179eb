//! Relational coherence graph construction.
//!
//! The graph is a small fixed-topology diagram linking the source to
//! slit and hit nodes, with an Interference node when the configuration
//! leaves the interference branch coherent. It carries no computational
//! weight; the rendering layer lays it out and draws it.
//!
//! Construction is driven by a declarative rule table rather than a
//! chain of conditional mutations, so each row can be property-tested
//! against the configuration predicate that enables it.

use log::debug;

use crate::config::SlitConfig;

/// Fixed node vocabulary of the coherence graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Node {
    Source,
    LeftSlit,
    RightSlit,
    HitLeft,
    HitRight,
    Interference,
}

impl Node {
    /// Display label, matching the rendering layer's vocabulary.
    pub fn label(&self) -> &'static str {
        match self {
            Node::Source => "Source",
            Node::LeftSlit => "Left slit",
            Node::RightSlit => "Right slit",
            Node::HitLeft => "Hit (left)",
            Node::HitRight => "Hit (right)",
            Node::Interference => "Interference",
        }
    }
}

/// Directed graph of active relational edges for one render.
#[derive(Debug, Clone, Default)]
pub struct CoherenceGraph {
    /// Nodes in insertion order, deduplicated.
    pub nodes: Vec<Node>,
    /// Directed edges; both endpoints are always present in `nodes`.
    pub edges: Vec<(Node, Node)>,
}

impl CoherenceGraph {
    fn add_node(&mut self, node: Node) {
        if !self.nodes.contains(&node) {
            self.nodes.push(node);
        }
    }

    fn add_edge(&mut self, from: Node, to: Node) {
        self.add_node(from);
        self.add_node(to);
        if !self.edges.contains(&(from, to)) {
            self.edges.push((from, to));
        }
    }

    /// True if the node is present.
    pub fn contains(&self, node: Node) -> bool {
        self.nodes.contains(&node)
    }

    /// True if the directed edge is present.
    pub fn contains_edge(&self, from: Node, to: Node) -> bool {
        self.edges.contains(&(from, to))
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// One row of the construction table: when `applies` holds, the listed
/// nodes and edges join the graph.
struct GraphRule {
    applies: fn(&SlitConfig) -> bool,
    nodes: &'static [Node],
    edges: &'static [(Node, Node)],
}

/// Construction table. Rows are independent and additive; order only
/// affects node insertion order, not membership.
///
/// The Interference row also routes the interference branch into both
/// hit nodes, modeling interference as feeding the two impact sites.
const RULES: &[GraphRule] = &[
    GraphRule {
        applies: |c| c.left_open,
        nodes: &[Node::LeftSlit],
        edges: &[(Node::Source, Node::LeftSlit)],
    },
    GraphRule {
        applies: |c| c.left_open && !c.detector_left,
        nodes: &[Node::HitLeft],
        edges: &[(Node::LeftSlit, Node::HitLeft)],
    },
    GraphRule {
        applies: |c| c.right_open,
        nodes: &[Node::RightSlit],
        edges: &[(Node::Source, Node::RightSlit)],
    },
    GraphRule {
        applies: |c| c.right_open && !c.detector_right,
        nodes: &[Node::HitRight],
        edges: &[(Node::RightSlit, Node::HitRight)],
    },
    GraphRule {
        applies: |c| c.interference_visible(),
        nodes: &[Node::Interference],
        edges: &[
            (Node::Source, Node::Interference),
            (Node::Interference, Node::HitLeft),
            (Node::Interference, Node::HitRight),
        ],
    },
];

/// Build the coherence graph for a configuration.
///
/// Pure and deterministic; the Source node is always present, so a
/// both-slits-closed configuration yields a single-node, zero-edge
/// graph.
pub fn build_graph(config: &SlitConfig) -> CoherenceGraph {
    let mut graph = CoherenceGraph::default();
    graph.add_node(Node::Source);

    for rule in RULES {
        if (rule.applies)(config) {
            for &node in rule.nodes {
                graph.add_node(node);
            }
            for &(from, to) in rule.edges {
                graph.add_edge(from, to);
            }
        }
    }

    debug!(
        "coherence graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Interpretation;

    fn config(left: bool, right: bool, det_left: bool, det_right: bool) -> SlitConfig {
        SlitConfig {
            left_open: left,
            right_open: right,
            detector_left: det_left,
            detector_right: det_right,
            ..SlitConfig::default()
        }
    }

    #[test]
    fn closed_slits_give_source_only() {
        let graph = build_graph(&config(false, false, false, false));
        assert_eq!(graph.nodes, vec![Node::Source]);
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn both_open_undetected_includes_interference() {
        let graph = build_graph(&config(true, true, false, false));
        assert!(graph.contains(Node::Interference));
        assert!(graph.contains_edge(Node::Source, Node::Interference));
        assert!(graph.contains_edge(Node::Interference, Node::HitLeft));
        assert!(graph.contains_edge(Node::Interference, Node::HitRight));
    }

    #[test]
    fn left_only_excludes_right_side_and_interference() {
        let graph = build_graph(&config(true, false, false, false));
        assert!(graph.contains(Node::Source));
        assert!(graph.contains(Node::LeftSlit));
        assert!(graph.contains(Node::HitLeft));
        assert!(graph.contains_edge(Node::Source, Node::LeftSlit));
        assert!(graph.contains_edge(Node::LeftSlit, Node::HitLeft));
        assert!(!graph.contains(Node::RightSlit));
        assert!(!graph.contains(Node::HitRight));
        assert!(!graph.contains(Node::Interference));
    }

    #[test]
    fn detector_removes_hit_node_but_keeps_slit() {
        let graph = build_graph(&config(true, false, true, false));
        assert!(graph.contains(Node::LeftSlit));
        assert!(graph.contains_edge(Node::Source, Node::LeftSlit));
        assert!(!graph.contains(Node::HitLeft));
    }

    #[test]
    fn any_detector_suppresses_interference() {
        let left_detected = build_graph(&config(true, true, true, false));
        assert!(!left_detected.contains(Node::Interference));
        assert!(left_detected.contains(Node::HitRight));

        let right_detected = build_graph(&config(true, true, false, true));
        assert!(!right_detected.contains(Node::Interference));
        assert!(right_detected.contains(Node::HitLeft));
    }

    #[test]
    fn classical_mode_suppresses_interference() {
        let mut c = config(true, true, false, false);
        c.interpretation = Interpretation::Classical;
        let graph = build_graph(&c);
        assert!(!graph.contains(Node::Interference));
        assert!(graph.contains(Node::HitLeft));
        assert!(graph.contains(Node::HitRight));
    }

    #[test]
    fn edge_endpoints_are_always_nodes() {
        let configs = [
            config(true, true, false, false),
            config(true, true, true, true),
            config(true, false, false, true),
            config(false, true, true, false),
        ];
        for c in &configs {
            let graph = build_graph(c);
            for &(from, to) in &graph.edges {
                assert!(graph.contains(from), "dangling source {:?}", from);
                assert!(graph.contains(to), "dangling target {:?}", to);
            }
        }
    }

    #[test]
    fn construction_is_deterministic() {
        let c = config(true, true, false, false);
        let a = build_graph(&c);
        let b = build_graph(&c);
        assert_eq!(a.nodes, b.nodes);
        assert_eq!(a.edges, b.edges);
    }

    #[test]
    fn node_labels_match_vocabulary() {
        assert_eq!(Node::Source.label(), "Source");
        assert_eq!(Node::HitLeft.label(), "Hit (left)");
        assert_eq!(Node::Interference.label(), "Interference");
    }
}
