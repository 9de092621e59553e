//! The compiled-in dashboard dataset.
//!
//! Five legal events, the causal path between them, and the per-year
//! metric table. Immutable after startup — there is no data ingestion.

use pathway_figures::MetricRow;
use pathway_graph::{CausalEdge, EventNode};
use pathway_graph::model::{POLARITY_EXPANSION, POLARITY_RESTRICTION};

/// The five legal events with their voting-rights polarity.
pub fn events() -> Vec<EventNode> {
    vec![
        EventNode::new("Voting Rights Act (1965)", POLARITY_EXPANSION),
        EventNode::new("Mobile v. Bolden (1980)", POLARITY_RESTRICTION),
        EventNode::new("VRA Amendment (1982)", POLARITY_EXPANSION),
        EventNode::new("Shelby County v. Holder (2013)", POLARITY_RESTRICTION),
        EventNode::new("Brnovich v. DNC (2021)", POLARITY_RESTRICTION),
    ]
}

/// The directed historical influences. The data forms a simple path.
pub fn causal_edges() -> Vec<CausalEdge> {
    vec![
        CausalEdge::new("Voting Rights Act (1965)", "Mobile v. Bolden (1980)"),
        CausalEdge::new("Mobile v. Bolden (1980)", "VRA Amendment (1982)"),
        CausalEdge::new("VRA Amendment (1982)", "Shelby County v. Holder (2013)"),
        CausalEdge::new("Shelby County v. Holder (2013)", "Brnovich v. DNC (2021)"),
    ]
}

/// Turnout gap (%) and strict-ID-law count per event year.
pub fn metric_rows() -> Vec<MetricRow> {
    vec![
        MetricRow::new(1965, 20.0, 0),
        MetricRow::new(1980, 15.0, 1),
        MetricRow::new(1982, 12.0, 5),
        MetricRow::new(2013, 10.0, 22),
        MetricRow::new(2021, 13.0, 30),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathway_graph::PathwayGraph;

    #[test]
    fn sample_graph_has_five_nodes_and_four_edges() {
        let g = PathwayGraph::build(&events(), &causal_edges()).unwrap();
        assert_eq!(g.node_count(), 5);
        assert_eq!(g.edge_count(), 4);
    }

    #[test]
    fn every_edge_endpoint_is_a_declared_event() {
        let g = PathwayGraph::build(&events(), &causal_edges()).unwrap();
        for e in g.edges() {
            assert!(g.contains(&e.from), "unknown source {}", e.from);
            assert!(g.contains(&e.to), "unknown target {}", e.to);
        }
    }

    #[test]
    fn dataset_forms_a_simple_path() {
        let g = PathwayGraph::build(&events(), &causal_edges()).unwrap();
        // A path of 5 nodes: degrees are at most 1 in each direction.
        for n in g.nodes() {
            assert!(g.degree_out(&n.name) <= 1);
            assert!(g.degree_in(&n.name) <= 1);
        }
    }

    #[test]
    fn metric_years_match_event_years_by_convention() {
        let years: Vec<i32> = metric_rows().iter().map(|r| r.year).collect();
        assert_eq!(years, vec![1965, 1980, 1982, 2013, 2021]);
    }
}
