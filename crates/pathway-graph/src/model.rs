use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────
// EventNode
// ─────────────────────────────────────────────

/// Polarity of a rights-expanding event.
pub const POLARITY_EXPANSION: i8 = 1;

/// Polarity of a rights-restricting event.
pub const POLARITY_RESTRICTION: i8 = -1;

/// A named legal event in the pathway graph.
///
/// The name is the node's identity and must be unique within a graph.
/// Polarity is kept as a raw `i8`: the two declared values are +1
/// (expansion) and −1 (restriction), but any other value is tolerated
/// and rendered with the neutral fallback color downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventNode {
    /// Event name, e.g. `"Voting Rights Act (1965)"`.
    pub name: String,

    /// +1 = expansion of voting rights, −1 = restriction.
    pub polarity: i8,
}

impl EventNode {
    pub fn new(name: impl Into<String>, polarity: i8) -> Self {
        Self { name: name.into(), polarity }
    }
}

// ─────────────────────────────────────────────
// CausalEdge
// ─────────────────────────────────────────────

/// A directed historical influence between two events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CausalEdge {
    /// Source event name.
    pub from: String,

    /// Target event name.
    pub to: String,
}

impl CausalEdge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self { from: from.into(), to: to.into() }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_node_keeps_polarity_verbatim() {
        let n = EventNode::new("Shelby County v. Holder (2013)", POLARITY_RESTRICTION);
        assert_eq!(n.polarity, -1);
        // Out-of-range polarity is allowed by the model; rendering maps it to gray.
        let odd = EventNode::new("odd", 7);
        assert_eq!(odd.polarity, 7);
    }

    #[test]
    fn causal_edge_is_directed() {
        let e = CausalEdge::new("a", "b");
        assert_eq!(e.from, "a");
        assert_eq!(e.to, "b");
        assert_ne!(e, CausalEdge::new("b", "a"));
    }
}
