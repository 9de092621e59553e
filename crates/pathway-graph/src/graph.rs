use std::collections::HashMap;

use crate::error::GraphError;
use crate::model::{CausalEdge, EventNode};

// ─────────────────────────────────────────────
// PathwayGraph
// ─────────────────────────────────────────────

/// Immutable directed graph of legal events.
///
/// Built once from fixed declaration lists; nodes and edges keep their
/// declaration order. Endpoint validity is checked at construction time —
/// a malformed input list is a programming error and surfaces as a fatal
/// [`GraphError`] at startup.
#[derive(Debug, Clone)]
pub struct PathwayGraph {
    nodes: Vec<EventNode>,
    edges: Vec<CausalEdge>,
    /// node name → index into `nodes`
    index: HashMap<String, usize>,
}

impl PathwayGraph {
    /// Build a graph from declaration lists.
    ///
    /// Fails with [`GraphError::DuplicateNode`] if a node name repeats and
    /// with [`GraphError::UnknownNode`] if an edge endpoint was never
    /// declared as a node.
    pub fn build(nodes: &[EventNode], edges: &[CausalEdge]) -> Result<Self, GraphError> {
        let mut index = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            if index.insert(node.name.clone(), i).is_some() {
                return Err(GraphError::DuplicateNode(node.name.clone()));
            }
        }
        for edge in edges {
            if !index.contains_key(&edge.from) {
                return Err(GraphError::UnknownNode(edge.from.clone()));
            }
            if !index.contains_key(&edge.to) {
                return Err(GraphError::UnknownNode(edge.to.clone()));
            }
        }
        Ok(Self {
            nodes: nodes.to_vec(),
            edges: edges.to_vec(),
            index,
        })
    }

    // ── Queries ────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Nodes in declaration order.
    pub fn nodes(&self) -> &[EventNode] {
        &self.nodes
    }

    /// Edges in declaration order.
    pub fn edges(&self) -> &[CausalEdge] {
        &self.edges
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn node(&self, name: &str) -> Option<&EventNode> {
        self.index.get(name).map(|&i| &self.nodes[i])
    }

    /// Dense index of a node name (declaration order). Stable for the
    /// lifetime of the graph; used by the layout pass.
    pub fn node_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Names of all outgoing neighbors, in edge declaration order.
    pub fn neighbors_out(&self, name: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|e| e.from == name)
            .map(|e| e.to.as_str())
            .collect()
    }

    /// Outgoing degree of a node.
    pub fn degree_out(&self, name: &str) -> usize {
        self.edges.iter().filter(|e| e.from == name).count()
    }

    /// Incoming degree of a node.
    pub fn degree_in(&self, name: &str) -> usize {
        self.edges.iter().filter(|e| e.to == name).count()
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
