//! # pathway-graph
//!
//! Event graph model for the voting-rights pathway dashboard.
//!
//! Provides the core data model and the validated graph container:
//! - [`model::EventNode`]  — named legal event with a polarity
//! - [`model::CausalEdge`] — directed historical influence between events
//! - [`graph::PathwayGraph`] — immutable graph built once at startup

pub mod error;
pub mod graph;
pub mod model;

pub use error::GraphError;
pub use graph::PathwayGraph;
pub use model::{CausalEdge, EventNode};
