//! # pathway-layout
//!
//! Seeded force-directed (Fruchterman–Reingold) placement for the event
//! graph. The layout is a pure function of the graph and a
//! [`LayoutConfig`] — the RNG seed is an explicit parameter, never ambient
//! global state, so repeated runs produce bit-identical coordinates.

pub mod spring;

pub use spring::{spring_layout, LayoutConfig, Position};
