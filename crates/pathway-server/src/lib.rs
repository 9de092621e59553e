//! Library surface of the pathway dashboard server.
//!
//! The binary in `main.rs` is a thin wrapper; everything it wires together
//! lives here so the HTTP surface can be exercised in integration tests
//! without binding a socket.

pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod html;

pub use config::Config;
pub use dashboard::Dashboard;
