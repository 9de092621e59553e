//! # pathway-figures
//!
//! Chart specifications for the two dashboard panels.
//!
//! The structs in [`spec`] serialize to the Plotly figure JSON shape
//! consumed client-side. Every recognized styling option is an explicit
//! typed field; unset options are omitted from the wire JSON rather than
//! passed through as untyped dictionaries.

pub mod graph_figure;
pub mod metrics;
pub mod spec;

pub use graph_figure::{build_graph_figure, polarity_color};
pub use metrics::{build_metrics_figure, MetricRow};
pub use spec::{Axis, Figure, FigureLayout, Line, Margin, Marker, MarkerLine, Trace};
