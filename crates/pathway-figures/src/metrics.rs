use serde::{Deserialize, Serialize};

use crate::spec::{Axis, Figure, FigureLayout, Trace};

// ─────────────────────────────────────────────
// MetricRow
// ─────────────────────────────────────────────

/// One year's worth of the two tracked indicators. Independent of the
/// graph structure — years match event years only by convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricRow {
    pub year: i32,

    /// Turnout gap between demographic groups, in percent.
    pub turnout_gap_pct: f64,

    /// Number of states with strict voter-ID laws in force.
    pub strict_id_laws: u32,
}

impl MetricRow {
    pub fn new(year: i32, turnout_gap_pct: f64, strict_id_laws: u32) -> Self {
        Self { year, turnout_gap_pct, strict_id_laws }
    }
}

// ─────────────────────────────────────────────
// Metrics figure
// ─────────────────────────────────────────────

/// Build the metrics panel: two labeled line-and-marker series over a
/// shared year axis. Row order and values pass through unchanged.
pub fn build_metrics_figure(rows: &[MetricRow]) -> Figure {
    let years: Vec<Option<f64>> = rows.iter().map(|r| Some(r.year as f64)).collect();

    let turnout = Trace {
        name: Some("Turnout Gap".to_string()),
        ..Trace::new(
            years.clone(),
            rows.iter().map(|r| Some(r.turnout_gap_pct)).collect(),
            "lines+markers",
        )
    };

    let strict_id = Trace {
        name: Some("Strict ID Laws".to_string()),
        ..Trace::new(
            years,
            rows.iter().map(|r| Some(r.strict_id_laws as f64)).collect(),
            "lines+markers",
        )
    };

    Figure {
        data: vec![turnout, strict_id],
        layout: FigureLayout {
            title: Some("Voting Metrics Over Time".to_string()),
            xaxis: Some(Axis::titled("Year")),
            ..FigureLayout::default()
        },
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<MetricRow> {
        vec![
            MetricRow::new(1965, 20.0, 0),
            MetricRow::new(1980, 15.0, 1),
            MetricRow::new(1982, 12.0, 5),
            MetricRow::new(2013, 10.0, 22),
            MetricRow::new(2021, 13.0, 30),
        ]
    }

    #[test]
    fn two_named_series_over_a_shared_year_axis() {
        let fig = build_metrics_figure(&sample_rows());
        assert_eq!(fig.data.len(), 2);
        assert_eq!(fig.data[0].name.as_deref(), Some("Turnout Gap"));
        assert_eq!(fig.data[1].name.as_deref(), Some("Strict ID Laws"));
        assert_eq!(fig.data[0].x, fig.data[1].x);
        assert_eq!(fig.data[0].mode, "lines+markers");
        assert_eq!(fig.data[1].mode, "lines+markers");
    }

    #[test]
    fn rows_pass_through_in_order_and_unchanged() {
        let rows = sample_rows();
        let fig = build_metrics_figure(&rows);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(fig.data[0].x[i], Some(row.year as f64));
            assert_eq!(fig.data[0].y[i], Some(row.turnout_gap_pct));
            assert_eq!(fig.data[1].y[i], Some(row.strict_id_laws as f64));
        }
    }

    #[test]
    fn year_2013_yields_gap_10_and_22_strict_id_laws() {
        let rows = sample_rows();
        let fig = build_metrics_figure(&rows);
        let idx = rows.iter().position(|r| r.year == 2013).unwrap();
        assert_eq!(fig.data[0].y[idx], Some(10.0));
        assert_eq!(fig.data[1].y[idx], Some(22.0));
    }

    #[test]
    fn layout_carries_title_and_year_axis() {
        let fig = build_metrics_figure(&sample_rows());
        assert_eq!(fig.layout.title.as_deref(), Some("Voting Metrics Over Time"));
        assert_eq!(
            fig.layout.xaxis.as_ref().unwrap().title.as_deref(),
            Some("Year")
        );
    }

    #[test]
    fn empty_table_yields_empty_series() {
        let fig = build_metrics_figure(&[]);
        assert!(fig.data[0].x.is_empty());
        assert!(fig.data[1].y.is_empty());
    }
}
