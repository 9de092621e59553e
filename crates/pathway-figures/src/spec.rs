use serde::Serialize;

// ─────────────────────────────────────────────
// Figure
// ─────────────────────────────────────────────

/// A complete chart specification: traces plus figure-level layout.
/// Serializes to the Plotly figure object shape.
#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: FigureLayout,
}

// ─────────────────────────────────────────────
// Trace
// ─────────────────────────────────────────────

/// One scatter trace. Coordinate arrays use `None` for gap markers
/// (serialized as JSON `null`), which Plotly renders as segment breaks.
#[derive(Debug, Clone, Serialize)]
pub struct Trace {
    pub x: Vec<Option<f64>>,
    pub y: Vec<Option<f64>>,

    /// Drawing mode, e.g. `"lines"`, `"markers+text"`, `"lines+markers"`.
    pub mode: &'static str,

    /// Series name shown in the legend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Per-point text labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,

    /// Placement of text labels relative to markers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textposition: Option<&'static str>,

    /// What the hover tooltip shows (`"text"`, `"none"`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hoverinfo: Option<&'static str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

impl Trace {
    /// A bare trace with the given coordinates and mode; styling unset.
    pub fn new(x: Vec<Option<f64>>, y: Vec<Option<f64>>, mode: &'static str) -> Self {
        Self {
            x,
            y,
            mode,
            name: None,
            text: None,
            textposition: None,
            hoverinfo: None,
            line: None,
            marker: None,
        }
    }
}

// ─────────────────────────────────────────────
// Styling
// ─────────────────────────────────────────────

/// Line styling for a trace.
#[derive(Debug, Clone, Serialize)]
pub struct Line {
    pub width: f64,
    pub color: String,
}

/// Marker styling for a trace.
#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    /// Per-point colors.
    pub color: Vec<String>,
    pub size: u32,
    pub showscale: bool,
    pub line: MarkerLine,
}

/// Outline drawn around each marker.
#[derive(Debug, Clone, Serialize)]
pub struct MarkerLine {
    pub width: u32,
}

// ─────────────────────────────────────────────
// Figure layout
// ─────────────────────────────────────────────

/// Figure-level layout options.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FigureLayout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovermode: Option<&'static str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
}

/// Plot margins in pixels.
#[derive(Debug, Clone, Serialize)]
pub struct Margin {
    pub b: u32,
    pub l: u32,
    pub r: u32,
    pub t: u32,
}

/// Axis options.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub showgrid: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub zeroline: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub showticklabels: Option<bool>,
}

impl Axis {
    /// Axis with grid, zero line and tick labels hidden — used for the
    /// graph panel, whose coordinate space carries no meaning.
    pub fn hidden() -> Self {
        Self {
            title: None,
            showgrid: Some(false),
            zeroline: Some(false),
            showticklabels: Some(false),
        }
    }

    /// Axis with only a title set, default gridlines.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_options_are_omitted_from_json() {
        let t = Trace::new(vec![Some(1.0)], vec![Some(2.0)], "lines");
        let v = serde_json::to_value(&t).unwrap();
        let obj = v.as_object().unwrap();
        assert!(obj.contains_key("x"));
        assert!(obj.contains_key("mode"));
        assert!(!obj.contains_key("marker"));
        assert!(!obj.contains_key("name"));
    }

    #[test]
    fn gap_markers_serialize_as_null() {
        let t = Trace::new(vec![Some(1.0), None], vec![Some(2.0), None], "lines");
        let v = serde_json::to_value(&t).unwrap();
        assert_eq!(v["x"][1], serde_json::Value::Null);
    }

    #[test]
    fn hidden_axis_disables_everything() {
        let v = serde_json::to_value(Axis::hidden()).unwrap();
        assert_eq!(v["showgrid"], false);
        assert_eq!(v["zeroline"], false);
        assert_eq!(v["showticklabels"], false);
        assert!(v.get("title").is_none());
    }
}
