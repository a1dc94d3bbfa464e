// File: crates/csv-chart-core/src/series.rs
// Summary: Trace model; categorical XY traces (bars, lines, markers, stacked areas) and pie traces.

use serde::Serialize;

/// How an XY trace is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum XyMode {
    /// Grouped bars, one slot per category.
    Bars,
    LinesMarkers,
    Markers,
    /// Filled area over the previous stacked trace (or zero for the first).
    StackedArea,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextPosition {
    /// Above the bar end.
    Outside,
    TopCenter,
}

/// Per-point labels drawn next to each value.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PointText {
    pub labels: Vec<String>,
    pub position: TextPosition,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct XyTrace {
    pub name: String,
    pub mode: XyMode,
    /// Category labels; category `i` is plotted at x = i.
    pub x: Vec<String>,
    /// Plotted values (already stacked for `StackedArea`).
    pub y: Vec<f64>,
    pub color: String,
    pub text: Option<PointText>,
    pub text_color: String,
    pub fill_color: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PieTextInfo {
    Label,
    LabelPercent,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PieTrace {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    /// One color per label.
    pub colors: Vec<String>,
    pub text_info: PieTextInfo,
    pub text_color: String,
}

impl PieTrace {
    /// Sum of the finite, positive slice values.
    pub fn total(&self) -> f64 {
        self.values.iter().copied().filter(|v| v.is_finite() && *v > 0.0).sum()
    }

    /// Share of the whole for each slice; zero for missing or negative values.
    pub fn fractions(&self) -> Vec<f64> {
        let total = self.total();
        self.values
            .iter()
            .map(|&v| if total > 0.0 && v.is_finite() && v > 0.0 { v / total } else { 0.0 })
            .collect()
    }

    /// Text drawn on each slice.
    pub fn slice_text(&self) -> Vec<String> {
        match self.text_info {
            PieTextInfo::Label => self.labels.clone(),
            PieTextInfo::LabelPercent => self
                .labels
                .iter()
                .zip(self.fractions())
                .map(|(label, f)| format!("{label} {}", format_percent(f)))
                .collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Trace {
    Xy(XyTrace),
    Pie(PieTrace),
}

impl Trace {
    pub fn point_count(&self) -> usize {
        match self {
            Trace::Xy(t) => t.y.len(),
            Trace::Pie(p) => p.values.len(),
        }
    }

    /// (label, color) pairs shown in the legend.
    pub fn legend_entries(&self) -> Vec<(&str, &str)> {
        match self {
            Trace::Xy(t) => vec![(t.name.as_str(), t.color.as_str())],
            Trace::Pie(p) => p
                .labels
                .iter()
                .zip(&p.colors)
                .map(|(l, c)| (l.as_str(), c.as_str()))
                .collect(),
        }
    }

    pub fn as_xy(&self) -> Option<&XyTrace> {
        match self {
            Trace::Xy(t) => Some(t),
            Trace::Pie(_) => None,
        }
    }

    pub fn as_pie(&self) -> Option<&PieTrace> {
        match self {
            Trace::Pie(p) => Some(p),
            Trace::Xy(_) => None,
        }
    }
}

/// Point label for a plotted value; blank for missing values.
pub fn format_value(v: f64) -> String {
    if v.is_nan() { String::new() } else { v.to_string() }
}

/// Percentage with three significant digits, trailing zeros trimmed (`45.5%`, `5%`, `100%`).
pub fn format_percent(fraction: f64) -> String {
    let pct = fraction * 100.0;
    if pct == 0.0 || !pct.is_finite() {
        return "0%".to_string();
    }
    let magnitude = pct.abs().log10().floor() as i32;
    let decimals = (2 - magnitude).max(0) as usize;
    let mut s = format!("{pct:.decimals$}");
    if s.contains('.') {
        s = s.trim_end_matches('0').trim_end_matches('.').to_string();
    }
    format!("{s}%")
}
