// File: crates/csv-chart-core/src/chart.rs
// Summary: ChartSpec; the renderer-agnostic figure description (traces + layout).

use serde::Serialize;

use crate::axis::AxisLayout;
use crate::series::Trace;
use crate::types::{Margin, HEIGHT, WIDTH};

/// Legend layout direction. Entries always run in a single row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Horizontal,
}

/// Which edge of the legend block sits on the legend's x position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum XAnchor {
    Right,
}

/// Which edge of the legend block sits on the legend's y position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum YAnchor {
    Bottom,
}

/// Legend placement in plot-relative coordinates (0..1 spans the plot area).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Legend {
    pub orientation: Orientation,
    pub x: f64,
    pub y: f64,
    pub x_anchor: XAnchor,
    pub y_anchor: YAnchor,
    pub title: String,
    pub font_color: String,
}

impl Legend {
    /// Horizontal legend hanging below the plot, flush with its right edge.
    pub fn bottom_right(font_color: impl Into<String>) -> Self {
        Self {
            orientation: Orientation::Horizontal,
            x: 1.0,
            y: -0.3,
            x_anchor: XAnchor::Right,
            y_anchor: YAnchor::Bottom,
            title: String::new(),
            font_color: font_color.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BarMode {
    Group,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub margin: Margin,
    pub paper_color: String,
    pub plot_color: String,
    pub font_color: String,
    pub title: String,
    pub x_axis: AxisLayout,
    pub y_axis: AxisLayout,
    pub legend: Legend,
    pub bar_mode: Option<BarMode>,
}

impl Layout {
    pub fn new(x_axis: AxisLayout, y_axis: AxisLayout, legend: Legend) -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            margin: Margin::default(),
            paper_color: "white".to_string(),
            plot_color: "white".to_string(),
            font_color: "black".to_string(),
            title: String::new(),
            x_axis,
            y_axis,
            legend,
            bar_mode: None,
        }
    }
}

/// A complete figure: traces in drawing order plus layout.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartSpec {
    pub traces: Vec<Trace>,
    pub layout: Layout,
}

impl ChartSpec {
    /// True when the figure is a pie (no cartesian axes).
    pub fn is_pie(&self) -> bool {
        self.traces.iter().any(|t| t.as_pie().is_some())
    }

    /// Series colors in trace order (pie slices expand to one color each).
    pub fn colors(&self) -> Vec<&str> {
        self.traces
            .iter()
            .flat_map(|t| t.legend_entries().into_iter().map(|(_, c)| c))
            .collect()
    }

    /// Number of category slots on the x axis.
    pub fn category_count(&self) -> usize {
        self.traces
            .iter()
            .filter_map(|t| t.as_xy())
            .map(|t| t.x.len())
            .max()
            .unwrap_or(0)
    }
}
