// File: crates/csv-chart-core/src/axis.rs
// Summary: Axis layout with title, range policy and grid styling.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisRange {
    /// Fixed `[min, max]` in data coordinates.
    Fixed { min: f64, max: f64 },
    /// Fit the plotted values.
    Auto,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AxisLayout {
    pub title: String,
    pub range: AxisRange,
    pub show_grid: bool,
    pub grid_color: String,
    pub tick_color: String,
}

impl AxisLayout {
    /// Categorical axis spanning `categories` slots centred on integer positions.
    pub fn categorical(title: impl Into<String>, categories: usize) -> Self {
        Self::with_range(
            title,
            AxisRange::Fixed { min: -0.5, max: categories as f64 - 0.5 },
        )
    }

    pub fn auto(title: impl Into<String>) -> Self {
        Self::with_range(title, AxisRange::Auto)
    }

    fn with_range(title: impl Into<String>, range: AxisRange) -> Self {
        Self {
            title: title.into(),
            range,
            show_grid: true,
            grid_color: String::new(),
            tick_color: String::new(),
        }
    }
}
