// File: crates/csv-chart-core/src/types.rs
// Summary: Shared layout constants and figure margins.

use serde::Serialize;

/// Export width in pixels.
pub const WIDTH: u32 = 700;
/// Figure height in pixels.
pub const HEIGHT: u32 = 600;

/// Figure margins around the plot area, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Margin {
    pub left: u32,
    pub right: u32,
    pub bottom: u32,
    pub top: u32,
    /// Gap between the plot area and the axis tick labels.
    pub pad: u32,
}

impl Margin {
    pub const fn new(left: u32, right: u32, bottom: u32, top: u32, pad: u32) -> Self {
        Self { left, right, bottom, top, pad }
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::new(60, 60, 80, 100, 10)
    }
}
