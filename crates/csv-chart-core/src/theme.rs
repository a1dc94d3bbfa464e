// File: crates/csv-chart-core/src/theme.rs
// Summary: Background themes; paper, plot, font and grid colors per background choice.

use crate::options::{BackgroundColor, StyleOptions};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub paper: &'static str,
    pub plot: &'static str,
    pub font: &'static str,
    pub grid: &'static str,
}

const SOFT_GRID: &str = "rgba(200,200,200,0.3)";
const DARK_GRID: &str = "rgba(100,100,100,0.5)";
const CLEAR: &str = "rgba(0,0,0,0)";

impl Theme {
    pub const fn white() -> Self {
        Self { paper: "white", plot: "white", font: "black", grid: SOFT_GRID }
    }

    pub const fn black() -> Self {
        Self { paper: "black", plot: "black", font: "white", grid: DARK_GRID }
    }

    /// Transparent canvas; text follows the user's text color.
    pub const fn transparent(font: &'static str) -> Self {
        Self { paper: CLEAR, plot: CLEAR, font, grid: SOFT_GRID }
    }

    /// Resolve the theme for the selected background.
    pub fn for_options(options: &StyleOptions) -> Self {
        match options.background {
            BackgroundColor::White => Self::white(),
            BackgroundColor::Black => Self::black(),
            BackgroundColor::Transparent => Self::transparent(options.effective_text_color()),
        }
    }
}
