// File: crates/csv-chart-core/src/options.rs
// Summary: Enumerated style options and the immutable StyleOptions snapshot.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

use crate::catalog::DEFAULT_PALETTE;

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, VariantNames, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum ChartType {
    #[default]
    Bar,
    Line,
    Scatter,
    Pie,
    Area,
}

/// Legend placement as offered to the user. Collected but not applied to the layout.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, VariantNames, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum LegendPosition {
    #[default]
    #[strum(to_string = "top-right", serialize = "top right")]
    TopRight,
    #[strum(to_string = "top-left", serialize = "top left")]
    TopLeft,
    #[strum(to_string = "bottom-left", serialize = "bottom left")]
    BottomLeft,
    #[strum(to_string = "bottom-right", serialize = "bottom right")]
    BottomRight,
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, VariantNames, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum TextColor {
    #[default]
    Black,
    White,
}

impl TextColor {
    /// Lowercased CSS color name.
    pub const fn css(self) -> &'static str {
        match self {
            TextColor::Black => "black",
            TextColor::White => "white",
        }
    }
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, VariantNames, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum BackgroundColor {
    #[default]
    White,
    Black,
    Transparent,
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, VariantNames, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum ExportFormat {
    #[default]
    #[strum(serialize = "PNG")]
    Png,
    #[strum(to_string = "JPEG", serialize = "JPG")]
    Jpeg,
    #[strum(serialize = "SVG")]
    Svg,
    #[strum(serialize = "PDF")]
    Pdf,
}

impl ExportFormat {
    /// File extension used in exported file names.
    pub const fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpeg",
            ExportFormat::Svg => "svg",
            ExportFormat::Pdf => "pdf",
        }
    }
}

/// Snapshot of every user-selected option that shapes a chart.
///
/// Defaults match the initial state of the option controls: bar chart, the
/// `Plotly` palette, every label visible, black text on white, PNG output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleOptions {
    pub chart_type: ChartType,
    pub palette: String,
    pub legend_position: LegendPosition,
    pub show_x_label: bool,
    pub show_y_label: bool,
    pub show_title: bool,
    pub show_bar_values: bool,
    pub text_color: TextColor,
    pub background: BackgroundColor,
    pub export_format: ExportFormat,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            chart_type: ChartType::default(),
            palette: DEFAULT_PALETTE.to_string(),
            legend_position: LegendPosition::default(),
            show_x_label: true,
            show_y_label: true,
            show_title: true,
            show_bar_values: true,
            text_color: TextColor::default(),
            background: BackgroundColor::default(),
            export_format: ExportFormat::default(),
        }
    }
}

impl StyleOptions {
    pub fn with_chart_type(mut self, chart_type: ChartType) -> Self {
        self.chart_type = chart_type;
        self
    }

    pub fn with_palette(mut self, palette: impl Into<String>) -> Self {
        self.palette = palette.into();
        self
    }

    pub fn with_background(mut self, background: BackgroundColor) -> Self {
        self.background = background;
        self
    }

    pub fn with_text_color(mut self, text_color: TextColor) -> Self {
        self.text_color = text_color;
        self
    }

    pub fn with_export_format(mut self, export_format: ExportFormat) -> Self {
        self.export_format = export_format;
        self
    }

    /// Text color used for point labels and, on transparent backgrounds, for the whole figure.
    pub fn effective_text_color(&self) -> &'static str {
        match self.background {
            BackgroundColor::White => "black",
            BackgroundColor::Black => "white",
            BackgroundColor::Transparent => self.text_color.css(),
        }
    }
}
