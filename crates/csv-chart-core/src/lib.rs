// File: crates/csv-chart-core/src/lib.rs
// Summary: Core library entry point; option catalog, figure builder, chart model and export driver.

pub mod axis;
pub mod builder;
pub mod catalog;
pub mod chart;
pub mod error;
pub mod export;
pub mod options;
pub mod series;
pub mod table;
pub mod theme;
pub mod types;

pub use axis::{AxisLayout, AxisRange};
pub use builder::{build, title_text};
pub use catalog::{colors_for, list_palettes};
pub use chart::{ChartSpec, Layout, Legend};
pub use error::{ChartError, Result};
pub use export::{
    export_batch, export_file_name, BatchError, BatchProgress, BatchReport, ChartEncoder, ExportConfig, ItemError,
    NoProgress, Upload,
};
pub use options::{BackgroundColor, ChartType, ExportFormat, LegendPosition, StyleOptions, TextColor};
pub use series::{PieTrace, Trace, XyMode, XyTrace};
pub use table::TabularInput;
pub use theme::Theme;
