// File: crates/csv-chart-cli/src/args.rs
// Summary: Command line definitions (clap derive) and their mapping onto StyleOptions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use csv_chart_core::catalog::DEFAULT_PALETTE;
use csv_chart_core::export::OUTPUT_DIR_ENV;
use csv_chart_core::{BackgroundColor, ChartType, ExportFormat, LegendPosition, StyleOptions, TextColor};

#[derive(Parser, Debug)]
#[command(name = "csv-chart")]
#[command(about = "Build styled charts from CSV survey tables and export them as images")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the color palettes with their colors
    Palettes,

    /// Print the first rows and the chart description (JSON) for each file
    Preview {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Encode one chart per file into the current directory
    Render {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output path for a single file; `-` writes the bytes to stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Write one chart per file into the output directory
    Export {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output directory (default: ./output_charts)
        #[arg(long, env = OUTPUT_DIR_ENV)]
        output_dir: Option<PathBuf>,

        /// Pause after each written file, in milliseconds
        #[arg(long)]
        pause_ms: Option<u64>,

        #[command(flatten)]
        style: StyleArgs,
    },
}

/// Style flags shared by every chart command.
#[derive(Args, Debug, Clone)]
pub struct StyleArgs {
    /// Bar, Line, Scatter, Pie or Area
    #[arg(long, default_value_t = ChartType::default())]
    pub chart_type: ChartType,

    /// Palette name; see `csv-chart palettes`
    #[arg(long, default_value = DEFAULT_PALETTE)]
    pub palette: String,

    /// top-right, top-left, bottom-left or bottom-right
    #[arg(long, default_value_t = LegendPosition::default())]
    pub legend_position: LegendPosition,

    #[arg(long)]
    pub hide_x_label: bool,

    #[arg(long)]
    pub hide_y_label: bool,

    #[arg(long)]
    pub hide_title: bool,

    /// Hide value labels on points and bars
    #[arg(long)]
    pub hide_values: bool,

    /// Text color on transparent backgrounds: Black or White
    #[arg(long, default_value_t = TextColor::default())]
    pub text_color: TextColor,

    /// White, Black or Transparent
    #[arg(long, default_value_t = BackgroundColor::default())]
    pub background: BackgroundColor,

    /// PNG, JPEG, SVG or PDF
    #[arg(long, default_value_t = ExportFormat::default())]
    pub format: ExportFormat,
}

impl StyleArgs {
    pub fn to_options(&self) -> StyleOptions {
        StyleOptions {
            chart_type: self.chart_type,
            palette: self.palette.clone(),
            legend_position: self.legend_position,
            show_x_label: !self.hide_x_label,
            show_y_label: !self.hide_y_label,
            show_title: !self.hide_title,
            show_bar_values: !self.hide_values,
            text_color: self.text_color,
            background: self.background,
            export_format: self.format,
        }
    }
}
