// File: crates/csv-chart-core/src/error.rs
// Summary: Error taxonomy shared by the builder, the encoders and batch export.

use std::path::PathBuf;

use crate::options::{ChartType, ExportFormat};

pub type Result<T, E = ChartError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("unknown color palette '{0}'")]
    UnknownPalette(String),

    #[error("column '{column}' is required for {chart_type} charts but is missing")]
    MissingColumn { column: String, chart_type: ChartType },

    #[error("'{name}' has no data rows")]
    EmptyInput { name: String },

    #[error("column '{column}' row {row}: '{value}' is not a number")]
    InvalidNumber { column: String, row: usize, value: String },

    #[error("'{name}' row {row} has {cells} cells but the header has {expected}")]
    RaggedRow { name: String, row: usize, cells: usize, expected: usize },

    #[error("failed to parse CSV '{name}': {source}")]
    Csv {
        name: String,
        #[source]
        source: csv::Error,
    },

    #[error("failed to encode {format} chart: {reason}")]
    Encode { format: ExportFormat, reason: String },

    #[error("i/o error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ChartError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    /// True for faults in the input table or selected options (as opposed to output faults).
    pub fn is_input_fault(&self) -> bool {
        matches!(
            self,
            Self::UnknownPalette(_)
                | Self::MissingColumn { .. }
                | Self::EmptyInput { .. }
                | Self::InvalidNumber { .. }
                | Self::RaggedRow { .. }
                | Self::Csv { .. }
        )
    }
}
