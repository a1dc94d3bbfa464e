// File: crates/csv-chart-core/src/export.rs
// Summary: Export boundary; file naming, output directory config, encoder trait and batch export.
// Notes:
// - Batch export is sequential in input order and stops at the first failure.
// - Files written before a failure are kept; the progress sink is always finished.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::builder::build;
use crate::chart::ChartSpec;
use crate::error::{ChartError, Result};
use crate::options::{ExportFormat, StyleOptions};
use crate::table::TabularInput;

/// Environment variable overriding the batch output directory.
pub const OUTPUT_DIR_ENV: &str = "OUTPUT_DIR";
/// Output folder, relative to the working directory, used without an override.
pub const DEFAULT_OUTPUT_SUBDIR: &str = "output_charts";

/// File name without its last extension (`"lisboa.2024.csv"` -> `"lisboa.2024"`).
/// Leading dots do not start an extension (`".hidden"` stays as is).
pub fn file_stem(name: &str) -> &str {
    let base_start = name.rfind(['/', '\\']).map_or(0, |i| i + 1);
    let base = &name[base_start..];
    let leading = base.len() - base.trim_start_matches('.').len();
    match base.rfind('.') {
        Some(dot) if dot > leading => &name[..base_start + dot],
        _ => name,
    }
}

/// Export file name for a chart built from `source_name`: `chart_{stem}.{ext}`.
pub fn export_file_name(source_name: &str, format: ExportFormat) -> String {
    format!("chart_{}.{}", file_stem(source_name), format.extension())
}

/// Turns a ChartSpec into encoded image bytes.
pub trait ChartEncoder {
    fn encode(&self, spec: &ChartSpec, format: ExportFormat) -> Result<Vec<u8>>;

    /// Encode and write to `path`.
    fn write_to_path(&self, spec: &ChartSpec, format: ExportFormat, path: &Path) -> Result<()> {
        let bytes = self.encode(spec, format)?;
        std::fs::write(path, bytes).map_err(|e| ChartError::io(path, e))
    }
}

/// Where and how batch exports are written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
    /// Optional pause after each written file.
    pub pause: Option<Duration>,
}

impl ExportConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self { output_dir: output_dir.into(), pause: None }
    }

    /// Resolve the output directory from an optional override, else `cwd/output_charts`.
    pub fn resolve(override_dir: Option<OsString>, cwd: &Path) -> Self {
        let output_dir = match override_dir.filter(|d| !d.is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => cwd.join(DEFAULT_OUTPUT_SUBDIR),
        };
        Self::new(output_dir)
    }

    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = Some(pause);
        self
    }

    /// Create the output directory if absent.
    pub fn ensure_output_dir(&self) -> Result<&Path> {
        std::fs::create_dir_all(&self.output_dir).map_err(|e| ChartError::io(&self.output_dir, e))?;
        Ok(&self.output_dir)
    }

    pub fn path_for(&self, source_name: &str, format: ExportFormat) -> PathBuf {
        self.output_dir.join(export_file_name(source_name, format))
    }
}

/// A named input as received from the user: file name plus raw CSV bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Upload {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self { name: name.into(), bytes: bytes.into() }
    }

    /// Read a file into memory; the upload is named after the file name.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| ChartError::io(path, e))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { name, bytes })
    }

    pub fn table(&self) -> Result<TabularInput> {
        TabularInput::from_csv_bytes(&self.name, &self.bytes)
    }

    /// Parse and build the chart for this upload.
    pub fn chart(&self, options: &StyleOptions) -> Result<ChartSpec> {
        build(&self.table()?, options, Some(self.name.as_str()))
    }
}

/// Progress sink for batch export (a progress bar, a status line, ...).
pub trait BatchProgress {
    fn start(&mut self, _total: usize) {}
    /// Called before item `index` (0-based) is processed.
    fn advance(&mut self, _index: usize, _total: usize, _name: &str) {}
    /// Called once when the batch ends, on success or failure.
    fn finish(&mut self) {}
}

/// Progress sink that ignores every update.
pub struct NoProgress;

impl BatchProgress for NoProgress {}

struct FinishGuard<'a>(&'a mut dyn BatchProgress);

impl Drop for FinishGuard<'_> {
    fn drop(&mut self) {
        self.0.finish();
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchReport {
    pub output_dir: PathBuf,
    pub written: Vec<PathBuf>,
}

/// Failure of one item in a batch.
#[derive(Debug, thiserror::Error)]
#[error("export of '{name}' (file {position} of {total}) failed: {source}")]
pub struct ItemError {
    pub name: String,
    /// 1-based position of the failed item.
    pub position: usize,
    pub total: usize,
    /// Files written before the failure.
    pub written: Vec<PathBuf>,
    #[source]
    pub source: ChartError,
}

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    /// The output directory could not be created; no item was attempted.
    #[error("cannot prepare the output directory: {0}")]
    OutputDir(#[source] ChartError),

    #[error(transparent)]
    Item(#[from] ItemError),
}

impl BatchError {
    /// The underlying chart or I/O error.
    pub fn cause(&self) -> &ChartError {
        match self {
            BatchError::OutputDir(e) => e,
            BatchError::Item(item) => &item.source,
        }
    }

    /// Files written before the batch stopped.
    pub fn written(&self) -> &[PathBuf] {
        match self {
            BatchError::OutputDir(_) => &[],
            BatchError::Item(item) => &item.written,
        }
    }
}

fn log_io_cause(error: &ChartError) {
    if let ChartError::Io { path, source } = error {
        tracing::error!(path = %path.display(), error = ?source, "chart export write failed");
    }
}

/// Build and write one chart per upload into `config.output_dir`, in order.
pub fn export_batch(
    uploads: &[Upload],
    options: &StyleOptions,
    encoder: &dyn ChartEncoder,
    config: &ExportConfig,
    progress: &mut dyn BatchProgress,
) -> std::result::Result<BatchReport, BatchError> {
    let total = uploads.len();
    let guard = FinishGuard(progress);
    guard.0.start(total);

    if let Err(e) = config.ensure_output_dir() {
        log_io_cause(&e);
        return Err(BatchError::OutputDir(e));
    }

    let mut written = Vec::with_capacity(total);
    for (i, upload) in uploads.iter().enumerate() {
        guard.0.advance(i, total, &upload.name);
        let path = config.path_for(&upload.name, options.export_format);
        let result = upload
            .chart(options)
            .and_then(|spec| encoder.write_to_path(&spec, options.export_format, &path));
        if let Err(source) = result {
            log_io_cause(&source);
            let name = upload.name.clone();
            return Err(ItemError { name, position: i + 1, total, written, source }.into());
        }
        tracing::info!(path = %path.display(), "chart saved");
        written.push(path);
        if let Some(pause) = config.pause {
            std::thread::sleep(pause);
        }
    }

    Ok(BatchReport { output_dir: config.output_dir.clone(), written })
}
