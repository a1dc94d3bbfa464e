// File: crates/csv-chart-cli/src/commands.rs
// Summary: Command bodies; palette listing, preview (data head + JSON), per-file render and batch export.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use csv_chart_core::catalog::swatch_line;
use csv_chart_core::{
    export_batch, export_file_name, list_palettes, ChartEncoder, ExportConfig, StyleOptions, Upload,
};
use csv_chart_render::SkiaEncoder;

use crate::progress::BarProgress;

/// Rows shown per file by `preview`.
const PREVIEW_ROWS: usize = 5;

pub fn palettes() -> Result<()> {
    let mut out = std::io::stdout().lock();
    for name in list_palettes() {
        writeln!(out, "{}", swatch_line(&name)?)?;
    }
    Ok(())
}

fn load(files: &[PathBuf]) -> Result<Vec<Upload>> {
    files
        .iter()
        .map(|path| Upload::from_path(path).with_context(|| format!("failed to read '{}'", path.display())))
        .collect()
}

pub fn preview(files: &[PathBuf], options: &StyleOptions) -> Result<()> {
    let mut out = std::io::stdout().lock();
    for upload in load(files)? {
        let table = upload.table().with_context(|| format!("failed to load '{}'", upload.name))?;
        writeln!(out, "== {} ({} rows)", upload.name, table.row_count())?;
        writeln!(out, "{}", table.headers.join("\t"))?;
        for row in table.head(PREVIEW_ROWS) {
            writeln!(out, "{}", row.join("\t"))?;
        }
        let spec = csv_chart_core::build(&table, options, Some(upload.name.as_str()))
            .with_context(|| format!("failed to build chart for '{}'", upload.name))?;
        writeln!(out, "{}", serde_json::to_string_pretty(&spec)?)?;
    }
    Ok(())
}

/// One chart per file, written as `chart_<stem>.<ext>` in the current directory.
/// `output` overrides the path (or selects stdout with `-`) and needs exactly one file.
pub fn render(files: &[PathBuf], output: Option<&Path>, options: &StyleOptions) -> Result<()> {
    if output.is_some() && files.len() != 1 {
        bail!("--output takes exactly one input file, got {}", files.len());
    }
    let encoder = SkiaEncoder::new();
    for upload in load(files)? {
        let spec = upload
            .chart(options)
            .with_context(|| format!("failed to build chart for '{}'", upload.name))?;
        let bytes = encoder.encode(&spec, options.export_format)?;

        if output == Some(Path::new("-")) {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes)?;
            stdout.flush()?;
            continue;
        }
        let path = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(export_file_name(&upload.name, options.export_format)));
        std::fs::write(&path, &bytes).with_context(|| format!("failed to write '{}'", path.display()))?;
        tracing::info!(path = %path.display(), "chart saved");
        eprintln!("Wrote {}", path.display());
    }
    Ok(())
}

pub fn export(
    files: &[PathBuf],
    output_dir: Option<PathBuf>,
    pause_ms: Option<u64>,
    options: &StyleOptions,
) -> Result<()> {
    let uploads = load(files)?;
    let cwd = std::env::current_dir().context("failed to resolve the working directory")?;
    let mut config = ExportConfig::resolve(output_dir.map(PathBuf::into_os_string), &cwd);
    if let Some(ms) = pause_ms {
        config = config.with_pause(Duration::from_millis(ms));
    }

    let mut progress = BarProgress::default();
    match export_batch(&uploads, options, &SkiaEncoder::new(), &config, &mut progress) {
        Ok(report) => {
            eprintln!("Saved {} chart(s) to {}", report.written.len(), report.output_dir.display());
            Ok(())
        }
        Err(err) => {
            if !err.written().is_empty() {
                eprintln!("{} chart(s) were saved before the failure", err.written().len());
            }
            let hint = if err.cause().is_input_fault() {
                "check the input file and the selected options"
            } else {
                "check that the output directory is writable"
            };
            Err(anyhow::Error::new(err).context(hint))
        }
    }
}
