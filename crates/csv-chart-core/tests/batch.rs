// File: crates/csv-chart-core/tests/batch.rs
// Purpose: Validate batch export ordering, naming, failure handling and progress cleanup.

use std::cell::Cell;
use std::ffi::OsString;
use std::path::Path;

use csv_chart_core::export::file_stem;
use csv_chart_core::{
    export_batch, export_file_name, BatchError, BatchProgress, ChartEncoder, ChartError, ChartSpec, ExportConfig, ExportFormat,
    NoProgress, Result, StyleOptions, Upload,
};

const CSV: &str = "concelhos,Sim,Não,Ns/Nr\nLisboa,10,20,5\nPorto,1,2,3\n";

/// Encoder that writes the chart title as bytes and fails the write with index `fail_at`.
struct FakeEncoder {
    fail_at: Option<usize>,
    calls: Cell<usize>,
}

impl FakeEncoder {
    fn new(fail_at: Option<usize>) -> Self {
        Self { fail_at, calls: Cell::new(0) }
    }
}

impl ChartEncoder for FakeEncoder {
    fn encode(&self, spec: &ChartSpec, _format: ExportFormat) -> Result<Vec<u8>> {
        Ok(spec.layout.title.clone().into_bytes())
    }

    fn write_to_path(&self, spec: &ChartSpec, format: ExportFormat, path: &Path) -> Result<()> {
        let call = self.calls.get();
        self.calls.set(call + 1);
        if self.fail_at == Some(call) {
            return Err(ChartError::Io {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        std::fs::write(path, self.encode(spec, format)?).map_err(|e| ChartError::Io { path: path.into(), source: e })
    }
}

#[derive(Default)]
struct Recorder {
    started: Option<usize>,
    seen: Vec<String>,
    finished: usize,
}

impl BatchProgress for Recorder {
    fn start(&mut self, total: usize) {
        self.started = Some(total);
    }
    fn advance(&mut self, _index: usize, _total: usize, name: &str) {
        self.seen.push(name.to_string());
    }
    fn finish(&mut self) {
        self.finished += 1;
    }
}

fn uploads(names: &[&str]) -> Vec<Upload> {
    names.iter().map(|n| Upload::new(*n, CSV)).collect()
}

#[test]
fn writes_one_file_per_upload_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let config = ExportConfig::new(dir.path().join("out"));
    let encoder = FakeEncoder::new(None);
    let mut progress = Recorder::default();
    let opts = StyleOptions::default().with_export_format(ExportFormat::Svg);

    let report = export_batch(&uploads(&["a.csv", "b.csv"]), &opts, &encoder, &config, &mut progress).unwrap();

    assert_eq!(report.written, [config.output_dir.join("chart_a.svg"), config.output_dir.join("chart_b.svg")]);
    let body = std::fs::read_to_string(&report.written[1]).unwrap();
    assert_eq!(body, "Responses by Concelhos - b");
    assert_eq!(progress.started, Some(2));
    assert_eq!(progress.seen, ["a.csv", "b.csv"]);
    assert_eq!(progress.finished, 1);
}

#[test]
fn failure_stops_batch_and_keeps_earlier_files() {
    let dir = tempfile::tempdir().unwrap();
    let config = ExportConfig::new(dir.path());
    let encoder = FakeEncoder::new(Some(1));
    let mut progress = Recorder::default();

    let result = export_batch(
        &uploads(&["one.csv", "two.csv", "three.csv"]),
        &StyleOptions::default(),
        &encoder,
        &config,
        &mut progress,
    );
    let Err(BatchError::Item(err)) = result else {
        panic!("expected an item failure");
    };

    assert_eq!(err.name, "two.csv");
    assert_eq!(err.position, 2);
    assert_eq!(err.total, 3);
    assert!(matches!(err.source, ChartError::Io { .. }));
    assert_eq!(err.written, [dir.path().join("chart_one.png")]);
    assert_eq!(encoder.calls.get(), 2, "third item is never attempted");

    let files: Vec<_> = std::fs::read_dir(dir.path()).unwrap().map(|e| e.unwrap().file_name()).collect();
    assert_eq!(files, [OsString::from("chart_one.png")]);
    assert_eq!(progress.seen, ["one.csv", "two.csv"]);
    assert_eq!(progress.finished, 1, "progress is cleared on failure");
}

#[test]
fn input_faults_abort_the_batch() {
    let dir = tempfile::tempdir().unwrap();
    let config = ExportConfig::new(dir.path());
    let bad = vec![Upload::new("ok.csv", CSV), Upload::new("bad.csv", "concelhos,Não\nA,1\n")];
    let err = export_batch(&bad, &StyleOptions::default(), &FakeEncoder::new(None), &config, &mut NoProgress)
        .unwrap_err();
    assert!(matches!(err.cause(), ChartError::MissingColumn { .. }));
    assert_eq!(err.written().len(), 1);
    assert!(err.to_string().contains("'bad.csv' (file 2 of 2)"), "{err}");
}

#[test]
fn unwritable_output_dir_is_not_blamed_on_an_upload() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("taken");
    std::fs::write(&blocker, "not a directory").unwrap();
    let config = ExportConfig::new(blocker.join("charts"));
    let encoder = FakeEncoder::new(None);
    let mut progress = Recorder::default();

    let err = export_batch(&uploads(&["a.csv"]), &StyleOptions::default(), &encoder, &config, &mut progress)
        .unwrap_err();

    assert!(matches!(err, BatchError::OutputDir(ChartError::Io { .. })), "{err:?}");
    assert!(err.written().is_empty());
    assert!(err.to_string().starts_with("cannot prepare the output directory"), "{err}");
    assert!(!err.to_string().contains("a.csv"));
    assert_eq!(encoder.calls.get(), 0);
    assert!(progress.seen.is_empty());
    assert_eq!(progress.finished, 1);
}

#[test]
fn output_dir_is_created_when_absent() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    let config = ExportConfig::new(&nested);
    export_batch(&uploads(&["x.csv"]), &StyleOptions::default(), &FakeEncoder::new(None), &config, &mut NoProgress)
        .unwrap();
    assert!(nested.join("chart_x.png").exists());
}

#[test]
fn output_dir_resolution() {
    let cwd = Path::new("/work");
    assert_eq!(ExportConfig::resolve(None, cwd).output_dir, cwd.join("output_charts"));
    assert_eq!(ExportConfig::resolve(Some(OsString::new()), cwd).output_dir, cwd.join("output_charts"));
    assert_eq!(ExportConfig::resolve(Some("/tmp/charts".into()), cwd).output_dir, Path::new("/tmp/charts"));
}

#[test]
fn export_names_follow_source_stem() {
    assert_eq!(export_file_name("lisboa.csv", ExportFormat::Png), "chart_lisboa.png");
    assert_eq!(export_file_name("a.b.csv", ExportFormat::Jpeg), "chart_a.b.jpeg");
    assert_eq!(export_file_name("noext", ExportFormat::Pdf), "chart_noext.pdf");
    assert_eq!(file_stem(".hidden"), ".hidden");
    assert_eq!(file_stem("dir.d/file"), "dir.d/file");
}
