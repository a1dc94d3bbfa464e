// File: crates/csv-chart-render/tests/smoke.rs
// Purpose: End-to-end encode of every chart type into every export format.

use csv_chart_core::{
    BackgroundColor, ChartEncoder, ChartSpec, ChartType, ExportFormat, StyleOptions, TabularInput,
};
use csv_chart_render::SkiaEncoder;

const SURVEY: &str = "concelhos,Sim,Não,Ns/Nr\n\
Lisboa,10,20,5\n\
Porto,40,35.5,24.5\n\
Braga,55,,15\n";

fn spec(opts: &StyleOptions) -> ChartSpec {
    let table = TabularInput::from_csv_bytes("survey.csv", SURVEY.as_bytes()).expect("parse");
    csv_chart_core::build(&table, opts, Some("survey.csv")).expect("build")
}

#[test]
fn png_has_layout_size_and_paper_background() {
    let encoder = SkiaEncoder::new();
    let bytes = encoder.encode(&spec(&StyleOptions::default()), ExportFormat::Png).expect("png");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (700, 600));
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
}

#[test]
fn transparent_png_keeps_alpha_and_jpeg_gets_white() {
    let encoder = SkiaEncoder::new();
    let opts = StyleOptions::default().with_background(BackgroundColor::Transparent);
    let spec = spec(&opts);

    let png = encoder.encode(&spec, ExportFormat::Png).expect("png");
    let img = image::load_from_memory(&png).expect("decode").to_rgba8();
    assert_eq!(img.get_pixel(0, 0).0[3], 0, "corner stays transparent");

    let jpeg = encoder.encode(&spec, ExportFormat::Jpeg).expect("jpeg");
    assert!(jpeg.starts_with(&[0xFF, 0xD8]), "should be JPEG SOI marker");
    let img = image::load_from_memory(&jpeg).expect("decode").to_rgb8();
    let [r, g, b] = img.get_pixel(0, 0).0;
    assert!(r > 240 && g > 240 && b > 240, "corner should be near white, got {r},{g},{b}");
}

#[test]
fn black_background_fills_the_page() {
    let opts = StyleOptions::default().with_background(BackgroundColor::Black);
    let png = SkiaEncoder::new().encode(&spec(&opts), ExportFormat::Png).expect("png");
    let img = image::load_from_memory(&png).expect("decode").to_rgba8();
    assert_eq!(img.get_pixel(2, 2).0, [0, 0, 0, 255]);
}

#[test]
fn vector_formats_have_their_signatures() {
    let encoder = SkiaEncoder::new();
    let spec = spec(&StyleOptions::default());

    let svg = encoder.encode(&spec, ExportFormat::Svg).expect("svg");
    let text = String::from_utf8(svg).expect("svg is utf-8");
    assert!(text.contains("<svg"), "svg root element");

    let pdf = encoder.encode(&spec, ExportFormat::Pdf).expect("pdf");
    assert!(pdf.starts_with(b"%PDF"), "should be PDF header");
}

#[test]
fn every_chart_type_renders() {
    let encoder = SkiaEncoder::new();
    for ct in [ChartType::Bar, ChartType::Line, ChartType::Scatter, ChartType::Pie, ChartType::Area] {
        let opts = StyleOptions::default().with_chart_type(ct);
        let bytes = encoder.encode(&spec(&opts), ExportFormat::Png).expect("png");
        assert!(bytes.len() > 1_000, "{ct}: png should carry a drawn figure");
    }
}

#[test]
fn write_to_path_creates_the_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("chart_survey.svg");
    SkiaEncoder::new()
        .write_to_path(&spec(&StyleOptions::default()), ExportFormat::Svg, &out)
        .expect("write");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "svg should be non-empty");
}

#[test]
fn values_near_f64_max_still_encode() {
    let table = TabularInput::from_csv_bytes("big.csv", b"concelhos,Sim,N\xc3\xa3o,Ns/Nr\nA,0,0,0\nB,1.7e308,1,1\n")
        .expect("parse");
    let encoder = SkiaEncoder::new();
    for ct in [ChartType::Line, ChartType::Bar, ChartType::Area] {
        let opts = StyleOptions::default().with_chart_type(ct);
        let spec = csv_chart_core::build(&table, &opts, Some("big.csv")).expect("build");
        let bytes = encoder.encode(&spec, ExportFormat::Png).expect("png");
        assert!(bytes.starts_with(&[137, 80, 78, 71]), "{ct}");
    }
}
