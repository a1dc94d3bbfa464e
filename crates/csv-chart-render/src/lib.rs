// File: crates/csv-chart-render/src/lib.rs
// Summary: Skia encoder for ChartSpec figures; raster (PNG, JPEG), SVG and PDF output.

use skia_safe as skia;

use csv_chart_core::{ChartEncoder, ChartError, ChartSpec, ExportFormat, Result};

pub mod color;
pub mod draw;
pub mod text;
pub mod ticks;

pub use draw::draw_figure;
pub use text::{Align, TextShaper};

/// JPEG quality used for exports.
pub const JPEG_QUALITY: u8 = 90;

/// Renders figures with Skia and encodes them in the requested format.
#[derive(Default)]
pub struct SkiaEncoder {
    shaper: TextShaper,
}

impl SkiaEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    fn size(spec: &ChartSpec) -> (i32, i32) {
        (spec.layout.width.max(1) as i32, spec.layout.height.max(1) as i32)
    }

    fn raster(&self, spec: &ChartSpec, backdrop: Option<skia::Color>) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul(Self::size(spec))
            .ok_or_else(|| encode_err(ExportFormat::Png, "failed to create raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(backdrop.unwrap_or(skia::Color::TRANSPARENT));
        draw_figure(canvas, spec, &self.shaper);
        Ok(surface)
    }

    fn encode_png(&self, spec: &ChartSpec) -> Result<Vec<u8>> {
        let mut surface = self.raster(spec, None)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| encode_err(ExportFormat::Png, "encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// JPEG has no alpha channel; transparent backgrounds are composited over white.
    fn encode_jpeg(&self, spec: &ChartSpec) -> Result<Vec<u8>> {
        let (w, h) = Self::size(spec);
        let mut surface = self.raster(spec, Some(skia::Color::WHITE))?;
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(encode_err(ExportFormat::Jpeg, "failed to read raster pixels"));
        }
        let rgba = image::RgbaImage::from_raw(w as u32, h as u32, pixels)
            .ok_or_else(|| encode_err(ExportFormat::Jpeg, "pixel buffer size mismatch"))?;
        let rgb = image::DynamicImage::ImageRgba8(rgba).to_rgb8();

        let mut out = Vec::new();
        image::codecs::jpeg::JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY)
            .encode_image(&rgb)
            .map_err(|e| encode_err(ExportFormat::Jpeg, e))?;
        Ok(out)
    }

    fn encode_svg(&self, spec: &ChartSpec) -> Vec<u8> {
        let (w, h) = Self::size(spec);
        let canvas = skia::svg::Canvas::new(skia::Rect::from_wh(w as f32, h as f32), None);
        draw_figure(&canvas, spec, &self.shaper);
        canvas.end_document().as_bytes().to_vec()
    }

    fn encode_pdf(&self, spec: &ChartSpec) -> Vec<u8> {
        let (w, h) = Self::size(spec);
        let mut out = Vec::new();
        {
            let document = skia::pdf::new_document(&mut out, None);
            let mut page = document.begin_page((w as f32, h as f32), None);
            draw_figure(page.canvas(), spec, &self.shaper);
            page.end_page().close();
        }
        out
    }
}

impl ChartEncoder for SkiaEncoder {
    fn encode(&self, spec: &ChartSpec, format: ExportFormat) -> Result<Vec<u8>> {
        let bytes = match format {
            ExportFormat::Png => self.encode_png(spec)?,
            ExportFormat::Jpeg => self.encode_jpeg(spec)?,
            ExportFormat::Svg => self.encode_svg(spec),
            ExportFormat::Pdf => self.encode_pdf(spec),
        };
        if bytes.is_empty() {
            return Err(encode_err(format, "encoder produced no output"));
        }
        tracing::debug!(%format, bytes = bytes.len(), "chart encoded");
        Ok(bytes)
    }
}

fn encode_err(format: ExportFormat, reason: impl ToString) -> ChartError {
    ChartError::Encode { format, reason: reason.to_string() }
}
