// File: crates/csv-chart-render/src/draw.rs
// Summary: Draws a ChartSpec onto any Skia canvas (raster surface, SVG document or PDF page).
// Notes:
// - Category i sits at x = i; the x axis range comes from the layout.
// - The band under the plot holds tick labels, the x axis title and the legend.

use skia_safe as skia;

use csv_chart_core::chart::{Orientation, XAnchor, YAnchor};
use csv_chart_core::series::TextPosition;
use csv_chart_core::{AxisRange, ChartSpec, Layout, PieTrace, XyMode, XyTrace};

use crate::color::parse_css;
use crate::text::{Align, TextShaper};
use crate::ticks::{nice_ticks, tick_label, value_range};

const FONT_SIZE: f32 = 12.0;
const TITLE_SIZE: f32 = 17.0;
const AXIS_TITLE_SIZE: f32 = 14.0;
/// Extra room reserved under the x axis for the legend row.
const LEGEND_BAND: f32 = 28.0;
const LEGEND_SWATCH: f32 = 12.0;
const LEGEND_ROW: f32 = 18.0;
/// Fraction of a category slot covered by a group of bars.
const BAR_GROUP_WIDTH: f64 = 0.8;
const MARKER_RADIUS: f32 = 3.0;
const Y_TICK_TARGET: usize = 6;

/// Plot area in pixels.
#[derive(Clone, Copy, Debug)]
struct PlotRect {
    l: f32,
    t: f32,
    r: f32,
    b: f32,
}

impl PlotRect {
    fn for_layout(layout: &Layout) -> Self {
        let m = &layout.margin;
        let b = layout.height.saturating_sub(m.bottom) as f32 - LEGEND_BAND;
        Self {
            l: m.left as f32,
            t: m.top as f32,
            r: layout.width.saturating_sub(m.right) as f32,
            b: b.max(m.top as f32 + 1.0),
        }
    }

    fn width(&self) -> f32 {
        (self.r - self.l).max(1.0)
    }

    fn height(&self) -> f32 {
        (self.b - self.t).max(1.0)
    }

    fn rect(&self) -> skia::Rect {
        skia::Rect::from_ltrb(self.l, self.t, self.r, self.b)
    }
}

/// Data-to-pixel transform for cartesian charts.
struct Scales {
    plot: PlotRect,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Scales {
    fn for_spec(spec: &ChartSpec, plot: PlotRect) -> Self {
        let (x_min, x_max) = match spec.layout.x_axis.range {
            AxisRange::Fixed { min, max } => (min, max),
            AxisRange::Auto => (-0.5, spec.category_count() as f64 - 0.5),
        };
        let (y_min, y_max) = match spec.layout.y_axis.range {
            AxisRange::Fixed { min, max } => (min, max),
            AxisRange::Auto => value_range(spec),
        };
        Self { plot, x_min, x_max, y_min, y_max }
    }

    fn sx(&self, x: f64) -> f32 {
        let span = (self.x_max - self.x_min).max(1e-9);
        self.plot.l + ((x - self.x_min) / span) as f32 * self.plot.width()
    }

    fn sy(&self, y: f64) -> f32 {
        // Halved so the span stays finite for ranges wider than f64::MAX.
        let span = (self.y_max * 0.5 - self.y_min * 0.5).max(1e-9);
        self.plot.b - ((y * 0.5 - self.y_min * 0.5) / span) as f32 * self.plot.height()
    }

    /// Integer category positions inside the x range.
    fn categories(&self) -> std::ops::RangeInclusive<i64> {
        (self.x_min.ceil() as i64).max(0)..=(self.x_max.floor() as i64)
    }
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

/// Draw the whole figure: backgrounds, traces, labels, title and legend.
pub fn draw_figure(canvas: &skia::Canvas, spec: &ChartSpec, shaper: &TextShaper) {
    let layout = &spec.layout;
    let plot = PlotRect::for_layout(layout);

    let page = skia::Rect::from_wh(layout.width as f32, layout.height as f32);
    canvas.draw_rect(page, &fill_paint(parse_css(&layout.paper_color)));

    if spec.is_pie() {
        for pie in spec.traces.iter().filter_map(|t| t.as_pie()) {
            draw_pie(canvas, plot, pie, shaper);
        }
    } else {
        canvas.draw_rect(plot.rect(), &fill_paint(parse_css(&layout.plot_color)));
        let scales = Scales::for_spec(spec, plot);
        draw_grid(canvas, &scales, layout);
        draw_xy_traces(canvas, &scales, spec, shaper);
        draw_axes(canvas, &scales, spec, shaper);
    }

    let font = parse_css(&layout.font_color);
    let title_x = layout.width as f32 * 0.05;
    let title_y = layout.margin.top as f32 * 0.5 + TITLE_SIZE * 0.5;
    shaper.draw(canvas, &layout.title, title_x, title_y, TITLE_SIZE, font, Align::Left);

    draw_legend(canvas, plot, spec, shaper);
}

// ---- cartesian ---------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, s: &Scales, layout: &Layout) {
    if layout.x_axis.show_grid {
        let paint = stroke_paint(parse_css(&layout.x_axis.grid_color), 1.0);
        for i in s.categories() {
            let x = s.sx(i as f64);
            canvas.draw_line((x, s.plot.t), (x, s.plot.b), &paint);
        }
    }
    if layout.y_axis.show_grid {
        let paint = stroke_paint(parse_css(&layout.y_axis.grid_color), 1.0);
        for v in nice_ticks(s.y_min, s.y_max, Y_TICK_TARGET) {
            let y = s.sy(v);
            canvas.draw_line((s.plot.l, y), (s.plot.r, y), &paint);
        }
    }
}

fn draw_axes(canvas: &skia::Canvas, s: &Scales, spec: &ChartSpec, shaper: &TextShaper) {
    let layout = &spec.layout;
    let pad = layout.margin.pad as f32;
    let x_color = parse_css(&layout.x_axis.tick_color);
    let y_color = parse_css(&layout.y_axis.tick_color);

    // y ticks
    for v in nice_ticks(s.y_min, s.y_max, Y_TICK_TARGET) {
        let y = s.sy(v) + FONT_SIZE * 0.35;
        shaper.draw(canvas, &tick_label(v), s.plot.l - pad, y, FONT_SIZE, y_color, Align::Right);
    }

    // category ticks, thinned out when labels would overlap
    let labels = spec.traces.iter().filter_map(|t| t.as_xy()).map(|t| &t.x).max_by_key(|x| x.len());
    if let Some(labels) = labels {
        let widest = labels.iter().map(|l| shaper.measure_width(l, FONT_SIZE)).fold(0.0f32, f32::max);
        let slot = s.sx(1.0) - s.sx(0.0);
        let stride = if slot > 0.0 { ((widest + 6.0) / slot).ceil().max(1.0) as usize } else { 1 };
        let y = s.plot.b + pad + FONT_SIZE;
        for i in s.categories().step_by(stride) {
            if let Some(label) = labels.get(i as usize) {
                shaper.draw(canvas, label, s.sx(i as f64), y, FONT_SIZE, x_color, Align::Center);
            }
        }
    }

    let x_title_y = s.plot.b + pad + FONT_SIZE + 22.0;
    let mid_x = (s.plot.l + s.plot.r) * 0.5;
    shaper.draw(canvas, &layout.x_axis.title, mid_x, x_title_y, AXIS_TITLE_SIZE, x_color, Align::Center);

    if !layout.y_axis.title.is_empty() {
        let mid_y = (s.plot.t + s.plot.b) * 0.5;
        canvas.save();
        canvas.translate((AXIS_TITLE_SIZE * 1.2, mid_y));
        canvas.rotate(-90.0, None);
        shaper.draw(canvas, &layout.y_axis.title, 0.0, 0.0, AXIS_TITLE_SIZE, y_color, Align::Center);
        canvas.restore();
    }
}

fn draw_xy_traces(canvas: &skia::Canvas, s: &Scales, spec: &ChartSpec, shaper: &TextShaper) {
    let bars: Vec<&XyTrace> = spec
        .traces
        .iter()
        .filter_map(|t| t.as_xy())
        .filter(|t| t.mode == XyMode::Bars)
        .collect();
    for (slot, t) in bars.iter().enumerate() {
        draw_bars(canvas, s, t, slot, bars.len(), shaper);
    }

    let mut below: Option<&[f64]> = None;
    for t in spec.traces.iter().filter_map(|t| t.as_xy()) {
        match t.mode {
            XyMode::Bars => {}
            XyMode::LinesMarkers => {
                draw_polyline(canvas, s, t);
                draw_markers(canvas, s, t);
                draw_point_text(canvas, s, t, shaper, |i| i as f64);
            }
            XyMode::Markers => {
                draw_markers(canvas, s, t);
                draw_point_text(canvas, s, t, shaper, |i| i as f64);
            }
            XyMode::StackedArea => {
                draw_area(canvas, s, t, below);
                draw_polyline(canvas, s, t);
                below = Some(t.y.as_slice());
            }
        }
    }
}

fn draw_bars(canvas: &skia::Canvas, s: &Scales, t: &XyTrace, slot: usize, slots: usize, shaper: &TextShaper) {
    let bw = BAR_GROUP_WIDTH / slots.max(1) as f64;
    let offset = -BAR_GROUP_WIDTH * 0.5 + bw * slot as f64;
    let base = s.sy(0.0f64.clamp(s.y_min, s.y_max));
    let paint = fill_paint(parse_css(&t.color));
    for (i, &v) in t.y.iter().enumerate() {
        if !v.is_finite() {
            continue;
        }
        let x0 = i as f64 + offset;
        let top = s.sy(v);
        let rect = skia::Rect::from_ltrb(s.sx(x0), top.min(base), s.sx(x0 + bw), top.max(base));
        canvas.draw_rect(rect, &paint);
    }
    draw_point_text(canvas, s, t, shaper, |i| i as f64 + offset + bw * 0.5);
}

fn draw_polyline(canvas: &skia::Canvas, s: &Scales, t: &XyTrace) {
    let paint = stroke_paint(parse_css(&t.color), 2.0);
    let mut path = skia::Path::new();
    let mut pen_down = false;
    for (i, &v) in t.y.iter().enumerate() {
        if !v.is_finite() {
            pen_down = false;
            continue;
        }
        let p = (s.sx(i as f64), s.sy(v));
        if pen_down {
            path.line_to(p);
        } else {
            path.move_to(p);
            pen_down = true;
        }
    }
    canvas.draw_path(&path, &paint);
}

fn draw_markers(canvas: &skia::Canvas, s: &Scales, t: &XyTrace) {
    let paint = fill_paint(parse_css(&t.color));
    for (i, &v) in t.y.iter().enumerate().filter(|(_, v)| v.is_finite()) {
        canvas.draw_circle((s.sx(i as f64), s.sy(v)), MARKER_RADIUS, &paint);
    }
}

/// Fill between this trace and the stacked trace below it (or zero).
fn draw_area(canvas: &skia::Canvas, s: &Scales, t: &XyTrace, below: Option<&[f64]>) {
    let fill = t.fill_color.as_deref().unwrap_or(&t.color);
    let paint = fill_paint(parse_css(fill));
    let floor = |i: usize| below.and_then(|b| b.get(i).copied()).filter(|v| v.is_finite()).unwrap_or(0.0);

    let points: Vec<usize> = (0..t.y.len()).filter(|&i| t.y[i].is_finite()).collect();
    let (Some(&first), Some(_)) = (points.first(), points.get(1)) else {
        return;
    };
    let mut path = skia::Path::new();
    path.move_to((s.sx(first as f64), s.sy(t.y[first])));
    for &i in &points[1..] {
        path.line_to((s.sx(i as f64), s.sy(t.y[i])));
    }
    for &i in points.iter().rev() {
        path.line_to((s.sx(i as f64), s.sy(floor(i))));
    }
    path.close();
    canvas.draw_path(&path, &paint);
}

fn draw_point_text(
    canvas: &skia::Canvas,
    s: &Scales,
    t: &XyTrace,
    shaper: &TextShaper,
    x_of: impl Fn(usize) -> f64,
) {
    let Some(text) = &t.text else { return };
    let color = parse_css(&t.text_color);
    for (i, (label, &v)) in text.labels.iter().zip(&t.y).enumerate() {
        if !v.is_finite() {
            continue;
        }
        let y = match text.position {
            TextPosition::Outside if v < 0.0 => s.sy(v) + FONT_SIZE + 2.0,
            TextPosition::Outside => s.sy(v) - 4.0,
            TextPosition::TopCenter => s.sy(v) - MARKER_RADIUS - 5.0,
        };
        shaper.draw(canvas, label, s.sx(x_of(i)), y, FONT_SIZE, color, Align::Center);
    }
}

// ---- pie ---------------------------------------------------------------------

fn draw_pie(canvas: &skia::Canvas, plot: PlotRect, pie: &PieTrace, shaper: &TextShaper) {
    let cx = (plot.l + plot.r) * 0.5;
    let cy = (plot.t + plot.b) * 0.5;
    let radius = plot.width().min(plot.height()) * 0.5 * 0.95;
    let oval = skia::Rect::from_ltrb(cx - radius, cy - radius, cx + radius, cy + radius);
    let text_color = parse_css(&pie.text_color);
    let texts = pie.slice_text();

    // Slices run counterclockwise from twelve o'clock.
    let mut start = -90.0f32;
    for (i, &fraction) in pie.fractions().iter().enumerate() {
        if fraction <= 0.0 {
            continue;
        }
        let sweep = -(fraction as f32) * 360.0;
        let color = pie.colors.get(i).map(|c| parse_css(c)).unwrap_or(skia::Color::GRAY);
        if fraction >= 1.0 {
            canvas.draw_oval(oval, &fill_paint(color));
        } else {
            canvas.draw_arc(oval, start, sweep, true, &fill_paint(color));
        }

        let mid = (start + sweep * 0.5).to_radians();
        let tx = cx + radius * 0.6 * mid.cos();
        let ty = cy + radius * 0.6 * mid.sin() + FONT_SIZE * 0.35;
        if let Some(label) = texts.get(i) {
            shaper.draw(canvas, label, tx, ty, FONT_SIZE, text_color, Align::Center);
        }
        start += sweep;
    }
}

// ---- legend ------------------------------------------------------------------

fn draw_legend(canvas: &skia::Canvas, plot: PlotRect, spec: &ChartSpec, shaper: &TextShaper) {
    let legend = &spec.layout.legend;
    let entries: Vec<(&str, &str)> = spec.traces.iter().flat_map(|t| t.legend_entries()).collect();
    if entries.is_empty() {
        return;
    }
    let font = parse_css(&legend.font_color);
    let gap = 6.0;
    let spacing = 16.0;
    let widths: Vec<f32> = entries
        .iter()
        .map(|(label, _)| LEGEND_SWATCH + gap + shaper.measure_width(label, FONT_SIZE))
        .collect();

    let (block_w, block_h) = match legend.orientation {
        Orientation::Horizontal => (
            widths.iter().sum::<f32>() + spacing * (widths.len() - 1) as f32,
            LEGEND_ROW,
        ),
    };

    let ax = plot.l + plot.width() * legend.x as f32;
    let ay = plot.b - plot.height() * legend.y as f32;
    let left = match legend.x_anchor {
        XAnchor::Right => ax - block_w,
    };
    let top = match legend.y_anchor {
        YAnchor::Bottom => ay - block_h,
    };
    // Keep the block on the page.
    let page_w = spec.layout.width as f32;
    let page_h = spec.layout.height as f32;
    let left = left.min(page_w - block_w - 4.0).max(4.0);
    let top = top.min(page_h - block_h - 4.0).max(4.0);

    let mut x = left;
    for ((label, color), w) in entries.iter().zip(&widths) {
        let swatch_top = top + (LEGEND_ROW - LEGEND_SWATCH) * 0.5;
        let swatch = skia::Rect::from_xywh(x, swatch_top, LEGEND_SWATCH, LEGEND_SWATCH);
        canvas.draw_rect(swatch, &fill_paint(parse_css(color)));
        let baseline = top + LEGEND_ROW * 0.5 + FONT_SIZE * 0.35;
        shaper.draw(canvas, label, x + LEGEND_SWATCH + gap, baseline, FONT_SIZE, font, Align::Left);
        x += w + spacing;
    }
}
