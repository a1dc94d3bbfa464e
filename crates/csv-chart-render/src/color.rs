// File: crates/csv-chart-render/src/color.rs
// Summary: CSS color strings (names, hex, rgb(), rgba()) to Skia colors.

use skia_safe as skia;

/// Parse a CSS color; unparsable input falls back to opaque black.
pub fn parse_css(value: &str) -> skia::Color {
    match value.trim().parse::<css_color_parser::Color>() {
        Ok(c) => {
            let a = (c.a.clamp(0.0, 1.0) * 255.0).round() as u8;
            skia::Color::from_argb(a, c.r, c.g, c.b)
        }
        Err(_) => {
            tracing::warn!(color = value, "unrecognized color; using black");
            skia::Color::BLACK
        }
    }
}
