// File: crates/csv-chart-render/src/ticks.rs
// Summary: Value-axis autoscaling and "nice" tick placement.

use csv_chart_core::{ChartSpec, XyMode};

/// Visible y range covering every plotted value.
/// Bars and stacked areas always include zero; lines and markers get 5% headroom on both ends.
pub fn value_range(spec: &ChartSpec) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    let mut from_zero = false;
    for t in spec.traces.iter().filter_map(|t| t.as_xy()) {
        from_zero |= matches!(t.mode, XyMode::Bars | XyMode::StackedArea);
        for &y in t.y.iter().filter(|y| y.is_finite()) {
            lo = lo.min(y);
            hi = hi.max(y);
        }
    }
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    if from_zero {
        lo = lo.min(0.0);
        hi = hi.max(0.0);
    }
    if (hi - lo).abs() < 1e-9 {
        return (lo - 1.0, hi + 1.0);
    }
    // Scaled before subtracting so the padding stays finite near f64::MAX.
    let pad = hi * 0.05 - lo * 0.05;
    let lo = if from_zero && lo == 0.0 { 0.0 } else { (lo - pad).max(f64::MIN) };
    let hi = if from_zero && hi == 0.0 { 0.0 } else { (hi + pad).min(f64::MAX) };
    (lo, hi)
}

/// Step of roughly `target` ticks over `span`, rounded to 1, 2 or 5 times a power of ten.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let raw = span.abs() / target.max(1) as f64;
    if raw <= 0.0 || !raw.is_finite() {
        return 1.0;
    }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Upper bound on ticks per axis; anything beyond means the step is degenerate.
const MAX_TICKS: f64 = 1_000.0;

/// Tick values inside `[lo, hi]` on multiples of the nice step.
/// Empty when the range is not finite or no sensible step exists.
pub fn nice_ticks(lo: f64, hi: f64, target: usize) -> Vec<f64> {
    if !lo.is_finite() || !hi.is_finite() || hi < lo {
        return Vec::new();
    }
    let span = hi - lo;
    let step = if span.is_finite() {
        nice_step(span, target)
    } else {
        // hi - lo overflows; pick the step from half the span.
        nice_step(hi * 0.5 - lo * 0.5, target) * 2.0
    };
    if !step.is_finite() || step <= 0.0 {
        return Vec::new();
    }
    let first = (lo / step).ceil();
    let last = (hi / step).floor();
    if last - first > MAX_TICKS || first.abs() > 1e15 || last.abs() > 1e15 {
        return Vec::new();
    }
    (first as i64..=last as i64).map(|k| k as f64 * step).collect()
}

/// Tick label; drops the fraction on whole numbers.
pub fn tick_label(v: f64) -> String {
    let rounded = (v * 1e6).round() / 1e6;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        rounded.to_string()
    }
}
