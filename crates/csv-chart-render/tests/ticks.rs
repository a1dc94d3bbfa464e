// File: crates/csv-chart-render/tests/ticks.rs
// Purpose: Validate value-axis autoscaling and tick placement.

use csv_chart_core::{ChartType, StyleOptions, TabularInput};
use csv_chart_render::ticks::{nice_step, nice_ticks, tick_label, value_range};

fn range_for(csv: &str, chart_type: ChartType) -> (f64, f64) {
    let table = TabularInput::from_csv_bytes("t.csv", csv.as_bytes()).expect("parse");
    let spec = csv_chart_core::build(&table, &StyleOptions::default().with_chart_type(chart_type), None)
        .expect("build");
    value_range(&spec)
}

#[test]
fn bars_start_at_zero() {
    let (lo, hi) = range_for("concelhos,Sim,Não,Ns/Nr\nA,10,20,30\n", ChartType::Bar);
    assert_eq!(lo, 0.0);
    assert!(hi >= 30.0);
}

#[test]
fn lines_pad_both_ends() {
    let (lo, hi) = range_for("concelhos,Sim,Não,Ns/Nr\nA,10,20,30\n", ChartType::Line);
    assert!(lo < 10.0 && lo > 0.0);
    assert!(hi > 30.0);
}

#[test]
fn areas_cover_the_stack_total() {
    let (lo, hi) = range_for("concelhos,Sim,Não,Ns/Nr\nA,10,20,30\n", ChartType::Area);
    assert_eq!(lo, 0.0);
    assert!(hi >= 60.0);
}

#[test]
fn steps_follow_one_two_five() {
    assert_eq!(nice_step(100.0, 5), 20.0);
    assert_eq!(nice_step(10.0, 10), 1.0);
    assert_eq!(nice_step(0.0, 6), 1.0);
}

#[test]
fn ticks_stay_inside_range() {
    let ticks = nice_ticks(0.0, 63.0, 6);
    assert_eq!(ticks, [0.0, 20.0, 40.0, 60.0]);
    assert_eq!(nice_ticks(-5.0, 5.0, 4), [-5.0, 0.0, 5.0]);
    assert_eq!(tick_label(20.0), "20");
    assert_eq!(tick_label(2.5), "2.5");
    assert_eq!(tick_label(-0.0), "0");
}

#[test]
fn huge_values_keep_a_finite_range_and_few_ticks() {
    let (lo, hi) = range_for("concelhos,Sim,Não,Ns/Nr\nA,0,0,0\nB,1.7e308,1,1\n", ChartType::Line);
    assert!(lo.is_finite() && hi.is_finite(), "range ({lo}, {hi})");
    assert!(!(hi - lo).is_finite(), "span overflows f64");

    let ticks = nice_ticks(lo, hi, 6);
    assert!(!ticks.is_empty() && ticks.len() <= 12, "{} ticks", ticks.len());
    assert!(ticks.iter().all(|t| t.is_finite() && *t >= lo && *t <= hi));

    let full = nice_ticks(f64::MIN, f64::MAX, 6);
    assert_eq!(full.len(), 3);
    assert_eq!(full[1], 0.0);
    assert!(full[0] < 0.0 && full[2] > 0.0);
}

#[test]
fn degenerate_ranges_yield_no_ticks() {
    assert!(nice_ticks(0.0, f64::INFINITY, 6).is_empty());
    assert!(nice_ticks(f64::NAN, 1.0, 6).is_empty());
    assert!(nice_ticks(5.0, 1.0, 6).is_empty());
}
