// File: crates/csv-chart-cli/src/progress.rs
// Summary: indicatif progress bar driven by batch export; cleared when the batch ends.

use csv_chart_core::BatchProgress;
use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE: &str = "{bar:40.cyan/blue} {pos}/{len} {msg}";

#[derive(Default)]
pub struct BarProgress {
    bar: Option<ProgressBar>,
}

impl BatchProgress for BarProgress {
    fn start(&mut self, total: usize) {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(ProgressStyle::with_template(TEMPLATE).unwrap_or_else(|_| ProgressStyle::default_bar()));
        self.bar = Some(bar);
    }

    fn advance(&mut self, index: usize, _total: usize, name: &str) {
        if let Some(bar) = &self.bar {
            bar.set_position(index as u64);
            bar.set_message(name.to_string());
        }
    }

    fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
