// File: crates/csv-chart-core/src/builder.rs
// Summary: Figure builder; maps (table, style options, source name) to a ChartSpec.
// Notes:
// - Pure and deterministic: identical inputs give identical traces, colors and layout.
// - One builder function per chart type; the legend is always horizontal at the bottom right.

use crate::axis::AxisLayout;
use crate::catalog::{self, cycle};
use crate::chart::{BarMode, ChartSpec, Layout, Legend};
use crate::error::{ChartError, Result};
use crate::export::file_stem;
use crate::options::{ChartType, LegendPosition, StyleOptions};
use crate::series::{format_value, PieTextInfo, PieTrace, PointText, TextPosition, Trace, XyMode, XyTrace};
use crate::table::{TabularInput, ID_COLUMN, VALUE_COLUMNS};
use crate::theme::Theme;

pub const TITLE: &str = "Responses by Concelhos";
pub const X_TITLE: &str = "Concelhos";
pub const Y_TITLE: &str = "Percentage";

/// Build the chart for `data` under `options`.
///
/// `source_name` is the uploaded file name; its stem is appended to the title.
pub fn build(data: &TabularInput, options: &StyleOptions, source_name: Option<&str>) -> Result<ChartSpec> {
    let colors = catalog::colors_for(&options.palette)?;
    if data.is_empty() {
        return Err(ChartError::EmptyInput { name: data.name.clone() });
    }
    if options.legend_position != LegendPosition::BottomRight {
        tracing::debug!(requested = %options.legend_position, "legend position is not applied; using bottom-right");
    }

    let text_color = options.effective_text_color();
    let traces = match options.chart_type {
        ChartType::Bar => xy_traces(data, options, &colors, XyMode::Bars, TextPosition::Outside)?,
        ChartType::Line => xy_traces(data, options, &colors, XyMode::LinesMarkers, TextPosition::TopCenter)?,
        ChartType::Scatter => xy_traces(data, options, &colors, XyMode::Markers, TextPosition::TopCenter)?,
        ChartType::Area => area_traces(data, &colors, text_color)?,
        ChartType::Pie => vec![pie_trace(data, options, &colors)?],
    };

    let layout = layout_for(data.row_count(), options, source_name);
    tracing::debug!(
        name = %data.name,
        chart_type = %options.chart_type,
        traces = traces.len(),
        "built chart"
    );
    Ok(ChartSpec { traces, layout })
}

/// Title shown above the plot.
pub fn title_text(show_title: bool, source_name: Option<&str>) -> String {
    if !show_title {
        return String::new();
    }
    match source_name.filter(|s| !s.is_empty()) {
        Some(name) => format!("{TITLE} - {}", file_stem(name)),
        None => TITLE.to_string(),
    }
}

fn categories(data: &TabularInput, chart_type: ChartType) -> Result<Vec<String>> {
    data.text_column(ID_COLUMN, chart_type)
}

fn xy_traces(
    data: &TabularInput,
    options: &StyleOptions,
    colors: &[&str],
    mode: XyMode,
    position: TextPosition,
) -> Result<Vec<Trace>> {
    let x = categories(data, options.chart_type)?;
    let text_color = options.effective_text_color();
    VALUE_COLUMNS
        .iter()
        .enumerate()
        .map(|(i, col)| -> Result<Trace> {
            let y = data.numeric_column(col, options.chart_type)?;
            let text = options.show_bar_values.then(|| PointText {
                labels: y.iter().map(|v| format_value(*v)).collect(),
                position,
            });
            Ok(Trace::Xy(XyTrace {
                name: col.to_string(),
                mode,
                x: x.clone(),
                y,
                color: cycle(colors, i).to_string(),
                text,
                text_color: text_color.to_string(),
                fill_color: None,
            }))
        })
        .collect()
}

fn area_traces(data: &TabularInput, colors: &[&str], text_color: &str) -> Result<Vec<Trace>> {
    let x = categories(data, ChartType::Area)?;
    let mut stack = vec![0.0f64; data.row_count()];
    let mut traces = Vec::with_capacity(VALUE_COLUMNS.len());
    for (i, col) in VALUE_COLUMNS.iter().enumerate() {
        let values = data.numeric_column(col, ChartType::Area)?;
        for (acc, v) in stack.iter_mut().zip(&values) {
            if !v.is_nan() {
                *acc += v;
            }
        }
        let color = cycle(colors, i).to_string();
        traces.push(Trace::Xy(XyTrace {
            name: col.to_string(),
            mode: XyMode::StackedArea,
            x: x.clone(),
            y: stack.clone(),
            color: color.clone(),
            text: None,
            text_color: text_color.to_string(),
            fill_color: Some(color),
        }));
    }
    Ok(traces)
}

fn pie_trace(data: &TabularInput, options: &StyleOptions, colors: &[&str]) -> Result<Trace> {
    if data.headers.len() < 2 {
        return Err(ChartError::MissingColumn {
            column: "value columns after the first".to_string(),
            chart_type: ChartType::Pie,
        });
    }
    let labels = data.headers[1..].to_vec();
    let values = data.numeric_row(0, 1..data.headers.len())?;
    let colors = (0..labels.len()).map(|i| cycle(colors, i).to_string()).collect();
    let text_info = if options.show_bar_values { PieTextInfo::LabelPercent } else { PieTextInfo::Label };
    Ok(Trace::Pie(PieTrace {
        labels,
        values,
        colors,
        text_info,
        text_color: options.effective_text_color().to_string(),
    }))
}

fn layout_for(rows: usize, options: &StyleOptions, source_name: Option<&str>) -> Layout {
    let theme = Theme::for_options(options);

    let mut x_axis = AxisLayout::categorical(if options.show_x_label { X_TITLE } else { "" }, rows);
    let mut y_axis = AxisLayout::auto(if options.show_y_label { Y_TITLE } else { "" });
    for axis in [&mut x_axis, &mut y_axis] {
        axis.grid_color = theme.grid.to_string();
        axis.tick_color = theme.font.to_string();
    }

    let mut layout = Layout::new(x_axis, y_axis, Legend::bottom_right(theme.font));
    layout.paper_color = theme.paper.to_string();
    layout.plot_color = theme.plot.to_string();
    layout.font_color = theme.font.to_string();
    layout.title = title_text(options.show_title, source_name);
    layout.bar_mode = (options.chart_type == ChartType::Bar).then_some(BarMode::Group);
    layout
}
