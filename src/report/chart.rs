//! Text charts for terminal output

use super::table::render_table;

const BAR_WIDTH: usize = 40;

/// One named line of a line chart, with one value per x position.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

/// Horizontal bar chart, bars scaled against the largest value.
pub fn render_bar_chart(title: &str, bars: &[(String, f64)], precision: usize, unit: &str) -> String {
    let label_width = bars
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    let max = bars
        .iter()
        .map(|&(_, value)| value)
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);

    let mut lines = vec![title.to_string()];
    for (label, value) in bars {
        let length = if max > 0.0 && value.is_finite() && *value > 0.0 {
            ((value / max) * BAR_WIDTH as f64).round().max(1.0) as usize
        } else {
            0
        };
        let suffix = if unit.is_empty() {
            String::new()
        } else {
            format!(" {unit}")
        };
        lines.push(format!(
            "{label:<label_width$} │{} {value:.precision$}{suffix}",
            "█".repeat(length)
        ));
    }
    lines.join("\n")
}

/// Line chart rendered as a table: one row per x position, one column per series.
pub fn render_series(title: &str, x_label: &str, xs: &[usize], series: &[Series], precision: usize) -> String {
    let headers: Vec<&str> = std::iter::once(x_label)
        .chain(series.iter().map(|s| s.name.as_str()))
        .collect();
    let rows: Vec<Vec<String>> = xs
        .iter()
        .enumerate()
        .map(|(i, x)| {
            std::iter::once(x.to_string())
                .chain(series.iter().map(|s| match s.values.get(i).copied().flatten() {
                    Some(value) => format!("{value:.precision$}"),
                    None => String::new(),
                }))
                .collect()
        })
        .collect();
    format!("{title}\n{}", render_table(&headers, &rows))
}
