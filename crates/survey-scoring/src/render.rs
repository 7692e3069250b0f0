//! Plain-text rendering of a [`ResultsReport`] for terminals

use crate::projection::{ErrorBarChart, RadarChart, ResultsReport};
use std::fmt::Write;

/// Width of a full-scale bar in cells
pub const BAR_WIDTH: usize = 35;

fn cell(value: f64, axis_max: f64) -> usize {
    if axis_max <= 0.0 || !value.is_finite() {
        return 0;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let cells = ((value / axis_max) * BAR_WIDTH as f64).round().max(0.0) as usize;
    cells.min(BAR_WIDTH)
}

fn label_width<'a>(labels: impl Iterator<Item = &'a str>) -> usize {
    labels.map(|l| l.chars().count()).max().unwrap_or(0)
}

/// Radar axes as horizontal bars on the shared axis
#[must_use]
pub fn render_radar(chart: &RadarChart) -> String {
    let width = label_width(chart.axes.iter().map(|a| a.label.as_str()));
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Skalen-Mittelwerte (Radar), Achse {:.0} bis {:.0}",
        chart.radial_min, chart.radial_max
    );
    for axis in &chart.axes {
        let filled = cell(axis.value, chart.radial_max);
        let _ = writeln!(
            out,
            "  {:<width$}  {}{}  {:.2}",
            axis.label,
            "█".repeat(filled),
            "░".repeat(BAR_WIDTH - filled),
            axis.value,
        );
    }
    out
}

/// Bars with a whisker line underneath each
#[must_use]
pub fn render_error_bars(chart: &ErrorBarChart) -> String {
    let width = label_width(chart.bars.iter().map(|b| b.label.as_str()));
    let mut out = String::new();
    let _ = writeln!(out, "Mittelwerte & Standardabweichung");
    for bar in &chart.bars {
        let filled = cell(bar.y, chart.axis_max);
        let _ = writeln!(
            out,
            "  {:<width$}  {:<bar_width$}  {:.2}  [{:.2}, {:.2}]",
            bar.label,
            "█".repeat(filled),
            bar.y,
            bar.y_min,
            bar.y_max,
            bar_width = BAR_WIDTH,
        );

        let lo = cell(bar.y_min, chart.axis_max);
        let hi = cell(bar.y_max, chart.axis_max);
        let whisker = if hi <= lo {
            "│".to_string()
        } else {
            format!("├{}┤", "─".repeat(hi - lo - 1))
        };
        let _ = writeln!(out, "  {:<width$}  {}{}", "", " ".repeat(lo), whisker);
    }
    out
}

/// Full results page
#[must_use]
pub fn render_report(report: &ResultsReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Deine Auswertung");
    let _ = writeln!(
        out,
        "Vielen Dank für deine Teilnahme! Hier siehst du die Zusammenfassung deiner Antworten."
    );
    let _ = writeln!(out);
    out.push_str(&render_radar(&report.radar));
    let _ = writeln!(out);
    out.push_str(&render_error_bars(&report.bars));
    if let Some(notice) = report.notice {
        let _ = writeln!(out);
        let _ = writeln!(out, "{notice}");
    }
    out
}
