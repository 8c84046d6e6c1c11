//! Renderers for a finished [`ScriptReport`]: an SVG bar chart and a plain
//! text table.
//!
//! Bars are coloured on the viridis colormap by `min(cap, count) / cap`, so
//! very talkative characters saturate at the bright end.

use crate::analysis::ScriptReport;
use crate::config::ChartConfig;
use crate::error::ScriptError;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::colors::colormaps::{ColorMap, ViridisRGB};
use std::fmt::Write as _;
use std::path::Path;

/// Widest bar in the text table, in `#` characters.
const TABLE_BAR_WIDTH: u32 = 50;

/// Position of `count` on the colormap, in `[0, 1]`.
pub fn bar_intensity(count: u32, cap: u32) -> f64 {
    if cap == 0 {
        return 1.0;
    }
    f64::from(count.min(cap)) / f64::from(cap)
}

pub fn bar_color(count: u32, cap: u32) -> RGBColor {
    ViridisRGB.get_color(bar_intensity(count, cap) as f32)
}

/// Draws the report as an SVG bar chart at `path`.
///
/// X labels are the character names rotated to vertical; the caption is the
/// report title. An empty report still produces axes.
pub fn render_chart(
    report: &ScriptReport,
    path: &Path,
    cfg: &ChartConfig,
) -> Result<(), ScriptError> {
    let root = SVGBackend::new(path, (cfg.width, cfg.height)).into_drawing_area();
    draw_bars(&root, report, cfg).map_err(|e| ScriptError::Render(e.to_string()))?;
    root.present().map_err(|e| ScriptError::Render(e.to_string()))?;
    tracing::debug!("chart written to {}", path.display());
    Ok(())
}

fn draw_bars<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    report: &ScriptReport,
    cfg: &ChartConfig,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let n = report.entries.len().max(1) as u32;
    let top = report.entries.iter().map(|e| e.count).max().unwrap_or(0);
    let y_max = top + top / 10 + 1;
    let names: Vec<&str> = report.entries.iter().map(|e| e.name.as_str()).collect();

    let mut chart = ChartBuilder::on(root)
        .caption(&report.title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(130)
        .y_label_area_size(50)
        .build_cartesian_2d((0u32..n).into_segmented(), 0u32..y_max)?;

    let label = |v: &SegmentValue<u32>| match v {
        SegmentValue::CenterOf(i) => names
            .get(*i as usize)
            .map(|s| s.to_string())
            .unwrap_or_default(),
        _ => String::new(),
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(names.len() + 2)
        .x_label_formatter(&label)
        .x_label_style(
            ("sans-serif", 12)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .y_desc("Lines")
        .draw()?;

    chart.draw_series(report.entries.iter().enumerate().map(|(i, e)| {
        let i = i as u32;
        let mut bar = Rectangle::new(
            [(SegmentValue::Exact(i), 0), (SegmentValue::Exact(i + 1), e.count)],
            bar_color(e.count, cfg.color_cap).filled(),
        );
        bar.set_margin(0, 0, 4, 4);
        bar
    }))?;

    Ok(())
}

/// Text rendering of the report: one row per character with a bar scaled to
/// the top count.
pub fn render_table(report: &ScriptReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", report.title);
    if report.entries.is_empty() {
        let _ = writeln!(out, "(no characters)");
        return out;
    }

    let width = report
        .entries
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(0);
    let top = report.entries[0].count.max(1);
    for e in &report.entries {
        let bar_len = (u64::from(e.count) * u64::from(TABLE_BAR_WIDTH) / u64::from(top)).max(1);
        let _ = writeln!(
            out,
            "{:<width$}  {:>5}  {}",
            e.name,
            e.count,
            "#".repeat(bar_len as usize),
            width = width
        );
    }
    out
}
