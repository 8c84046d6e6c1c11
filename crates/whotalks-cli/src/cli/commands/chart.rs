//! `whotalks chart` – fetch a script and write its bar chart.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use whotalks_core::chart::render_chart;
use whotalks_core::config::WhotalksConfig;
use whotalks_core::title::normalize_title;
use whotalks_core::{analyze, ScriptSource};

/// Default chart file name for a report title: its slug plus `.svg`.
pub fn default_chart_path(title: &str) -> PathBuf {
    let slug = normalize_title(title);
    if slug.is_empty() {
        PathBuf::from("chart.svg")
    } else {
        PathBuf::from(format!("{}.svg", slug))
    }
}

pub fn run_chart(source: &ScriptSource, cfg: &WhotalksConfig, output: Option<&Path>) -> Result<()> {
    println!("Finding script...");
    let report = analyze(source, cfg)?;

    let path = match output {
        Some(p) => p.to_path_buf(),
        None => default_chart_path(&report.title),
    };
    render_chart(&report, &path, &cfg.chart())
        .with_context(|| format!("writing chart to {}", path.display()))?;

    println!(
        "{}: {} characters with at least {} lines",
        report.title,
        report.entries.len(),
        cfg.min_lines
    );
    println!("Chart written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_uses_slug() {
        assert_eq!(
            default_chart_path("The Dark Knight Rises"),
            PathBuf::from("Dark-Knight-Rises,-The.svg")
        );
        assert_eq!(
            default_chart_path("Dark Knight Rises, The"),
            PathBuf::from("Dark-Knight-Rises,-The.svg")
        );
        assert_eq!(default_chart_path(""), PathBuf::from("chart.svg"));
    }

    #[test]
    fn default_path_for_escaped_url_title() {
        let title = whotalks_core::title::title_from_url(
            "https://www.imsdb.com/scripts/Schindler%27s-List.html",
        );
        assert_eq!(default_chart_path(&title), PathBuf::from("Schindler's-List.svg"));
    }
}
