//! Fetch & parse driver: one page in, one [`ScriptReport`] out.
//!
//! Flow: resolve URL → fetch → bold `<pre>` lines → classify → extract →
//! tally → filter and sort. Runs once per invocation, synchronously.

use crate::classify::is_character_cue;
use crate::config::WhotalksConfig;
use crate::document::bold_lines;
use crate::error::ScriptError;
use crate::extract::extract_name;
use crate::fetch::{fetch_page, FetchOptions};
use crate::tally::{Tally, TallyEntry};
use crate::title::{capwords, normalize_title, script_url, title_from_url};
use serde::Serialize;

/// Where the script comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptSource {
    /// Human-entered movie name, turned into an archive slug.
    Title(String),
    /// Full script page URL.
    Url(String),
}

impl ScriptSource {
    /// Script page URL for this source. Titles are slugged under `base`;
    /// URLs must parse.
    pub fn resolve_url(&self, base: &str) -> Result<String, ScriptError> {
        match self {
            ScriptSource::Title(title) => {
                if title.trim().is_empty() {
                    return Err(ScriptError::EmptyTitle);
                }
                Ok(script_url(base, &normalize_title(title)))
            }
            ScriptSource::Url(input) => {
                let input = input.trim();
                let parsed = url::Url::parse(input).map_err(|source| ScriptError::InvalidUrl {
                    input: input.to_string(),
                    source,
                })?;
                Ok(parsed.to_string())
            }
        }
    }

    /// Title shown on the chart.
    pub fn display_title(&self) -> String {
        match self {
            ScriptSource::Title(title) => capwords(title),
            ScriptSource::Url(url) => title_from_url(url.trim()),
        }
    }
}

/// Result of one run, handed to the renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptReport {
    pub title: String,
    pub url: String,
    /// Bold lines examined.
    pub lines_scanned: usize,
    /// Lines that passed both the classifier and the extractor.
    pub cues_accepted: usize,
    /// Characters at or above the threshold, most lines first.
    pub entries: Vec<TallyEntry>,
}

/// Raw counts from one pass over a document, before filtering.
#[derive(Debug, Clone, Default)]
pub struct LineScan {
    pub tally: Tally,
    pub lines_scanned: usize,
    pub cues_accepted: usize,
}

/// Classifies, extracts and counts every line in order.
pub fn tally_lines<I, S>(lines: I) -> LineScan
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut scan = LineScan::default();
    for line in lines {
        let line = line.as_ref();
        scan.lines_scanned += 1;
        if !is_character_cue(line) {
            continue;
        }
        if let Some(name) = extract_name(line) {
            scan.tally.increment(&name);
            scan.cues_accepted += 1;
        }
    }
    scan
}

/// Builds a report from an already fetched page.
///
/// Fails with [`ScriptError::NotFound`] when the page has no bold text inside
/// a `<pre>` block.
pub fn analyze_html(
    html: &str,
    title: &str,
    url: &str,
    min_lines: u32,
) -> Result<ScriptReport, ScriptError> {
    let lines = bold_lines(html);
    if lines.is_empty() {
        return Err(ScriptError::NotFound {
            url: url.to_string(),
        });
    }

    let scan = tally_lines(&lines);
    tracing::debug!(
        "scanned {} lines, {} cues, {} distinct names",
        scan.lines_scanned,
        scan.cues_accepted,
        scan.tally.len()
    );
    let entries = scan.tally.finish(min_lines);

    Ok(ScriptReport {
        title: title.to_string(),
        url: url.to_string(),
        lines_scanned: scan.lines_scanned,
        cues_accepted: scan.cues_accepted,
        entries,
    })
}

/// Fetches the script for `source` and tallies its name cues.
pub fn analyze(source: &ScriptSource, cfg: &WhotalksConfig) -> Result<ScriptReport, ScriptError> {
    let url = source.resolve_url(&cfg.archive_base_url)?;
    tracing::info!("fetching script from {}", url);

    let html = fetch_page(&url, &FetchOptions::from(cfg))?;
    let report = analyze_html(&html, &source.display_title(), &url, cfg.min_lines)?;

    tracing::info!(
        "{}: {} characters with at least {} lines",
        report.title,
        report.entries.len(),
        cfg.min_lines
    );
    Ok(report)
}
