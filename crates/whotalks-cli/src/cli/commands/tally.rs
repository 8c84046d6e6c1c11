//! `whotalks tally` – print the sorted per-character counts.

use anyhow::Result;
use whotalks_core::chart::render_table;
use whotalks_core::config::WhotalksConfig;
use whotalks_core::{analyze, ScriptSource};

pub fn run_tally(source: &ScriptSource, cfg: &WhotalksConfig, json: bool) -> Result<()> {
    let report = analyze(source, cfg)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_table(&report));
    }
    Ok(())
}
