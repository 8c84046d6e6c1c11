pub mod config;
pub mod logging;

pub mod analysis;
pub mod chart;
pub mod classify;
pub mod document;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod tally;
pub mod title;

pub use analysis::{analyze, analyze_html, tally_lines, LineScan, ScriptReport, ScriptSource};
pub use error::ScriptError;
pub use tally::{Tally, TallyEntry};
