//! CLI command handlers, one file per command.

mod chart;
mod completions;
mod slug;
mod tally;

pub use chart::run_chart;
pub use completions::run_completions;
pub use slug::run_slug;
pub use tally::run_tally;
