//! CLI for whotalks.

mod commands;
mod prompt;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use whotalks_core::config::{self, WhotalksConfig};
use whotalks_core::ScriptSource;

use commands::{run_chart, run_completions, run_slug, run_tally};

/// Top-level CLI. With no subcommand, prompts for a movie and draws its chart.
#[derive(Debug, Parser)]
#[command(name = "whotalks")]
#[command(about = "Who talks the most? Count character lines in a screenplay", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

/// Script selection shared by the fetching commands. Without `--title` or
/// `--url` the user is prompted interactively.
#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// Movie name, e.g. "the dark knight rises".
    #[arg(long, conflicts_with = "url")]
    pub title: Option<String>,

    /// Full URL of a script page hosted on imsdb.com.
    #[arg(long)]
    pub url: Option<String>,

    /// Leave out characters with fewer lines than this (default from config, 8).
    #[arg(long, value_name = "N")]
    pub min_lines: Option<u32>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch a script and write its per-character bar chart as SVG.
    Chart {
        #[command(flatten)]
        source: SourceArgs,

        /// Output file (default: <slug>.svg in the current directory).
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Fetch a script and print the sorted per-character line counts.
    Tally {
        #[command(flatten)]
        source: SourceArgs,

        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Show the archive slug and URL for a movie name.
    Slug {
        /// Movie name words.
        #[arg(required = true)]
        title: Vec<String>,
    },

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl SourceArgs {
    /// Source from flags, or from the interactive prompt when none was given.
    fn resolve(&self) -> Result<ScriptSource> {
        match (&self.title, &self.url) {
            (Some(title), _) => Ok(ScriptSource::Title(title.clone())),
            (None, Some(url)) => Ok(ScriptSource::Url(url.clone())),
            (None, None) => {
                let stdin = io::stdin();
                let mut input = stdin.lock();
                let mut output = io::stdout();
                prompt::prompt_source(&mut input, &mut output)
            }
        }
    }

    fn apply(&self, cfg: &mut WhotalksConfig) {
        if let Some(n) = self.min_lines {
            cfg.min_lines = n;
        }
    }
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            None => {
                let source = SourceArgs::default();
                run_chart(&source.resolve()?, &cfg, None)?;
            }
            Some(CliCommand::Chart { source, output }) => {
                source.apply(&mut cfg);
                run_chart(&source.resolve()?, &cfg, output.as_deref())?;
            }
            Some(CliCommand::Tally { source, json }) => {
                source.apply(&mut cfg);
                run_tally(&source.resolve()?, &cfg, json)?;
            }
            Some(CliCommand::Slug { title }) => run_slug(&title.join(" "), &cfg),
            Some(CliCommand::Completions { shell }) => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
