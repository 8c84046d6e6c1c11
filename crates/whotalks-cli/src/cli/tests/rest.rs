//! Tests for slug and completions subcommands, and flag application.

use super::parse;
use crate::cli::{Cli, CliCommand, SourceArgs};
use clap::Parser;
use whotalks_core::config::WhotalksConfig;

#[test]
fn cli_parse_slug_words() {
    match parse(&["whotalks", "slug", "the", "dark", "knight"]) {
        Some(CliCommand::Slug { title }) => {
            assert_eq!(title, ["the", "dark", "knight"]);
        }
        _ => panic!("expected Slug"),
    }
}

#[test]
fn cli_slug_requires_title() {
    assert!(Cli::try_parse_from(["whotalks", "slug"]).is_err());
}

#[test]
fn cli_parse_completions() {
    match parse(&["whotalks", "completions", "bash"]) {
        Some(CliCommand::Completions { shell }) => {
            assert_eq!(shell, clap_complete::Shell::Bash);
        }
        _ => panic!("expected Completions"),
    }
}

#[test]
fn min_lines_flag_overrides_config() {
    let mut cfg = WhotalksConfig::default();
    let args = SourceArgs {
        min_lines: Some(2),
        ..SourceArgs::default()
    };
    args.apply(&mut cfg);
    assert_eq!(cfg.min_lines, 2);

    SourceArgs::default().apply(&mut cfg);
    assert_eq!(cfg.min_lines, 2);
}

#[test]
fn flags_resolve_without_prompting() {
    let args = SourceArgs {
        title: Some("up".into()),
        ..SourceArgs::default()
    };
    assert_eq!(
        args.resolve().unwrap(),
        whotalks_core::ScriptSource::Title("up".into())
    );
    let args = SourceArgs {
        url: Some("https://x/".into()),
        ..SourceArgs::default()
    };
    assert_eq!(
        args.resolve().unwrap(),
        whotalks_core::ScriptSource::Url("https://x/".into())
    );
}
