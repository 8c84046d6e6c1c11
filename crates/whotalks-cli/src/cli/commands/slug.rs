//! `whotalks slug <title>` – show where a title would be fetched from.

use whotalks_core::config::WhotalksConfig;
use whotalks_core::title::{normalize_title, script_url};

pub fn run_slug(title: &str, cfg: &WhotalksConfig) {
    let slug = normalize_title(title);
    println!("{}", slug);
    println!("{}", script_url(&cfg.archive_base_url, &slug));
}
