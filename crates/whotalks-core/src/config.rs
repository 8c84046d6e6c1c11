use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::tally::DEFAULT_MIN_LINES;

/// Chart output parameters (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Count at which bar colour saturates at the top of the colormap.
    pub color_cap: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            color_cap: 600,
        }
    }
}

/// Global configuration loaded from `~/.config/whotalks/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhotalksConfig {
    /// Directory URL that script slugs are appended to.
    pub archive_base_url: String,
    /// Characters with fewer cues than this are left out of the result.
    pub min_lines: u32,
    /// Connect timeout for the page fetch, in seconds.
    pub connect_timeout_secs: u64,
    /// Total timeout for the page fetch, in seconds.
    pub timeout_secs: u64,
    /// User-Agent header sent with the fetch.
    pub user_agent: String,
    /// Optional chart settings; if missing, built-in defaults are used.
    #[serde(default)]
    pub chart: Option<ChartConfig>,
}

impl Default for WhotalksConfig {
    fn default() -> Self {
        Self {
            archive_base_url: "https://www.imsdb.com/scripts".to_string(),
            min_lines: DEFAULT_MIN_LINES,
            connect_timeout_secs: 15,
            timeout_secs: 30,
            user_agent: concat!("whotalks/", env!("CARGO_PKG_VERSION")).to_string(),
            chart: None,
        }
    }
}

impl WhotalksConfig {
    pub fn chart(&self) -> ChartConfig {
        self.chart.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("whotalks")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<WhotalksConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

/// Like [`load_or_init`] with an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<WhotalksConfig> {
    if !path.exists() {
        let default_cfg = WhotalksConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let cfg: WhotalksConfig =
        toml::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;
    Ok(cfg)
}
