//! Single blocking GET for a script page.
//!
//! Uses the curl crate (libcurl) in the current thread. Redirects are
//! followed; any non-2xx final status is an error. Nothing is retried.

use crate::config::WhotalksConfig;
use crate::error::ScriptError;
use std::time::Duration;

/// Transfer settings for the page fetch.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        FetchOptions::from(&WhotalksConfig::default())
    }
}

impl From<&WhotalksConfig> for FetchOptions {
    fn from(cfg: &WhotalksConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
            user_agent: cfg.user_agent.clone(),
        }
    }
}

/// Fetches `url` and returns the body as text (invalid UTF-8 is replaced).
pub fn fetch_page(url: &str, opts: &FetchOptions) -> Result<String, ScriptError> {
    let network = |source: curl::Error| ScriptError::Network {
        url: url.to_string(),
        source,
    };

    let mut body: Vec<u8> = Vec::new();
    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(network)?;
    easy.follow_location(true).map_err(network)?;
    easy.max_redirections(10).map_err(network)?;
    easy.connect_timeout(opts.connect_timeout).map_err(network)?;
    easy.timeout(opts.timeout).map_err(network)?;
    easy.useragent(&opts.user_agent).map_err(network)?;

    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(network)?;
        transfer.perform().map_err(network)?;
    }

    let status = easy.response_code().map_err(network)?;
    if !(200..300).contains(&status) {
        return Err(ScriptError::Http {
            url: url.to_string(),
            status,
        });
    }

    tracing::debug!("fetched {} ({} bytes, HTTP {})", url, body.len(), status);
    Ok(String::from_utf8_lossy(&body).into_owned())
}
