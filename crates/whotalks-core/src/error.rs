//! Failure kinds for a single script run.

use thiserror::Error;

/// Error returned by the fetch/parse/render pipeline.
///
/// Every variant ends the run without output; nothing is retried.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// The page has no bolded text inside a `<pre>` block (wrong slug, missing
    /// script, or an unexpected page layout).
    #[error("script not found at {url}")]
    NotFound { url: String },

    /// Transport failure reported by curl (DNS, connect, timeout, ...).
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: curl::Error,
    },

    /// Server answered with a non-2xx status.
    #[error("GET {url} returned HTTP {status}")]
    Http { url: String, status: u32 },

    /// URL-mode input could not be parsed.
    #[error("invalid script URL {input:?}: {source}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },

    /// Title mode with nothing but whitespace.
    #[error("movie title is empty")]
    EmptyTitle,

    /// Chart backend failure.
    #[error("chart rendering failed: {0}")]
    Render(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ScriptError {
    /// True for the "movie not found" family: missing body or a 404 page.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ScriptError::NotFound { .. } | ScriptError::Http { status: 404, .. }
        )
    }
}
