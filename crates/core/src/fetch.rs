//! Article retrieval from URLs, files, and stdin.
//!
//! Only [`fetch_url`] needs the network (and the `fetch` feature); the other
//! sources exist so the CLI can profile saved pages and piped HTML.

use std::fs;
use std::path::PathBuf;
#[cfg(feature = "fetch")]
use std::time::Duration;

#[cfg(feature = "fetch")]
use reqwest::Client;
#[cfg(feature = "fetch")]
use tracing::debug;
use url::Url;

use crate::{NewsnexError, Result};

/// Browser User-Agent sent by default; some news sites refuse unknown clients.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// HTTP client configuration for fetching articles.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// User-Agent header value.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout: 10, user_agent: DEFAULT_USER_AGENT.to_string() }
    }
}

/// Checks that `input` is an absolute http(s) URL with a host.
///
/// ```rust
/// use newsnex_core::validate_url;
///
/// assert!(validate_url("https://news.example.com/story").is_ok());
/// assert!(validate_url("news.example.com/story").is_err());
/// assert!(validate_url("ftp://news.example.com/story").is_err());
/// ```
pub fn validate_url(input: &str) -> Result<Url> {
    let url = Url::parse(input.trim()).map_err(|e| NewsnexError::InvalidUrl(format!("{input}: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(NewsnexError::InvalidUrl(format!("{input}: scheme must be http or https")));
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(NewsnexError::InvalidUrl(format!("{input}: missing host")));
    }

    Ok(url)
}

/// Fetches a page and returns its body as text.
///
/// Redirects are followed. Non-success statuses are reported as
/// [`NewsnexError::HttpError`]; an expired timeout as [`NewsnexError::Timeout`].
#[cfg(feature = "fetch")]
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = validate_url(url)?;

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(NewsnexError::HttpError)?;

    let map_err = |e: reqwest::Error| {
        if e.is_timeout() { NewsnexError::Timeout { timeout: config.timeout } } else { NewsnexError::HttpError(e) }
    };

    debug!(url = parsed_url.as_str(), timeout = config.timeout, "fetching article");

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8")
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(map_err)?
        .error_for_status()?;

    debug!(status = response.status().as_u16(), "response received");

    response.text().await.map_err(map_err)
}

/// Reads HTML from a local file.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(NewsnexError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(NewsnexError::from)
    }
}

/// Reads HTML from standard input until EOF.
pub fn fetch_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    Ok(buffer)
}
