//! End-to-end profiling API.
//!
//! [`Profiler`] ties the pipeline together: preprocess the raw HTML, parse it,
//! locate the article body, run the extraction rules, deduplicate, and drop
//! anything under the confidence threshold.
//!
//! # Example
//!
//! ```rust
//! use newsnex_core::Profiler;
//!
//! let html = r#"
//!     <html><body>
//!         <nav><p>Home Page</p></nav>
//!         <article>
//!             <p>Jane Doe, CEO of Acme Corp, said the deal was final.</p>
//!             <p>Tom Brown of Globex declined to comment.</p>
//!         </article>
//!     </body></html>
//! "#;
//!
//! let extraction = Profiler::new().profile_html(html, None);
//! let names: Vec<&str> = extraction.profiles.iter().map(|p| p.name.as_str()).collect();
//!
//! assert_eq!(names, vec!["Jane Doe", "Acme Corp", "Tom Brown"]);
//! assert_eq!(extraction.content_selector.as_deref(), Some("article"));
//! ```

use serde::Serialize;
use tracing::debug;

use crate::Result;
use crate::content::{ContentLocator, LocatedContent, LocatorConfig};
use crate::dedup::{DedupPolicy, deduplicate_with_policy};
use crate::extract::{ExtractorConfig, ProfileExtractor};
#[cfg(feature = "fetch")]
use crate::fetch::fetch_url;
use crate::fetch::FetchConfig;
use crate::parse::Document;
use crate::preprocess::PreprocessConfig;
use crate::profile::Profile;

/// Configuration for a [`Profiler`].
///
/// # Example
///
/// ```rust
/// use newsnex_core::{DedupPolicy, ProfilerConfig};
///
/// let config = ProfilerConfig::builder()
///     .dedup(DedupPolicy::HighestConfidence)
///     .min_confidence(85)
///     .timeout(5)
///     .build();
///
/// assert_eq!(config.min_confidence, 85);
/// assert_eq!(config.fetch.timeout, 5);
/// ```
#[derive(Debug, Clone)]
pub struct ProfilerConfig {
    /// Content region selection.
    pub locator: LocatorConfig,
    /// Rule table and deny-list.
    pub extractor: ExtractorConfig,
    /// Raw HTML cleanup before parsing; `None` parses the HTML as is.
    pub preprocess: Option<PreprocessConfig>,
    /// Which duplicate survives (default: first seen).
    pub dedup: DedupPolicy,
    /// Profiles below this confidence are dropped (default: 0).
    pub min_confidence: u8,
    /// HTTP settings for [`Profiler::fetch_and_profile`].
    pub fetch: FetchConfig,
}

impl Default for ProfilerConfig {
    fn default() -> Self {
        Self {
            locator: LocatorConfig::default(),
            extractor: ExtractorConfig::default(),
            preprocess: Some(PreprocessConfig::default()),
            dedup: DedupPolicy::default(),
            min_confidence: 0,
            fetch: FetchConfig::default(),
        }
    }
}

impl ProfilerConfig {
    pub fn builder() -> ProfilerConfigBuilder {
        ProfilerConfigBuilder::new()
    }
}

/// Fluent builder for [`ProfilerConfig`].
#[derive(Debug, Clone)]
pub struct ProfilerConfigBuilder {
    config: ProfilerConfig,
}

impl ProfilerConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: ProfilerConfig::default() }
    }

    pub fn locator(mut self, value: LocatorConfig) -> Self {
        self.config.locator = value;
        self
    }

    pub fn extractor(mut self, value: ExtractorConfig) -> Self {
        self.config.extractor = value;
        self
    }

    /// Sets the preprocessing configuration.
    pub fn preprocess(mut self, value: PreprocessConfig) -> Self {
        self.config.preprocess = Some(value);
        self
    }

    /// Disables raw HTML preprocessing.
    pub fn without_preprocessing(mut self) -> Self {
        self.config.preprocess = None;
        self
    }

    pub fn dedup(mut self, value: DedupPolicy) -> Self {
        self.config.dedup = value;
        self
    }

    pub fn min_confidence(mut self, value: u8) -> Self {
        self.config.min_confidence = value;
        self
    }

    pub fn fetch(mut self, value: FetchConfig) -> Self {
        self.config.fetch = value;
        self
    }

    /// Sets the request timeout in seconds.
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.config.fetch.timeout = seconds;
        self
    }

    pub fn user_agent(mut self, value: impl Into<String>) -> Self {
        self.config.fetch.user_agent = value.into();
        self
    }

    pub fn build(self) -> ProfilerConfig {
        self.config
    }
}

impl Default for ProfilerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// What one profiling run found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extraction {
    /// URL the HTML came from, if known.
    pub source_url: Option<String>,
    /// Document `<title>`, if present.
    pub title: Option<String>,
    /// Selector that located the article body; `None` for the whole-document fallback.
    pub content_selector: Option<String>,
    /// Located article text.
    #[serde(skip)]
    pub content: String,
    /// Length of the located text in characters.
    pub content_length: usize,
    /// Candidates produced before deduplication.
    pub candidate_count: usize,
    pub profiles: Vec<Profile>,
}

/// Main entry point for profiling articles.
#[derive(Debug, Clone)]
pub struct Profiler {
    locator: ContentLocator,
    extractor: ProfileExtractor,
    preprocess: Option<PreprocessConfig>,
    dedup: DedupPolicy,
    min_confidence: u8,
    #[cfg_attr(not(feature = "fetch"), allow(dead_code))]
    fetch: FetchConfig,
}

impl Profiler {
    /// Creates a profiler with the built-in configuration.
    pub fn new() -> Self {
        Self {
            locator: ContentLocator::default(),
            extractor: ProfileExtractor::default(),
            preprocess: Some(PreprocessConfig::default()),
            dedup: DedupPolicy::default(),
            min_confidence: 0,
            fetch: FetchConfig::default(),
        }
    }

    /// Creates a profiler from a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`NewsnexError::InvalidSelector`](crate::NewsnexError::InvalidSelector),
    /// [`NewsnexError::InvalidPattern`](crate::NewsnexError::InvalidPattern) or
    /// [`NewsnexError::InvalidRule`](crate::NewsnexError::InvalidRule) for an
    /// unusable locator or rule table.
    pub fn with_config(config: ProfilerConfig) -> Result<Self> {
        Ok(Self {
            locator: ContentLocator::new(&config.locator)?,
            extractor: ProfileExtractor::new(config.extractor)?,
            preprocess: config.preprocess,
            dedup: config.dedup,
            min_confidence: config.min_confidence,
            fetch: config.fetch,
        })
    }

    /// Parses HTML, applying preprocessing when configured.
    pub fn parse(&self, html: &str) -> Document {
        match &self.preprocess {
            Some(config) => Document::parse_with_preprocessing(html, config),
            None => Document::parse(html),
        }
    }

    /// Locates the article text without extracting profiles.
    pub fn locate_html(&self, html: &str) -> LocatedContent {
        self.locator.locate(&self.parse(html))
    }

    /// Runs the whole pipeline over an HTML page.
    ///
    /// Never fails: a page without article text or without names yields an
    /// empty profile list.
    pub fn profile_html(&self, html: &str, source_url: Option<&str>) -> Extraction {
        let doc = self.parse(html);
        let located = self.locator.locate(&doc);

        let candidates = self.extractor.extract(&located.text);
        let candidate_count = candidates.len();
        let profiles = self.finish(candidates);

        debug!(
            selector = located.selector.as_deref().unwrap_or("<document>"),
            candidates = candidate_count,
            profiles = profiles.len(),
            "profiled article"
        );

        Extraction {
            source_url: source_url.map(str::to_string),
            title: doc.title(),
            content_selector: located.selector,
            content_length: located.text.chars().count(),
            content: located.text,
            candidate_count,
            profiles,
        }
    }

    /// Runs extraction, deduplication and filtering over plain text.
    pub fn profile_text(&self, text: &str) -> Vec<Profile> {
        self.finish(self.extractor.extract(text))
    }

    /// Fetches a URL and profiles the returned page.
    ///
    /// # Errors
    ///
    /// Returns [`NewsnexError::InvalidUrl`](crate::NewsnexError::InvalidUrl),
    /// [`NewsnexError::Timeout`](crate::NewsnexError::Timeout) or
    /// [`NewsnexError::HttpError`](crate::NewsnexError::HttpError) when the page
    /// cannot be retrieved.
    #[cfg(feature = "fetch")]
    pub async fn fetch_and_profile(&self, url: &str) -> Result<Extraction> {
        let html = fetch_url(url, &self.fetch).await?;
        Ok(self.profile_html(&html, Some(url)))
    }

    fn finish(&self, candidates: Vec<Profile>) -> Vec<Profile> {
        let mut profiles = deduplicate_with_policy(candidates, self.dedup);
        profiles.retain(|p| p.confidence >= self.min_confidence);
        profiles
    }
}

impl Default for Profiler {
    fn default() -> Self {
        Self::new()
    }
}

/// Profiles an HTML page with the default configuration.
pub fn profile_html(html: &str) -> Extraction {
    Profiler::new().profile_html(html, None)
}

/// Fetches and profiles a URL with the default configuration.
///
/// # Example
///
/// ```no_run
/// use newsnex_core::fetch_and_profile;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let extraction = fetch_and_profile("https://example.com/news/story").await?;
///     for profile in extraction.profiles {
///         println!("{} ({}, {})", profile.name, profile.role, profile.company);
///     }
///     Ok(())
/// }
/// ```
#[cfg(feature = "fetch")]
pub async fn fetch_and_profile(url: &str) -> Result<Extraction> {
    Profiler::new().fetch_and_profile(url).await
}
