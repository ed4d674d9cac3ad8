//! Person profile extraction from news articles.
//!
//! The pipeline is: strip non-content markup ([`preprocess_html`]), parse
//! ([`Document`]), find the article body ([`ContentLocator`]), run the rule
//! table ([`ProfileExtractor`]), and collapse duplicates ([`deduplicate`]).
//! [`Profiler`] runs all of it; the stages are public for callers that want
//! only part of it.
//!
//! # Example
//!
//! ```rust
//! use newsnex_core::{deduplicate, extract_profiles};
//!
//! let profiles = deduplicate(extract_profiles(
//!     "Jane Doe, CEO of Acme Corp, said the deal was final.",
//! ));
//!
//! assert_eq!(profiles[0].name, "Jane Doe");
//! assert_eq!(profiles[0].role, "CEO");
//! assert_eq!(profiles[0].company, "Acme Corp");
//! assert_eq!(profiles[0].confidence, 95);
//! ```

pub mod content;
pub mod dedup;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod formatters;
pub mod normalize;
pub mod parse;
pub mod preprocess;
pub mod profile;
pub mod profiler;

pub use content::{ContentLocator, ContentSelector, LocatedContent, LocatorConfig, SelectorKind, locate_content};
pub use dedup::{DedupPolicy, deduplicate, deduplicate_with_policy};
pub use error::{NewsnexError, Result};
pub use extract::{ExtractorConfig, Field, PatternRule, ProfileExtractor, RuleKind, default_rules, extract_profiles};
pub use fetch::{FetchConfig, fetch_file, fetch_stdin, validate_url};
#[cfg(feature = "fetch")]
pub use fetch::fetch_url;
pub use formatters::{CsvConfig, CsvFormatter, JsonConfig, JsonFormatter, TextConfig, TextFormatter};
pub use formatters::{convert_to_csv, convert_to_json, convert_to_text, extraction_to_json};
pub use normalize::normalize_text;
pub use parse::{Document, Element};
pub use preprocess::{PreprocessConfig, preprocess_html};
pub use profile::{ConfidenceTier, Profile};
#[cfg(feature = "fetch")]
pub use profiler::fetch_and_profile;
pub use profiler::{Extraction, Profiler, ProfilerConfig, ProfilerConfigBuilder, profile_html};
