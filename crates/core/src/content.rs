//! Article body location.
//!
//! The locator walks an ordered list of structural selectors (semantic
//! `<article>` first, then well-known content containers, then generic "main"
//! regions) and takes the first one that yields text. Only headings and
//! paragraphs are collected, and any element sitting in boilerplate (by tag,
//! class token, id, or ARIA role) is dropped no matter which selector won.
//!
//! # Example
//!
//! ```rust
//! use newsnex_core::{Document, locate_content};
//!
//! let html = r#"
//!     <body>
//!         <nav><p>Home</p></nav>
//!         <article>
//!             <h1>Merger closes</h1>
//!             <p>Jane Doe, CEO of Acme Corp, said the deal was final.</p>
//!             <div class="advertisement"><p>Buy now</p></div>
//!         </article>
//!     </body>
//! "#;
//!
//! let doc = Document::parse(html);
//! assert_eq!(
//!     locate_content(&doc),
//!     "Merger closes Jane Doe, CEO of Acme Corp, said the deal was final."
//! );
//! ```

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use scraper::Selector;
use tracing::{debug, trace};

use crate::Result;
use crate::parse::{Document, Element, parse_selector};
use crate::preprocess::STRIPPED_TAGS;

/// Elements whose text is collected from a content region.
pub const TEXT_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6", "p"];

/// Class/id tokens that mark boilerplate. Matched against whole hyphen or
/// underscore separated segments, so `ad` hits `ad-slot` but not `header`.
pub const BOILERPLATE_MARKERS: &[&str] = &[
    "nav",
    "navbar",
    "navigation",
    "menu",
    "sidebar",
    "ad",
    "ads",
    "advert",
    "advertisement",
    "sponsor",
    "sponsored",
    "promo",
    "footer",
    "header",
    "masthead",
    "share",
    "sharing",
    "social",
    "related",
    "recommended",
    "comment",
    "comments",
    "newsletter",
    "subscribe",
    "subscription",
    "signup",
    "cookie",
    "cookies",
    "consent",
    "gdpr",
    "lang",
    "language",
    "breadcrumb",
    "breadcrumbs",
    "popup",
    "modal",
];

/// ARIA roles that never hold article text.
pub const BOILERPLATE_ROLES: &[&str] = &[
    "navigation",
    "banner",
    "contentinfo",
    "complementary",
    "menu",
    "menubar",
    "search",
    "dialog",
    "alertdialog",
];

static DEFAULT_LOCATOR: LazyLock<ContentLocator> = LazyLock::new(|| {
    ContentLocator::new(&LocatorConfig::default()).expect("default locator configuration is valid")
});

/// How strong a structural signal a selector is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorKind {
    /// Semantic markup for an article body.
    Semantic,
    /// Conventional class/id names for content containers.
    Container,
    /// Generic "main content" regions.
    Main,
}

/// One entry of the ordered selector priority list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSelector {
    pub kind: SelectorKind,
    pub css: String,
}

impl ContentSelector {
    pub fn new(kind: SelectorKind, css: impl Into<String>) -> Self {
        Self { kind, css: css.into() }
    }
}

fn default_selectors() -> Vec<ContentSelector> {
    use SelectorKind::*;

    [
        (Semantic, "article"),
        (Semantic, r#"[itemprop="articleBody"]"#),
        (Semantic, r#"[role="article"]"#),
        (Container, ".article-body"),
        (Container, ".article-content"),
        (Container, ".article__body"),
        (Container, ".story-body"),
        (Container, ".story-content"),
        (Container, ".post-content"),
        (Container, ".entry-content"),
        (Container, "#article-body"),
        (Container, "#story"),
        (Container, "#content"),
        (Container, ".content"),
        (Main, "main"),
        (Main, r#"[role="main"]"#),
        (Main, "#main"),
        (Main, "#main-content"),
        (Main, ".main-content"),
    ]
    .into_iter()
    .map(|(kind, css)| ContentSelector::new(kind, css))
    .collect()
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Configuration for content location
#[derive(Debug, Clone)]
pub struct LocatorConfig {
    /// Selectors tried in order; the first that yields text wins
    pub selectors: Vec<ContentSelector>,
    /// Tags whose text is collected inside a region
    pub text_tags: Vec<String>,
    /// Tags that exclude themselves and everything inside them
    pub stripped_tags: Vec<String>,
    /// Class/id segments marking boilerplate
    pub boilerplate_markers: Vec<String>,
    /// ARIA roles marking boilerplate
    pub boilerplate_roles: Vec<String>,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            selectors: default_selectors(),
            text_tags: owned(TEXT_TAGS),
            stripped_tags: owned(STRIPPED_TAGS),
            boilerplate_markers: owned(BOILERPLATE_MARKERS),
            boilerplate_roles: owned(BOILERPLATE_ROLES),
        }
    }
}

/// The result of content location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedContent {
    /// Text of the surviving elements joined by single spaces
    pub text: String,
    /// CSS of the winning selector, `None` for the whole-document fallback
    pub selector: Option<String>,
    /// Number of elements that contributed text
    pub element_count: usize,
}

impl LocatedContent {
    fn new(texts: Vec<String>, selector: Option<String>) -> Self {
        Self { element_count: texts.len(), text: texts.join(" "), selector }
    }
}

/// A compiled [`LocatorConfig`].
#[derive(Debug, Clone)]
pub struct ContentLocator {
    selectors: Vec<(String, Selector)>,
    text_selector: Selector,
    stripped_tags: HashSet<String>,
    markers: Option<Regex>,
    roles: HashSet<String>,
}

impl ContentLocator {
    /// Compiles a locator configuration.
    ///
    /// # Errors
    ///
    /// Returns [`NewsnexError::InvalidSelector`](crate::NewsnexError::InvalidSelector)
    /// if a selector or text tag is not valid CSS.
    pub fn new(config: &LocatorConfig) -> Result<Self> {
        let selectors = config
            .selectors
            .iter()
            .map(|s| -> Result<(String, Selector)> { Ok((s.css.clone(), parse_selector(&s.css)?)) })
            .collect::<Result<Vec<_>>>()?;

        let text_selector = parse_selector(&config.text_tags.join(", "))?;

        let markers = if config.boilerplate_markers.is_empty() {
            None
        } else {
            let alternatives =
                config.boilerplate_markers.iter().map(|m| regex::escape(m)).collect::<Vec<_>>().join("|");
            Some(Regex::new(&format!(r"(?i)(?:^|[-_])(?:{alternatives})(?:$|[-_])"))?)
        };

        Ok(Self {
            selectors,
            text_selector,
            stripped_tags: config.stripped_tags.iter().map(|t| t.to_ascii_lowercase()).collect(),
            markers,
            roles: config.boilerplate_roles.iter().map(|r| r.to_ascii_lowercase()).collect(),
        })
    }

    /// Locates the article text of a document.
    ///
    /// Never fails: a document without usable text yields an empty string.
    pub fn locate(&self, doc: &Document) -> LocatedContent {
        for (css, selector) in &self.selectors {
            let regions = doc.select_with(selector);
            if regions.is_empty() {
                continue;
            }

            let texts = self.collect_text(&regions, true);
            if texts.is_empty() {
                debug!(selector = css.as_str(), regions = regions.len(), "selector matched only boilerplate");
                continue;
            }

            debug!(selector = css.as_str(), elements = texts.len(), "content region located");
            return LocatedContent::new(texts, Some(css.clone()));
        }

        let texts = self.collect_text(&[doc.root_element()], false);
        debug!(elements = texts.len(), "no content selector matched, using whole document");
        LocatedContent::new(texts, None)
    }

    /// Whether an element is or sits inside boilerplate anywhere in the page.
    ///
    /// Stripped tags are honoured all the way up; class/id/role markers are not
    /// checked on `<body>` or `<html>` since sites decorate those with layout
    /// classes such as `has-sidebar`.
    pub fn is_excluded(&self, element: &Element<'_>) -> bool {
        self.is_excluded_within(element, None)
    }

    /// Like [`is_excluded`](Self::is_excluded), but class/id/role markers are
    /// only checked up to and including `region`. Wrappers above the region
    /// are page layout and say nothing about the article.
    fn is_excluded_within(&self, element: &Element<'_>, region: Option<&Element<'_>>) -> bool {
        let mut in_region = true;
        std::iter::once(element.clone()).chain(element.ancestors()).any(|node| {
            let tag = node.tag_name();
            if self.stripped_tags.contains(&tag) {
                return true;
            }
            let marked = in_region && !matches!(tag.as_str(), "body" | "html") && self.is_boilerplate(&node);
            if region.is_some_and(|r| r.node().id() == node.node().id()) {
                in_region = false;
            }
            marked
        })
    }

    fn is_skipped_child(&self, element: &Element<'_>) -> bool {
        self.stripped_tags.contains(&element.tag_name()) || self.is_boilerplate(element)
    }

    fn is_boilerplate(&self, element: &Element<'_>) -> bool {
        if let Some(markers) = &self.markers {
            if element.classes().iter().any(|class| markers.is_match(class)) {
                return true;
            }
            if element.attr("id").is_some_and(|id| markers.is_match(id)) {
                return true;
            }
        }

        element
            .attr("role")
            .is_some_and(|role| role.split_whitespace().any(|r| self.roles.contains(&r.to_ascii_lowercase())))
    }

    fn collect_text(&self, regions: &[Element<'_>], bounded: bool) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut texts = Vec::new();

        for region in regions {
            let boundary = bounded.then_some(region);
            let own = Some(region.clone()).filter(|r| self.text_selector.matches(&r.node()));

            for element in own.into_iter().chain(region.select_with(&self.text_selector)) {
                if !seen.insert(element.node().id()) {
                    continue;
                }
                if self.is_excluded_within(&element, boundary) {
                    trace!(tag = %element.tag_name(), "skipping boilerplate element");
                    continue;
                }

                let text = element.text_without(|child| self.is_skipped_child(child));
                let text = text.trim();
                if !text.is_empty() {
                    texts.push(text.to_string());
                }
            }
        }

        texts
    }
}

impl Default for ContentLocator {
    fn default() -> Self {
        DEFAULT_LOCATOR.clone()
    }
}

/// Returns the text most likely to be the article body, or `""`.
pub fn locate_content(doc: &Document) -> String {
    DEFAULT_LOCATOR.locate(doc).text
}
