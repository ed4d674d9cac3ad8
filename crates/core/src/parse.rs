//! HTML parsing and DOM navigation.
//!
//! This module provides the [`Document`] and [`Element`] types that the
//! content locator works against. They wrap `scraper` so the rest of the crate
//! depends on tag names, attributes, ancestry and text, not on the parser.
//!
//! # Example
//!
//! ```rust
//! use newsnex_core::parse::Document;
//!
//! let html = r#"
//!     <html>
//!         <body>
//!             <h1>Title</h1>
//!             <p class="lede">Paragraph</p>
//!         </body>
//!     </html>
//! "#;
//!
//! let doc = Document::parse(html);
//! let paragraphs = doc.select("p.lede").unwrap();
//! assert_eq!(paragraphs[0].text(), "Paragraph");
//! ```

use scraper::{ElementRef, Html, Selector};

use crate::preprocess::{PreprocessConfig, preprocess_html};
use crate::{NewsnexError, Result};

/// Represents a parsed HTML document.
///
/// Parsing never fails: malformed markup is repaired by the HTML5 parser, and
/// input that is not HTML at all simply produces a document with no content.
///
/// # Example
///
/// ```rust
/// use newsnex_core::parse::Document;
///
/// let html = "<html><head><title>Test</title></head><body><p>Hello</p></body></html>";
/// let doc = Document::parse(html);
/// assert_eq!(doc.title(), Some("Test".to_string()));
/// ```
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string without preprocessing.
    pub fn parse(html: &str) -> Self {
        Self { html: Html::parse_document(html) }
    }

    /// Parses HTML after stripping non-content tags and hidden elements.
    ///
    /// This is what the [`Profiler`](crate::Profiler) uses on fetched pages.
    pub fn parse_with_preprocessing(html: &str, config: &PreprocessConfig) -> Self {
        let cleaned = preprocess_html(html, config);
        Self::parse(&cleaned)
    }

    /// Gets the raw `scraper::Html` representation.
    pub fn html(&self) -> &Html {
        &self.html
    }

    /// Gets the root `<html>` element.
    pub fn root_element(&self) -> Element<'_> {
        Element { element: self.html.root_element() }
    }

    /// Selects elements using a CSS selector string.
    ///
    /// # Errors
    ///
    /// Returns [`NewsnexError::InvalidSelector`] if the selector is invalid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use newsnex_core::parse::Document;
    ///
    /// let html = r#"<p class="content">First</p><p class="content">Second</p>"#;
    /// let doc = Document::parse(html);
    /// let elements = doc.select("p.content").unwrap();
    /// assert_eq!(elements.len(), 2);
    /// ```
    pub fn select(&self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = parse_selector(selector)?;
        Ok(self.select_with(&sel))
    }

    /// Selects elements using an already compiled selector.
    pub fn select_with(&self, selector: &Selector) -> Vec<Element<'_>> {
        self.html.select(selector).map(|element| Element { element }).collect()
    }

    /// Gets the trimmed text of the `<title>` element, if present and non-empty.
    pub fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        self.html
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|title| !title.is_empty())
    }

    /// Gets all text content from the document, scripts and styles included.
    pub fn text_content(&self) -> String {
        self.html.root_element().text().collect()
    }
}

/// Compiles a CSS selector, mapping failures to [`NewsnexError::InvalidSelector`].
pub fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| NewsnexError::InvalidSelector(format!("{selector}: {e}")))
}

/// A wrapper around scraper's `ElementRef`.
///
/// # Example
///
/// ```rust
/// use newsnex_core::parse::Document;
///
/// let html = r#"<div id="story" class="body wide" role="main"><p>Text</p></div>"#;
/// let doc = Document::parse(html);
/// let div = &doc.select("div").unwrap()[0];
///
/// assert_eq!(div.attr("id"), Some("story"));
/// assert_eq!(div.classes(), vec!["body", "wide"]);
/// assert_eq!(div.tag_name(), "div");
/// ```
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Gets the concatenation of all text nodes within this element.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Gets the text of this element, leaving out every child element that
    /// `skip` rejects along with its subtree. Skipped elements and `<br>`
    /// leave a single space behind.
    pub fn text_without(&self, skip: impl Fn(&Element<'a>) -> bool) -> String {
        let mut out = String::new();
        push_text(self.element, &skip, &mut out);
        out
    }

    /// Gets the value of an attribute.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// Gets the lowercase tag name (e.g. "div", "p").
    pub fn tag_name(&self) -> String {
        self.element.value().name().to_lowercase()
    }

    /// Gets the individual class names of this element.
    pub fn classes(&self) -> Vec<&'a str> {
        self.element.value().classes().collect()
    }

    /// Iterates over the ancestor elements, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = Element<'a>> + use<'a> {
        self.element.ancestors().filter_map(ElementRef::wrap).map(|element| Element { element })
    }

    /// Selects descendant elements using a CSS selector string.
    ///
    /// # Errors
    ///
    /// Returns [`NewsnexError::InvalidSelector`] if the selector is invalid.
    pub fn select(&self, selector: &str) -> Result<Vec<Element<'a>>> {
        let sel = parse_selector(selector)?;
        Ok(self.select_with(&sel))
    }

    /// Selects descendant elements using an already compiled selector.
    pub fn select_with(&self, selector: &Selector) -> Vec<Element<'a>> {
        self.element.select(selector).map(|element| Element { element }).collect()
    }

    /// The underlying scraper node, for identity comparisons.
    pub(crate) fn node(&self) -> ElementRef<'a> {
        self.element
    }
}

fn push_text<'a>(element: ElementRef<'a>, skip: &impl Fn(&Element<'a>) -> bool, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child) = ElementRef::wrap(child) {
            let wrapped = Element { element: child };
            if wrapped.tag_name() == "br" || skip(&wrapped) {
                out.push(' ');
            } else {
                push_text(child, skip, out);
            }
        }
    }
}
