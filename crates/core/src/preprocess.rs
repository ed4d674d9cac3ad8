use lol_html::{HtmlRewriter, Settings, element};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Tags whose content is never article text.
pub const STRIPPED_TAGS: &[&str] = &[
    "script", "style", "nav", "header", "footer", "aside", "noscript", "template", "iframe", "svg",
];

static HIDDEN_STYLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(display\s*:\s*none|visibility\s*:\s*hidden)").expect("hidden style pattern"));

/// Configuration for HTML preprocessing
#[derive(Debug, Clone)]
pub struct PreprocessConfig {
    /// Tags removed together with their content
    pub stripped_tags: Vec<String>,
    /// Whether to remove hidden elements (inline style, `hidden`, `aria-hidden`)
    pub remove_hidden: bool,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self { stripped_tags: STRIPPED_TAGS.iter().map(|t| t.to_string()).collect(), remove_hidden: true }
    }
}

/// Preprocess HTML by removing non-content and hidden elements.
///
/// Rewriter failures leave the input untouched; the locator re-checks tags on
/// the parsed tree anyway.
pub fn preprocess_html(html: &str, config: &PreprocessConfig) -> String {
    let mut processed = html.to_string();

    if !config.stripped_tags.is_empty() {
        processed = remove_stripped_tags(&processed, &config.stripped_tags);
    }

    if config.remove_hidden {
        processed = remove_hidden_elements(&processed);
    }

    processed
}

/// Remove every element whose tag is listed, content included
fn remove_stripped_tags(html: &str, tags: &[String]) -> String {
    let handlers = tags
        .iter()
        .filter(|tag| {
            let valid = tag.parse::<lol_html::Selector>().is_ok();
            if !valid {
                debug!(tag = tag.as_str(), "ignoring unparseable strip tag");
            }
            valid
        })
        .map(|tag| {
            element!(tag.as_str(), |el| {
                el.remove();
                Ok(())
            })
        })
        .collect();

    rewrite(html, handlers)
}

/// Remove elements hidden via inline style, the `hidden` attribute or `aria-hidden`
fn remove_hidden_elements(html: &str) -> String {
    let handlers = vec![element!("*", |el| {
        let hidden_style = el.get_attribute("style").is_some_and(|style| HIDDEN_STYLE.is_match(&style));
        let aria_hidden = el.get_attribute("aria-hidden").is_some_and(|v| v.eq_ignore_ascii_case("true"));

        if hidden_style || aria_hidden || el.has_attribute("hidden") {
            el.remove();
        }
        Ok(())
    })];

    rewrite(html, handlers)
}

fn rewrite<'h>(
    html: &str, element_content_handlers: Vec<(std::borrow::Cow<'h, lol_html::Selector>, lol_html::ElementContentHandlers<'h>)>,
) -> String {
    let mut output = String::new();
    let mut rewriter = HtmlRewriter::new(
        Settings { element_content_handlers, ..Default::default() },
        |c: &[u8]| {
            output.push_str(&String::from_utf8_lossy(c));
        },
    );

    if let Err(e) = rewriter.write(html.as_bytes()) {
        debug!(error = %e, "html rewrite failed, keeping original markup");
        return html.to_string();
    }

    if let Err(e) = rewriter.end() {
        debug!(error = %e, "html rewrite failed, keeping original markup");
        return html.to_string();
    }

    output
}
