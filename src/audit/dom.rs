// src/audit/dom.rs
//
// Document query capability for the checks. `HtmlDom` is the real one (a parsed
// snapshot via `scraper`); tests plug in canned answers instead.

use scraper::{Html, Selector};

/// Owned snapshot of one matched element: tag name + attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Node {
    tag: String,
    attrs: Vec<(String, String)>,
}

impl Node {
    pub fn new(tag: &str) -> Self {
        Self { tag: tag.to_ascii_lowercase(), attrs: Vec::new() }
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push((name.to_ascii_lowercase(), s!(value)));
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attribute value; `Some("")` for a present-but-empty attribute.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Present and not just whitespace.
    pub fn has_value(&self, name: &str) -> bool {
        self.attr(name).is_some_and(|v| !v.trim().is_empty())
    }
}

pub trait Dom {
    /// All elements matching a CSS selector, document order, each at most once.
    fn select(&self, selector: &str) -> Vec<Node>;

    fn count(&self, selector: &str) -> usize {
        self.select(selector).len()
    }
}

/// Parsed HTML document.
pub struct HtmlDom {
    html: Html,
}

impl HtmlDom {
    pub fn parse(text: &str) -> Self {
        Self { html: Html::parse_document(text) }
    }
}

impl Dom for HtmlDom {
    fn select(&self, selector: &str) -> Vec<Node> {
        let sel = match Selector::parse(selector) {
            Ok(sel) => sel,
            Err(e) => {
                loge!("Audit: Bad selector {selector:?}: {e:?}");
                return Vec::new();
            }
        };

        self.html
            .select(&sel)
            .map(|el| {
                let v = el.value();
                Node {
                    tag: s!(v.name()),
                    attrs: v.attrs().map(|(k, val)| (s!(k), s!(val))).collect(),
                }
            })
            .collect()
    }

    fn count(&self, selector: &str) -> usize {
        match Selector::parse(selector) {
            Ok(sel) => self.html.select(&sel).count(),
            Err(e) => {
                loge!("Audit: Bad selector {selector:?}: {e:?}");
                0
            }
        }
    }
}
