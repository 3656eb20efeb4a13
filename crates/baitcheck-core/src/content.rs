//! Page-content extraction: the text of the first `<h1>` and the first
//! `<article>` element, each empty when absent.

use scraper::{Html, Selector};

/// Text extracted from a page, headline and article body kept separate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContent {
    pub headline: String,
    pub article: String,
}

impl PageContent {
    /// Headline and article joined with a single space, in that order.
    #[must_use]
    pub fn combined(&self) -> String {
        format!("{} {}", self.headline, self.article)
    }

    /// True when neither element contributed any non-whitespace text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.headline.trim().is_empty() && self.article.trim().is_empty()
    }
}

/// Extract headline and article text from raw page HTML.
pub fn extract_content(html: &str) -> PageContent {
    let document = Html::parse_document(html);
    PageContent {
        headline: first_element_text(&document, "h1"),
        article: first_element_text(&document, "article"),
    }
}

/// Whitespace-normalized text of the first element matching `css`,
/// or the empty string when there is no match.
fn first_element_text(document: &Html, css: &str) -> String {
    let Ok(selector) = Selector::parse(css) else {
        return String::new();
    };
    document
        .select(&selector)
        .next()
        .map(|el| {
            el.text()
                .flat_map(str::split_whitespace)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default()
}
