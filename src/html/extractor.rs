use scraper::{Html, Selector};

/// Pulls visible text and tag-weighted substrings out of one HTML document.
///
/// Backed by `scraper` (html5ever under the hood), which parses malformed
/// markup leniently instead of failing.
pub struct HtmlExtractor {
    document: Html,
}

impl HtmlExtractor {
    pub fn parse(html: &str) -> Self {
        HtmlExtractor {
            document: Html::parse_document(html),
        }
    }

    /// All visible text in the document, in document order.
    pub fn extract_text(&self) -> String {
        self.document
            .root_element()
            .text()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The joined text content of every occurrence of `tag_name`.
    /// Unknown/absent tags simply yield an empty string.
    pub fn extract_tag(&self, tag_name: &str) -> String {
        let Ok(selector) = Selector::parse(tag_name) else {
            return String::new();
        };

        self.document
            .select(&selector)
            .map(|element| element.text().collect::<Vec<_>>().join(" "))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
