use std::collections::HashMap;

use crate::analysis::analyzer::Analyzer;
use crate::core::types::{DocId, RawPosting};
use crate::html::extractor::HtmlExtractor;

/// Turns one HTML document into its raw per-term postings.
///
/// Term frequency is counted over the whole visible text. Importance starts
/// at `default_term_weight` and is then overwritten, tag by tag in the order
/// given by `tag_weights`, for every term occurring in that tag. A term under
/// more than one weighted tag gets whichever weight was scanned last.
pub struct PostingBuilder<'a> {
    analyzer: &'a Analyzer,
}

impl<'a> PostingBuilder<'a> {
    pub fn new(analyzer: &'a Analyzer) -> Self {
        PostingBuilder { analyzer }
    }

    pub fn build_postings(
        &self,
        doc_id: DocId,
        html: &str,
        tag_weights: &[(String, u32)],
        default_term_weight: u32,
    ) -> HashMap<String, RawPosting> {
        let extractor = HtmlExtractor::parse(html);

        let mut tf: HashMap<String, u32> = HashMap::new();
        for token in self.analyzer.analyze(&extractor.extract_text()) {
            *tf.entry(token.text).or_insert(0) += 1;
        }

        let mut importance: HashMap<String, u32> = HashMap::new();
        for (tag, weight) in tag_weights {
            let tag_text = extractor.extract_tag(tag);
            if tag_text.is_empty() {
                continue;
            }
            for token in self.analyzer.analyze(&tag_text) {
                importance.insert(token.text, *weight);
            }
        }

        tf.into_iter()
            .map(|(term, count)| {
                let weight = importance.get(&term).copied().unwrap_or(default_term_weight);
                (
                    term,
                    RawPosting {
                        doc_id,
                        tf: count,
                        importance: weight,
                    },
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_term_gets_title_weight_not_default() {
        let analyzer = Analyzer::standard();
        let builder = PostingBuilder::new(&analyzer);
        let tag_weights = vec![("title".to_string(), 10), ("h1".to_string(), 5)];
        let html = "<html><head><title>Computer</title></head><body>Computer science rocks</body></html>";

        let postings = builder.build_postings(DocId(0), html, &tag_weights, 1);

        let computer = postings.get("comput").unwrap();
        assert_eq!(computer.importance, 10);
        assert_eq!(computer.tf, 2);

        let science = postings.get("scienc").unwrap();
        assert_eq!(science.importance, 1);
    }

    #[test]
    fn last_tag_in_scan_order_wins() {
        let analyzer = Analyzer::standard();
        let builder = PostingBuilder::new(&analyzer);
        let tag_weights = vec![("h1".to_string(), 5), ("strong".to_string(), 2)];
        let html = "<html><body><h1>Computer</h1><strong>Computer</strong></body></html>";

        let postings = builder.build_postings(DocId(0), html, &tag_weights, 1);
        assert_eq!(postings.get("comput").unwrap().importance, 2);
    }
}
