use crate::analysis::analyzer::Analyzer;
use crate::core::error::Result;
use crate::core::types::{DocId, WeightedPosting};
use crate::indexing::docmap::DocIdTable;
use crate::indexing::reader::PostingReader;

/// Evaluates a query against the rewritten, offset-mapped index.
///
/// Tokenizes and dedupes the query with the same [`Analyzer`] used at build
/// time, looks up each term's posting list, AND-intersects them accumulating
/// tf_idf, and falls back to an OR-union when the intersection is empty.
pub struct QueryEvaluator<'a> {
    analyzer: &'a Analyzer,
}

impl<'a> QueryEvaluator<'a> {
    pub fn new(analyzer: &'a Analyzer) -> Self {
        QueryEvaluator { analyzer }
    }

    pub fn query_terms(&self, query: &str) -> Vec<String> {
        let mut terms = Vec::new();
        for token in self.analyzer.analyze(query) {
            if !terms.contains(&token.text) {
                terms.push(token.text);
            }
        }
        terms
    }

    /// Returns up to `k` URLs, ranked by descending tf_idf.
    pub fn search(
        &self,
        query: &str,
        reader: &mut PostingReader,
        doc_table: &DocIdTable,
        k: usize,
    ) -> Result<Vec<String>> {
        let terms = self.query_terms(query);
        if terms.is_empty() {
            return Ok(Vec::new());
        }

        let mut lists: Vec<Vec<(DocId, f64)>> = Vec::with_capacity(terms.len());
        for term in &terms {
            let postings = reader.postings_for(term)?;
            lists.push(as_pairs(postings));
        }

        let mut ranked = intersect_all(&lists);
        if ranked.is_empty() {
            ranked = union_all(&lists);
        }

        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked.truncate(k);

        let mut urls = Vec::with_capacity(ranked.len());
        for (doc_id, _) in ranked {
            urls.push(doc_table.url(doc_id)?.to_string());
        }
        Ok(urls)
    }
}

fn as_pairs(postings: Vec<WeightedPosting>) -> Vec<(DocId, f64)> {
    postings.into_iter().map(|p| (p.doc_id, p.tf_idf)).collect()
}

fn intersect_two(a: &[(DocId, f64)], b: &[(DocId, f64)]) -> Vec<(DocId, f64)> {
    let mut result = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Equal => {
                result.push((a[i].0, a[i].1 + b[j].1));
                i += 1;
                j += 1;
            }
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
        }
    }
    result
}

fn union_two(a: &[(DocId, f64)], b: &[(DocId, f64)]) -> Vec<(DocId, f64)> {
    let mut result = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Equal => {
                result.push((a[i].0, a[i].1 + b[j].1));
                i += 1;
                j += 1;
            }
            std::cmp::Ordering::Less => {
                result.push(a[i]);
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                result.push(b[j]);
                j += 1;
            }
        }
    }
    result.extend_from_slice(&a[i..]);
    result.extend_from_slice(&b[j..]);
    result
}

/// Intersects all lists, shortest-first, so each pairwise pass works over
/// the smallest possible running accumulator.
fn intersect_all(lists: &[Vec<(DocId, f64)>]) -> Vec<(DocId, f64)> {
    let mut sorted: Vec<&Vec<(DocId, f64)>> = lists.iter().collect();
    sorted.sort_by_key(|l| l.len());

    let mut iter = sorted.into_iter();
    let Some(first) = iter.next() else { return Vec::new() };
    let mut acc = first.clone();
    for list in iter {
        if acc.is_empty() {
            return Vec::new();
        }
        acc = intersect_two(&acc, list);
    }
    acc
}

fn union_all(lists: &[Vec<(DocId, f64)>]) -> Vec<(DocId, f64)> {
    let mut sorted: Vec<&Vec<(DocId, f64)>> = lists.iter().collect();
    sorted.sort_by_key(|l| l.len());

    let mut iter = sorted.into_iter();
    let Some(first) = iter.next() else { return Vec::new() };
    let mut acc = first.clone();
    for list in iter {
        acc = union_two(&acc, list);
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(doc: u64, score: f64) -> (DocId, f64) {
        (DocId(doc), score)
    }

    #[test]
    fn intersect_sums_scores_on_matching_docs() {
        let a = vec![pair(0, 1.0), pair(1, 2.0), pair(3, 4.0)];
        let b = vec![pair(1, 0.5), pair(3, 1.5)];
        let result = intersect_two(&a, &b);
        assert_eq!(result, vec![pair(1, 2.5), pair(3, 5.5)]);
    }

    #[test]
    fn union_keeps_unmatched_and_sums_matched() {
        let a = vec![pair(0, 1.0), pair(2, 2.0)];
        let b = vec![pair(1, 0.5), pair(2, 1.0)];
        let result = union_two(&a, &b);
        assert_eq!(result, vec![pair(0, 1.0), pair(1, 0.5), pair(2, 3.0)]);
    }

    #[test]
    fn query_terms_dedupes_and_follows_analyzer() {
        let analyzer = Analyzer::standard();
        let evaluator = QueryEvaluator::new(&analyzer);
        let terms = evaluator.query_terms("computers computer science");
        assert_eq!(terms, vec!["comput".to_string(), "scienc".to_string()]);
    }

    #[test]
    fn intersect_all_empty_when_any_list_empty() {
        let lists = vec![vec![pair(0, 1.0)], vec![]];
        assert!(intersect_all(&lists).is_empty());
    }
}
