use std::collections::BTreeMap;

use crate::core::types::RawPosting;

/// In-memory partial index: term -> postings, term-ordered for free by
/// virtue of `BTreeMap`, so a spill never needs a separate sort pass.
#[derive(Default)]
pub struct PartialIndexAccumulator {
    terms: BTreeMap<String, Vec<RawPosting>>,
    docs_since_spill: usize,
}

impl PartialIndexAccumulator {
    pub fn new() -> Self {
        PartialIndexAccumulator::default()
    }

    pub fn add_document_postings(&mut self, postings: std::collections::HashMap<String, RawPosting>) {
        for (term, posting) in postings {
            self.terms.entry(term).or_default().push(posting);
        }
        self.docs_since_spill += 1;
    }

    pub fn docs_since_spill(&self) -> usize {
        self.docs_since_spill
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Empties the accumulator, handing the caller its term-ordered content
    /// for spilling to disk.
    pub fn drain(&mut self) -> BTreeMap<String, Vec<RawPosting>> {
        self.docs_since_spill = 0;
        std::mem::take(&mut self.terms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::DocId;

    fn posting(doc: u64, tf: u32) -> RawPosting {
        RawPosting { doc_id: DocId(doc), tf, importance: 1 }
    }

    #[test]
    fn drain_yields_term_ordered_postings_and_resets_counter() {
        let mut acc = PartialIndexAccumulator::new();
        let mut doc0 = std::collections::HashMap::new();
        doc0.insert("zeta".to_string(), posting(0, 1));
        doc0.insert("alpha".to_string(), posting(0, 2));
        acc.add_document_postings(doc0);

        assert_eq!(acc.docs_since_spill(), 1);

        let drained = acc.drain();
        let terms: Vec<&String> = drained.keys().collect();
        assert_eq!(terms, vec!["alpha", "zeta"]);
        assert_eq!(acc.docs_since_spill(), 0);
        assert!(acc.is_empty());
    }

    #[test]
    fn repeated_term_across_documents_accumulates_postings() {
        let mut acc = PartialIndexAccumulator::new();
        let mut doc0 = std::collections::HashMap::new();
        doc0.insert("alpha".to_string(), posting(0, 1));
        acc.add_document_postings(doc0);

        let mut doc1 = std::collections::HashMap::new();
        doc1.insert("alpha".to_string(), posting(1, 3));
        acc.add_document_postings(doc1);

        let drained = acc.drain();
        assert_eq!(drained.get("alpha").unwrap().len(), 2);
    }
}
