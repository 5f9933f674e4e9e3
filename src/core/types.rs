use serde::{Deserialize, Serialize};

/// Dense, monotonically assigned document identifier. The i-th
/// successfully ingested document has `DocId(i)`, 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocId(pub u64);

impl DocId {
    pub fn new(id: u64) -> Self {
        DocId(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for DocId {
    fn from(id: u64) -> Self {
        DocId(id)
    }
}

/// Build-time posting: one document's signal for one term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawPosting {
    pub doc_id: DocId,
    pub tf: u32,
    pub importance: u32,
}

/// Final posting: per-document TF-IDF weighted score. Produced by the
/// rewrite stage; the only posting shape the query evaluator ever sees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedPosting {
    pub doc_id: DocId,
    pub tf_idf: f64,
}

/// One line of a partial or merged (pre-rewrite) index file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTermEntry {
    pub term: String,
    pub postings: Vec<RawPosting>,
}

/// One line of the final, rewritten index file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightedTermEntry {
    pub term: String,
    pub postings: Vec<WeightedPosting>,
}
