//! Corpus traversal and per-document record parsing.
//!
//! Each leaf file under the two-level corpus tree is a JSON record with
//! `url` and `content` fields. Traversal is a deterministic depth-first
//! walk, files within a directory in the order the filesystem yields them.

use std::path::Path;

use serde::Deserialize;
use walkdir::WalkDir;

use crate::core::error::Result;

#[derive(Debug, Clone, Deserialize)]
pub struct CorpusRecord {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub content: String,
}

impl CorpusRecord {
    pub fn is_well_formed(&self) -> bool {
        !self.url.is_empty() && !self.content.is_empty()
    }
}

/// Yields the well-formed document records under `corpus_root`, in
/// traversal order. Malformed JSON or missing/empty fields are logged and
/// skipped. They never reach the caller and never consume a docID.
pub fn iter_documents(corpus_root: &Path) -> Result<Vec<CorpusRecord>> {
    let mut records = Vec::new();

    for entry in WalkDir::new(corpus_root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("skipping unreadable corpus file {}: {}", path.display(), err);
                continue;
            }
        };

        let record: CorpusRecord = match serde_json::from_str(&raw) {
            Ok(record) => record,
            Err(err) => {
                log::warn!("skipping malformed document {}: {}", path.display(), err);
                continue;
            }
        };

        if !record.is_well_formed() {
            log::warn!("skipping document with missing url/content: {}", path.display());
            continue;
        }

        records.push(record);
    }

    Ok(records)
}
