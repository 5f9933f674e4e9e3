use std::path::Path;

use crate::core::error::Result;
use crate::core::types::WeightedPosting;
use crate::indexing::offsets::{read_entry_at, OffsetMap};

/// Random-access reader over the rewritten, offset-mapped index.
///
/// Holds one open file handle and the loaded offset map for the lifetime of
/// a search session; a missing term is not an error, just an empty list.
pub struct PostingReader {
    file: std::fs::File,
    offsets: OffsetMap,
}

impl PostingReader {
    pub fn open(index_path: &Path, offsets_path: &Path) -> Result<Self> {
        let file = std::fs::File::open(index_path)?;
        let offsets = OffsetMap::load(offsets_path)?;
        Ok(PostingReader { file, offsets })
    }

    pub fn postings_for(&mut self, term: &str) -> Result<Vec<WeightedPosting>> {
        match self.offsets.lookup(term) {
            Some(offset) => {
                let entry = read_entry_at(&mut self.file, offset)?;
                Ok(entry.postings)
            }
            None => Ok(Vec::new()),
        }
    }
}
