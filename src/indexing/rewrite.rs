use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::core::error::Result;
use crate::core::types::{RawTermEntry, WeightedPosting, WeightedTermEntry};
use crate::scoring::tfidf::tf_idf;

/// Streams the merged raw index into its final TF-IDF-weighted form.
///
/// `df` for a term is its posting-list length in the merged file, taken at
/// this rewrite pass rather than maintained incrementally. The output is
/// written to a temp file in the same directory and persisted atomically
/// over `dest`, so a crash mid-rewrite never leaves a half-written index.
pub fn rewrite(merged_path: &Path, dest: &Path, total_docs: u64) -> Result<()> {
    let reader = BufReader::new(std::fs::File::open(merged_path)?);
    let dest_dir = dest.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dest_dir)?;

    for line in reader.lines() {
        let raw: RawTermEntry = serde_json::from_str(&line?)?;
        let df = raw.postings.len() as u64;

        let postings: Vec<WeightedPosting> = raw
            .postings
            .into_iter()
            .map(|p| WeightedPosting {
                doc_id: p.doc_id,
                tf_idf: tf_idf(p.importance, p.tf, total_docs, df),
            })
            .collect();

        let entry = WeightedTermEntry { term: raw.term, postings };
        serde_json::to_writer(&mut tmp, &entry)?;
        tmp.write_all(b"\n")?;
    }

    tmp.flush()?;
    tmp.persist(dest).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{DocId, RawPosting};
    use std::io::BufRead as _;

    #[test]
    fn rewrites_raw_postings_into_weighted_entries() {
        let dir = tempfile::tempdir().unwrap();
        let merged = dir.path().join("merged.jsonl");
        let entry = RawTermEntry {
            term: "comput".to_string(),
            postings: vec![
                RawPosting { doc_id: DocId(0), tf: 3, importance: 10 },
                RawPosting { doc_id: DocId(1), tf: 1, importance: 1 },
            ],
        };
        let mut file = std::fs::File::create(&merged).unwrap();
        serde_json::to_writer(&mut file, &entry).unwrap();
        use std::io::Write as _;
        file.write_all(b"\n").unwrap();

        let dest = dir.path().join("index.jsonl");
        rewrite(&merged, &dest, 10).unwrap();

        let lines: Vec<WeightedTermEntry> = BufReader::new(std::fs::File::open(&dest).unwrap())
            .lines()
            .map(|l| serde_json::from_str(&l.unwrap()).unwrap())
            .collect();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].postings.len(), 2);
        assert!(lines[0].postings[0].tf_idf > 0.0);
    }
}
