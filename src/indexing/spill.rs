use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::core::error::Result;
use crate::core::types::{RawPosting, RawTermEntry};

/// Writes one term-ordered partial index to disk as newline-delimited JSON,
/// one `RawTermEntry` per line. The `BTreeMap` iteration order guarantees
/// the file is already term-sorted, which the merge step depends on.
pub fn spill_partial_index(
    dir: &Path,
    prefix: &str,
    index: usize,
    terms: &BTreeMap<String, Vec<RawPosting>>,
) -> Result<PathBuf> {
    let path = dir.join(format!("{prefix}-{index}.jsonl"));
    let file = std::fs::File::create(&path)?;
    let mut writer = std::io::BufWriter::new(file);

    for (term, postings) in terms {
        let entry = RawTermEntry {
            term: term.clone(),
            postings: postings.clone(),
        };
        serde_json::to_writer(&mut writer, &entry)?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::DocId;
    use std::io::BufRead;

    #[test]
    fn spills_in_term_order_as_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let mut terms = BTreeMap::new();
        terms.insert(
            "zeta".to_string(),
            vec![RawPosting { doc_id: DocId(0), tf: 1, importance: 1 }],
        );
        terms.insert(
            "alpha".to_string(),
            vec![RawPosting { doc_id: DocId(0), tf: 2, importance: 1 }],
        );

        let path = spill_partial_index(dir.path(), "partial", 0, &terms).unwrap();
        assert_eq!(path.file_name().unwrap(), "partial-0.jsonl");

        let file = std::fs::File::open(&path).unwrap();
        let lines: Vec<String> = std::io::BufReader::new(file)
            .lines()
            .map(|l| l.unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        let first: RawTermEntry = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(first.term, "alpha");
    }
}
