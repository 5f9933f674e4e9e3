use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::core::error::Result;
use crate::core::types::RawTermEntry;

/// Repeatedly pairs up term-sorted partial-index files and merges each pair
/// in a single linear streaming pass, until exactly one file remains.
///
/// Files are paired in spill order; an odd file out carries over to the
/// next round untouched. Every input is deleted once merged. Pairing must
/// keep files in ascending doc-id range order, since a merged entry's
/// posting list is the left file's postings followed by the right file's.
pub fn merge_all(dir: &Path, prefix: &str) -> Result<PathBuf> {
    let mut files = partial_files(dir, prefix)?;
    if files.is_empty() {
        let empty = dir.join(format!("{prefix}-empty.jsonl"));
        std::fs::File::create(&empty)?;
        return Ok(empty);
    }

    let mut round = 0usize;
    while files.len() > 1 {
        let mut next_round = Vec::new();
        let mut chunks = files.chunks(2);
        let mut idx = 0usize;
        while let Some(chunk) = chunks.next() {
            if chunk.len() == 2 {
                let out = dir.join(format!("{prefix}-merge-r{round}-{idx}.jsonl"));
                merge_two(&chunk[0], &chunk[1], &out)?;
                std::fs::remove_file(&chunk[0])?;
                std::fs::remove_file(&chunk[1])?;
                next_round.push(out);
            } else {
                next_round.push(chunk[0].clone());
            }
            idx += 1;
        }
        files = next_round;
        round += 1;
    }

    Ok(files.into_iter().next().expect("non-empty after merge loop"))
}

fn partial_files(dir: &Path, prefix: &str) -> Result<Vec<PathBuf>> {
    let mut files: Vec<(u64, PathBuf)> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter_map(|path| spill_index(&path, prefix).map(|index| (index, path)))
        .collect();
    files.sort_by_key(|(index, _)| *index);
    Ok(files.into_iter().map(|(_, path)| path).collect())
}

/// Parses the numeric spill index out of `partial-<N>.jsonl` so files sort
/// by docID range instead of lexicographically (`partial-10` < `partial-2`
/// as strings, but must merge after it).
fn spill_index(path: &Path, prefix: &str) -> Option<u64> {
    let stem = path.file_stem()?.to_str()?;
    stem.strip_prefix(prefix)?.trim_start_matches('-').parse().ok()
}

fn merge_two(left: &Path, right: &Path, out: &Path) -> Result<()> {
    let mut left_lines = BufReader::new(std::fs::File::open(left)?).lines();
    let mut right_lines = BufReader::new(std::fs::File::open(right)?).lines();

    let mut left_entry = next_entry(&mut left_lines)?;
    let mut right_entry = next_entry(&mut right_lines)?;

    let out_file = std::fs::File::create(out)?;
    let mut writer = std::io::BufWriter::new(out_file);

    loop {
        match (&left_entry, &right_entry) {
            (Some(l), Some(r)) => {
                if l.term < r.term {
                    write_entry(&mut writer, l)?;
                    left_entry = next_entry(&mut left_lines)?;
                } else if r.term < l.term {
                    write_entry(&mut writer, r)?;
                    right_entry = next_entry(&mut right_lines)?;
                } else {
                    let mut postings = l.postings.clone();
                    postings.extend(r.postings.clone());
                    write_entry(&mut writer, &RawTermEntry { term: l.term.clone(), postings })?;
                    left_entry = next_entry(&mut left_lines)?;
                    right_entry = next_entry(&mut right_lines)?;
                }
            }
            (Some(l), None) => {
                write_entry(&mut writer, l)?;
                left_entry = next_entry(&mut left_lines)?;
            }
            (None, Some(r)) => {
                write_entry(&mut writer, r)?;
                right_entry = next_entry(&mut right_lines)?;
            }
            (None, None) => break,
        }
    }

    writer.flush()?;
    Ok(())
}

fn next_entry(lines: &mut std::io::Lines<BufReader<std::fs::File>>) -> Result<Option<RawTermEntry>> {
    match lines.next() {
        Some(line) => Ok(Some(serde_json::from_str(&line?)?)),
        None => Ok(None),
    }
}

fn write_entry(writer: &mut impl Write, entry: &RawTermEntry) -> Result<()> {
    serde_json::to_writer(&mut *writer, entry)?;
    writer.write_all(b"\n")?;
    Ok(())
}
