use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::Path;

use fst::MapBuilder;

use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::WeightedTermEntry;

/// Builds the term -> byte-offset map for random-access posting lookups.
///
/// `fst::MapBuilder` requires keys inserted in strictly increasing byte
/// order, which the rewritten index already satisfies (merge keeps the
/// file term-sorted throughout).
pub fn build_offset_map(index_path: &Path, offsets_path: &Path) -> Result<()> {
    let mut file = std::fs::File::open(index_path)?;
    let mut reader = BufReader::new(&mut file);

    let out = std::fs::File::create(offsets_path)?;
    let mut builder = MapBuilder::new(out).map_err(Error::from)?;

    let mut offset: u64 = 0;
    loop {
        let mut line = String::new();
        let bytes_read = reader.read_line(&mut line)?;
        if bytes_read == 0 {
            break;
        }

        let entry: WeightedTermEntry = serde_json::from_str(line.trim_end())?;
        builder
            .insert(entry.term.as_bytes(), offset)
            .map_err(Error::from)?;

        offset += bytes_read as u64;
    }

    builder.finish().map_err(Error::from)?;
    Ok(())
}

/// A loaded term -> offset map plus the index file it points into.
pub struct OffsetMap {
    map: fst::Map<Vec<u8>>,
}

impl OffsetMap {
    pub fn load(offsets_path: &Path) -> Result<Self> {
        let bytes = std::fs::read(offsets_path)?;
        let map = fst::Map::new(bytes).map_err(Error::from)?;
        Ok(OffsetMap { map })
    }

    pub fn lookup(&self, term: &str) -> Option<u64> {
        self.map.get(term)
    }
}

/// Reads the single line at `offset` from a term-sorted weighted index file.
pub fn read_entry_at(index_file: &mut std::fs::File, offset: u64) -> Result<WeightedTermEntry> {
    index_file.seek(SeekFrom::Start(offset))?;
    let mut line = String::new();
    BufReader::new(index_file).read_line(&mut line)?;
    if line.is_empty() {
        return Err(Error::new(ErrorKind::NotFound, "no entry at offset".to_string()));
    }
    Ok(serde_json::from_str(line.trim_end())?)
}
