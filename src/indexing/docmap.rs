use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::DocId;

/// Maps a `DocId` to the URL it was assigned during ingestion.
///
/// Stored as one URL per line, so `DocId(n)` is line `n`.
#[derive(Debug, Default)]
pub struct DocIdTable {
    urls: Vec<String>,
}

impl DocIdTable {
    pub fn new() -> Self {
        DocIdTable::default()
    }

    pub fn push(&mut self, url: String) -> DocId {
        let id = DocId(self.urls.len() as u64);
        self.urls.push(url);
        id
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn url(&self, doc_id: DocId) -> Result<&str> {
        self.urls
            .get(doc_id.value() as usize)
            .map(|s| s.as_str())
            .ok_or_else(|| Error::new(ErrorKind::NotFound, format!("no url for doc id {}", doc_id.value())))
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        for url in &self.urls {
            writer.write_all(url.as_bytes())?;
            writer.write_all(b"\n")?;
        }
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let reader = BufReader::new(std::fs::File::open(path)?);
        let urls = reader.lines().collect::<std::io::Result<Vec<String>>>()?;
        Ok(DocIdTable { urls })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_sequential_doc_ids() {
        let mut table = DocIdTable::new();
        let a = table.push("http://a".to_string());
        let b = table.push("http://b".to_string());
        assert_eq!(a, DocId(0));
        assert_eq!(b, DocId(1));
        assert_eq!(table.url(a).unwrap(), "http://a");
    }

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut table = DocIdTable::new();
        table.push("http://a".to_string());
        table.push("http://b".to_string());

        let path = dir.path().join("doc_ids.txt");
        table.write(&path).unwrap();

        let loaded = DocIdTable::load(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.url(DocId(1)).unwrap(), "http://b");
    }

    #[test]
    fn unknown_doc_id_is_not_found() {
        let table = DocIdTable::new();
        assert!(table.url(DocId(0)).is_err());
    }
}
