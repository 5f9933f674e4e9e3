use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::error::Result;

/// Build/search configuration, loaded from a JSON file on disk.
///
/// Mirrors the single configuration record described by the interface spec:
/// corpus root, index output directory, output file names, spill threshold,
/// and the tag -> importance table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub corpus_path: PathBuf,
    pub index_dir: PathBuf,

    pub partial_index_prefix: String,
    pub index_file_name: String,
    pub offsets_file_name: String,
    pub doc_table_file_name: String,

    /// Spill the in-memory accumulator after this many ingested documents.
    pub spill_every_n_docs: usize,

    /// Ordered tag -> importance table. Order only matters for the
    /// unspecified "last tag wins" tie-break on multiply-tagged terms.
    pub tag_weights: Vec<(String, u32)>,
    pub default_term_weight: u32,

    pub max_results: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            corpus_path: PathBuf::from("./corpus"),
            index_dir: PathBuf::from("./index"),

            partial_index_prefix: "partial".to_string(),
            index_file_name: "index.jsonl".to_string(),
            offsets_file_name: "offsets.fst".to_string(),
            doc_table_file_name: "doc_ids.txt".to_string(),

            spill_every_n_docs: 1000,

            tag_weights: vec![
                ("title".to_string(), 10),
                ("h1".to_string(), 5),
                ("h2".to_string(), 4),
                ("h3".to_string(), 3),
                ("strong".to_string(), 2),
            ],
            default_term_weight: 1,

            max_results: 5,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)?;
        Ok(config)
    }

    pub fn index_path(&self) -> PathBuf {
        self.index_dir.join(&self.index_file_name)
    }

    pub fn offsets_path(&self) -> PathBuf {
        self.index_dir.join(&self.offsets_file_name)
    }

    pub fn doc_table_path(&self) -> PathBuf {
        self.index_dir.join(&self.doc_table_file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tag_weights_match_spec() {
        let config = Config::default();
        let weights: Vec<(&str, u32)> = config
            .tag_weights
            .iter()
            .map(|(tag, w)| (tag.as_str(), *w))
            .collect();
        assert_eq!(
            weights,
            vec![
                ("title", 10),
                ("h1", 5),
                ("h2", 4),
                ("h3", 3),
                ("strong", 2),
            ]
        );
        assert_eq!(config.default_term_weight, 1);
        assert_eq!(config.max_results, 5);
    }

    #[test]
    fn load_parses_partial_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"corpus_path": "data/corpus", "max_results": 10}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.corpus_path, PathBuf::from("data/corpus"));
        assert_eq!(config.max_results, 10);
        // Untouched fields keep their defaults.
        assert_eq!(config.spill_every_n_docs, 1000);
    }
}
