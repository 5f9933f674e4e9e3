use std::path::Path;

use crate::analysis::analyzer::Analyzer;
use crate::core::config::Config;
use crate::core::error::{Error, ErrorKind, Result};
use crate::corpus;
use crate::indexing::accumulator::PartialIndexAccumulator;
use crate::indexing::docmap::DocIdTable;
use crate::indexing::merge::merge_all;
use crate::indexing::offsets::build_offset_map;
use crate::indexing::posting_builder::PostingBuilder;
use crate::indexing::rewrite::rewrite;
use crate::indexing::spill::spill_partial_index;

/// Drives the full build pipeline: ingest corpus documents, spill partial
/// indexes, merge them into one term-sorted file, rewrite with tf_idf
/// weights, and build the offset map and doc-id table the searcher needs.
pub struct IndexBuilder {
    config: Config,
    accumulator: PartialIndexAccumulator,
    doc_table: DocIdTable,
    spill_count: usize,
}

impl IndexBuilder {
    pub fn new(config: Config) -> Self {
        IndexBuilder {
            config,
            accumulator: PartialIndexAccumulator::new(),
            doc_table: DocIdTable::new(),
            spill_count: 0,
        }
    }

    pub fn build(&mut self) -> Result<()> {
        if !self.config.corpus_path.exists() {
            return Err(Error::new(
                ErrorKind::MissingCorpus,
                format!("corpus path {} does not exist", self.config.corpus_path.display()),
            ));
        }
        if !self.config.index_dir.exists() {
            return Err(Error::new(
                ErrorKind::MissingIndexDir,
                format!("index dir {} does not exist", self.config.index_dir.display()),
            ));
        }

        let analyzer = Analyzer::standard();
        let builder = PostingBuilder::new(&analyzer);
        let records = corpus::iter_documents(&self.config.corpus_path)?;

        log::info!("ingesting {} documents", records.len());

        for record in records {
            let doc_id = self.doc_table.push(record.url);
            let postings = builder.build_postings(
                doc_id,
                &record.content,
                &self.config.tag_weights,
                self.config.default_term_weight,
            );
            self.accumulator.add_document_postings(postings);

            if self.accumulator.docs_since_spill() >= self.config.spill_every_n_docs {
                self.spill()?;
            }
        }

        if !self.accumulator.is_empty() {
            self.spill()?;
        }

        if self.spill_count == 0 {
            log::warn!("no documents ingested, writing an empty index");
            std::fs::File::create(self.config.index_path())?;
        } else {
            let merged = merge_all(&self.config.index_dir, &self.config.partial_index_prefix)?;
            rewrite(&merged, &self.config.index_path(), self.doc_table.len() as u64)?;
            if merged != self.config.index_path() {
                let _ = std::fs::remove_file(&merged);
            }
        }

        build_offset_map(&self.config.index_path(), &self.config.offsets_path())?;
        self.doc_table.write(&self.config.doc_table_path())?;

        log::info!(
            "index built: {} documents, {} partial spills",
            self.doc_table.len(),
            self.spill_count
        );
        Ok(())
    }

    fn spill(&mut self) -> Result<()> {
        let terms = self.accumulator.drain();
        spill_partial_index(
            &self.config.index_dir,
            &self.config.partial_index_prefix,
            self.spill_count,
            &terms,
        )?;
        self.spill_count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_doc(corpus: &Path, sub: &str, name: &str, url: &str, body: &str) {
        let dir = corpus.join(sub);
        fs::create_dir_all(&dir).unwrap();
        let record = serde_json::json!({ "url": url, "content": body });
        fs::write(dir.join(name), serde_json::to_string(&record).unwrap()).unwrap();
    }

    #[test]
    fn build_produces_index_offsets_and_doc_table() {
        let root = tempfile::tempdir().unwrap();
        let corpus = root.path().join("corpus");
        let index_dir = root.path().join("index");
        fs::create_dir_all(&corpus).unwrap();
        fs::create_dir_all(&index_dir).unwrap();

        write_doc(&corpus, "a", "0.json", "http://x", "<html><head><title>Computer</title></head><body>Computer science</body></html>");
        write_doc(&corpus, "a", "1.json", "http://y", "<html><body>Unrelated content about gardening</body></html>");

        let mut config = Config::default();
        config.corpus_path = corpus;
        config.index_dir = index_dir.clone();
        config.spill_every_n_docs = 1;

        let mut builder = IndexBuilder::new(config.clone());
        builder.build().unwrap();

        assert!(config.index_path().exists());
        assert!(config.offsets_path().exists());
        assert!(config.doc_table_path().exists());

        let doc_table = DocIdTable::load(&config.doc_table_path()).unwrap();
        assert_eq!(doc_table.len(), 2);
    }

    #[test]
    fn build_rejects_missing_corpus() {
        let root = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.corpus_path = root.path().join("nope");
        config.index_dir = root.path().to_path_buf();

        let mut builder = IndexBuilder::new(config);
        let err = builder.build().unwrap_err();
        assert!(matches!(err.kind, ErrorKind::MissingCorpus));
    }
}
