use crate::analysis::analyzer::Analyzer;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::indexing::docmap::DocIdTable;
use crate::indexing::reader::PostingReader;
use crate::query::evaluator::QueryEvaluator;

/// Holds everything a search session needs: the open index file, the
/// offset map, and the doc-id table, loaded once at startup.
pub struct Searcher {
    analyzer: Analyzer,
    reader: PostingReader,
    doc_table: DocIdTable,
    max_results: usize,
}

impl Searcher {
    pub fn open(config: &Config) -> Result<Self> {
        let reader = PostingReader::open(&config.index_path(), &config.offsets_path())?;
        let doc_table = DocIdTable::load(&config.doc_table_path())?;
        Ok(Searcher {
            analyzer: Analyzer::standard(),
            reader,
            doc_table,
            max_results: config.max_results,
        })
    }

    pub fn search(&mut self, query: &str) -> Result<Vec<String>> {
        let evaluator = QueryEvaluator::new(&self.analyzer);
        evaluator.search(query, &mut self.reader, &self.doc_table, self.max_results)
    }
}
