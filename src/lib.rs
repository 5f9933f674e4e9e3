pub mod analysis;
pub mod builder;
pub mod core;
pub mod corpus;
pub mod html;
pub mod indexing;
pub mod query;
pub mod scoring;
pub mod searcher;

/*
┌──────────────────────────────────────────────────────────────────────┐
│                         BUILD PIPELINE                               │
│                                                                       │
│  corpus::iter_documents                                              │
│        │  CorpusRecord { url, content }                              │
│        ▼                                                             │
│  html::extractor::HtmlExtractor ──> visible text + per-tag text      │
│        │                                                             │
│        ▼                                                             │
│  indexing::posting_builder::PostingBuilder                           │
│        │  HashMap<term, RawPosting { doc_id, tf, importance }>       │
│        ▼                                                             │
│  indexing::accumulator::PartialIndexAccumulator (BTreeMap, sorted)   │
│        │  spills every `spill_every_n_docs` documents                │
│        ▼                                                             │
│  indexing::spill::spill_partial_index ──> partial-N.jsonl            │
│        │                                                             │
│        ▼                                                             │
│  indexing::merge::merge_all ──> one term-sorted file                 │
│        │                                                             │
│        ▼                                                             │
│  indexing::rewrite::rewrite + scoring::tfidf::tf_idf                 │
│        │  WeightedTermEntry { term, postings: [doc_id, tf_idf] }     │
│        ▼                                                             │
│  indexing::offsets::build_offset_map ──> offsets.fst                 │
│  indexing::docmap::DocIdTable ──> doc_ids.txt                        │
│                                                                       │
│                         SEARCH PATH                                  │
│                                                                       │
│  query::evaluator::QueryEvaluator                                    │
│        │  tokenize + dedupe (analysis::analyzer::Analyzer)           │
│        │  AND-intersect postings, OR-union fallback                  │
│        ▼                                                             │
│  searcher::Searcher ──> ranked URLs via indexing::docmap::DocIdTable  │
└──────────────────────────────────────────────────────────────────────┘
*/
