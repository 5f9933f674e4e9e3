pub mod accumulator;
pub mod docmap;
pub mod merge;
pub mod offsets;
pub mod posting_builder;
pub mod reader;
pub mod rewrite;
pub mod spill;
