//! Trie-backed inverted index with BM25 ranking over a line-delimited corpus.

pub mod config;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod heap;
pub mod highlight;
pub mod query;
pub mod scorer;
pub mod tokenizer;
pub mod trie;

/// Dense, zero-based document id assigned in corpus order.
pub type DocId = usize;

pub use config::EngineConfig;
pub use corpus::{Corpus, Document};
pub use engine::Engine;
pub use error::{Result, SearchError};
pub use highlight::Span;
pub use query::{Hit, SearchResults, MAX_QUERY_TERMS};
pub use trie::{PostingList, Trie};
