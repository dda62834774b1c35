use crate::config::EngineConfig;
use crate::corpus::{Corpus, Document};
use crate::error::{Result, SearchError};
use crate::highlight::{find_matches, Span};
use crate::query::{execute, parse_and_resolve, SearchResults};
use crate::scorer::Bm25;
use crate::trie::Trie;
use crate::DocId;
use std::path::Path;

/// A corpus together with its inverted index. Read-only once built.
#[derive(Debug)]
pub struct Engine {
    corpus: Corpus,
    index: Trie,
    bm25: Bm25,
    config: EngineConfig,
}

impl Engine {
    /// Loads, validates and indexes the corpus at `path`.
    pub fn open<P: AsRef<Path>>(path: P, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let corpus = Corpus::open(path)?;
        Self::build(corpus, config)
    }

    /// Indexes an already validated corpus.
    pub fn build(corpus: Corpus, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        if corpus.is_empty() {
            return Err(SearchError::EmptyCorpus);
        }

        let mut index = Trie::new(corpus.len());
        for doc in corpus.iter() {
            for word in doc.words() {
                index.insert(word, doc.id);
            }
        }

        let avg_doc_len = corpus.avg_doc_length();
        tracing::info!(documents = corpus.len(), terms = index.term_count(), avg_doc_len, "index built");

        Ok(Self { bm25: Bm25::new(config.k1, config.b, avg_doc_len), corpus, index, config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn total_documents(&self) -> usize {
        self.corpus.len()
    }

    pub fn avg_doc_length(&self) -> f64 {
        self.bm25.avg_doc_len
    }

    pub fn document(&self, doc_id: DocId) -> Option<&Document> {
        self.corpus.get(doc_id)
    }

    /// Runs `raw` with the configured result limit.
    pub fn search(&self, raw: &str) -> Result<SearchResults> {
        self.search_with_limit(raw, self.config.max_results)
    }

    pub fn search_with_limit(&self, raw: &str, max_results: usize) -> Result<SearchResults> {
        let query = parse_and_resolve(&self.index, raw)?;
        Ok(execute(&self.corpus, &self.bm25, &query, max_results))
    }

    /// Every indexed term with the number of documents containing it, in lexicographic order.
    pub fn doc_frequencies(&self) -> impl Iterator<Item = (String, u32)> + '_ {
        self.index.terms().map(|(term, postings)| (term, postings.doc_count()))
    }

    /// Occurrences of `term` in document `doc_id`.
    pub fn term_frequency(&self, term: &str, doc_id: i64) -> Result<u32> {
        let postings = self
            .index
            .lookup(term)
            .ok_or_else(|| SearchError::TermNotFound(term.to_string()))?;
        let id = usize::try_from(doc_id)
            .ok()
            .filter(|&id| id < self.corpus.len())
            .ok_or(SearchError::DocumentIdOutOfRange { id: doc_id, total: self.corpus.len() })?;
        Ok(postings.occurrences(id))
    }

    /// Whole-word spans of `terms` in document `doc_id`; empty for an unknown id.
    pub fn highlights<S: AsRef<str>>(&self, doc_id: DocId, terms: &[S]) -> Vec<Span> {
        self.corpus.get(doc_id).map(|doc| find_matches(&doc.text, terms)).unwrap_or_default()
    }
}
