//! Query resolution and top-K execution.

use crate::corpus::Corpus;
use crate::error::{Result, SearchError};
use crate::heap::BoundedHeap;
use crate::scorer::Bm25;
use crate::tokenizer::tokenize;
use crate::trie::{PostingList, Trie};
use crate::DocId;
use serde::Serialize;
use std::cmp::Ordering;

/// Most terms a single query may use.
pub const MAX_QUERY_TERMS: usize = 10;

/// Query terms that resolved against the index, in input order.
#[derive(Debug)]
pub struct ResolvedQuery<'a> {
    terms: Vec<(&'a str, &'a PostingList)>,
    unresolved: Vec<String>,
}

impl<'a> ResolvedQuery<'a> {
    pub fn terms(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.terms.iter().map(|(term, _)| *term)
    }

    pub fn postings(&self) -> impl Iterator<Item = &'a PostingList> + '_ {
        self.terms.iter().map(|(_, postings)| *postings)
    }

    /// Tokens that were dropped because the index does not know them.
    pub fn unresolved(&self) -> &[String] {
        &self.unresolved
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    fn matches(&self, doc_id: DocId) -> bool {
        self.terms.iter().any(|(_, postings)| postings.occurrences(doc_id) > 0)
    }
}

/// Tokenizes `raw` and looks every token up, stopping once [`MAX_QUERY_TERMS`] resolve.
///
/// Unknown tokens are logged and skipped. Fails with `NoValidInput` when nothing resolves.
pub fn parse_and_resolve<'a>(index: &'a Trie, raw: &'a str) -> Result<ResolvedQuery<'a>> {
    let mut terms = Vec::new();
    let mut unresolved = Vec::new();

    for token in tokenize(raw) {
        if terms.len() == MAX_QUERY_TERMS {
            break;
        }
        match index.lookup(token) {
            Some(postings) => terms.push((token, postings)),
            None => {
                tracing::warn!(term = token, "term not found");
                unresolved.push(token.to_string());
            }
        }
    }

    if terms.is_empty() {
        return Err(SearchError::NoValidInput { unresolved });
    }
    Ok(ResolvedQuery { terms, unresolved })
}

/// One ranked result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hit {
    /// 1-based position in the result list.
    pub rank: usize,
    pub doc_id: DocId,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults {
    /// Resolved terms, in query order.
    pub terms: Vec<String>,
    pub unresolved: Vec<String>,
    /// Documents containing at least one resolved term.
    pub total_hits: usize,
    pub hits: Vec<Hit>,
}

#[derive(Debug, Clone, Copy)]
struct Scored {
    doc_id: DocId,
    score: f64,
}

/// Higher score first, then lower document id.
fn outranks(a: &Scored, b: &Scored) -> bool {
    match a.score.total_cmp(&b.score) {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => a.doc_id < b.doc_id,
    }
}

/// Scores every candidate document and returns the best `max_results`.
pub fn execute(corpus: &Corpus, bm25: &Bm25, query: &ResolvedQuery<'_>, max_results: usize) -> SearchResults {
    let mut heap = BoundedHeap::new(corpus.len(), outranks);

    for doc in corpus.iter().filter(|doc| query.matches(doc.id)) {
        let score = bm25.score(doc.id, doc.word_count, query.postings());
        if heap.push(Scored { doc_id: doc.id, score }).is_err() {
            // One entry per document and the heap holds the whole corpus.
            tracing::error!(doc_id = doc.id, "result heap overflow");
            break;
        }
    }

    let total_hits = heap.len();
    let hits = heap
        .pop_top(max_results)
        .into_iter()
        .enumerate()
        .map(|(i, s)| Hit { rank: i + 1, doc_id: s.doc_id, score: s.score })
        .collect();
    tracing::debug!(terms = query.len(), candidates = total_hits, "query executed");

    SearchResults {
        terms: query.terms().map(str::to_string).collect(),
        unresolved: query.unresolved().to_vec(),
        total_hits,
        hits,
    }
}
