//! BM25 scoring over resolved posting lists.

use crate::trie::PostingList;
use crate::DocId;

/// BM25 parameters bound to a corpus' average document length.
#[derive(Debug, Clone, Copy)]
pub struct Bm25 {
    pub k1: f64,
    pub b: f64,
    pub avg_doc_len: f64,
}

impl Bm25 {
    pub fn new(k1: f64, b: f64, avg_doc_len: f64) -> Self {
        debug_assert!(avg_doc_len > 0.0);
        Self { k1, b, avg_doc_len }
    }

    /// Sums `idf * f * (k1 + 1) / (f + k1 * (1 - b + b * dl / avgdl))` over `postings`.
    ///
    /// Terms absent from the document add nothing, even when `k1 = 0` leaves the
    /// denominator at zero.
    pub fn score<'a, I>(&self, doc_id: DocId, doc_len: usize, postings: I) -> f64
    where
        I: IntoIterator<Item = &'a PostingList>,
    {
        let norm = self.k1 * (1.0 - self.b + self.b * (doc_len as f64 / self.avg_doc_len));
        postings
            .into_iter()
            .filter_map(|list| {
                let f = list.occurrences(doc_id) as f64;
                (f > 0.0).then(|| list.idf() * (f * (self.k1 + 1.0)) / (f + norm))
            })
            .sum()
    }
}
