//! Error types for corpus loading and query evaluation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by the engine.
///
/// Corpus errors (`CannotOpenFile`, `InvalidDocumentIdOrder`, `EmptyDocument`,
/// `EmptyCorpus`) are fatal: no engine is built. Query errors leave the engine usable.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("unable to open the specified file {}: {source}", path.display())]
    CannotOpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The id token on `line` (1-based) is negative, non-numeric or out of sequence.
    #[error("document id of negative value or in the wrong order (line {line}: {found:?})")]
    InvalidDocumentIdOrder { line: usize, found: String },

    #[error("document {id} appears to be empty")]
    EmptyDocument { id: usize },

    #[error("corpus contains no documents")]
    EmptyCorpus,

    #[error("document id {id} out of range (corpus has {total} documents)")]
    DocumentIdOutOfRange { id: i64, total: usize },

    #[error("no occurrences of the specified word ({0:?})")]
    TermNotFound(String),

    /// Nothing usable was left after tokenizing and resolving the query.
    #[error("no valid input")]
    NoValidInput { unresolved: Vec<String> },

    #[error("failed to read corpus: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SearchError>;
