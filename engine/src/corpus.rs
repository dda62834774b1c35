//! Line-delimited corpus loading and validation.
//!
//! Each line is `<id> <word> <word> ...`. Ids must run 0, 1, 2, ... with no gaps and every
//! document must hold at least one word. The whole input is validated before anything is
//! returned, so a malformed corpus never yields a partial result.

use crate::error::{Result, SearchError};
use crate::tokenizer::tokenize;
use crate::DocId;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub id: DocId,
    /// Words joined by single spaces.
    pub text: String,
    pub word_count: usize,
}

impl Document {
    /// Length of the normalized text in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.text.split(' ')
    }
}

/// Dense, id-addressable document store.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SearchError::CannotOpenFile {
            path: path.to_path_buf(),
            source,
        })?;
        let corpus = Self::from_reader(BufReader::new(file))?;
        tracing::info!(path = %path.display(), documents = corpus.len(), "loaded corpus");
        Ok(corpus)
    }

    /// Reads and validates a corpus from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut documents = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            documents.push(parse_line(index, &line?)?);
        }
        if documents.is_empty() {
            return Err(SearchError::EmptyCorpus);
        }
        Ok(Self { documents })
    }

    pub fn parse(text: &str) -> Result<Self> {
        Self::from_reader(text.as_bytes())
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn get(&self, id: DocId) -> Option<&Document> {
        self.documents.get(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }

    /// Mean word count over all documents.
    pub fn avg_doc_length(&self) -> f64 {
        if self.documents.is_empty() {
            return 0.0;
        }
        let total: u64 = self.documents.iter().map(|d| d.word_count as u64).sum();
        total as f64 / self.documents.len() as f64
    }
}

fn parse_line(expected: DocId, line: &str) -> Result<Document> {
    let mut tokens = tokenize(line).into_iter();
    let Some(id_token) = tokens.next() else {
        return Err(SearchError::EmptyDocument { id: expected });
    };
    match id_token.parse::<DocId>() {
        Ok(id) if id == expected => {}
        _ => {
            return Err(SearchError::InvalidDocumentIdOrder {
                line: expected + 1,
                found: id_token.to_string(),
            })
        }
    }

    let words: Vec<&str> = tokens.collect();
    if words.is_empty() {
        return Err(SearchError::EmptyDocument { id: expected });
    }
    Ok(Document { id: expected, text: words.join(" "), word_count: words.len() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_normalizes_documents() {
        let corpus = Corpus::parse("0  the   cat sat\n1\tthe dog ran fast  \n").unwrap();
        assert_eq!(corpus.len(), 2);
        let first = corpus.get(0).unwrap();
        assert_eq!(first.text, "the cat sat");
        assert_eq!(first.word_count, 3);
        assert_eq!(first.len(), 11);
        assert_eq!(corpus.get(1).unwrap().text, "the dog ran fast");
        assert!(corpus.get(2).is_none());
        assert_eq!(corpus.avg_doc_length(), 3.5);
    }

    #[test]
    fn rejects_gap_in_ids() {
        let err = Corpus::parse("0 a\n1 b\n3 c\n").unwrap_err();
        match err {
            SearchError::InvalidDocumentIdOrder { line, found } => {
                assert_eq!(line, 3);
                assert_eq!(found, "3");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_negative_non_numeric_and_duplicate_ids() {
        for text in ["-1 a\n", "x a\n", "0 a\n0 b\n", "1 a\n"] {
            assert!(
                matches!(Corpus::parse(text), Err(SearchError::InvalidDocumentIdOrder { .. })),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_empty_documents() {
        assert!(matches!(Corpus::parse("0 a\n1\n2 c\n"), Err(SearchError::EmptyDocument { id: 1 })));
        assert!(matches!(Corpus::parse("0 a\n   \n1 c\n"), Err(SearchError::EmptyDocument { id: 1 })));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(Corpus::parse(""), Err(SearchError::EmptyCorpus)));
    }

    #[test]
    fn average_length_over_word_counts() {
        let corpus = Corpus::parse("0 a b c\n1 a b c d e\n2 a b c d\n").unwrap();
        assert_eq!(corpus.avg_doc_length(), 4.0);
    }
}
