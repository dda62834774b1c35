use engine::{Corpus, Engine, EngineConfig, SearchError};
use std::io::Write;
use tempfile::NamedTempFile;

const TWO_DOCS: &str = "0 the cat sat\n1 the dog ran fast\n";

fn write_corpus(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

fn bm25(idf: f64, f: f64, dl: f64, avgdl: f64) -> f64 {
    let (k1, b) = (1.2, 0.75);
    idf * (f * (k1 + 1.0)) / (f + k1 * (1.0 - b + b * dl / avgdl))
}

#[test]
fn single_term_returns_only_matching_document() {
    let file = write_corpus(TWO_DOCS);
    let engine = Engine::open(file.path(), EngineConfig::default()).unwrap();
    assert_eq!(engine.avg_doc_length(), 3.5);

    let results = engine.search("cat").unwrap();
    assert_eq!(results.hits.len(), 1);
    assert_eq!(results.hits[0].doc_id, 0);
    assert_eq!(results.terms, vec!["cat"]);
}

#[test]
fn common_term_scores_both_documents() {
    let file = write_corpus(TWO_DOCS);
    let engine = Engine::open(file.path(), EngineConfig::default()).unwrap();
    let results = engine.search("the").unwrap();
    assert_eq!(results.total_hits, 2);

    let idf = (0.5f64 / 2.5).log10();
    for hit in &results.hits {
        let dl = engine.document(hit.doc_id).unwrap().word_count as f64;
        assert!((hit.score - bm25(idf, 1.0, dl, 3.5)).abs() < 1e-9);
    }
    // Negative idf: the longer document is penalised less.
    let ids: Vec<usize> = results.hits.iter().map(|h| h.doc_id).collect();
    assert_eq!(ids, vec![1, 0]);
}

#[test]
fn unknown_term_is_reported_then_refused() {
    let engine = Engine::build(Corpus::parse(TWO_DOCS).unwrap(), EngineConfig::default()).unwrap();
    match engine.search("zebra") {
        Err(SearchError::NoValidInput { unresolved }) => assert_eq!(unresolved, vec!["zebra".to_string()]),
        other => panic!("unexpected result: {other:?}"),
    }
    let partial = engine.search("zebra dog").unwrap();
    assert_eq!(partial.unresolved, vec!["zebra".to_string()]);
    assert_eq!(partial.hits[0].doc_id, 1);
}

#[test]
fn results_respect_configured_limit() {
    let mut text = String::new();
    for id in 0..30 {
        text.push_str(&format!("{id} common word{id} filler\n"));
    }
    let engine = Engine::build(Corpus::parse(&text).unwrap(), EngineConfig::with_max_results(5)).unwrap();
    let results = engine.search("common").unwrap();
    assert_eq!(results.total_hits, 30);
    assert_eq!(results.hits.len(), 5);
    assert!(results.hits.windows(2).all(|w| w[0].score >= w[1].score));
    let ranks: Vec<usize> = results.hits.iter().map(|h| h.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
}

#[test]
fn zero_k1_multi_term_query_ranks_finite_scores() {
    let corpus = Corpus::parse("0 cat\n1 dog\n2 bird\n3 fish\n").unwrap();
    let config = EngineConfig { k1: 0.0, b: 1.0, ..EngineConfig::default() };
    let engine = Engine::build(corpus, config).unwrap();
    let results = engine.search("cat dog").unwrap();
    assert_eq!(results.total_hits, 2);
    assert!(results.hits.iter().all(|h| h.score.is_finite()));
    let ids: Vec<usize> = results.hits.iter().map(|h| h.doc_id).collect();
    assert_eq!(ids, vec![0, 1]);
}

#[test]
fn missing_file_cannot_be_opened() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");
    assert!(matches!(
        Engine::open(&missing, EngineConfig::default()),
        Err(SearchError::CannotOpenFile { .. })
    ));
}

#[test]
fn malformed_corpus_files_are_rejected() {
    let gap = write_corpus("0 a b\n1 c d\n3 e f\n");
    assert!(matches!(
        Engine::open(gap.path(), EngineConfig::default()),
        Err(SearchError::InvalidDocumentIdOrder { line: 3, .. })
    ));
    let blank = write_corpus("0 a b\n\n1 c d\n");
    assert!(matches!(
        Engine::open(blank.path(), EngineConfig::default()),
        Err(SearchError::EmptyDocument { id: 1 })
    ));
}

#[test]
fn highlights_follow_query_terms() {
    let engine = Engine::build(Corpus::parse(TWO_DOCS).unwrap(), EngineConfig::default()).unwrap();
    let results = engine.search("the fast").unwrap();
    let doc = engine.document(1).unwrap();
    let spans = engine.highlights(1, results.terms.as_slice());
    let marked: Vec<&str> = spans.iter().map(|s| &doc.text[s.start..s.end]).collect();
    assert_eq!(marked, vec!["the", "fast"]);
    assert!(engine.highlights(7, results.terms.as_slice()).is_empty());
}

#[test]
fn results_serialize_for_clients() {
    let engine = Engine::build(Corpus::parse(TWO_DOCS).unwrap(), EngineConfig::default()).unwrap();
    let results = engine.search("dog").unwrap();
    let json = serde_json::to_value(&results).unwrap();
    assert_eq!(json["hits"][0]["doc_id"], 1);
    assert_eq!(json["total_hits"], 1);
}
