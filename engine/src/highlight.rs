//! Whole-word match spans for presenting results.

use serde::Serialize;

/// Byte range `[start, end)` of a highlighted match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Finds every occurrence of each term in `text` bounded by whitespace or the string ends.
///
/// Spans are sorted by position; overlapping spans from repeated terms are merged.
pub fn find_matches<S: AsRef<str>>(text: &str, terms: &[S]) -> Vec<Span> {
    let mut spans = Vec::new();
    for term in terms {
        let term = term.as_ref();
        if term.is_empty() {
            continue;
        }
        // A whole-word match cannot overlap a rejected candidate, since the term has no
        // whitespace, so non-overlapping search sees all of them.
        for (start, _) in text.match_indices(term) {
            let end = start + term.len();
            if is_boundary_before(text, start) && is_boundary_after(text, end) {
                spans.push(Span { start, end });
            }
        }
    }
    spans.sort_unstable();
    merge(spans)
}

fn is_boundary_before(text: &str, start: usize) -> bool {
    text[..start].chars().next_back().map_or(true, char::is_whitespace)
}

fn is_boundary_after(text: &str, end: usize) -> bool {
    text[end..].chars().next().map_or(true, char::is_whitespace)
}

fn merge(spans: Vec<Span>) -> Vec<Span> {
    let mut merged: Vec<Span> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(last) if span.start <= last.end => last.end = last.end.max(span.end),
            _ => merged.push(span),
        }
    }
    merged
}
