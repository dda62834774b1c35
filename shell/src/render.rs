//! Terminal presentation of ranked results.

use engine::{Hit, Span};

/// Width of the `rank.(doc_id)[score] ` header that prefixes each result.
pub const HEADER_WIDTH: usize = 23;

/// Narrowest text column used when the terminal is too small for the header.
const MIN_TEXT_WIDTH: usize = 10;

pub fn header(hit: &Hit) -> String {
    format!("{:>5}.({:>5})[{}] ", hit.rank, hit.doc_id, format_score(hit.score))
}

/// Signed score with five significant digits in a 7-character field.
fn format_score(score: f64) -> String {
    let magnitude = score.abs();
    let decimals = if magnitude >= 1.0 && magnitude.is_finite() {
        (4 - magnitude.log10().floor() as i32).clamp(0, 4) as usize
    } else {
        4
    };
    format!("{score:+7.decimals$}")
}

/// Renders `text` wrapped to `width` columns, each text row followed by a row of `^`
/// under the highlighted characters.
pub fn render_hit(hit: &Hit, text: &str, spans: &[Span], width: usize) -> String {
    let column = width.saturating_sub(HEADER_WIDTH).max(MIN_TEXT_WIDTH);
    let chars: Vec<char> = text.chars().collect();
    let marks = underline(text, spans);
    let head = header(hit);
    // Scores past five integer digits widen the header; every row follows it.
    let indent = head.chars().count().max(HEADER_WIDTH);
    let pad = " ".repeat(indent);

    let mut out = String::new();
    for (row, start) in (0..chars.len().max(1)).step_by(column).enumerate() {
        let end = (start + column).min(chars.len());
        if row == 0 {
            out.push_str(&head);
            out.push_str(&" ".repeat(indent - head.chars().count()));
        } else {
            out.push_str(&pad);
        }
        out.extend(&chars[start..end]);
        out.push('\n');

        let marked: String = marks[start..end].iter().collect();
        let marked = marked.trim_end();
        if !marked.is_empty() {
            out.push_str(&pad);
            out.push_str(marked);
        }
        out.push('\n');
    }
    out
}

/// One marker per character of `text`: `^` inside a span, space elsewhere.
fn underline(text: &str, spans: &[Span]) -> Vec<char> {
    text.char_indices()
        .map(|(pos, _)| {
            if spans.iter().any(|s| s.start <= pos && pos < s.end) {
                '^'
            } else {
                ' '
            }
        })
        .collect()
}
