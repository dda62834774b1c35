/// Splits text into whitespace-delimited terms. Terms are case-sensitive and kept verbatim.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
