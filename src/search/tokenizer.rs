use once_cell::sync::Lazy;
use regex::Regex;

static MARKUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("markup pattern is valid"));

/// Removes every `<...>` span, inclusive. Idempotent.
pub fn strip_markup(text: &str) -> String {
    MARKUP.replace_all(text, "").into_owned()
}

/// Display-independent form used for matching: markup stripped, lowercased.
pub fn normalize_text(text: &str) -> String {
    strip_markup(text).to_lowercase()
}

/// Splits a query on whitespace runs into lowercase, non-empty tokens.
pub fn tokenize_query(query: &str) -> Vec<String> {
    query
        .trim()
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Conjunctive match: every token is a substring of `normalized`.
pub fn matches_all(normalized: &str, tokens: &[String]) -> bool {
    !tokens.is_empty() && tokens.iter().all(|token| normalized.contains(token.as_str()))
}
