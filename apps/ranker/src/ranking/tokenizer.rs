//! Word tokenizer for TF-IDF.
//!
//! Lowercases the text, then keeps every run of two or more Unicode word
//! characters. Punctuation separates tokens and single characters are dropped.
//! No stop words are removed.

use std::sync::LazyLock;

use regex::Regex;

static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is a valid regex"));

/// Tokenize text into owned lowercase terms, in order of appearance.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
