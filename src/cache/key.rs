//! Cache key derivation.

/// Lowercase the looked-up word, one character at a time. Language codes
/// are left alone.
///
/// Per-character mapping has no final-sigma rule, so `Σ` always becomes `σ`
/// and keys stay stable regardless of the letter's position.
pub fn normalize_word(word: &str) -> String {
    word.chars().flat_map(char::to_lowercase).collect()
}

/// Build the cache key `"{source}-{target}:{normalized_word}"`.
///
/// `normalized_word` must already have gone through [`normalize_word`].
pub fn word_key(source: &str, target: &str, normalized_word: &str) -> String {
    format!("{}-{}:{}", source, target, normalized_word)
}
