use crate::stopwords::StopWords;

/// Splits already-cleaned text on whitespace and drops stop words.
/// Order and duplicates are kept.
pub fn tokenize(text: &str, stopwords: &StopWords) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter(|t| !stopwords.contains(t))
        .map(str::to_string)
        .collect()
}

/// Number of whitespace tokens that [`tokenize`] would discard.
pub fn count_stopwords(text: &str, stopwords: &StopWords) -> usize {
    text.to_lowercase()
        .split_whitespace()
        .filter(|t| stopwords.contains(t))
        .count()
}
