//! Stop-word sets and where they come from.
//!
//! The default source is an NLTK-style corpus directory: the list for a
//! language lives at `<root>/corpora/stopwords/<language>`, one word per line.
//! A compiled-in English list is available for environments without the corpus.

use crate::config::default_corpus_roots;
use crate::error::{PipelineError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const BUILTIN_LANGUAGE: &str = "english";

const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// Read-only set of lowercase stop words.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// The compiled-in English list.
    pub fn english() -> Self {
        Self::from_words(ENGLISH.iter().copied())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StopWordSource {
    /// NLTK-style corpus; the first root holding the language file wins.
    Corpus { roots: Vec<PathBuf> },
    Builtin,
}

impl Default for StopWordSource {
    fn default() -> Self {
        Self::Corpus {
            roots: default_corpus_roots(),
        }
    }
}

impl StopWordSource {
    pub fn load(&self, language: &str) -> Result<StopWords> {
        match self {
            Self::Builtin => {
                if language != BUILTIN_LANGUAGE {
                    return Err(PipelineError::StopWordsUnavailable {
                        language: language.to_string(),
                        searched: Vec::new(),
                    });
                }
                let words = StopWords::english();
                info!("Loaded {} built-in stop words ({})", words.len(), language);
                Ok(words)
            }
            Self::Corpus { roots } => load_from_corpus(roots, language),
        }
    }
}

/// Location of a language's list under an NLTK data root.
pub fn corpus_file(root: &Path, language: &str) -> PathBuf {
    root.join("corpora").join("stopwords").join(language)
}

fn load_from_corpus(roots: &[PathBuf], language: &str) -> Result<StopWords> {
    let mut searched = Vec::with_capacity(roots.len());

    for root in roots {
        let path = corpus_file(root, language);
        match fs::read_to_string(&path) {
            Ok(contents) => {
                let words = StopWords::from_words(contents.lines());
                info!("Loaded {} stop words from {:?}", words.len(), path);
                return Ok(words);
            }
            Err(e) => {
                debug!("No stop-word list at {:?}: {}", path, e);
                searched.push(path);
            }
        }
    }

    Err(PipelineError::StopWordsUnavailable {
        language: language.to_string(),
        searched,
    })
}
