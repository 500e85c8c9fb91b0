//! Pipeline configuration and defaults
use crate::stopwords::StopWordSource;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

// Input source
pub const DEFAULT_DATA_PATH: &str = "data/gender_tweets.csv";
pub const TEXT_COLUMN: &str = "text";
pub const DESCRIPTION_COLUMN: &str = "description";

// Derived column names as they appear in serialized output
pub const TWEETS_COLUMN: &str = "Tweets";
pub const DESCRIPTION_OUTPUT_COLUMN: &str = "Description";

// Stop words
pub const DEFAULT_LANGUAGE: &str = "english";
pub const NLTK_DATA_DIR: &str = "nltk_data";
pub const NLTK_DATA_ENV: &str = "NLTK_DATA";
// Searched after `$NLTK_DATA` and `~/nltk_data`
pub const DEFAULT_CORPUS_ROOTS: &[&str] = &[
    "nltk_data",
    "/usr/share/nltk_data",
    "/usr/local/share/nltk_data",
    "/usr/lib/nltk_data",
    "/usr/local/lib/nltk_data",
];

/// Stop-word corpus roots in lookup order: entries of `$NLTK_DATA`, the
/// user's `~/nltk_data` (where `nltk.download` installs), then the shared
/// locations in [`DEFAULT_CORPUS_ROOTS`].
pub fn default_corpus_roots() -> Vec<PathBuf> {
    let mut roots: Vec<PathBuf> = env::var_os(NLTK_DATA_ENV)
        .map(|paths| {
            env::split_paths(&paths)
                .filter(|p| !p.as_os_str().is_empty())
                .collect()
        })
        .unwrap_or_default();

    if let Some(home) = env::var_os("HOME").or_else(|| env::var_os("USERPROFILE")) {
        roots.push(PathBuf::from(home).join(NLTK_DATA_DIR));
    }

    roots.extend(DEFAULT_CORPUS_ROOTS.iter().map(PathBuf::from));
    roots
}

// Field values read as missing, and how a missing cell renders before cleaning
pub const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];
pub const MISSING_CELL_TEXT: &str = "nan";

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub data_path: PathBuf,
    pub text_column: String,
    pub description_column: String,
    pub language: String,
    pub stopwords: StopWordSource,
    pub parallel: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            text_column: TEXT_COLUMN.to_string(),
            description_column: DESCRIPTION_COLUMN.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            stopwords: StopWordSource::default(),
            parallel: false,
        }
    }
}

impl PipelineConfig {
    /// Reads a YAML file; keys that are absent keep their defaults.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, Box<dyn std::error::Error>> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }
}
