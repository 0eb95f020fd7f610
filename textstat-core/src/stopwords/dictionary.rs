//! Stopword dictionary providers.
//!
//! The core never performs I/O on its own: the base word list comes from an
//! injected [`DictionaryProvider`].

use std::fs;
use std::path::{Path, PathBuf};

use textstat_types::{AnalysisError, Result};

/// The standard English stopword list (NLTK corpus, 179 words).
#[rustfmt::skip]
pub const ENGLISH_STOPWORDS: &[&str] = &[
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

/// Vague filler words added on top of the base dictionary.
pub const EXTRA_STOPWORDS: &[&str] = &[
    "would", "could", "should", "one", "two", "also", "said", "say", "get", "go", "like", "well",
    "much", "many", "may", "might", "must", "shall", "will",
];

/// Source of the base stopword dictionary.
///
/// Implementations may fetch from disk or the network; any failure must be
/// reported as [`AnalysisError::NlpUnavailable`] so callers can fall back.
pub trait DictionaryProvider: Send + Sync {
    /// Short human-readable name, used in logs.
    fn name(&self) -> &str;

    /// Loads the raw word list.
    fn load(&self) -> Result<Vec<String>>;
}

/// The compiled-in English list. Never fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct BundledDictionary;

impl DictionaryProvider for BundledDictionary {
    fn name(&self) -> &str {
        "bundled-english"
    }

    fn load(&self) -> Result<Vec<String>> {
        Ok(ENGLISH_STOPWORDS.iter().map(|s| (*s).to_owned()).collect())
    }
}

/// A caller-supplied word list.
#[derive(Debug, Default, Clone)]
pub struct StaticDictionary {
    words: Vec<String>,
}

impl StaticDictionary {
    /// Wraps the given words.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

impl DictionaryProvider for StaticDictionary {
    fn name(&self) -> &str {
        "static"
    }

    fn load(&self) -> Result<Vec<String>> {
        Ok(self.words.clone())
    }
}

/// A newline-delimited word list stored on disk.
///
/// Blank lines and lines starting with `#` are skipped. A missing,
/// unreadable or empty file is reported as unavailable.
#[derive(Debug, Clone)]
pub struct FileDictionary {
    path: PathBuf,
    name: String,
}

impl FileDictionary {
    /// Creates a provider reading from `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path.display().to_string();
        Self { path, name }
    }
}

impl DictionaryProvider for FileDictionary {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<Vec<String>> {
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            AnalysisError::nlp_unavailable(format!("cannot read {}: {}", self.name, e))
        })?;

        let words: Vec<String> = parse_word_list(&contents).map(str::to_owned).collect();
        if words.is_empty() {
            return Err(AnalysisError::nlp_unavailable(format!(
                "{} contains no words",
                self.name
            )));
        }

        Ok(words)
    }
}

/// Yields the entries of a newline-delimited word list.
pub fn parse_word_list(contents: &str) -> impl Iterator<Item = &str> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}
