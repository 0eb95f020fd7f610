//! Core types and errors for the textstat analysis library.
//!
//! This crate holds the values that cross the boundary between the analysis
//! core and whatever host displays them. Keeping types separate ensures:
//!
//! - **Plain data**: every result is an owned, `Clone`-able value
//! - **Cross-crate compatibility**: core and hosts share the same types
//! - **Clean boundaries**: no dependency on the analysis machinery

#![warn(missing_docs)]

use core::cmp::Ordering;
use core::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Result alias used throughout textstat.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// A ranked word and how often it occurred.
///
/// Ordering follows ranking order: a higher count is greater, and for equal
/// counts the word seen first is greater. Sorting a slice in descending order
/// therefore yields the final ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    /// The (lowercased) word.
    pub word: String,
    /// Number of occurrences, always >= 1.
    pub count: usize,
    /// Index of the word's first occurrence in the filtered token sequence.
    pub first_seen: usize,
}

impl WordCount {
    /// Creates a new entry.
    #[inline]
    pub fn new(word: impl Into<String>, count: usize, first_seen: usize) -> Self {
        Self {
            word: word.into(),
            count,
            first_seen,
        }
    }

    /// Returns `(word, count)`, the shape hosts usually render.
    #[inline]
    pub fn as_pair(&self) -> (&str, usize) {
        (&self.word, self.count)
    }
}

impl PartialOrd for WordCount {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WordCount {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        // Primary: count. Secondary: earlier first occurrence ranks higher.
        self.count
            .cmp(&other.count)
            .then_with(|| other.first_seen.cmp(&self.first_seen))
            .then_with(|| other.word.cmp(&self.word))
    }
}

impl PartialEq<(&str, usize)> for WordCount {
    fn eq(&self, other: &(&str, usize)) -> bool {
        self.word == other.0 && self.count == other.1
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} times", self.word, self.count)
    }
}

/// Which ranking path produced a [`Ranking`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankMode {
    /// Stopword-filtered ranking over whole ASCII words.
    Meaningful,
    /// Punctuation-stripped whitespace ranking used when the stopword
    /// dictionary is unavailable.
    Basic,
}

impl fmt::Display for RankMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankMode::Meaningful => f.write_str("meaningful"),
            RankMode::Basic => f.write_str("basic"),
        }
    }
}

/// Top-N words together with the mode that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking {
    /// Ranking path that was used.
    pub mode: RankMode,
    /// Ranked words, best first.
    pub words: Vec<WordCount>,
}

impl Ranking {
    /// Wraps words produced by the given mode.
    pub fn new(mode: RankMode, words: Vec<WordCount>) -> Self {
        Self { mode, words }
    }

    /// Returns `true` if the ranking came from the fallback path.
    #[inline]
    pub fn is_fallback(&self) -> bool {
        self.mode == RankMode::Basic
    }
}

/// Word and character counts of a text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextCounts {
    /// Whitespace-separated tokens.
    pub words: usize,
    /// Unicode scalar values, spaces included.
    pub chars: usize,
    /// Unicode scalar values with ASCII spaces removed.
    pub chars_no_spaces: usize,
}

/// Sentence and paragraph statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StructureStats {
    /// Non-blank segments between runs of `.`, `!` and `?`.
    pub sentences: usize,
    /// Non-blank segments between blank-line separators.
    pub paragraphs: usize,
    /// Words per sentence, rounded to one decimal place.
    pub avg_words_per_sentence: f64,
}

/// Outcome of a whole-word search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    /// The term as the user typed it.
    pub term: String,
    /// Non-overlapping whole-word matches.
    pub matches: usize,
}

/// Errors surfaced by the analysis library and its hosts.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The stopword dictionary could not be loaded. Never fatal: callers
    /// fall back to basic ranking.
    #[error("stopword dictionary unavailable: {reason}")]
    NlpUnavailable {
        /// Why the provider failed.
        reason: String,
    },

    /// A host passed an argument that cannot be interpreted.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration JSON could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Host-level I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AnalysisError {
    /// Builds an [`AnalysisError::NlpUnavailable`] from any message.
    pub fn nlp_unavailable(reason: impl Into<String>) -> Self {
        AnalysisError::NlpUnavailable {
            reason: reason.into(),
        }
    }
}

fn get_default_top_n() -> usize {
    5
}

fn get_default_min_word_len() -> usize {
    3
}

/// Analyzer configuration.
///
/// Every field has a default, so `{}` is a valid configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Number of ranked words to report. Default: 5
    #[serde(default = "get_default_top_n")]
    pub top_n: usize,
    /// Words shorter than this are never meaningful. Default: 3
    #[serde(default = "get_default_min_word_len")]
    pub min_word_len: usize,
    /// Replaces the built-in list of filler words added on top of the base
    /// dictionary. `None` keeps the built-in list.
    #[serde(default)]
    pub extra_stopwords: Option<Vec<String>>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            top_n: get_default_top_n(),
            min_word_len: get_default_min_word_len(),
            extra_stopwords: None,
        }
    }
}

impl AnalyzerConfig {
    /// Parses a configuration from JSON.
    ///
    /// # Example
    /// ```
    /// use textstat_types::AnalyzerConfig;
    ///
    /// let config = AnalyzerConfig::from_json(r#"{ "top_n": 10 }"#).unwrap();
    /// assert_eq!(config.top_n, 10);
    /// assert_eq!(config.min_word_len, 3);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Same as the default, reporting `n` ranked words.
    pub fn with_top_n(n: usize) -> Self {
        Self {
            top_n: n,
            ..Self::default()
        }
    }
}

/// Clamps a signed top-N request to a usable count.
///
/// Zero and negative requests yield `0`, which produces an empty ranking.
#[inline]
pub fn top_n_from_signed(n: i64) -> usize {
    if n <= 0 {
        0
    } else {
        usize::try_from(n).unwrap_or(usize::MAX)
    }
}
