//! Text statistics: word and character counts, whole-word search,
//! stopword-filtered frequency ranking and sentence/paragraph structure.
//!
//! All analysis functions are pure. The only cached state is the stopword
//! set, built on first use by a [`StopwordLoader`](stopwords::StopwordLoader)
//! from an injected [`DictionaryProvider`](stopwords::DictionaryProvider).
//!
//! ```
//! use textstat_core::analyzer::{count_words_and_chars, search_word};
//!
//! assert_eq!(count_words_and_chars("hello world"), (2, 11));
//! assert_eq!(search_word("The Cat sat", "cat"), 1);
//! ```

pub mod analysis;
pub mod analyzer;
pub mod ranking;
pub mod stopwords;

pub use analysis::{AnalysisReport, TextAnalyzer};
pub use textstat_types::{
    top_n_from_signed, AnalysisError, AnalyzerConfig, RankMode, Ranking, Result, SearchHit,
    StructureStats, TextCounts, WordCount,
};
