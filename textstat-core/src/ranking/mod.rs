//! Word frequency ranking.
//!
//! Two ranking paths share the same ordering rule (descending count, ties
//! broken by first appearance):
//!
//! - **Meaningful**: whole ASCII words, minus stopwords and short words
//! - **Basic**: whitespace tokens with edge punctuation stripped, used when
//!   the stopword dictionary cannot be loaded
//!
//! [`MeaningfulWordRanker`] owns the stopword loader and picks the path.

pub mod frequency;

use textstat_types::{RankMode, Ranking, Result, WordCount};

use crate::analyzer::tokenizer::Tokenizer;
use crate::analyzer::words::{strip_edge_punctuation, Words};
use crate::stopwords::{DictionaryProvider, StopwordLoader, StopwordSet};

pub use frequency::FrequencyTable;

/// Words shorter than this are never meaningful.
pub const DEFAULT_MIN_WORD_LEN: usize = 3;

/// Ranks meaningful words with an explicit minimum length.
pub fn top_meaningful_words_with_min_len(
    text: &str,
    n: usize,
    stopwords: &StopwordSet,
    min_word_len: usize,
) -> Vec<WordCount> {
    if text.is_empty() || n == 0 {
        return Vec::new();
    }

    let words = Words::extract(text);
    let table: FrequencyTable = words
        .iter()
        .filter(|w| w.len() >= min_word_len && !stopwords.contains(w))
        .collect();

    log::debug!(
        "meaningful ranking: {} words, {} kept, {} distinct",
        words.len(),
        table.total(),
        table.len()
    );

    table.into_top(n)
}

/// Returns the `n` most frequent meaningful words of `text`.
///
/// Words are whole runs of ASCII letters, lowercased; stopwords and words of
/// two letters or fewer are dropped.
///
/// # Example
///
/// ```
/// use textstat_core::ranking::top_meaningful_words;
/// use textstat_core::stopwords::StopwordSet;
///
/// let stopwords = StopwordSet::from_words(["the"], []);
/// let top = top_meaningful_words("the quick brown fox the quick", 2, &stopwords);
/// assert_eq!(top, vec![("quick", 2), ("brown", 1)]);
/// ```
pub fn top_meaningful_words(text: &str, n: usize, stopwords: &StopwordSet) -> Vec<WordCount> {
    top_meaningful_words_with_min_len(text, n, stopwords, DEFAULT_MIN_WORD_LEN)
}

/// Returns the `n` most frequent whitespace tokens of `text`.
///
/// Tokens are lowercased and stripped of `. , ! ? " ;` at both ends; tokens
/// left empty are dropped. No stopword removal.
pub fn basic_top_words(text: &str, n: usize) -> Vec<WordCount> {
    if text.is_empty() || n == 0 {
        return Vec::new();
    }

    let mut table = FrequencyTable::new();
    Tokenizer::new().tokenize(text, |token, _| {
        let lowered = token.to_lowercase();
        let stripped = strip_edge_punctuation(&lowered);
        if !stripped.is_empty() {
            table.add(stripped);
        }
    });

    table.into_top(n)
}

/// Ranks meaningful words using a lazily loaded stopword set.
///
/// Create one at startup and share it by reference; the stopword set is
/// built on first use.
pub struct MeaningfulWordRanker<P> {
    loader: StopwordLoader<P>,
    min_word_len: usize,
}

impl<P: DictionaryProvider> MeaningfulWordRanker<P> {
    /// Creates a ranker with the default minimum word length.
    pub fn new(loader: StopwordLoader<P>) -> Self {
        Self::with_min_word_len(loader, DEFAULT_MIN_WORD_LEN)
    }

    /// Creates a ranker that drops words shorter than `min_word_len`.
    pub fn with_min_word_len(loader: StopwordLoader<P>, min_word_len: usize) -> Self {
        Self {
            loader,
            min_word_len,
        }
    }

    /// Ranks the `n` most frequent meaningful words.
    ///
    /// Empty text yields an empty list without loading the dictionary.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::NlpUnavailable` if the stopword dictionary
    /// cannot be loaded.
    pub fn rank(&self, text: &str, n: usize) -> Result<Vec<WordCount>> {
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let stopwords = self.loader.stopwords()?;
        Ok(top_meaningful_words_with_min_len(
            text,
            n,
            stopwords,
            self.min_word_len,
        ))
    }

    /// Ranks meaningful words, falling back to [`basic_top_words`] when the
    /// dictionary is unavailable. Never fails.
    pub fn rank_or_fallback(&self, text: &str, n: usize) -> Ranking {
        match self.rank(text, n) {
            Ok(words) => Ranking::new(RankMode::Meaningful, words),
            Err(e) => {
                log::warn!("falling back to basic word ranking: {}", e);
                Ranking::new(RankMode::Basic, basic_top_words(text, n))
            }
        }
    }

    /// The stopword loader.
    pub fn loader(&self) -> &StopwordLoader<P> {
        &self.loader
    }
}

#[cfg(test)]
mod tests {
    use textstat_types::AnalysisError;

    use super::*;
    use crate::stopwords::{BundledDictionary, StaticDictionary};

    struct OfflineDictionary;

    impl DictionaryProvider for OfflineDictionary {
        fn name(&self) -> &str {
            "offline"
        }

        fn load(&self) -> Result<Vec<String>> {
            Err(AnalysisError::nlp_unavailable("network unreachable"))
        }
    }

    fn english() -> MeaningfulWordRanker<BundledDictionary> {
        MeaningfulWordRanker::new(StopwordLoader::new(BundledDictionary))
    }

    #[test]
    fn quick_brown_fox() {
        let top = english().rank("the quick brown fox the quick", 2).unwrap();
        assert_eq!(top, vec![("quick", 2), ("brown", 1)]);
    }

    #[test]
    fn empty_text_is_empty_for_any_n() {
        let ranker = english();
        for n in [0, 1, 5, 100] {
            assert!(ranker.rank("", n).unwrap().is_empty());
        }
        assert!(!ranker.loader().is_loaded());
    }

    #[test]
    fn zero_n_is_empty() {
        assert!(english().rank("plenty of words here", 0).unwrap().is_empty());
    }

    #[test]
    fn drops_stopwords_fillers_and_short_words() {
        let text = "We would go to the ox and it is an AI project. Project AI ox would.";
        let top = english().rank(text, 5).unwrap();
        assert_eq!(top, vec![("project", 2)]);
    }

    #[test]
    fn case_and_punctuation_insensitive() {
        let top = english().rank("Rust! rust, RUST? Crab.", 5).unwrap();
        assert_eq!(top, vec![("rust", 3), ("crab", 1)]);
    }

    #[test]
    fn length_limited_to_n() {
        let top = english().rank("alpha beta gamma delta epsilon", 3).unwrap();
        assert_eq!(top, vec![("alpha", 1), ("beta", 1), ("gamma", 1)]);
    }

    #[test]
    fn min_word_len_is_configurable() {
        let loader =
            StopwordLoader::with_extra(StaticDictionary::new(Vec::<String>::new()), Vec::new());
        let ranker = MeaningfulWordRanker::with_min_word_len(loader, 5);
        let top = ranker.rank("tiny small large enormous", 5).unwrap();
        assert_eq!(top, vec![("small", 1), ("large", 1), ("enormous", 1)]);
    }

    #[test]
    fn unavailable_dictionary_is_signalled() {
        let ranker = MeaningfulWordRanker::new(StopwordLoader::new(OfflineDictionary));
        let err = ranker.rank("some text", 5).unwrap_err();
        assert!(matches!(err, AnalysisError::NlpUnavailable { .. }));
    }

    #[test]
    fn fallback_produces_basic_ranking() {
        let ranker = MeaningfulWordRanker::new(StopwordLoader::new(OfflineDictionary));
        let text = "The cat. the CAT, a dog!";
        let ranking = ranker.rank_or_fallback(text, 5);
        assert!(ranking.is_fallback());
        assert_eq!(ranking.words, basic_top_words(text, 5));
        assert_eq!(ranking.words, vec![("the", 2), ("cat", 2), ("a", 1), ("dog", 1)]);
    }

    #[test]
    fn no_fallback_when_dictionary_loads() {
        let ranking = english().rank_or_fallback("ferris the crab", 5);
        assert_eq!(ranking.mode, RankMode::Meaningful);
        assert_eq!(ranking.words, vec![("ferris", 1), ("crab", 1)]);
    }

    #[test]
    fn basic_strips_edge_punctuation_and_drops_empty() {
        let top = basic_top_words("\"Hello,\" hello; ... !? (hello)", 5);
        assert_eq!(top, vec![("hello", 2), ("(hello)", 1)]);
    }

    #[test]
    fn basic_lowercases_unicode() {
        let top = basic_top_words("ÉCOLE école", 5);
        assert_eq!(top, vec![("école", 2)]);
    }

    #[test]
    fn basic_empty() {
        assert!(basic_top_words("", 5).is_empty());
        assert!(basic_top_words("   ", 5).is_empty());
    }

    #[test]
    fn free_function_uses_given_set() {
        let set = StopwordSet::from_words(["alpha"], []);
        let top = top_meaningful_words("alpha beta beta", 5, &set);
        assert_eq!(top, vec![("beta", 2)]);
    }

    #[test]
    fn idempotent() {
        let ranker = english();
        let text = "Oranges and apples, apples and pears.";
        assert_eq!(ranker.rank(text, 3).unwrap(), ranker.rank(text, 3).unwrap());
    }
}
