//! Lazily built, cached stopword set.

use once_cell::sync::OnceCell;
use rustc_hash::FxHashSet;
use textstat_types::Result;

use crate::stopwords::dictionary::{DictionaryProvider, EXTRA_STOPWORDS};

/// A read-only set of lowercase stopwords.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: FxHashSet<String>,
}

impl StopwordSet {
    /// Builds a set from a base list and an extra list.
    ///
    /// Entries are trimmed and lowercased; blank entries are skipped.
    pub fn from_words<'a, B, E>(base: B, extra: E) -> Self
    where
        B: IntoIterator<Item = &'a str>,
        E: IntoIterator<Item = &'a str>,
    {
        let words = base
            .into_iter()
            .chain(extra)
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(str::to_lowercase)
            .collect();

        Self { words }
    }

    /// Returns `true` if `word` (already lowercase) is a stopword.
    #[inline(always)]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Builds the stopword set on first use and reuses it afterwards.
///
/// Construct one loader at startup and pass it by reference. Initialization
/// is single-flight: concurrent first callers wait for one provider call. A
/// failed load is not cached, so the next call asks the provider again.
pub struct StopwordLoader<P> {
    provider: P,
    extra: Vec<String>,
    cell: OnceCell<StopwordSet>,
}

impl<P: DictionaryProvider> StopwordLoader<P> {
    /// Creates a loader that adds the built-in filler words to the provider's
    /// dictionary.
    pub fn new(provider: P) -> Self {
        Self::with_extra(provider, EXTRA_STOPWORDS.iter().map(|s| (*s).to_owned()).collect())
    }

    /// Creates a loader with a custom list of extra words.
    pub fn with_extra(provider: P, extra: Vec<String>) -> Self {
        Self {
            provider,
            extra,
            cell: OnceCell::new(),
        }
    }

    /// Returns the stopword set, loading it if needed.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::NlpUnavailable` if the provider fails.
    pub fn stopwords(&self) -> Result<&StopwordSet> {
        self.cell.get_or_try_init(|| {
            let base = self.provider.load()?;
            let set = StopwordSet::from_words(
                base.iter().map(String::as_str),
                self.extra.iter().map(String::as_str),
            );
            log::info!(
                "loaded {} stopwords from {}",
                set.len(),
                self.provider.name()
            );
            Ok(set)
        })
    }

    /// Returns `true` once the set has been built.
    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    /// The underlying dictionary provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use textstat_types::AnalysisError;

    use super::*;
    use crate::stopwords::dictionary::{BundledDictionary, StaticDictionary};

    /// Fails the first `failures` loads, then succeeds.
    struct FlakyDictionary {
        calls: AtomicUsize,
        failures: usize,
    }

    impl FlakyDictionary {
        fn new(failures: usize) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                failures,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl DictionaryProvider for FlakyDictionary {
        fn name(&self) -> &str {
            "flaky"
        }

        fn load(&self) -> Result<Vec<String>> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if n < self.failures {
                Err(AnalysisError::nlp_unavailable("offline"))
            } else {
                Ok(vec!["the".to_owned()])
            }
        }
    }

    #[test]
    fn default_set_has_base_and_extra_words() {
        let loader = StopwordLoader::new(BundledDictionary);
        let set = loader.stopwords().unwrap();

        for word in ["the", "and", "would", "shall", "also", "many"] {
            assert!(set.contains(word), "{} should be a stopword", word);
        }
        assert!(!set.contains("quick"));
        // "should" and "will" appear in both lists
        assert_eq!(set.len(), 179 + 19 - 2);
    }

    #[test]
    fn loads_only_once() {
        let loader = StopwordLoader::new(FlakyDictionary::new(0));
        assert!(!loader.is_loaded());

        let first = loader.stopwords().unwrap() as *const StopwordSet;
        let second = loader.stopwords().unwrap() as *const StopwordSet;

        assert!(loader.is_loaded());
        assert_eq!(first, second);
        assert_eq!(loader.provider().calls(), 1);
    }

    #[test]
    fn failure_is_reported_and_retried() {
        let loader = StopwordLoader::new(FlakyDictionary::new(1));

        let err = loader.stopwords().unwrap_err();
        assert!(matches!(err, AnalysisError::NlpUnavailable { .. }));
        assert!(!loader.is_loaded());

        assert!(loader.stopwords().unwrap().contains("the"));
        assert_eq!(loader.provider().calls(), 2);
    }

    #[test]
    fn custom_extra_words_replace_defaults() {
        let loader =
            StopwordLoader::with_extra(StaticDictionary::new(["the"]), vec!["Lorem".into()]);
        let set = loader.stopwords().unwrap();
        assert!(set.contains("lorem"));
        assert!(!set.contains("would"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn provider_words_are_normalized() {
        let loader =
            StopwordLoader::with_extra(StaticDictionary::new(["  The ", "", "AND"]), Vec::new());
        let set = loader.stopwords().unwrap();
        assert!(set.contains("the"));
        assert!(set.contains("and"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn concurrent_first_use_loads_once() {
        let loader = StopwordLoader::new(FlakyDictionary::new(0));

        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    assert!(loader.stopwords().unwrap().contains("the"));
                });
            }
        });

        assert_eq!(loader.provider().calls(), 1);
    }
}
