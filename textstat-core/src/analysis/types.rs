//! Analyzer types.

use textstat_types::AnalyzerConfig;

use crate::ranking::MeaningfulWordRanker;
use crate::stopwords::{BundledDictionary, DictionaryProvider, StopwordLoader, EXTRA_STOPWORDS};

/// Text analyzer: counts, search, ranking and structure in one place.
///
/// Construct once at startup and pass by reference. The only state is the
/// lazily loaded stopword set, so every call with the same input returns the
/// same report.
pub struct TextAnalyzer<P = BundledDictionary> {
    pub(crate) config: AnalyzerConfig,
    pub(crate) ranker: MeaningfulWordRanker<P>,
}

impl Default for TextAnalyzer<BundledDictionary> {
    fn default() -> Self {
        Self::new()
    }
}

impl TextAnalyzer<BundledDictionary> {
    /// Creates an analyzer using the bundled English dictionary and the
    /// default configuration.
    pub fn new() -> Self {
        Self::with_provider(BundledDictionary, AnalyzerConfig::default())
    }

    /// Creates an analyzer using the bundled English dictionary.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self::with_provider(BundledDictionary, config)
    }
}

impl<P: DictionaryProvider> TextAnalyzer<P> {
    /// Creates an analyzer whose base dictionary comes from `provider`.
    pub fn with_provider(provider: P, config: AnalyzerConfig) -> Self {
        let extra = match &config.extra_stopwords {
            Some(words) => words.clone(),
            None => EXTRA_STOPWORDS.iter().map(|s| (*s).to_owned()).collect(),
        };
        let loader = StopwordLoader::with_extra(provider, extra);
        let ranker = MeaningfulWordRanker::with_min_word_len(loader, config.min_word_len);

        Self { config, ranker }
    }

    /// The active configuration.
    #[inline(always)]
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// The meaningful-word ranker.
    #[inline(always)]
    pub fn ranker(&self) -> &MeaningfulWordRanker<P> {
        &self.ranker
    }
}
