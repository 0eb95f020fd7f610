//! Public API for analyzing text.

use textstat_types::{Ranking, SearchHit};

use crate::analysis::report::AnalysisReport;
use crate::analysis::types::TextAnalyzer;
use crate::analyzer::counter::text_counts;
use crate::analyzer::search::search_word;
use crate::analyzer::structure::structure_with_word_count;
use crate::stopwords::DictionaryProvider;

impl<P: DictionaryProvider> TextAnalyzer<P> {
    /// Runs every analysis over `text`.
    ///
    /// `search_term` is searched only when it is non-empty. Ranking falls
    /// back to basic word counts if the stopword dictionary is unavailable,
    /// so this never fails.
    pub fn analyze(&self, text: &str, search_term: Option<&str>) -> AnalysisReport {
        let counts = text_counts(text);
        let structure = structure_with_word_count(text, counts.words);
        let ranking = self.top_words(text);
        let search = search_term
            .filter(|term| !term.is_empty())
            .map(|term| self.search(text, term));

        log::debug!(
            "analyzed {} chars: {} words, {} sentences, {} ranked ({})",
            counts.chars,
            counts.words,
            structure.sentences,
            ranking.words.len(),
            ranking.mode
        );

        AnalysisReport {
            counts,
            structure,
            ranking,
            search,
        }
    }

    /// Counts whole-word occurrences of `term` in `text`.
    pub fn search(&self, text: &str, term: &str) -> SearchHit {
        SearchHit {
            term: term.to_owned(),
            matches: search_word(text, term),
        }
    }

    /// Ranks the configured number of top words.
    #[inline]
    pub fn top_words(&self, text: &str) -> Ranking {
        self.ranker.rank_or_fallback(text, self.config.top_n)
    }
}
