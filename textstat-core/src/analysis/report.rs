//! Analysis report.

use core::fmt;

use textstat_types::{Ranking, SearchHit, StructureStats, TextCounts};

/// Everything computed for one text.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    /// Word and character counts.
    pub counts: TextCounts,
    /// Sentence and paragraph statistics.
    pub structure: StructureStats,
    /// Top words and the mode that produced them.
    pub ranking: Ranking,
    /// Search outcome, if a term was given.
    pub search: Option<SearchHit>,
}

impl AnalysisReport {
    /// Returns `true` if the ranking came from the fallback path.
    pub fn used_fallback(&self) -> bool {
        self.ranking.is_fallback()
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total words            : {}", self.counts.words)?;
        writeln!(f, "Total characters       : {}", self.counts.chars)?;
        writeln!(f, "Characters (no spaces) : {}", self.counts.chars_no_spaces)?;
        writeln!(f, "Sentences              : {}", self.structure.sentences)?;
        writeln!(f, "Paragraphs             : {}", self.structure.paragraphs)?;
        if self.counts.words > 0 {
            writeln!(
                f,
                "Avg words per sentence : {:.1}",
                self.structure.avg_words_per_sentence
            )?;
        }

        if self.ranking.is_fallback() {
            writeln!(f, "Top words (basic count, stopwords kept):")?;
        } else {
            writeln!(f, "Top meaningful words:")?;
        }
        if self.ranking.words.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for word in &self.ranking.words {
            writeln!(f, "  - {}", word)?;
        }

        if let Some(hit) = &self.search {
            if hit.matches > 0 {
                write!(f, "Found '{}' {} time(s)", hit.term, hit.matches)?;
            } else {
                write!(f, "'{}' not found", hit.term)?;
            }
        }

        Ok(())
    }
}
