//! Case-insensitive whole-word search.
//!
//! A term matches only where it is bounded by Unicode word boundaries, so
//! `"cat"` is found in `"the cat sat"` but not in `"category"`. The term is
//! escaped before compiling, so `"c++"` or `"a.b"` are searched literally.

use regex::{Regex, RegexBuilder};

/// A compiled whole-word search for one term.
///
/// Compile once, then count matches in as many texts as needed.
#[derive(Debug, Clone)]
pub struct WordSearcher {
    pattern: Option<Regex>,
}

impl WordSearcher {
    /// Compiles a searcher for `term`.
    ///
    /// An empty term yields a searcher that never matches. A term too large
    /// for the regex engine is logged and treated the same way.
    pub fn new(term: &str) -> Self {
        if term.is_empty() {
            return Self { pattern: None };
        }

        let source = format!(r"\b{}\b", regex::escape(&term.to_lowercase()));
        let pattern = match RegexBuilder::new(&source).case_insensitive(true).build() {
            Ok(re) => Some(re),
            Err(e) => {
                log::warn!("search term rejected by regex engine: {}", e);
                None
            }
        };

        Self { pattern }
    }

    /// Counts non-overlapping whole-word matches in `text`.
    #[inline]
    pub fn count(&self, text: &str) -> usize {
        match &self.pattern {
            Some(re) if !text.is_empty() => re.find_iter(text).count(),
            _ => 0,
        }
    }
}

/// Counts case-insensitive, whole-word occurrences of `term` in `text`.
///
/// Empty text or an empty term yields `0`.
///
/// # Example
///
/// ```
/// use textstat_core::analyzer::search::search_word;
///
/// assert_eq!(search_word("The Cat sat", "cat"), 1);
/// assert_eq!(search_word("category cat", "cat"), 1);
/// ```
pub fn search_word(text: &str, term: &str) -> usize {
    if text.is_empty() || term.is_empty() {
        return 0;
    }

    let matches = WordSearcher::new(term).count(text);
    log::debug!("search for {:?}: {} match(es)", term, matches);
    matches
}
