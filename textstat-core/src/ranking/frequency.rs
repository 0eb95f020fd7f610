//! Frequency table with first-occurrence tie-breaking.

use rustc_hash::FxHashMap;
use textstat_types::WordCount;

/// Word → count mapping that remembers when each word was first seen.
///
/// Built per call and consumed by [`FrequencyTable::into_top`].
#[derive(Debug, Default)]
pub struct FrequencyTable {
    index: FxHashMap<String, usize>,
    entries: Vec<WordCount>,
    total: usize,
}

impl FrequencyTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `word`.
    #[inline]
    pub fn add(&mut self, word: &str) {
        match self.index.get(word) {
            Some(&slot) => self.entries[slot].count += 1,
            None => {
                self.index.insert(word.to_owned(), self.entries.len());
                self.entries.push(WordCount::new(word, 1, self.total));
            }
        }
        self.total += 1;
    }

    /// Count for `word`, or 0.
    pub fn count(&self, word: &str) -> usize {
        self.index
            .get(word)
            .map_or(0, |&slot| self.entries[slot].count)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of recorded occurrences; equals the sum of all counts.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Returns the `n` most frequent words, ties broken by first appearance.
    pub fn into_top(self, n: usize) -> Vec<WordCount> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.cmp(a));
        entries.truncate(n);
        entries
    }
}

impl<'a> FromIterator<&'a str> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        for word in iter {
            table.add(word);
        }
        table
    }
}
