//! Word and character counting.

use textstat_types::TextCounts;

use crate::analyzer::tokenizer::Tokenizer;

/// Counts whitespace-separated words and characters.
///
/// Characters are Unicode scalar values of the unmodified input, whitespace
/// included. Empty input yields `(0, 0)`.
///
/// # Example
///
/// ```
/// use textstat_core::analyzer::counter::count_words_and_chars;
///
/// assert_eq!(count_words_and_chars("Hello  world"), (2, 12));
/// assert_eq!(count_words_and_chars(""), (0, 0));
/// ```
#[inline]
pub fn count_words_and_chars(text: &str) -> (usize, usize) {
    if text.is_empty() {
        return (0, 0);
    }

    (Tokenizer::new().count(text), text.chars().count())
}

/// Counts characters with ASCII spaces removed.
///
/// Only `' '` is dropped; tabs and newlines still count.
#[inline]
pub fn count_chars_excluding_spaces(text: &str) -> usize {
    text.chars().filter(|&c| c != ' ').count()
}

/// Collects all counts for `text` in one value.
pub fn text_counts(text: &str) -> TextCounts {
    let (words, chars) = count_words_and_chars(text);
    TextCounts {
        words,
        chars,
        chars_no_spaces: count_chars_excluding_spaces(text),
    }
}
