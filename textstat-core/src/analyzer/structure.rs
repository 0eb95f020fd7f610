//! Sentence and paragraph structure.
//!
//! Sentences end at `.`, `!` or `?`; paragraphs are separated by a blank line
//! (`"\n\n"`). Segments that are empty or whitespace-only after trimming are
//! never counted, so runs like `"?!"` or `"..."` end a single sentence.

use memchr::{memchr3_iter, memmem};
use textstat_types::StructureStats;

use crate::analyzer::counter::count_words_and_chars;

const PARAGRAPH_SEPARATOR: &[u8] = b"\n\n";

#[inline(always)]
fn is_content(segment: &str) -> bool {
    !segment.trim().is_empty()
}

/// Counts non-blank sentences.
pub fn count_sentences(text: &str) -> usize {
    let mut start = 0usize;
    let mut count = 0usize;

    // Terminators are ASCII, so every split point is a char boundary.
    for i in memchr3_iter(b'.', b'!', b'?', text.as_bytes()) {
        if is_content(&text[start..i]) {
            count += 1;
        }
        start = i + 1;
    }

    if is_content(&text[start..]) {
        count += 1;
    }

    count
}

/// Counts non-blank paragraphs.
pub fn count_paragraphs(text: &str) -> usize {
    let mut start = 0usize;
    let mut count = 0usize;

    for i in memmem::find_iter(text.as_bytes(), PARAGRAPH_SEPARATOR) {
        if is_content(&text[start..i]) {
            count += 1;
        }
        start = i + PARAGRAPH_SEPARATOR.len();
    }

    if is_content(&text[start..]) {
        count += 1;
    }

    count
}

/// Rounds to one decimal place using the exact binary value of `value`.
///
/// Scaling by 10 first would turn `1.15` (stored as `1.1499…`) into a tie.
#[inline]
fn round_one_decimal(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}

/// Computes structure statistics when the word count is already known.
pub fn structure_with_word_count(text: &str, word_count: usize) -> StructureStats {
    let sentences = count_sentences(text);
    let paragraphs = count_paragraphs(text);
    let avg_words_per_sentence = round_one_decimal(word_count as f64 / sentences.max(1) as f64);

    StructureStats {
        sentences,
        paragraphs,
        avg_words_per_sentence,
    }
}

/// Splits `text` into sentences and paragraphs and derives words per sentence.
///
/// Text without any terminator still counts as one sentence if it has content,
/// and the average never divides by zero.
///
/// # Example
///
/// ```
/// use textstat_core::analyzer::structure::analyze_structure;
///
/// let stats = analyze_structure("Hello world. How are you? Fine!");
/// assert_eq!(stats.sentences, 3);
/// assert_eq!(stats.paragraphs, 1);
/// assert_eq!(stats.avg_words_per_sentence, 2.0);
/// ```
pub fn analyze_structure(text: &str) -> StructureStats {
    let (words, _) = count_words_and_chars(text);
    structure_with_word_count(text, words)
}
