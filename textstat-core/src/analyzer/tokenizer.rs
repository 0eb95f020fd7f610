//! Streaming Whitespace Tokenizer
//!
//! Splits raw text into whitespace-separated tokens and emits each one with its
//! position. It is the first stage of word counting and of the basic
//! (fallback) frequency ranking.
//!
//! ## What It Does
//!
//! Given input like `"hello   world\tfoo"`, it emits:
//!
//! ```ignore
//! ("hello", 0)
//! ("world", 1)
//! ("foo", 2)
//! ```
//!
//! ## Key Features
//!
//! - **Zero Allocation**: tokens are slices of the input, not new strings
//! - **Streaming**: tokens are handed to a callback, nothing is collected
//! - **Unicode whitespace**: any run of `char::is_whitespace` separates tokens,
//!   so raw user text needs no normalization first
//!
//! ## Usage
//!
//! ```rust
//! use textstat_core::analyzer::tokenizer::Tokenizer;
//!
//! let mut words = Vec::new();
//! Tokenizer::new().tokenize("one  two\nthree", |text, position| {
//!     words.push((text, position));
//! });
//!
//! assert_eq!(words, vec![("one", 0), ("two", 1), ("three", 2)]);
//! ```

/// Streaming tokenizer - splits text on whitespace runs.
///
/// Tokens never contain whitespace and are never empty. Leading, trailing
/// and repeated whitespace produce no tokens.
#[derive(Debug, Default, Copy, Clone)]
pub struct Tokenizer;

impl Tokenizer {
    /// Creates a new tokenizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Tokenizes `text` and emits `(token, position)`.
    ///
    /// Position is `u32`. After emitting a token at position `u32::MAX`,
    /// further emissions stop (overflow protection).
    #[inline]
    pub fn tokenize<'t, F>(&self, text: &'t str, mut emit: F)
    where
        F: FnMut(&'t str, u32),
    {
        let mut start: Option<usize> = None;
        let mut pos = 0u32;

        for (i, c) in text.char_indices() {
            if c.is_whitespace() {
                if let Some(s) = start.take() {
                    emit(&text[s..i], pos);
                    if pos == u32::MAX {
                        return;
                    }
                    pos += 1;
                }
            } else if start.is_none() {
                start = Some(i);
            }
        }

        // Last token has no trailing separator
        if let Some(s) = start {
            emit(&text[s..], pos);
        }
    }

    /// Counts tokens without materializing them.
    #[inline]
    pub fn count(&self, text: &str) -> usize {
        let mut n = 0usize;
        self.tokenize(text, |_, _| n += 1);
        n
    }
}
