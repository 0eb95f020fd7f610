//! Whole-word extraction.
//!
//! Pulls lowercase words made only of ASCII letters out of raw text. A run of
//! letters counts as a word only when it is bounded by non-word characters on
//! both sides, the same `\b` rule [`search`](crate::analyzer::search) uses, so
//! ranking and search agree on what a word is:
//!
//! - `"don't"` yields `don` and `t`
//! - `"abc123"`, `"foo_bar"` and `"café"` yield nothing
//!
//! Also hosts the punctuation stripping used by the basic ranker.

/// Characters stripped from both ends of a token by the basic ranker.
pub const EDGE_PUNCTUATION: [char; 6] = ['.', ',', '!', '?', '"', ';'];

/// Unicode word character, matching regex `\w`.
#[inline(always)]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Lowercased whole words of a text.
///
/// Owns one lowercased copy of the input and hands out `&str` slices into it
/// through byte spans, so there is a single allocation for the buffer instead
/// of one per word.
#[derive(Debug, Clone, Default)]
pub struct Words {
    buffer: String,
    spans: Vec<(u32, u32)>,
}

impl Words {
    /// Extracts the words of `text`.
    ///
    /// # Example
    ///
    /// ```
    /// use textstat_core::analyzer::words::Words;
    ///
    /// let words = Words::extract("The Cat's 2nd toy, a ball!");
    /// let collected: Vec<&str> = words.iter().collect();
    /// assert_eq!(collected, vec!["the", "cat", "s", "toy", "a", "ball"]);
    /// ```
    pub fn extract(text: &str) -> Self {
        // ASCII lowercasing keeps every byte offset stable.
        let buffer = text.to_ascii_lowercase();
        let bytes = buffer.as_bytes();
        let mut spans = Vec::new();
        let mut i = 0usize;

        while i < bytes.len() {
            if !bytes[i].is_ascii_alphabetic() {
                i += 1;
                continue;
            }

            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_alphabetic() {
                i += 1;
            }

            // ASCII bytes are always char boundaries.
            let before = buffer[..start].chars().next_back();
            let after = buffer[i..].chars().next();
            if !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char) {
                spans.push((start as u32, i as u32));
            }
        }

        Self { buffer, spans }
    }

    /// Returns an iterator over the words, in text order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.spans
            .iter()
            .map(|&(s, e)| &self.buffer[s as usize..e as usize])
    }

    /// Returns the number of words.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Returns `true` if there are no words.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

/// Strips [`EDGE_PUNCTUATION`] from both ends of a token.
#[inline]
pub fn strip_edge_punctuation(token: &str) -> &str {
    token.trim_matches(&EDGE_PUNCTUATION[..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(input: &str) -> Vec<String> {
        Words::extract(input).iter().map(str::to_owned).collect()
    }

    #[test]
    fn lowercases() {
        assert_eq!(words("HELLO World"), vec!["hello", "world"]);
    }

    #[test]
    fn empty_input() {
        let w = Words::extract("");
        assert!(w.is_empty());
        assert_eq!(w.len(), 0);
    }

    #[test]
    fn punctuation_separates() {
        assert_eq!(
            words("quick,brown.fox!jumps?"),
            vec!["quick", "brown", "fox", "jumps"]
        );
    }

    #[test]
    fn apostrophes_split_words() {
        assert_eq!(words("don't"), vec!["don", "t"]);
    }

    #[test]
    fn digits_glue_to_letters() {
        assert!(words("abc123").is_empty());
        assert!(words("123abc").is_empty());
        assert_eq!(words("abc 123 def"), vec!["abc", "def"]);
    }

    #[test]
    fn underscore_is_a_word_char() {
        assert!(words("foo_bar").is_empty());
    }

    #[test]
    fn non_ascii_letters_glue_to_ascii_runs() {
        assert!(words("café").is_empty());
        assert_eq!(words("café au lait"), vec!["au", "lait"]);
    }

    #[test]
    fn non_word_unicode_is_a_boundary() {
        assert_eq!(words("«bonjour» — salut"), vec!["bonjour", "salut"]);
    }

    #[test]
    fn hyphen_splits() {
        assert_eq!(words("well-known"), vec!["well", "known"]);
    }

    #[test]
    fn strip_edges() {
        assert_eq!(strip_edge_punctuation("hello,"), "hello");
        assert_eq!(strip_edge_punctuation("\"quoted!\""), "quoted");
        assert_eq!(strip_edge_punctuation(";;"), "");
        assert_eq!(strip_edge_punctuation("it's"), "it's");
        assert_eq!(strip_edge_punctuation("(paren)"), "(paren)");
    }
}
