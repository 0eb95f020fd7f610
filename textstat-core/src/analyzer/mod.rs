//! Text analysis primitives.
//!
//! This module provides the stateless analysis functions:
//! - **Tokenizer**: Splits raw text on whitespace runs
//! - **Counter**: Word and character counts
//! - **Words**: Extracts lowercase whole ASCII words
//! - **Search**: Case-insensitive whole-word search
//! - **Structure**: Sentence and paragraph statistics

pub mod counter;
pub mod search;
pub mod structure;
pub mod tokenizer;
pub mod words;

pub use counter::{count_chars_excluding_spaces, count_words_and_chars, text_counts};
pub use search::{search_word, WordSearcher};
pub use structure::analyze_structure;
pub use tokenizer::Tokenizer;
pub use words::Words;
