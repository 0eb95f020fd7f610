//! Stopword filtering.
//!
//! This module provides the stopword components:
//! - **Dictionary providers**: where the base word list comes from
//! - **Loader**: builds the set once and caches it for reuse

pub mod dictionary;
pub mod loader;

pub use dictionary::{
    BundledDictionary, DictionaryProvider, FileDictionary, StaticDictionary, ENGLISH_STOPWORDS,
    EXTRA_STOPWORDS,
};
pub use loader::{StopwordLoader, StopwordSet};
