//! One-call text analysis.
//!
//! [`TextAnalyzer`] bundles the stateless analysis functions with a lazily
//! loaded stopword set and produces an [`AnalysisReport`]:
//!
//! ```
//! use textstat_core::analysis::TextAnalyzer;
//!
//! let analyzer = TextAnalyzer::new();
//! let report = analyzer.analyze("The cat sat. The cat slept.", Some("cat"));
//!
//! assert_eq!(report.counts.words, 6);
//! assert_eq!(report.structure.sentences, 2);
//! assert_eq!(report.search.map(|hit| hit.matches), Some(2));
//! ```

mod api;
mod report;
mod types;

pub use report::AnalysisReport;
pub use types::TextAnalyzer;
