//! Text Report Tool
//!
//! Reads a text file (or stdin) and prints its statistics: word and character
//! counts, sentence and paragraph structure, the most frequent meaningful
//! words, and optionally how often a given word occurs.
//!
//! ## Usage
//!
//! ```bash
//! # Report on a file
//! ./target/release/text_report essay.txt
//!
//! # Search for a word and list the top 10 words
//! ./target/release/text_report essay.txt --search rust --top 10
//!
//! # Read from stdin with a stopword list stored on disk
//! cat essay.txt | ./target/release/text_report - --stopwords english.txt
//!
//! # Load analyzer settings from JSON
//! ./target/release/text_report essay.txt --config textstat.json
//! ```
//!
//! Set `RUST_LOG=debug` to see what the analyzer is doing. If the stopword
//! file cannot be read the report still prints, using basic word counts.

use std::env;
use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::process;
use std::time::Instant;

use textstat_core::stopwords::{BundledDictionary, DictionaryProvider, FileDictionary};
use textstat_core::{top_n_from_signed, AnalysisError, AnalyzerConfig, Result, TextAnalyzer};

const USAGE: &str =
    "Usage: text_report <path|-> [--search <term>] [--top <n>] [--stopwords <file>] [--config <file.json>]";

/// Dictionary chosen on the command line.
enum Dictionary {
    Bundled(BundledDictionary),
    File(FileDictionary),
}

impl DictionaryProvider for Dictionary {
    fn name(&self) -> &str {
        match self {
            Dictionary::Bundled(d) => d.name(),
            Dictionary::File(d) => d.name(),
        }
    }

    fn load(&self) -> Result<Vec<String>> {
        match self {
            Dictionary::Bundled(d) => d.load(),
            Dictionary::File(d) => d.load(),
        }
    }
}

#[derive(Default)]
struct Args {
    input: String,
    search: Option<String>,
    top: Option<usize>,
    stopwords: Option<String>,
    config: Option<String>,
}

fn main() {
    env_logger::init();

    let args = parse_args(env::args().skip(1)).unwrap_or_else(|e| exit_with_usage(&e));

    let mut config = match &args.config {
        Some(path) => load_config(path).unwrap_or_else(|e| exit_with_usage(&e)),
        None => AnalyzerConfig::default(),
    };
    if let Some(top) = args.top {
        config.top_n = top;
    }

    let dictionary = match &args.stopwords {
        Some(path) => Dictionary::File(FileDictionary::new(path)),
        None => Dictionary::Bundled(BundledDictionary),
    };

    let text = read_input(&args.input).unwrap_or_else(|e| exit_with_usage(&e));
    let analyzer = TextAnalyzer::with_provider(dictionary, config);

    let start = Instant::now();
    let report = analyzer.analyze(&text, args.search.as_deref());
    let elapsed = start.elapsed();

    println!("--------------------------------");
    println!("Input       : {}", display_input(&args.input));
    println!("Size        : {} bytes", text.len());
    println!("Elapsed     : {:.3} ms", elapsed.as_secs_f64() * 1000.0);
    println!("--------------------------------");
    println!("{}", report);
    println!("--------------------------------");
}

fn exit_with_usage(message: &dyn fmt::Display) -> ! {
    eprintln!("{}\n{}", message, USAGE);
    process::exit(2);
}

fn parse_args<I>(mut iter: I) -> Result<Args>
where
    I: Iterator<Item = String>,
{
    let mut args = Args::default();
    let mut input = None;

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--search" => args.search = Some(flag_value(&mut iter, "--search")?),
            "--top" => args.top = Some(parse_top(&flag_value(&mut iter, "--top")?)?),
            "--stopwords" => args.stopwords = Some(flag_value(&mut iter, "--stopwords")?),
            "--config" => args.config = Some(flag_value(&mut iter, "--config")?),
            flag if flag.starts_with("--") => {
                return Err(AnalysisError::InvalidArgument(format!("unknown flag {}", flag)));
            }
            _ if input.is_none() => input = Some(arg),
            _ => {
                return Err(AnalysisError::InvalidArgument(format!(
                    "unexpected argument {}",
                    arg
                )));
            }
        }
    }

    args.input =
        input.ok_or_else(|| AnalysisError::InvalidArgument("missing input path".to_owned()))?;
    Ok(args)
}

fn flag_value<I>(iter: &mut I, flag: &str) -> Result<String>
where
    I: Iterator<Item = String>,
{
    iter.next()
        .ok_or_else(|| AnalysisError::InvalidArgument(format!("{} needs a value", flag)))
}

fn parse_top(value: &str) -> Result<usize> {
    let n: i64 = value.parse().map_err(|_| {
        AnalysisError::InvalidArgument(format!("--top expects an integer, got {}", value))
    })?;
    if n <= 0 {
        log::warn!("--top {} is not positive, no words will be ranked", n);
    }
    Ok(top_n_from_signed(n))
}

fn load_config(path: &str) -> std::result::Result<AnalyzerConfig, String> {
    let json = fs::read_to_string(path).map_err(|e| format!("cannot read config {}: {}", path, e))?;
    AnalyzerConfig::from_json(&json).map_err(|e| format!("invalid config {}: {}", path, e))
}

fn read_input(path: &str) -> std::result::Result<String, String> {
    let read = if path == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).map(|_| text)
    } else {
        fs::read_to_string(path)
    };
    read.map_err(|e| format!("cannot read {}: {}", display_input(path), e))
}

fn display_input(path: &str) -> &str {
    if path == "-" {
        "<stdin>"
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args> {
        parse_args(args.iter().map(|s| (*s).to_owned()))
    }

    #[test]
    fn parses_all_flags() {
        let args = parse(&[
            "in.txt",
            "--search",
            "cat",
            "--top",
            "3",
            "--stopwords",
            "sw.txt",
        ])
        .unwrap();
        assert_eq!(args.input, "in.txt");
        assert_eq!(args.search.as_deref(), Some("cat"));
        assert_eq!(args.top, Some(3));
        assert_eq!(args.stopwords.as_deref(), Some("sw.txt"));
        assert!(args.config.is_none());
    }

    #[test]
    fn negative_top_is_clamped() {
        assert_eq!(parse(&["-", "--top", "-2"]).unwrap().top, Some(0));
    }

    #[test]
    fn rejects_bad_input() {
        for bad in [
            &["in.txt", "--top", "many"][..],
            &["in.txt", "--search"][..],
            &["in.txt", "--verbose"][..],
            &["a.txt", "b.txt"][..],
            &[][..],
        ] {
            assert!(matches!(parse(bad), Err(AnalysisError::InvalidArgument(_))));
        }
    }

    #[test]
    fn read_errors_name_the_path() {
        let missing = env::temp_dir().join("text_report_missing_input.txt");
        let missing = missing.to_string_lossy();

        let err = read_input(&missing).unwrap_err();
        assert!(err.starts_with("cannot read "));
        assert!(err.contains(missing.as_ref()));

        let err = load_config(&missing).unwrap_err();
        assert!(err.starts_with("cannot read config "));
        assert!(err.contains(missing.as_ref()));
    }

    #[test]
    fn invalid_config_names_the_path() {
        let path = env::temp_dir().join("text_report_bad_config.json");
        fs::write(&path, r#"{ "top": 3 }"#).unwrap();
        let path_str = path.to_string_lossy().into_owned();

        let err = load_config(&path_str).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(err.starts_with("invalid config "));
        assert!(err.contains(&path_str));
    }
}
