// wordcheck-cli: shared utilities for CLI tools.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::process;

use wordcheck::{Dictionary, DictionaryError};

/// Result of loading a word-list file into a dictionary.
pub struct LoadReport {
    /// Lines accepted as words.
    pub added: usize,
    /// Non-blank lines rejected by validation.
    pub rejected: usize,
}

/// Load a word-list file (one word per line) into a fresh dictionary.
///
/// Blank lines are skipped. Lines that fail word validation are counted,
/// logged, and skipped, since a dirty dictionary file should not abort the
/// whole load. Returns the dictionary together with a load report; callers
/// who need the words applied before the first check can rely on task
/// ordering (checks are enqueued behind the adds) or call `flush`.
pub fn load_dictionary(path: &Path) -> Result<(Dictionary, LoadReport), String> {
    let file = File::open(path)
        .map_err(|e| format!("failed to open dictionary file {}: {e}", path.display()))?;

    let dict = Dictionary::new().map_err(|e| format!("failed to create dictionary: {e}"))?;
    let mut report = LoadReport {
        added: 0,
        rejected: 0,
    };

    for (lineno, line) in BufReader::new(file).lines().enumerate() {
        let line = line
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
        let word = line.trim_end_matches(['\r', '\n']);
        if word.is_empty() {
            continue;
        }
        match dict.add_word(word) {
            Ok(()) => report.added += 1,
            Err(DictionaryError::InvalidWord(err)) => {
                tracing::warn!(
                    line = lineno + 1,
                    %err,
                    "skipping invalid dictionary entry"
                );
                report.rejected += 1;
            }
            Err(other) => return Err(format!("failed to add word: {other}")),
        }
    }

    Ok((dict, report))
}

/// Initialize tracing output for a CLI binary.
///
/// Filter with `RUST_LOG`, e.g. `RUST_LOG=wordcheck=debug`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Parse a `--dict=PATH` / `-d PATH` argument from command line args.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut dict_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--dict=") {
            dict_path = Some(val.to_string());
        } else if arg == "--dict" || arg == "-d" {
            if i + 1 < args.len() {
                dict_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {arg} requires a value");
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (dict_path, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
