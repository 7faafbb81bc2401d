// wordcheck-check: spell-check text against a word-list dictionary.
//
// Loads a dictionary file (one word per line), then checks the given text
// files (or stdin when no files are given) and prints each misspelled word
// on its own line, in document order, duplicates included.
//
// Usage:
//   wordcheck-check -d DICT_FILE [FILE ...]
//
// Options:
//   -d, --dict PATH   Word-list file, one word per line (required)
//   -q, --quiet       Suppress the load summary on stderr
//   -h, --help        Print help

use std::io::{self, BufWriter, Read, Write};
use std::path::Path;
use std::sync::mpsc;

fn main() {
    wordcheck_cli::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = wordcheck_cli::parse_dict_path(&args);

    if wordcheck_cli::wants_help(&args) {
        println!("wordcheck-check: spell-check text against a word-list dictionary.");
        println!();
        println!("Usage: wordcheck-check -d DICT_FILE [FILE ...]");
        println!();
        println!("Reads the given files (or stdin) and prints each word that is");
        println!("not in the dictionary, one per line, in document order.");
        println!();
        println!("Options:");
        println!("  -d, --dict PATH   Word-list file, one word per line");
        println!("  -q, --quiet       Suppress the load summary on stderr");
        println!("  -h, --help        Print this help");
        return;
    }

    let quiet = args.iter().any(|a| a == "-q" || a == "--quiet");
    let files: Vec<&String> = args
        .iter()
        .filter(|a| !a.starts_with('-') || a.as_str() == "-")
        .collect();

    let Some(dict_path) = dict_path else {
        wordcheck_cli::fatal("a dictionary file is required (-d PATH)");
    };

    let (mut dict, report) = wordcheck_cli::load_dictionary(Path::new(&dict_path))
        .unwrap_or_else(|e| wordcheck_cli::fatal(&e));
    if !quiet {
        eprintln!(
            "{} words loaded from {dict_path} ({} rejected)",
            report.added, report.rejected
        );
    }

    let text = read_input(&files).unwrap_or_else(|e| wordcheck_cli::fatal(&e));

    // Misspellings arrive on the worker thread; funnel them back here so
    // stdout writing stays on the main thread.
    let (tx, rx) = mpsc::channel::<String>();
    dict.check(&text, move |word| {
        let _ = tx.send(word.to_owned());
    })
    .unwrap_or_else(|e| wordcheck_cli::fatal(&format!("check failed: {e}")));
    dict.flush()
        .unwrap_or_else(|e| wordcheck_cli::fatal(&format!("flush failed: {e}")));

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut misspelled = 0usize;
    while let Ok(word) = rx.try_recv() {
        misspelled += 1;
        let _ = writeln!(out, "{word}");
    }
    let _ = out.flush();

    if !quiet {
        eprintln!("{misspelled} misspelled word(s)");
    }

    let _ = dict.close();
    if misspelled > 0 {
        std::process::exit(1);
    }
}

/// Concatenate the contents of the given files; `-` or no files means stdin.
fn read_input(files: &[&String]) -> Result<String, String> {
    if files.is_empty() || files.iter().any(|f| f.as_str() == "-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| format!("failed to read stdin: {e}"))?;
        return Ok(text);
    }

    let mut text = String::new();
    for file in files {
        let content = std::fs::read_to_string(file)
            .map_err(|e| format!("failed to read {file}: {e}"))?;
        text.push_str(&content);
        text.push('\n');
    }
    Ok(text)
}
