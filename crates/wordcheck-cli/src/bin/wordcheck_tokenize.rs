// wordcheck-tokenize: print the token stream for text on stdin.
//
// Debugging aid: shows exactly which candidate words the checker would
// look up, one token per line, in document order.
//
// Usage:
//   wordcheck-tokenize [-h]

use std::io::{self, BufWriter, Read, Write};

use wordcheck::tokenizer::Tokens;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if wordcheck_cli::wants_help(&args) {
        println!("wordcheck-tokenize: print the token stream for text on stdin.");
        println!();
        println!("Usage: wordcheck-tokenize < input.txt");
        return;
    }

    let mut text = String::new();
    if io::stdin().read_to_string(&mut text).is_err() {
        wordcheck_cli::fatal("failed to read stdin");
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for token in Tokens::new(&text) {
        let _ = writeln!(out, "{token}");
    }
}
