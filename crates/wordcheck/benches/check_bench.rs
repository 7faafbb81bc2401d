// Criterion benchmarks for the trie store and the end-to-end check path.
//
// Run:
//   cargo bench -p wordcheck

use criterion::{Criterion, criterion_group, criterion_main};

use wordcheck::Dictionary;
use wordcheck_trie::Trie;

// ---------------------------------------------------------------------------
// Synthetic word list
// ---------------------------------------------------------------------------

/// Deterministic pseudo-words: enough shared prefixes to exercise branching.
fn wordlist(n: usize) -> Vec<String> {
    let stems = ["app", "bar", "cart", "dot", "ever", "fill", "gram", "hint"];
    let suffixes = ["", "s", "ed", "ing", "er", "ly", "ment", "ness"];
    (0..n)
        .map(|i| {
            format!(
                "{}{}{}",
                stems[i % stems.len()],
                suffixes[(i / stems.len()) % suffixes.len()],
                i / (stems.len() * suffixes.len())
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Insert 10k words into a fresh trie.
fn bench_trie_insert(c: &mut Criterion) {
    let words = wordlist(10_000);
    c.bench_function("trie_insert_10k", |b| {
        b.iter(|| {
            let mut trie = Trie::new();
            for word in &words {
                trie.insert(word).unwrap();
            }
            std::hint::black_box(trie.node_count());
        });
    });
}

/// Membership lookups against a populated trie (half hits, half misses).
fn bench_trie_contains(c: &mut Criterion) {
    let words = wordlist(10_000);
    let mut trie = Trie::new();
    for word in &words {
        trie.insert(word).unwrap();
    }

    c.bench_function("trie_contains_10k", |b| {
        b.iter(|| {
            for word in &words {
                std::hint::black_box(trie.contains(word));
                std::hint::black_box(trie.contains(&format!("{word}x")));
            }
        });
    });
}

/// Full check round trip through the worker, flush included.
fn bench_dictionary_check(c: &mut Criterion) {
    let words = wordlist(10_000);
    let dict = Dictionary::new().expect("dictionary");
    for word in &words {
        dict.add_word(word).expect("add_word");
    }
    let text = words.join(" ");

    c.bench_function("dictionary_check_10k_words", |b| {
        b.iter(|| {
            dict.check(&text, |_| {}).expect("check");
            dict.flush().expect("flush");
        });
    });
}

criterion_group!(
    benches,
    bench_trie_insert,
    bench_trie_contains,
    bench_dictionary_check
);
criterion_main!(benches);
