use criterion::{Criterion, criterion_group, criterion_main};
use sortrie::PrefixTree;
use std::hint::black_box;

/// Deterministic pseudo-word corpus so the benchmark needs no fixture files.
fn make_words(count: usize) -> Vec<Vec<u8>> {
    let mut state: u64 = 0x5eed;
    let mut words = Vec::with_capacity(count);
    for _ in 0..count {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let len = 4 + (state >> 60) as usize;
        let mut seed = state;
        let mut word = Vec::with_capacity(len);
        for _ in 0..len {
            word.push(b'a' + (seed % 26) as u8);
            seed = seed.rotate_right(7) ^ (seed >> 3);
        }
        words.push(word);
    }
    words
}

fn build_tree(words: &[Vec<u8>]) -> PrefixTree<u8> {
    let mut tree = PrefixTree::new();
    for word in words {
        tree.insert(word).unwrap();
    }
    tree
}

fn trie_insert(c: &mut Criterion) {
    let words = make_words(10_000);
    c.bench_function("insert_10k_words", |b| {
        b.iter(|| black_box(build_tree(&words)));
    });
}

fn trie_lookup(c: &mut Criterion) {
    let words = make_words(10_000);
    let misses = make_words(20_000).split_off(10_000);
    let tree = build_tree(&words);

    c.bench_function("contains_prefix_hits", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for word in &words {
                if tree.contains_prefix(black_box(word)) {
                    hits += 1;
                }
            }
            black_box(hits)
        });
    });

    c.bench_function("contains_prefix_mixed", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for word in words.iter().chain(&misses) {
                if tree.contains_prefix(black_box(word)) {
                    hits += 1;
                }
            }
            black_box(hits)
        });
    });
}

criterion_group!(inserts, trie_insert);
criterion_group! {
    name = lookups;
    config = Criterion::default().sample_size(50);
    targets = trie_lookup
}
criterion_main!(inserts, lookups);
