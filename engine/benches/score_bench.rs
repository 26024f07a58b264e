use criterion::{criterion_group, criterion_main, Criterion};
use engine::score::{bm25, lm, vsm, Bm25Params, LmParams};
use engine::{CorpusStats, InvertedIndex};

/// Synthetic corpus: 2000 documents over a 500-term vocabulary with a
/// Zipf-ish skew from a small multiplicative congruential generator.
fn synthetic_corpus() -> (InvertedIndex, CorpusStats) {
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (state >> 33) as u32
    };

    let docs = (0..2000u32).map(|doc_id| {
        let len = 20 + (next() % 80) as usize;
        let tokens = (0..len)
            .map(|_| {
                let r = next() % 1000;
                let term = if r < 500 { r % 50 } else { r % 500 };
                format!("t{term}")
            })
            .collect();
        (doc_id + 1, tokens)
    });
    let index = InvertedIndex::build(docs);
    let stats = CorpusStats::from_index(&index).unwrap();
    (index, stats)
}

fn bench_scorers(c: &mut Criterion) {
    let (index, stats) = synthetic_corpus();
    let query: Vec<String> = ["t3", "t17", "t42", "t250"]
        .iter()
        .map(|t| t.to_string())
        .collect();

    c.bench_function("vsm_2000_docs", |b| b.iter(|| vsm(&index, &stats, &query)));
    c.bench_function("bm25_2000_docs", |b| {
        b.iter(|| bm25(&index, &stats, &query, &Bm25Params::default()).unwrap())
    });
    c.bench_function("lm_2000_docs", |b| {
        b.iter(|| lm(&index, &stats, &query, &LmParams::default()))
    });
}

criterion_group!(benches, bench_scorers);
criterion_main!(benches);
