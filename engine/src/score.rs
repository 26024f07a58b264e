//! The scoring engine: three exhaustive ranking functions over an immutable
//! index plus corpus statistics.
//!
//! Every scorer returns documents sorted by score descending with ties broken
//! by ascending document id, so repeated runs over the same index produce
//! identical rankings.

use crate::error::Error;
use crate::index::{DocId, InvertedIndex};
use crate::stats::CorpusStats;
use std::collections::HashMap;
use std::str::FromStr;

/// Ranked output: (document id, score) pairs, best first.
pub type Ranking = Vec<(DocId, f64)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Model {
    Vsm,
    Bm25,
    Lm,
}

impl FromStr for Model {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vsm" => Ok(Model::Vsm),
            "bm25" => Ok(Model::Bm25),
            "lm" => Ok(Model::Lm),
            other => Err(Error::UnknownModel {
                name: other.to_string(),
            }),
        }
    }
}

impl Model {
    pub fn as_str(self) -> &'static str {
        match self {
            Model::Vsm => "vsm",
            Model::Bm25 => "bm25",
            Model::Lm => "lm",
        }
    }
}

/// Okapi BM25 hyperparameters: `k1` controls term-frequency saturation,
/// `b` controls document-length normalization strength.
#[derive(Debug, Clone, Copy)]
pub struct Bm25Params {
    pub k1: f64,
    pub b: f64,
}

impl Default for Bm25Params {
    fn default() -> Self {
        Self { k1: 1.5, b: 0.75 }
    }
}

/// Jelinek-Mercer smoothing parameters: `lambda` weights the document-level
/// term probability against the corpus-level one; `floor` is the probability
/// assigned to terms never seen in the corpus.
#[derive(Debug, Clone, Copy)]
pub struct LmParams {
    pub lambda: f64,
    pub floor: f64,
}

impl Default for LmParams {
    fn default() -> Self {
        Self {
            lambda: 0.1,
            floor: 1e-8,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreParams {
    pub bm25: Bm25Params,
    pub lm: LmParams,
}

/// Dispatch a tokenized query to the selected model.
pub fn rank(
    model: Model,
    index: &InvertedIndex,
    stats: &CorpusStats,
    query: &[String],
    params: &ScoreParams,
) -> Result<Ranking, Error> {
    match model {
        Model::Vsm => Ok(vsm(index, stats, query)),
        Model::Bm25 => bm25(index, stats, query, &params.bm25),
        Model::Lm => Ok(lm(index, stats, query, &params.lm)),
    }
}

/// Vector-space model: summed TF-IDF weight over the query's distinct terms.
/// Terms absent from the index contribute nothing; only documents with a
/// nonzero accumulated score appear in the output.
pub fn vsm(index: &InvertedIndex, stats: &CorpusStats, query: &[String]) -> Ranking {
    let mut distinct: Vec<&String> = query.iter().collect();
    distinct.sort_unstable();
    distinct.dedup();

    let n = stats.doc_count as f64;
    let mut scores: HashMap<DocId, f64> = HashMap::new();
    for term in distinct {
        let Some(postings) = index.postings(term) else {
            continue;
        };
        let idf = ((n + 1.0) / (postings.len() as f64 + 1.0)).ln();
        for p in postings {
            *scores.entry(p.doc_id).or_insert(0.0) += f64::from(p.tf) * idf;
        }
    }
    // A term present in every document has zero idf; drop documents whose
    // whole accumulated weight is zero.
    scores.retain(|_, score| *score != 0.0);
    sorted_ranking(scores)
}

/// Okapi BM25. Query terms score once per occurrence, unlike VSM which
/// deduplicates. The `+ 1` inside the idf logarithm keeps it non-negative
/// even for terms present in every document.
pub fn bm25(
    index: &InvertedIndex,
    stats: &CorpusStats,
    query: &[String],
    params: &Bm25Params,
) -> Result<Ranking, Error> {
    if stats.avg_doc_length <= 0.0 {
        return Err(Error::InvalidCorpus {
            reason: "zero average document length".into(),
        });
    }

    let n = stats.doc_count as f64;
    let Bm25Params { k1, b } = *params;
    let mut scores: HashMap<DocId, f64> = HashMap::new();
    for term in query {
        let Some(postings) = index.postings(term) else {
            continue;
        };
        let df = postings.len() as f64;
        let idf = ((n - df + 0.5) / (df + 0.5) + 1.0).ln();
        for p in postings {
            let tf = f64::from(p.tf);
            let doc_len = f64::from(index.doc_length(p.doc_id).unwrap_or(0));
            let numerator = tf * (k1 + 1.0);
            let denominator = tf + k1 * (1.0 - b + b * (doc_len / stats.avg_doc_length));
            *scores.entry(p.doc_id).or_insert(0.0) += idf * numerator / denominator;
        }
    }
    Ok(sorted_ranking(scores))
}

/// Jelinek-Mercer smoothed unigram language model. Scores every document in
/// the collection by the log-likelihood of generating the query, so the
/// output always covers the full corpus. The corpus floor keeps the smoothed
/// probability strictly positive, so `ln` never sees a non-positive argument.
pub fn lm(
    index: &InvertedIndex,
    stats: &CorpusStats,
    query: &[String],
    params: &LmParams,
) -> Ranking {
    let LmParams { lambda, floor } = *params;

    // One doc->tf table per query term, pulled from the posting lists, so the
    // per-document loop stays O(|documents| x |query terms|).
    let term_tfs: Vec<(HashMap<DocId, u32>, f64)> = query
        .iter()
        .map(|term| {
            let tfs = index
                .postings(term)
                .unwrap_or(&[])
                .iter()
                .map(|p| (p.doc_id, p.tf))
                .collect();
            (tfs, stats.term_prob(term, floor))
        })
        .collect();

    let mut scores: HashMap<DocId, f64> = HashMap::with_capacity(index.doc_count());
    for (&doc_id, &doc_len) in index.doc_lengths() {
        let doc_len = f64::from(doc_len);
        let mut doc_score = 0.0;
        for (tfs, p_corpus) in &term_tfs {
            let p_doc = tfs.get(&doc_id).map_or(0.0, |&tf| f64::from(tf) / doc_len);
            let smoothed = lambda * p_doc + (1.0 - lambda) * p_corpus;
            doc_score += smoothed.ln();
        }
        scores.insert(doc_id, doc_score);
    }
    sorted_ranking(scores)
}

fn sorted_ranking(scores: HashMap<DocId, f64>) -> Ranking {
    let mut ranked: Vec<(DocId, f64)> = scores.into_iter().collect();
    ranked.sort_unstable_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });
    ranked
}
