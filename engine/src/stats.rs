use crate::error::Error;
use crate::index::InvertedIndex;
use std::collections::HashMap;

/// Corpus-wide aggregates derived from a built index, computed once per run.
///
/// Construction fails fast on a degenerate corpus so every scorer can rely
/// on `avg_doc_length > 0` and `total_tokens > 0`.
#[derive(Debug, Clone)]
pub struct CorpusStats {
    pub doc_count: usize,
    pub avg_doc_length: f64,
    pub total_tokens: u64,
    term_freq: HashMap<String, u64>,
}

impl CorpusStats {
    pub fn from_index(index: &InvertedIndex) -> Result<Self, Error> {
        let doc_count = index.doc_count();
        if doc_count == 0 {
            return Err(Error::InvalidCorpus {
                reason: "no documents indexed".into(),
            });
        }

        let total_tokens: u64 = index.doc_lengths().values().map(|&l| u64::from(l)).sum();
        if total_tokens == 0 {
            return Err(Error::InvalidCorpus {
                reason: "zero total corpus tokens".into(),
            });
        }

        let mut term_freq: HashMap<String, u64> = HashMap::new();
        for term in index.terms() {
            let freq: u64 = index
                .postings(term)
                .unwrap_or(&[])
                .iter()
                .map(|p| u64::from(p.tf))
                .sum();
            term_freq.insert(term.to_string(), freq);
        }

        let avg_doc_length = total_tokens as f64 / doc_count as f64;
        tracing::debug!(doc_count, total_tokens, avg_doc_length, "corpus statistics built");

        Ok(Self {
            doc_count,
            avg_doc_length,
            total_tokens,
            term_freq,
        })
    }

    pub fn term_freq(&self, term: &str) -> u64 {
        self.term_freq.get(term).copied().unwrap_or(0)
    }

    /// Corpus probability of a term. Terms never seen in the corpus get the
    /// caller's floor instead of zero so log-space scoring stays defined.
    pub fn term_prob(&self, term: &str, floor: f64) -> f64 {
        match self.term_freq.get(term) {
            Some(&freq) => freq as f64 / self.total_tokens as f64,
            None => floor,
        }
    }
}
