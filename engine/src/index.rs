use std::collections::HashMap;

pub type DocId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Posting {
    pub doc_id: DocId,
    /// Occurrences of the term within this document, pre-aggregated: a term
    /// holds at most one posting per document.
    pub tf: u32,
}

/// Term -> postings mapping plus per-document lengths, built once per run
/// and read-only afterwards.
#[derive(Debug, Default, Clone)]
pub struct InvertedIndex {
    postings: HashMap<String, Vec<Posting>>,
    doc_lengths: HashMap<DocId, u32>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from tokenized documents. Documents with an empty
    /// token sequence are skipped so downstream length arithmetic never
    /// sees a zero-length document.
    pub fn build<I>(docs: I) -> Self
    where
        I: IntoIterator<Item = (DocId, Vec<String>)>,
    {
        let mut index = Self::new();
        for (doc_id, tokens) in docs {
            index.add_document(doc_id, tokens);
        }
        index
    }

    pub fn add_document(&mut self, doc_id: DocId, tokens: Vec<String>) {
        if tokens.is_empty() {
            tracing::warn!(doc_id, "skipping empty document");
            return;
        }

        let mut tf_counts: HashMap<String, u32> = HashMap::new();
        for token in &tokens {
            *tf_counts.entry(token.clone()).or_insert(0) += 1;
        }

        self.doc_lengths.insert(doc_id, tokens.len() as u32);
        for (term, tf) in tf_counts {
            self.postings
                .entry(term)
                .or_default()
                .push(Posting { doc_id, tf });
        }
    }

    pub fn doc_count(&self) -> usize {
        self.doc_lengths.len()
    }

    /// Number of documents containing the term (posting-list length).
    pub fn doc_freq(&self, term: &str) -> usize {
        self.postings.get(term).map_or(0, |p| p.len())
    }

    pub fn postings(&self, term: &str) -> Option<&[Posting]> {
        self.postings.get(term).map(|p| p.as_slice())
    }

    pub fn doc_length(&self, doc_id: DocId) -> Option<u32> {
        self.doc_lengths.get(&doc_id).copied()
    }

    pub fn doc_lengths(&self) -> &HashMap<DocId, u32> {
        &self.doc_lengths
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(|s| s.as_str())
    }
}
