use thiserror::Error;

/// Errors produced while building corpus statistics or dispatching a model.
///
/// Query terms missing from the index or the corpus are never errors; each
/// model handles them per its own semantics.
#[derive(Debug, Error)]
pub enum Error {
    /// Corpus statistics are degenerate and would make scoring arithmetic
    /// undefined (zero documents, zero average length).
    #[error("invalid corpus: {reason}")]
    InvalidCorpus { reason: String },

    /// A model name outside {vsm, bm25, lm} was requested.
    #[error("unknown retrieval model: {name:?} (expected vsm, bm25, or lm)")]
    UnknownModel { name: String },
}
