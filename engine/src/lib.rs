pub mod error;
pub mod index;
pub mod score;
pub mod stats;
pub mod tokenizer;

pub use error::Error;
pub use index::{DocId, InvertedIndex, Posting};
pub use score::{rank, Bm25Params, LmParams, Model, Ranking, ScoreParams};
pub use stats::CorpusStats;
