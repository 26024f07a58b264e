use anyhow::{Context, Result};
use engine::score::{rank, Model, Ranking, ScoreParams};
use engine::tokenizer::tokenize;
use engine::{CorpusStats, DocId, InvertedIndex};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// Results per query are truncated to this depth before formatting,
/// matching standard TREC run files.
pub const TOP_K: usize = 100;

/// One JSONL input record, used for both documents and queries.
#[derive(Debug, Deserialize)]
pub struct Record {
    pub id: u32,
    pub text: String,
}

/// Read `{"id": .., "text": ".."}` records, one JSON object per line.
/// Blank lines are skipped; a malformed line is a hard error.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut records = Vec::new();
    for (lineno, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: Record = serde_json::from_str(&line)
            .with_context(|| format!("{}:{}: bad record", path.display(), lineno + 1))?;
        records.push(record);
    }
    Ok(records)
}

/// Tokenize documents and build the index. Documents that tokenize to
/// nothing are dropped by the index builder.
pub fn build_index(docs: &[Record]) -> InvertedIndex {
    InvertedIndex::build(docs.iter().map(|d| (d.id, tokenize(&d.text))))
}

/// Min-max normalize scores into [0, 1] in place. Applied after sorting, so
/// rank order is unchanged. A zero-width score range is left untouched to
/// avoid dividing by zero.
pub fn min_max_normalize(ranking: &mut Ranking) {
    let Some(&(_, first)) = ranking.first() else {
        return;
    };
    // Sorted descending: first is the max, last is the min.
    let max = first;
    let min = ranking.last().map(|&(_, s)| s).unwrap_or(first);
    let range = max - min;
    if range > 0.0 {
        for (_, score) in ranking.iter_mut() {
            *score = (*score - min) / range;
        }
    }
}

/// Format one query's ranking as TREC lines:
/// `<query_id> 0 <doc_id> <rank> <score> <run_tag>`, rank 1-based,
/// score to 4 decimal places, truncated to [`TOP_K`].
pub fn format_results(query_id: u32, ranking: &[(DocId, f64)], run_tag: &str) -> Vec<String> {
    ranking
        .iter()
        .take(TOP_K)
        .enumerate()
        .map(|(i, (doc_id, score))| {
            format!("{query_id} 0 {doc_id} {} {score:.4} {run_tag}", i + 1)
        })
        .collect()
}

/// Score every query against the index with the selected model and return
/// the full run as TREC lines. LM scores are min-max normalized per query.
pub fn run_queries(
    index: &InvertedIndex,
    stats: &CorpusStats,
    queries: &[Record],
    model: Model,
    params: &ScoreParams,
    run_tag: &str,
) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for query in queries {
        let terms = tokenize(&query.text);
        let mut ranking = rank(model, index, stats, &terms, params)?;
        if model == Model::Lm {
            min_max_normalize(&mut ranking);
        }
        tracing::debug!(query_id = query.id, hits = ranking.len(), "query scored");
        lines.extend(format_results(query.id, &ranking, run_tag));
    }
    Ok(lines)
}

pub fn save_results<P: AsRef<Path>>(lines: &[String], path: P) -> Result<()> {
    let path = path.as_ref();
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    file.write_all(lines.join("\n").as_bytes())?;
    Ok(())
}
