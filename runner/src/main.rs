use anyhow::Result;
use clap::Parser;
use engine::score::{Bm25Params, LmParams, Model, ScoreParams};
use engine::CorpusStats;
use runner::{build_index, load_records, run_queries, save_results};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "runner")]
#[command(about = "Rank a document collection against queries, TREC output", long_about = None)]
struct Args {
    /// Documents JSONL file ({"id": .., "text": ".."} per line)
    #[arg(long)]
    docs: String,
    /// Queries JSONL file (same record shape)
    #[arg(long)]
    queries: String,
    /// Output path for the TREC run file
    #[arg(long)]
    output: String,
    /// Retrieval model: vsm, bm25, or lm
    #[arg(long, default_value = "bm25")]
    model: String,
    /// BM25 term-frequency saturation
    #[arg(long, default_value_t = 1.5)]
    k1: f64,
    /// BM25 length-normalization strength
    #[arg(long, default_value_t = 0.75)]
    b: f64,
    /// Jelinek-Mercer mixing weight on the document model
    #[arg(long, default_value_t = 0.1)]
    lambda: f64,
    /// Run tag written in the last TREC field
    #[arg(long, default_value = "ranklab")]
    run_tag: String,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let model: Model = args.model.parse()?;
    let params = ScoreParams {
        bm25: Bm25Params { k1: args.k1, b: args.b },
        lm: LmParams { lambda: args.lambda, ..Default::default() },
    };

    let docs = load_records(&args.docs)?;
    tracing::info!(num_docs = docs.len(), "documents loaded");
    let start = std::time::Instant::now();
    let index = build_index(&docs);
    let stats = CorpusStats::from_index(&index)?;
    tracing::info!(
        indexed = index.doc_count(),
        avg_doc_length = stats.avg_doc_length,
        took_s = start.elapsed().as_secs_f64(),
        "index built"
    );

    let queries = load_records(&args.queries)?;
    tracing::info!(num_queries = queries.len(), "queries loaded");

    let start = std::time::Instant::now();
    let lines = run_queries(&index, &stats, &queries, model, &params, &args.run_tag)?;
    tracing::info!(
        model = model.as_str(),
        lines = lines.len(),
        took_s = start.elapsed().as_secs_f64(),
        "retrieval complete"
    );

    save_results(&lines, &args.output)?;
    tracing::info!(output = %args.output, "results saved");
    Ok(())
}
