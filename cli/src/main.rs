use anyhow::{Context, Result};
use clap::Parser;
use search_cli::display::{terminal_width, DisplayOptions};
use search_cli::{run_query, run_repl};
use search_core::dataset::load_documents;
use search_core::SearchEngine;
use std::io::{self, IsTerminal};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "search")]
#[command(about = "Rank lines of a tab-separated dataset against free-text queries with TF-IDF", long_about = None)]
struct Args {
    /// Dataset file, one `<label>\t<text>` document per line
    #[arg(short = 'd', long)]
    dataset: PathBuf,
    /// Number of top results to return
    #[arg(short = 'k', long = "top-k", default_value = "5")]
    k: NonZeroUsize,
    /// Run a single query and exit instead of starting the interactive prompt
    #[arg(short = 'q', long)]
    query: Option<String>,
    /// Print results as JSON lines
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Show the per-term TF-IDF breakdown for each result
    #[arg(long, default_value_t = false)]
    explain: bool,
    /// Print document content in full instead of cutting it to the terminal width
    #[arg(long, default_value_t = false)]
    no_truncate: bool,
    /// Disable highlighting of query terms
    #[arg(long, default_value_t = false)]
    no_color: bool,
}

fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let docs = load_documents(&args.dataset)
        .with_context(|| format!("failed to load dataset {}", args.dataset.display()))?;
    let engine = SearchEngine::build(docs);
    tracing::info!(dataset = %args.dataset.display(), k = args.k.get(), "search engine initialized");

    let stdout = io::stdout();
    let opts = DisplayOptions {
        json: args.json,
        explain: args.explain,
        highlight: !args.no_color && stdout.is_terminal(),
        width: (!args.no_truncate).then(terminal_width),
    };
    let mut out = stdout.lock();
    match args.query {
        Some(q) => run_query(&engine, &q, args.k, &opts, &mut out),
        None => run_repl(&engine, args.k, &opts, io::stdin().lock(), &mut out),
    }
}
