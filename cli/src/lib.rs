use anyhow::Result;
use search_core::scorer::TermScore;
use search_core::{SearchEngine, SearchError};
use std::io::{BufRead, Write};
use std::num::NonZeroUsize;
use std::time::Instant;

pub mod display;

use display::{write_hits, write_query_terms, DisplayOptions, JsonHit, SearchResponse};

/// Inputs that end the interactive loop.
pub const EXIT_KEYWORDS: [&str; 3] = ["quit", "exit", "q"];

const RULE: &str = "=================================================================";

/// Run one query and write its results to `out`.
pub fn run_query<W: Write>(
    engine: &SearchEngine,
    query: &str,
    k: NonZeroUsize,
    opts: &DisplayOptions,
    out: &mut W,
) -> Result<()> {
    let start = Instant::now();
    let q_terms = match engine.query_terms(query) {
        Ok(t) => t,
        Err(SearchError::EmptyQuery) => {
            if opts.json {
                let err = serde_json::json!({ "query": query, "error": "empty query" });
                writeln!(out, "{}", err)?;
            } else {
                writeln!(out, "Error: Empty query.")?;
            }
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    let hits = engine.search_terms(&q_terms, k)?;
    let explain: Vec<Vec<TermScore>> = if opts.explain {
        hits.iter()
            .map(|h| engine.scorer().explain(&q_terms, h.doc_id))
            .collect()
    } else {
        Vec::new()
    };
    tracing::debug!(query, hits = hits.len(), "search complete");

    if opts.json {
        let response = SearchResponse {
            query,
            terms: &q_terms,
            took_s: start.elapsed().as_secs_f64(),
            total_hits: hits.len(),
            results: hits
                .iter()
                .enumerate()
                .map(|(i, hit)| JsonHit { rank: i + 1, hit, explain: explain.get(i).map(Vec::as_slice) })
                .collect(),
        };
        serde_json::to_writer(&mut *out, &response)?;
        writeln!(out)?;
    } else {
        write_query_terms(out, query, &q_terms)?;
        write_hits(out, &hits, &q_terms, &explain, opts)?;
    }
    Ok(())
}

/// Read queries line by line until an exit keyword or end of input.
pub fn run_repl<R: BufRead, W: Write>(
    engine: &SearchEngine,
    k: NonZeroUsize,
    opts: &DisplayOptions,
    mut input: R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Search engine ready! Enter your queries (type 'quit' to exit):")?;
    writeln!(out, "{}", RULE)?;
    let mut line = String::new();
    loop {
        write!(out, "\nSearch> ")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }
        let query = line.trim_end_matches(['\n', '\r']);
        if EXIT_KEYWORDS.contains(&query) {
            writeln!(out, "Goodbye!")?;
            break;
        }
        if query.is_empty() {
            continue;
        }
        writeln!(out)?;
        run_query(engine, query, k, opts, out)?;
        writeln!(out, "{}", RULE)?;
    }
    Ok(())
}
