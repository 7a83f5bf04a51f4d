use search_core::scorer::TermScore;
use search_core::tokenizer::spans;
use search_core::SearchHit;
use serde::Serialize;
use std::collections::HashSet;
use std::io::{self, Write};

pub const DEFAULT_WIDTH: usize = 80;
/// Hits beyond this rank are never printed in text mode.
pub const MAX_DISPLAYED: usize = 100;

const BOLD_ON: &str = "\x1b[1;33m";
const BOLD_OFF: &str = "\x1b[0m";
const CONTENT_LABEL: &str = "Content: ";
/// Narrowest content column; below this lines wrap instead of shrinking further.
pub const MIN_CONTENT_WIDTH: usize = 20;

#[derive(Debug, Clone, Default)]
pub struct DisplayOptions {
    pub json: bool,
    pub explain: bool,
    pub highlight: bool,
    /// Max columns for a content line; `None` prints it whole.
    pub width: Option<usize>,
}

/// Terminal width from `COLUMNS`, falling back to 80.
pub fn terminal_width() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|w| *w > 0)
        .unwrap_or(DEFAULT_WIDTH)
}

#[derive(Serialize)]
pub struct SearchResponse<'a> {
    pub query: &'a str,
    pub terms: &'a [String],
    pub took_s: f64,
    pub total_hits: usize,
    pub results: Vec<JsonHit<'a>>,
}

#[derive(Serialize)]
pub struct JsonHit<'a> {
    pub rank: usize,
    #[serde(flatten)]
    pub hit: &'a SearchHit,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explain: Option<&'a [TermScore]>,
}

/// Columns left for content on a line `width` wide, never below `MIN_CONTENT_WIDTH`.
pub fn content_width(width: usize) -> usize {
    width.saturating_sub(CONTENT_LABEL.len()).max(MIN_CONTENT_WIDTH)
}

/// Cut `text` to at most `width` chars, marking the cut with "..." when it fits.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    let mut s: String = text.chars().take(width - 3).collect();
    s.push_str("...");
    s
}

/// Wrap every token of `text` that case-insensitively equals a query term.
pub fn highlight_terms(text: &str, terms: &[String]) -> String {
    let wanted: HashSet<String> = terms.iter().map(|t| t.to_lowercase()).collect();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for r in spans(text) {
        if wanted.contains(&text[r.clone()].to_lowercase()) {
            out.push_str(&text[last..r.start]);
            out.push_str(BOLD_ON);
            out.push_str(&text[r.clone()]);
            out.push_str(BOLD_OFF);
            last = r.end;
        }
    }
    out.push_str(&text[last..]);
    out
}

pub fn write_query_terms<W: Write>(out: &mut W, query: &str, terms: &[String]) -> io::Result<()> {
    writeln!(out, "Searching for: \"{}\"", query)?;
    write!(out, "Query terms: ")?;
    for t in terms {
        write!(out, "[{}] ", t)?;
    }
    writeln!(out)?;
    writeln!(out)
}

pub fn write_hits<W: Write>(
    out: &mut W,
    hits: &[SearchHit],
    terms: &[String],
    explain: &[Vec<TermScore>],
    opts: &DisplayOptions,
) -> io::Result<()> {
    if hits.is_empty() {
        return writeln!(out, "No results found.");
    }
    writeln!(out, "Search Results:")?;
    writeln!(out, "===============")?;
    for (i, hit) in hits.iter().take(MAX_DISPLAYED).enumerate() {
        writeln!(out, "Rank {} (Score: {:.6}):", i + 1, hit.score)?;
        writeln!(out, "Document ID: {}", hit.doc_id)?;
        let content = match opts.width {
            Some(w) => truncate(&hit.text, content_width(w)),
            None => hit.text.clone(),
        };
        let content = if opts.highlight { highlight_terms(&content, terms) } else { content };
        writeln!(out, "{}{}", CONTENT_LABEL, content)?;
        if let Some(parts) = explain.get(i) {
            for p in parts {
                writeln!(
                    out,
                    "  [{}] occurrences={} tf={:.6} idf={:.6} tfidf={:.6}",
                    p.term, p.occurrences, p.tf, p.idf, p.tfidf
                )?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(ts: &[&str]) -> Vec<String> {
        ts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn highlight_matches_whole_tokens_only() {
        let out = highlight_terms("Cat, cats and a CAT.", &terms(&["cat"]));
        assert_eq!(out, format!("{BOLD_ON}Cat{BOLD_OFF}, cats and a {BOLD_ON}CAT{BOLD_OFF}."));
    }

    #[test]
    fn highlight_without_matches_is_identity() {
        assert_eq!(highlight_terms("nothing here", &terms(&["zzz"])), "nothing here");
        assert_eq!(highlight_terms("", &terms(&["a"])), "");
    }

    #[test]
    fn truncate_respects_width() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly10!", 10), "exactly10!");
        assert_eq!(truncate("this is far too long", 10), "this is...");
        assert_eq!(truncate("héllo wörld", 8), "héllo...");
        assert_eq!(truncate("abcdef", 3), "abc");
        assert_eq!(truncate("abcdef", 0), "");
    }

    #[test]
    fn narrow_terminal_keeps_a_usable_column() {
        assert_eq!(content_width(80), 71);
        assert_eq!(content_width(9), MIN_CONTENT_WIDTH);
        assert_eq!(content_width(0), MIN_CONTENT_WIDTH);

        let text = "a document that is much longer than twenty characters";
        let hits = vec![SearchHit { doc_id: 0, score: 1.0, text: text.into() }];
        let opts = DisplayOptions { width: Some(5), ..Default::default() };
        let mut buf = Vec::new();
        write_hits(&mut buf, &hits, &[], &[], &opts).unwrap();
        let s = String::from_utf8(buf).unwrap();
        let line = s.lines().find(|l| l.starts_with(CONTENT_LABEL)).unwrap();
        assert_eq!(line.chars().count(), CONTENT_LABEL.len() + MIN_CONTENT_WIDTH);
        assert!(line.ends_with("..."));
    }

    #[test]
    fn no_hits_message() {
        let mut buf = Vec::new();
        write_hits(&mut buf, &[], &[], &[], &DisplayOptions::default()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "No results found.\n");
    }

    #[test]
    fn hits_render_rank_score_and_content() {
        let hits = vec![SearchHit { doc_id: 2, score: 0.5, text: "the cat ran".into() }];
        let mut buf = Vec::new();
        write_hits(&mut buf, &hits, &terms(&["cat"]), &[], &DisplayOptions::default()).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert!(s.contains("Rank 1 (Score: 0.500000):"));
        assert!(s.contains("Document ID: 2"));
        assert!(s.contains("Content: the cat ran"));
    }
}
