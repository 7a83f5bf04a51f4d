use lazy_static::lazy_static;
use regex::Regex;
use std::ops::Range;

lazy_static! {
    static ref RE: Regex = Regex::new(r"[A-Za-z0-9]+").expect("valid regex");
}

/// Iterate over the maximal runs of ASCII letters and digits in `text`, case preserved.
pub fn terms(text: &str) -> impl Iterator<Item = &str> {
    RE.find_iter(text).map(|m| m.as_str())
}

/// Byte ranges of the same runs `terms` yields, for callers that mark up the source text.
pub fn spans(text: &str) -> impl Iterator<Item = Range<usize>> + '_ {
    RE.find_iter(text).map(|m| m.range())
}

/// Tokenize text into owned terms. Used for both documents and queries.
pub fn tokenize(text: &str) -> Vec<String> {
    terms(text).map(str::to_string).collect()
}

pub fn token_count(text: &str) -> usize {
    terms(text).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_tokenize() {
        let t = tokenize("Hello, World! 42 times");
        assert_eq!(t, vec!["Hello", "World", "42", "times"]);
    }

    #[test]
    fn non_ascii_splits_runs() {
        // 'é' is not ASCII alphanumeric, so it ends the run on both sides
        assert_eq!(tokenize("café_au-lait"), vec!["caf", "au", "lait"]);
    }

    #[test]
    fn counts_match_tokenize() {
        let text = "  a--b  c3po ";
        assert_eq!(token_count(text), tokenize(text).len());
        assert_eq!(token_count(""), 0);
        assert_eq!(token_count("!?,."), 0);
    }

    #[test]
    fn spans_line_up_with_terms() {
        let text = "ab, cd!e";
        let cut: Vec<&str> = spans(text).map(|r| &text[r]).collect();
        assert_eq!(cut, terms(text).collect::<Vec<_>>());
    }
}
