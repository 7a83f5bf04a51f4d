use crate::corpus::Corpus;
use crate::vocab::Vocabulary;
use crate::DocId;
use serde::Serialize;

/// TF-IDF arithmetic over a built corpus and vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'a> {
    corpus: &'a Corpus,
    vocab: &'a Vocabulary,
}

/// Per-term contribution to a document score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermScore {
    pub term: String,
    pub occurrences: u32,
    pub tf: f64,
    pub idf: f64,
    pub tfidf: f64,
}

impl<'a> Scorer<'a> {
    pub fn new(corpus: &'a Corpus, vocab: &'a Vocabulary) -> Self {
        Self { corpus, vocab }
    }

    /// occurrences / word count; 0 for empty documents and absent terms.
    pub fn term_frequency(&self, term: &str, doc_id: DocId) -> f64 {
        let words = self.corpus.word_count_of(doc_id);
        if words == 0 {
            return 0.0;
        }
        let occurrences = self.vocab.occurrences(term, doc_id);
        if occurrences == 0 {
            return 0.0;
        }
        occurrences as f64 / words as f64
    }

    /// ln(N / df); 0 when no document contains the term.
    pub fn inverse_document_frequency(&self, term: &str) -> f64 {
        let df = self.vocab.document_frequency(term);
        if df == 0 {
            return 0.0;
        }
        (self.corpus.document_count() as f64 / df as f64).ln()
    }

    pub fn tfidf(&self, term: &str, doc_id: DocId) -> f64 {
        self.term_frequency(term, doc_id) * self.inverse_document_frequency(term)
    }

    /// Sum of TF-IDF over every query term, repeats included.
    pub fn document_score<S: AsRef<str>>(&self, query_terms: &[S], doc_id: DocId) -> f64 {
        query_terms.iter().map(|t| self.tfidf(t.as_ref(), doc_id)).sum()
    }

    /// Breakdown of `document_score` term by term, in query order.
    pub fn explain<S: AsRef<str>>(&self, query_terms: &[S], doc_id: DocId) -> Vec<TermScore> {
        query_terms
            .iter()
            .map(|t| {
                let term = t.as_ref();
                let tf = self.term_frequency(term, doc_id);
                let idf = self.inverse_document_frequency(term);
                TermScore {
                    term: term.to_string(),
                    occurrences: self.vocab.occurrences(term, doc_id),
                    tf,
                    idf,
                    tfidf: tf * idf,
                }
            })
            .collect()
    }
}
