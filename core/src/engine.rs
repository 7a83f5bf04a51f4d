use crate::corpus::Corpus;
use crate::error::{Result, SearchError};
use crate::scorer::{Scorer, TermScore};
use crate::tokenizer::{terms, tokenize};
use crate::topk::TopK;
use crate::vocab::Vocabulary;
use crate::{DocId, SearchHit};
use std::num::NonZeroUsize;

/// Immutable corpus plus vocabulary, built once and then queried read-only.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    corpus: Corpus,
    vocab: Vocabulary,
}

impl SearchEngine {
    /// Load documents in order and index every term of every document.
    ///
    /// Doc ids and per-document word counts are `u32`; a corpus is limited to
    /// `u32::MAX` documents, and longer documents saturate their word count.
    pub fn build<I, S>(documents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let corpus = Corpus::new(documents);
        let mut vocab = Vocabulary::new();
        for (doc_id, text) in corpus.iter() {
            for term in terms(text) {
                vocab.insert(term, doc_id);
            }
        }
        tracing::info!(
            num_docs = corpus.document_count(),
            num_terms = vocab.term_count(),
            max_text_len = corpus.max_text_len(),
            "index built"
        );
        Self { corpus, vocab }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    pub fn scorer(&self) -> Scorer<'_> {
        Scorer::new(&self.corpus, &self.vocab)
    }

    /// The terms a query is scored with, in order and with repeats.
    pub fn query_terms(&self, query: &str) -> Result<Vec<String>> {
        let q_terms = tokenize(query);
        if q_terms.is_empty() {
            return Err(SearchError::EmptyQuery);
        }
        Ok(q_terms)
    }

    /// Rank every document against `query` and return the best `k` with a
    /// positive score. An empty result means nothing matched.
    pub fn search(&self, query: &str, k: NonZeroUsize) -> Result<Vec<SearchHit>> {
        let q_terms = self.query_terms(query)?;
        self.search_terms(&q_terms, k)
    }

    /// Rank against already tokenized query terms, repeats included.
    pub fn search_terms<S: AsRef<str>>(&self, q_terms: &[S], k: NonZeroUsize) -> Result<Vec<SearchHit>> {
        if q_terms.is_empty() {
            return Err(SearchError::EmptyQuery);
        }
        let scorer = self.scorer();
        let mut top = TopK::new(k);
        let num_docs = DocId::try_from(self.corpus.document_count()).unwrap_or(DocId::MAX);
        for doc_id in 0..num_docs {
            let score = scorer.document_score(q_terms, doc_id);
            if score > 0.0 {
                top.insert(doc_id, score);
            }
        }
        let hits: Vec<SearchHit> = top
            .into_ranked()
            .into_iter()
            .map(|c| SearchHit {
                doc_id: c.doc_id,
                score: c.score,
                text: self.corpus.text_of(c.doc_id).to_string(),
            })
            .collect();
        tracing::debug!(num_terms = q_terms.len(), hits = hits.len(), "query scored");
        Ok(hits)
    }

    /// Per-term score breakdown of `query` against one document.
    pub fn explain(&self, query: &str, doc_id: DocId) -> Result<Vec<TermScore>> {
        if self.corpus.get(doc_id).is_none() {
            return Err(SearchError::UnknownDocument(doc_id));
        }
        let q_terms = self.query_terms(query)?;
        Ok(self.scorer().explain(&q_terms, doc_id))
    }
}
