use crate::tokenizer::token_count;
use crate::DocId;

#[derive(Debug, Clone)]
struct Document {
    text: String,
    word_count: u32,
}

/// Ordered, immutable document store. Ids are assigned by load order and
/// must fit in a `DocId`.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    docs: Vec<Document>,
}

impl Corpus {
    pub fn new<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let docs = texts
            .into_iter()
            .map(|t| {
                let text: String = t.into();
                let word_count = u32::try_from(token_count(&text)).unwrap_or(u32::MAX);
                Document { text, word_count }
            })
            .collect();
        Self { docs }
    }

    pub fn document_count(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Panics if `doc_id` is out of range; ids only ever come from this corpus.
    pub fn text_of(&self, doc_id: DocId) -> &str {
        &self.docs[doc_id as usize].text
    }

    /// Number of tokens in the document's text, cached at construction.
    pub fn word_count_of(&self, doc_id: DocId) -> u32 {
        self.docs[doc_id as usize].word_count
    }

    pub fn get(&self, doc_id: DocId) -> Option<&str> {
        self.docs.get(doc_id as usize).map(|d| d.text.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (DocId, &str)> {
        self.docs
            .iter()
            .enumerate()
            .map(|(i, d)| (i as DocId, d.text.as_str()))
    }

    /// Length in bytes of the longest document text.
    pub fn max_text_len(&self) -> usize {
        self.docs.iter().map(|d| d.text.len()).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_load_order() {
        let corpus = Corpus::new(["first doc", "", "third, and last!"]);
        assert_eq!(corpus.document_count(), 3);
        assert_eq!(corpus.text_of(0), "first doc");
        assert_eq!(corpus.text_of(2), "third, and last!");
        assert_eq!(corpus.get(3), None);
        let ids: Vec<DocId> = corpus.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn word_counts_agree_with_tokenizer() {
        let corpus = Corpus::new(["the cat sat", "", "--- ..."]);
        for (id, text) in corpus.iter() {
            assert_eq!(corpus.word_count_of(id) as usize, token_count(text));
        }
        assert_eq!(corpus.word_count_of(0), 3);
        assert_eq!(corpus.word_count_of(1), 0);
        assert_eq!(corpus.word_count_of(2), 0);
    }

    #[test]
    fn max_text_len_of_empty_corpus() {
        assert_eq!(Corpus::default().max_text_len(), 0);
        assert_eq!(Corpus::new(["ab", "abcd"]).max_text_len(), 4);
    }
}
