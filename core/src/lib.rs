use serde::Serialize;

pub mod corpus;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod scorer;
pub mod tokenizer;
pub mod topk;
pub mod vocab;

pub use engine::SearchEngine;
pub use error::{Result, SearchError};

pub type DocId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Posting {
    pub doc_id: DocId,
    pub count: u32, // occurrences of the term in doc_id, always >= 1
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub doc_id: DocId,
    pub score: f64,
    pub text: String,
}
