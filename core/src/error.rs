use crate::DocId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    /// The dataset could not be read; no engine is built.
    #[error("dataset unavailable: {}", path.display())]
    DatasetUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The query contained no indexable terms.
    #[error("empty query")]
    EmptyQuery,
    #[error("no document with id {0}")]
    UnknownDocument(DocId),
}

pub type Result<T> = std::result::Result<T, SearchError>;
