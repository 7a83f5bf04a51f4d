use search_core::dataset::load_documents;
use search_core::{SearchEngine, SearchError};
use std::fs;
use std::num::NonZeroUsize;
use tempfile::tempdir;

#[test]
fn it_loads_documents_in_line_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("docs.tsv");
    fs::write(&path, "id-9\tthe cat sat\r\nid-3\tthe dog sat\nno-tab\nid-1\tthe cat ran").unwrap();

    let docs = load_documents(&path).unwrap();
    assert_eq!(docs, vec!["the cat sat", "the dog sat", "", "the cat ran"]);

    let engine = SearchEngine::build(docs);
    let hits = engine.search("cat", NonZeroUsize::new(5).unwrap()).unwrap();
    let ids: Vec<u32> = hits.iter().map(|h| h.doc_id).collect();
    assert_eq!(ids, vec![0, 3]);
}

#[test]
fn it_keeps_lines_with_bad_encoding() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("latin1.tsv");
    fs::write(&path, b"0\tthe cat sat\n1\tcaf\xe9 dog\n2\tthe cat ran\n").unwrap();

    let engine = SearchEngine::build(load_documents(&path).unwrap());
    assert_eq!(engine.corpus().document_count(), 3);
    let hits = engine.search("dog", NonZeroUsize::new(5).unwrap()).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].doc_id, 1);
    assert_eq!(engine.vocabulary().occurrences("caf", 1), 1);
}

#[test]
fn it_reports_a_missing_dataset() {
    let dir = tempdir().unwrap();
    let err = load_documents(dir.path().join("absent.tsv")).unwrap_err();
    assert!(matches!(err, SearchError::DatasetUnavailable { .. }));
    assert!(err.to_string().contains("absent.tsv"));
}
