use crate::error::{Result, SearchError};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Field separator between the record label and its content.
pub const SEPARATOR: char = '\t';

/// Content of one `<label>\t<content>` line. The label is discarded; a line
/// without a separator has no content.
pub fn parse_line(line: &str) -> &str {
    let line = line
        .strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line);
    match line.split_once(SEPARATOR) {
        Some((_label, content)) => content,
        None => "",
    }
}

/// Read every line of `reader` as one document, in order.
///
/// Lines are read as raw bytes; invalid UTF-8 is replaced rather than
/// rejected, so one badly encoded line never costs the rest of the corpus.
pub fn parse_documents<R: BufRead>(mut reader: R) -> io::Result<Vec<String>> {
    let mut docs = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        docs.push(parse_line(&line).to_string());
    }
    Ok(docs)
}

pub fn load_documents<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let unavailable = |source| SearchError::DatasetUnavailable { path: path.to_path_buf(), source };
    let f = File::open(path).map_err(unavailable)?;
    let docs = parse_documents(BufReader::new(f)).map_err(unavailable)?;
    tracing::debug!(path = %path.display(), num_docs = docs.len(), "dataset loaded");
    Ok(docs)
}
