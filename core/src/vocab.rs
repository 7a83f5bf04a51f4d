use crate::{DocId, Posting};
use std::collections::HashMap;

type NodeId = u32;

const ROOT: NodeId = 0;

#[derive(Debug, Default, Clone)]
struct Node {
    children: HashMap<char, NodeId>,
    /// Present only when an inserted term ends at this node; sorted by doc_id.
    postings: Option<Vec<Posting>>,
}

/// Prefix tree mapping lowercased terms to posting lists.
///
/// Nodes live in a flat arena and refer to each other by index, so dropping
/// the index is a single `Vec` drop no matter how deep the tree is.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    nodes: Vec<Node>,
    num_terms: usize,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}

/// A node at which an inserted term ends.
#[derive(Debug, Clone, Copy)]
pub struct TermEntry<'a> {
    postings: &'a [Posting],
}

impl<'a> TermEntry<'a> {
    pub fn postings(&self) -> &'a [Posting] {
        self.postings
    }

    /// Occurrences of the term in `doc_id`, zero if it does not appear there.
    pub fn count_in(&self, doc_id: DocId) -> u32 {
        self.postings
            .binary_search_by_key(&doc_id, |p| p.doc_id)
            .map(|i| self.postings[i].count)
            .unwrap_or(0)
    }

    pub fn document_frequency(&self) -> usize {
        self.postings.len()
    }
}

fn fold(term: &str) -> impl Iterator<Item = char> + '_ {
    term.chars().flat_map(char::to_lowercase)
}

impl Vocabulary {
    pub fn new() -> Self {
        Self { nodes: vec![Node::default()], num_terms: 0 }
    }

    /// Record one occurrence of `term` in `doc_id`.
    pub fn insert(&mut self, term: &str, doc_id: DocId) {
        let mut cur = ROOT;
        for ch in fold(term) {
            cur = match self.nodes[cur as usize].children.get(&ch) {
                Some(&next) => next,
                None => {
                    let next = self.nodes.len() as NodeId;
                    self.nodes.push(Node::default());
                    self.nodes[cur as usize].children.insert(ch, next);
                    next
                }
            };
        }

        let node = &mut self.nodes[cur as usize];
        let postings = node.postings.get_or_insert_with(|| {
            self.num_terms += 1;
            Vec::new()
        });
        // Build order is ascending doc_id, so this almost always lands at the tail.
        match postings.binary_search_by_key(&doc_id, |p| p.doc_id) {
            Ok(i) => postings[i].count += 1,
            Err(i) => postings.insert(i, Posting { doc_id, count: 1 }),
        }
    }

    /// Exact-term lookup. A path that exists only as a prefix of longer terms is not a hit.
    pub fn lookup(&self, term: &str) -> Option<TermEntry<'_>> {
        let mut cur = ROOT;
        for ch in fold(term) {
            cur = *self.nodes[cur as usize].children.get(&ch)?;
        }
        self.nodes[cur as usize]
            .postings
            .as_deref()
            .map(|postings| TermEntry { postings })
    }

    pub fn occurrences(&self, term: &str, doc_id: DocId) -> u32 {
        self.lookup(term).map_or(0, |e| e.count_in(doc_id))
    }

    pub fn document_frequency(&self, term: &str) -> usize {
        self.lookup(term).map_or(0, |e| e.document_frequency())
    }

    /// Number of distinct terms inserted.
    pub fn term_count(&self) -> usize {
        self.num_terms
    }

    /// Number of trie nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
