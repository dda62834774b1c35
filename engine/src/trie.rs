//! Character trie mapping terms to posting lists.
//!
//! Nodes live in a single arena and refer to each other by index. Every node keeps its
//! children as a first-child / next-sibling chain sorted by character, which lets both
//! insertion and lookup stop scanning a level as soon as a sibling's character passes
//! the one being searched for.

use crate::DocId;

type NodeId = usize;

const ROOT: NodeId = 0;

/// Per-term occurrence counts over the whole corpus.
#[derive(Debug, Clone)]
pub struct PostingList {
    occurrences: Vec<u32>,
    doc_count: u32,
    idf: f64,
}

impl PostingList {
    fn new(total_documents: usize) -> Self {
        Self { occurrences: vec![0; total_documents], doc_count: 0, idf: 0.0 }
    }

    /// Occurrences of the term in `doc_id`; zero when absent or out of range.
    pub fn occurrences(&self, doc_id: DocId) -> u32 {
        self.occurrences.get(doc_id).copied().unwrap_or(0)
    }

    /// Number of documents containing the term at least once.
    pub fn doc_count(&self) -> u32 { self.doc_count }

    pub fn idf(&self) -> f64 { self.idf }

    fn record(&mut self, doc_id: DocId) {
        let slot = &mut self.occurrences[doc_id];
        *slot += 1;
        if *slot == 1 {
            self.doc_count += 1;
            self.idf = idf(self.occurrences.len(), self.doc_count);
        }
    }
}

/// `log10((N - n + 0.5) / (n + 0.5))`. Negative once a term is in more than half the corpus.
pub fn idf(total_documents: usize, doc_count: u32) -> f64 {
    let n_total = total_documents as f64;
    let n = doc_count as f64;
    ((n_total - n + 0.5) / (n + 0.5)).log10()
}

#[derive(Debug)]
struct Node {
    ch: char,
    child: Option<NodeId>,
    sibling: Option<NodeId>,
    postings: Option<PostingList>,
}

impl Node {
    fn new(ch: char) -> Self {
        Self { ch, child: None, sibling: None, postings: None }
    }
}

/// Where a character sits in a node's sorted child chain.
enum Slot {
    Found(NodeId),
    /// Not present; a new node belongs right after `Some(prev)`, or at the head for `None`.
    Missing(Option<NodeId>),
}

/// Inverted index keyed by term.
#[derive(Debug)]
pub struct Trie {
    nodes: Vec<Node>,
    total_documents: usize,
    term_count: usize,
}

impl Trie {
    /// Creates an empty trie whose posting lists are sized to `total_documents`.
    pub fn new(total_documents: usize) -> Self {
        Self { nodes: vec![Node::new('\0')], total_documents, term_count: 0 }
    }

    /// Number of distinct terms inserted so far.
    pub fn term_count(&self) -> usize { self.term_count }

    /// Records one occurrence of `term` in `doc_id`.
    ///
    /// `term` must be non-empty and `doc_id` below `total_documents`.
    pub fn insert(&mut self, term: &str, doc_id: DocId) {
        debug_assert!(!term.is_empty());
        debug_assert!(doc_id < self.total_documents);

        let mut current = ROOT;
        let mut chars = term.chars();
        let mut pending = None;
        for ch in chars.by_ref() {
            match self.find_child(current, ch) {
                Slot::Found(next) => current = next,
                Slot::Missing(after) => {
                    pending = Some((ch, after));
                    break;
                }
            }
        }

        if let Some((ch, after)) = pending {
            current = self.splice(current, after, ch);
            // Below a freshly created node every child chain is empty.
            for ch in chars {
                current = self.splice(current, None, ch);
            }
        }

        let total = self.total_documents;
        let node = &mut self.nodes[current];
        if node.postings.is_none() {
            self.term_count += 1;
        }
        node.postings.get_or_insert_with(|| PostingList::new(total)).record(doc_id);
    }

    /// Returns the posting list for exactly `term`, if it was ever inserted.
    pub fn lookup(&self, term: &str) -> Option<&PostingList> {
        let mut current = ROOT;
        for ch in term.chars() {
            match self.find_child(current, ch) {
                Slot::Found(next) => current = next,
                Slot::Missing(_) => return None,
            }
        }
        self.nodes[current].postings.as_ref()
    }

    /// Lazily walks every `(term, postings)` pair in lexicographic order.
    pub fn terms(&self) -> Terms<'_> {
        let stack = self.nodes[ROOT].child.map(|first| vec![(first, 0)]).unwrap_or_default();
        Terms { trie: self, stack, prefix: String::new() }
    }

    fn find_child(&self, parent: NodeId, ch: char) -> Slot {
        let mut prev = None;
        let mut next = self.nodes[parent].child;
        while let Some(id) = next {
            let node = &self.nodes[id];
            if node.ch == ch {
                return Slot::Found(id);
            }
            if node.ch > ch {
                break;
            }
            prev = Some(id);
            next = node.sibling;
        }
        Slot::Missing(prev)
    }

    fn splice(&mut self, parent: NodeId, after: Option<NodeId>, ch: char) -> NodeId {
        let id = self.nodes.len();
        let mut node = Node::new(ch);
        match after {
            Some(prev) => {
                node.sibling = self.nodes[prev].sibling.replace(id);
            }
            None => {
                node.sibling = self.nodes[parent].child.replace(id);
            }
        }
        self.nodes.push(node);
        id
    }
}

/// Depth-first, child-before-sibling traversal of a [`Trie`].
pub struct Terms<'a> {
    trie: &'a Trie,
    /// Pending nodes with the byte length of their parent's prefix.
    stack: Vec<(NodeId, usize)>,
    prefix: String,
}

impl<'a> Iterator for Terms<'a> {
    type Item = (String, &'a PostingList);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((id, depth)) = self.stack.pop() {
            let node = &self.trie.nodes[id];
            self.prefix.truncate(depth);
            self.prefix.push(node.ch);

            if let Some(sibling) = node.sibling {
                self.stack.push((sibling, depth));
            }
            if let Some(child) = node.child {
                self.stack.push((child, self.prefix.len()));
            }
            if let Some(postings) = &node.postings {
                return Some((self.prefix.clone(), postings));
            }
        }
        None
    }
}
