use crate::tokenizer::tokenize;
use std::collections::{BTreeSet, HashMap};

pub type DocId = u32;

/// One indexed document and the term statistics needed for ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: DocId,
    /// Where the document came from, e.g. a file path. Only used for display.
    pub source_label: String,
    pub term_counts: HashMap<String, usize>,
    /// Total number of tokens, i.e. the sum of `term_counts`.
    pub length: usize,
}

/// Documents in insertion order; a document's id is its position.
#[derive(Debug, Default, Clone)]
pub struct DocumentStore {
    docs: Vec<Document>,
}

impl DocumentStore {
    pub fn len(&self) -> usize { self.docs.len() }

    pub fn is_empty(&self) -> bool { self.docs.is_empty() }

    pub fn get(&self, id: DocId) -> Option<&Document> { self.docs.get(id as usize) }

    pub fn iter(&self) -> impl Iterator<Item = &Document> { self.docs.iter() }
}

/// Term -> set of ids of the documents containing it.
#[derive(Debug, Default, Clone)]
pub struct InvertedIndex {
    postings: HashMap<String, BTreeSet<DocId>>,
}

impl InvertedIndex {
    pub fn get(&self, term: &str) -> Option<&BTreeSet<DocId>> { self.postings.get(term) }

    pub fn num_terms(&self) -> usize { self.postings.len() }

    pub fn terms(&self) -> impl Iterator<Item = &str> { self.postings.keys().map(String::as_str) }
}

/// A document store and its inverted index, built together and immutable afterwards.
///
/// Rebuilding means constructing a new `Index`; postings of an existing one are never touched,
/// so two corpora can't bleed into each other.
#[derive(Debug, Default, Clone)]
pub struct Index {
    store: DocumentStore,
    inverted: InvertedIndex,
}

impl Index {
    pub fn empty() -> Self { Self::default() }

    /// Build an index from `(source_label, raw_text)` pairs. Ids follow enumeration order, starting at 0.
    ///
    /// # Panics
    ///
    /// If the corpus holds more than `DocId::MAX` documents.
    pub fn build<I, L, T>(documents: I) -> Self
    where
        I: IntoIterator<Item = (L, T)>,
        L: Into<String>,
        T: AsRef<str>,
    {
        let mut docs: Vec<Document> = Vec::new();
        let mut postings: HashMap<String, BTreeSet<DocId>> = HashMap::new();

        for (source_label, text) in documents {
            let id = DocId::try_from(docs.len())
                .unwrap_or_else(|_| panic!("corpus exceeds {} documents", DocId::MAX));
            let tokens = tokenize(text.as_ref());
            let length = tokens.len();
            let mut term_counts: HashMap<String, usize> = HashMap::new();
            for term in tokens {
                *term_counts.entry(term).or_insert(0) += 1;
            }
            for term in term_counts.keys() {
                postings.entry(term.clone()).or_default().insert(id);
            }
            docs.push(Document { id, source_label: source_label.into(), term_counts, length });
        }

        tracing::info!(num_docs = docs.len(), num_terms = postings.len(), "built index");
        Self { store: DocumentStore { docs }, inverted: InvertedIndex { postings } }
    }

    pub fn store(&self) -> &DocumentStore { &self.store }

    pub fn inverted(&self) -> &InvertedIndex { &self.inverted }

    /// Number of indexed documents.
    pub fn len(&self) -> usize { self.store.len() }

    pub fn is_empty(&self) -> bool { self.store.is_empty() }

    pub fn num_terms(&self) -> usize { self.inverted.num_terms() }

    pub fn document(&self, id: DocId) -> Option<&Document> { self.store.get(id) }

    pub fn source_label(&self, id: DocId) -> Option<&str> {
        self.store.get(id).map(|d| d.source_label.as_str())
    }

    pub fn postings(&self, term: &str) -> Option<&BTreeSet<DocId>> { self.inverted.get(term) }

    /// Number of documents containing `term`; 0 when it was never indexed.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.postings(term).map_or(0, BTreeSet::len)
    }
}

/// Build a fresh [`Index`] over a whole corpus.
pub fn build_index<I, L, T>(documents: I) -> Index
where
    I: IntoIterator<Item = (L, T)>,
    L: Into<String>,
    T: AsRef<str>,
{
    Index::build(documents)
}
