//! TF-IDF ranking of free text queries.
//!
//! A document's score is the sum of `tf(t, d) * idf(t)` over the query terms, with
//! `tf = count / length` and `idf = ln(N) / (1 + df)`. Only documents containing at least one
//! query term are scored, and the best `k` are kept in a bounded min-heap, giving
//! O(n log k) selection plus O(k log k) for the final ordering.

use crate::index::{DocId, Index};
use crate::tokenizer::tokenize;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredDoc {
    pub id: DocId,
    pub score: f64,
}

/// Term frequency of `term` in document `doc`; 0 for unknown or empty documents.
pub fn tf(index: &Index, term: &str, doc: DocId) -> f64 {
    match index.document(doc) {
        Some(d) if d.length > 0 => {
            let count = d.term_counts.get(term).copied().unwrap_or(0);
            count as f64 / d.length as f64
        }
        _ => 0.0,
    }
}

/// Inverse document frequency of `term`; 0 for an empty corpus.
pub fn idf(index: &Index, term: &str) -> f64 {
    if index.is_empty() {
        return 0.0;
    }
    let n = index.len() as f64;
    n.ln() / (1.0 + index.document_frequency(term) as f64)
}

pub fn tfidf(index: &Index, term: &str, doc: DocId) -> f64 {
    tf(index, term, doc) * idf(index, term)
}

/// Score every candidate document for `query` and return the best `max_results`,
/// highest score first. Equal scores put the higher document id first.
pub fn rank(index: &Index, query: &str, max_results: usize) -> Vec<ScoredDoc> {
    let terms = tokenize(query);
    if terms.is_empty() || max_results == 0 {
        return Vec::new();
    }

    let mut candidates: BTreeSet<DocId> = BTreeSet::new();
    for term in &terms {
        if let Some(postings) = index.postings(term) {
            candidates.extend(postings.iter().copied());
        }
    }

    // idf only depends on the term, so compute it once per query term
    let weights: Vec<(&str, f64)> = terms.iter().map(|t| (t.as_str(), idf(index, t))).collect();

    let mut heap: BinaryHeap<Reverse<(OrderedFloat<f64>, DocId)>> = BinaryHeap::with_capacity(max_results.min(candidates.len()));
    for &doc in &candidates {
        let score: f64 = weights.iter().map(|&(term, w)| tf(index, term, doc) * w).sum();
        if heap.len() < max_results {
            heap.push(Reverse((OrderedFloat(score), doc)));
        } else if let Some(mut min) = heap.peek_mut() {
            // Only the score decides whether the current minimum is evicted.
            if score > (min.0).0.into_inner() {
                *min = Reverse((OrderedFloat(score), doc));
            }
        }
    }

    let mut ranked: Vec<(OrderedFloat<f64>, DocId)> = heap.into_iter().map(|Reverse(entry)| entry).collect();
    ranked.sort_unstable_by(|a, b| b.cmp(a));
    tracing::debug!(candidates = candidates.len(), returned = ranked.len(), "tfidf query ranked");
    ranked.into_iter().map(|(score, id)| ScoredDoc { id, score: score.into_inner() }).collect()
}

/// Ids of the best `max_results` documents for `query`, best first.
pub fn tfidf_query(index: &Index, query: &str, max_results: usize) -> Vec<DocId> {
    rank(index, query, max_results).into_iter().map(|hit| hit.id).collect()
}
