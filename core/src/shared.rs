use crate::index::Index;
use parking_lot::RwLock;
use std::sync::Arc;

/// The index currently being served, swappable as a whole.
///
/// Queries work on a [`snapshot`](SharedIndex::snapshot), so a rebuild that lands mid-query
/// never mixes the old document store with the new postings or the other way round.
#[derive(Debug, Default)]
pub struct SharedIndex {
    current: RwLock<Arc<Index>>,
}

impl SharedIndex {
    pub fn new(index: Index) -> Self {
        Self { current: RwLock::new(Arc::new(index)) }
    }

    pub fn snapshot(&self) -> Arc<Index> {
        self.current.read().clone()
    }

    /// Install a freshly built index, returning the one it replaced.
    pub fn replace(&self, index: Index) -> Arc<Index> {
        let next = Arc::new(index);
        tracing::info!(num_docs = next.len(), num_terms = next.num_terms(), "swapped index");
        std::mem::replace(&mut *self.current.write(), next)
    }
}
