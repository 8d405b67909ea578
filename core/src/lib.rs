//! In-memory inverted index with boolean and TF-IDF ranked queries.

pub mod boolean;
pub mod error;
pub mod index;
pub mod query;
pub mod shared;
pub mod tfidf;
pub mod tokenizer;

pub use error::QueryError;
pub use index::{build_index, DocId, Document, DocumentStore, Index, InvertedIndex};
pub use query::Strategy;
pub use shared::SharedIndex;
pub use tfidf::ScoredDoc;
