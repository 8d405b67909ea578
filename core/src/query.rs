use crate::boolean::boolean_query;
use crate::error::{QueryError, Result};
use crate::index::{DocId, Index};
use crate::tfidf::tfidf_query;
use std::fmt;
use std::str::FromStr;

/// How a query string is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// `word OP word ..` with unranked results.
    #[default]
    Boolean,
    /// Free text ranked by summed TF-IDF.
    Tfidf,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Boolean => "boolean",
            Strategy::Tfidf => "tfidf",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "boolean" => Ok(Strategy::Boolean),
            "tfidf" => Ok(Strategy::Tfidf),
            other => Err(QueryError::UnknownStrategy(other.to_string())),
        }
    }
}

impl Index {
    /// Run `query` with the given strategy. Every returned id is valid for this index.
    pub fn query(&self, query: &str, strategy: Strategy, max_results: usize) -> Result<Vec<DocId>> {
        let ids = match strategy {
            Strategy::Boolean => boolean_query(self, query, max_results)?,
            Strategy::Tfidf => tfidf_query(self, query, max_results),
        };
        tracing::debug!(%strategy, max_results, hits = ids.len(), "query");
        Ok(ids)
    }
}
