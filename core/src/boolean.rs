//! Boolean queries of the form `word OP word OP .. word`, `OP` being `AND` or `OR` in any case.
//!
//! Operators are applied strictly left to right with no precedence, so
//! `religion OR science AND atheism` means `(religion OR science) AND atheism`.

use crate::error::{QueryError, Result};
use crate::index::{DocId, Index};
use crate::tokenizer::{is_operator, tokenize, AND, OR};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOp {
    And,
    Or,
}

impl BooleanOp {
    fn from_term(term: &str) -> Option<Self> {
        match term {
            AND => Some(BooleanOp::And),
            OR => Some(BooleanOp::Or),
            _ => None,
        }
    }

    fn apply(self, acc: &mut BTreeSet<DocId>, postings: Option<&BTreeSet<DocId>>) {
        match (self, postings) {
            (BooleanOp::Or, Some(p)) => acc.extend(p.iter().copied()),
            (BooleanOp::Or, None) => {}
            (BooleanOp::And, Some(p)) => acc.retain(|id| p.contains(id)),
            (BooleanOp::And, None) => acc.clear(),
        }
    }
}

/// Split a query into `(operator, term)` steps. The first step carries a neutral `Or`,
/// which against the initially empty result set just yields the first term's postings.
pub fn parse_boolean(query: &str) -> Result<Vec<(BooleanOp, String)>> {
    let tokens = tokenize(query);
    // With the leading `Or` prepended the sequence must pair up evenly.
    if tokens.len() % 2 == 0 {
        return Err(QueryError::Format);
    }

    let mut steps = Vec::with_capacity(tokens.len() / 2 + 1);
    let mut op = BooleanOp::Or;
    for (pos, token) in tokens.into_iter().enumerate() {
        if pos % 2 == 1 {
            op = BooleanOp::from_term(&token).ok_or(QueryError::Format)?;
        } else {
            if is_operator(&token) {
                return Err(QueryError::Format);
            }
            steps.push((op, token));
        }
    }
    Ok(steps)
}

/// Evaluate a boolean query, returning at most `max_results` matching ids in ascending order.
pub fn boolean_query(index: &Index, query: &str, max_results: usize) -> Result<Vec<DocId>> {
    let steps = parse_boolean(query)?;
    let mut result: BTreeSet<DocId> = BTreeSet::new();
    for (op, term) in &steps {
        op.apply(&mut result, index.postings(term));
    }
    tracing::debug!(steps = steps.len(), hits = result.len(), "boolean query evaluated");
    Ok(result.into_iter().take(max_results).collect())
}
