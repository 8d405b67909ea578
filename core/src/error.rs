use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A boolean query that isn't `word OP word OP .. word`.
    #[error("wrong query format? should be: word OP word OP ..")]
    Format,
    #[error("unrecognised strategy: {0}")]
    UnknownStrategy(String),
}

pub type Result<T> = std::result::Result<T, QueryError>;
