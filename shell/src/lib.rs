//! Glue around `lexis-core`: reading a corpus from disk and the interactive query shell.

pub mod corpus;
pub mod session;

pub use corpus::{build_from_dir, load_corpus};
pub use session::{parse_max_results, Flow, Session};
