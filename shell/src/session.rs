use crate::corpus::build_from_dir;
use anyhow::Result;
use lexis_core::{Index, QueryError, SharedIndex, Strategy};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

const HELP: &str = "\
commands:
  /set_strategy <boolean|tfidf>   choose how queries are evaluated
  /set_max_results <n>            number of results per query (n >= 1)
  /show_options                   print the current strategy and result count
  /reindex [dir]                  rebuild the index from dir (default: current corpus)
  /help                           show this message
  /quit                           leave the shell
anything else is run as a query";

/// Whether the shell keeps reading after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Parse a result count, which must be an integer of at least 1.
pub fn parse_max_results(arg: &str) -> std::result::Result<usize, &'static str> {
    let n: i64 = arg.trim().parse().map_err(|_| "arg should be an integer")?;
    if n < 1 {
        return Err("you should get at least 1 result!");
    }
    usize::try_from(n).map_err(|_| "arg should be an integer")
}

/// Interactive query loop state: the served index plus the options a user can change on the fly.
pub struct Session {
    index: Arc<SharedIndex>,
    corpus_root: PathBuf,
    strategy: Strategy,
    max_results: usize,
}

impl Session {
    pub fn new(index: Index, corpus_root: PathBuf, strategy: Strategy, max_results: usize) -> Self {
        Self { index: Arc::new(SharedIndex::new(index)), corpus_root, strategy, max_results }
    }

    pub fn shared_index(&self) -> Arc<SharedIndex> { self.index.clone() }

    pub fn strategy(&self) -> Strategy { self.strategy }

    pub fn max_results(&self) -> usize { self.max_results }

    /// Prompt for lines on `input` until end of input or `/quit`.
    ///
    /// Lines that aren't valid UTF-8 are decoded lossily instead of ending the session.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> Result<()> {
        let mut buf = Vec::new();
        loop {
            write!(out, "> ")?;
            out.flush()?;
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                writeln!(out)?;
                return Ok(());
            }
            let line = String::from_utf8_lossy(&buf);
            if self.handle_line(&line, out)? == Flow::Quit {
                return Ok(());
            }
        }
    }

    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let args: Vec<&str> = line.split_whitespace().collect();
        let Some(&command) = args.first() else {
            return Ok(Flow::Continue);
        };
        match command {
            "/set_strategy" => match args.get(1) {
                None => writeln!(out, "error: missing argument")?,
                Some(name) => match name.parse::<Strategy>() {
                    Ok(strategy) => self.strategy = strategy,
                    Err(_) => writeln!(out, "error: unrecognised strategy")?,
                },
            },
            "/set_max_results" => match args.get(1) {
                None => writeln!(out, "error: missing argument")?,
                Some(arg) => match parse_max_results(arg) {
                    Ok(n) => self.max_results = n,
                    Err(msg) => writeln!(out, "error: {msg}")?,
                },
            },
            "/show_options" => {
                writeln!(out, "strategy: {}, max_results: {}", self.strategy, self.max_results)?
            }
            "/reindex" => {
                // the rest of the line, so directories with spaces work
                let dir = line.trim().strip_prefix(command).map(str::trim).filter(|d| !d.is_empty());
                self.reindex(dir.map(PathBuf::from), out)?
            }
            "/help" => writeln!(out, "{HELP}")?,
            "/quit" => return Ok(Flow::Quit),
            _ => self.run_query(line.trim(), out)?,
        }
        Ok(Flow::Continue)
    }

    fn run_query<W: Write>(&self, query: &str, out: &mut W) -> Result<()> {
        let started = Instant::now();
        let index = self.index.snapshot();
        match index.query(query, self.strategy, self.max_results) {
            Ok(ids) => {
                for id in ids {
                    if let Some(label) = index.source_label(id) {
                        writeln!(out, "{label}")?;
                    }
                }
            }
            Err(e @ QueryError::Format) => writeln!(out, "error: {e}")?,
            Err(e) => return Err(e.into()),
        }
        writeln!(out, "(query took {:.4} seconds)", started.elapsed().as_secs_f64())?;
        Ok(())
    }

    fn reindex<W: Write>(&mut self, root: Option<PathBuf>, out: &mut W) -> Result<()> {
        let root = root.unwrap_or_else(|| self.corpus_root.clone());
        let started = Instant::now();
        match build_from_dir(&root) {
            Ok(index) => {
                writeln!(out, "Finished indexing in {} seconds.", started.elapsed().as_secs())?;
                writeln!(out, "Dataset / Inverted index size: {} / {}", index.len(), index.num_terms())?;
                self.index.replace(index);
                self.corpus_root = root;
            }
            Err(e) => {
                tracing::warn!(root = %root.display(), error = %e, "reindex failed, keeping current index");
                writeln!(out, "error: {e:#}")?;
            }
        }
        Ok(())
    }
}
