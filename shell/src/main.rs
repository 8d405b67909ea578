use anyhow::Result;
use clap::Parser;
use lexis_core::Strategy;
use lexis_shell::{build_from_dir, parse_max_results, Session};
use std::io;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "lexis")]
#[command(about = "Index a directory of text files and query it interactively", long_about = None)]
struct Args {
    /// Top level directory of the dataset
    root: PathBuf,
    /// Initial query strategy (boolean or tfidf)
    #[arg(long, default_value = "boolean")]
    strategy: Strategy,
    /// Initial number of results per query
    #[arg(long, default_value_t = 10, value_parser = parse_max_results)]
    max_results: usize,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let args = Args::parse();

    println!("Building the index ...");
    let start = Instant::now();
    let index = build_from_dir(&args.root)?;
    println!("Finished indexing in {} seconds.", start.elapsed().as_secs());
    println!("Dataset / Inverted index size: {} / {}", index.len(), index.num_terms());

    let mut session = Session::new(index, args.root, args.strategy, args.max_results);
    session.run(io::stdin().lock(), &mut io::stdout())
}
