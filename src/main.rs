use anyhow::Result;
use clap::Parser;
use fmx::index;
use fmx::query::SearchOptions;
use fmx::repl;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "fmx")]
#[command(about = "Terminal-first approximate substring search over static texts")]
struct Cli {
    /// Text file to index and search
    text_file: PathBuf,

    /// Number of permitted character mismatches per query
    #[arg(short = 'k', long = "mismatches", default_value_t = 0,
          value_parser = clap::value_parser!(u8).range(0..=2))]
    mismatches: u8,

    /// Maximal number of locations to report (0 = count only)
    #[arg(long, default_value_t = 5)]
    max_locations: usize,

    /// Maximal length of the reported pre-context
    #[arg(long, default_value_t = 10)]
    pre_context: usize,

    /// Maximal length of the reported post-context
    #[arg(long, default_value_t = 10)]
    post_context: usize,

    /// Abandon a query's remaining search branches after this many
    /// milliseconds (counts become a lower bound)
    #[arg(long)]
    deadline_ms: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (fwd, rev) = index::load_or_build(&cli.text_file, false)?;

    let resident = (fwd.size_bytes() + rev.size_bytes()) as f64 / 1024.0 / 1024.0;
    println!("Index ready, requires {:.1} MiB.", resident);
    println!("Input search terms and press Ctrl-D to exit.");

    let options = SearchOptions {
        mismatches: cli.mismatches,
        max_locations: cli.max_locations,
        pre_context: cli.pre_context,
        post_context: cli.post_context,
        deadline: cli.deadline_ms.map(Duration::from_millis),
    };

    repl::run(&fwd, &rev, &options)
}
