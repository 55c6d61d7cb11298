//! Interactive query loop
//!
//! One query per input line, run to completion, printed, repeat until
//! end-of-input. Blank lines are skipped before the matcher ever sees
//! them. The index pair is read-only and shared across queries.

use crate::index::fm::FmIndex;
use crate::output;
use crate::query::{SearchOptions, Searcher, aggregate};
use anyhow::Result;
use std::io::{self, BufRead};
use std::time::Instant;

/// Run the query loop over stdin until EOF
pub fn run(fwd: &FmIndex, rev: &FmIndex, options: &SearchOptions) -> Result<()> {
    let searcher = Searcher::new(fwd, rev);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();

    loop {
        output::print_prompt()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let query = line.trim_end_matches(['\n', '\r']);
        if query.is_empty() {
            continue;
        }

        let deadline = options.deadline.map(|d| Instant::now() + d);
        let raw = searcher.search(
            query.as_bytes(),
            options.mismatches,
            options.max_locations > 0,
            deadline,
        );
        let results = aggregate(raw, options.max_locations);

        output::print_results(
            fwd,
            &results,
            options.pre_context,
            options.post_context,
            true,
        )?;
    }

    println!();
    Ok(())
}
