//! Output formatting for query results

use crate::index::fm::FmIndex;
use crate::query::results::ResultSet;
use crate::query::snippet;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print one query's result set: a count line, then up to the configured
/// number of `<offset>: <pre><match><post>` lines with the match
/// highlighted
pub fn print_results(
    index: &FmIndex,
    results: &ResultSet,
    pre_context: usize,
    post_context: usize,
    color: bool,
) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    writeln!(stdout, "# of occurrences: {}", results.total)?;

    if results.truncated {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        writeln!(stdout, "(search deadline reached; counts are a lower bound)")?;
        stdout.reset()?;
    }

    if results.candidates.is_empty() {
        return Ok(());
    }

    writeln!(stdout, "Location and context of first occurrences: ")?;

    for candidate in &results.candidates {
        let snip = snippet(index, candidate, pre_context, post_context);

        write!(stdout, "{:>8}: ", candidate.offset)?;
        write!(stdout, "{}", String::from_utf8_lossy(&snip.before))?;

        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(stdout, "{}", String::from_utf8_lossy(&snip.matched))?;
        stdout.reset()?;

        writeln!(stdout, "{}", String::from_utf8_lossy(&snip.after))?;
    }

    Ok(())
}

/// Print the interactive prompt
pub fn print_prompt() -> io::Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(stdout, ">")?;
    stdout.reset()?;
    write!(stdout, " ")?;
    stdout.flush()
}
