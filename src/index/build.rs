//! Build-or-load orchestration for the index pair
//!
//! The forward and reverse indexes each load from a companion file beside
//! the text; a missing companion triggers a build from the text (or its
//! in-memory reversal) followed by persistence. Rebuilds trigger solely on
//! file absence; there is no staleness check against the source text.

use crate::index::fm::FmIndex;
use crate::index::reader::IndexReader;
use crate::index::types::{DEFAULT_SAMPLE_STEP, IndexMeta};
use crate::index::writer::IndexWriter;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Companion file paths for a text file: forward index, reverse index,
/// metadata sidecar
pub fn companion_paths(text_path: &Path) -> (PathBuf, PathBuf, PathBuf) {
    (
        path_with_suffix(text_path, ".fmx"),
        path_with_suffix(text_path, ".rev.fmx"),
        path_with_suffix(text_path, ".fmx.json"),
    )
}

fn path_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut s: OsString = path.as_os_str().to_os_string();
    s.push(suffix);
    PathBuf::from(s)
}

/// Load the forward and reverse indexes for `text_path`, building and
/// persisting whichever companion files are absent.
///
/// The reverse index covers the full byte-reversal of the text; no
/// reversed text file is written.
pub fn load_or_build(text_path: &Path, silent: bool) -> Result<(FmIndex, FmIndex)> {
    let text = fs::read(text_path)
        .with_context(|| format!("ERROR: File {} does not exist", text_path.display()))?;

    let (fwd_path, rev_path, meta_path) = companion_paths(text_path);
    let mut built = false;

    let fwd = match IndexReader::open(&fwd_path, &text)? {
        Some(index) => index,
        None => {
            built = true;
            build_one(&fwd_path, text.clone(), silent)?
        }
    };

    let rev_text: Vec<u8> = text.iter().rev().copied().collect();
    let rev = match IndexReader::open(&rev_path, &rev_text)? {
        Some(index) => index,
        None => {
            built = true;
            build_one(&rev_path, rev_text, silent)?
        }
    };

    if built || !meta_path.exists() {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        let created_at = IndexReader::read_meta(&meta_path)?
            .map(|m| m.created_at)
            .unwrap_or(now);

        let meta = IndexMeta {
            text_len: fwd.text_len() as u64,
            sample_step: fwd.sample_step() as u32,
            alphabet_size: fwd.alphabet().len() as u32,
            created_at,
            updated_at: now,
            ..Default::default()
        };
        IndexWriter::write_meta(&meta, &meta_path)?;
    }

    Ok((fwd, rev))
}

/// Build one index instance and persist it
fn build_one(path: &Path, text: Vec<u8>, silent: bool) -> Result<FmIndex> {
    if !silent {
        println!("No index {} located. Building index now.", path.display());
    }

    let spinner = if silent {
        None
    } else {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        spinner.set_message("Sorting suffixes...");
        spinner.enable_steady_tick(Duration::from_millis(80));
        Some(spinner)
    };

    let index = FmIndex::build(text, DEFAULT_SAMPLE_STEP);
    IndexWriter::write(&index, path)
        .with_context(|| format!("Failed to write index file {}", path.display()))?;

    if let Some(spinner) = spinner {
        spinner.finish_with_message(format!("Index stored at: {}", path.display()));
    }

    Ok(index)
}
