//! Index writer
//!
//! Persists an index to its companion file in a format optimized for a
//! single sequential read: fixed header, then the BWT, the sampled-row
//! marks, and the sampled suffix-array values, all little-endian.
//!
//! The wavelet matrix and C-table are not persisted; they are linear-time
//! derivations of the BWT and get rebuilt on load. Only what would require
//! re-sorting the suffixes goes to disk.

use crate::index::fm::FmIndex;
use crate::index::types::{IndexHeader, IndexMeta};
use anyhow::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes index companion files
pub struct IndexWriter;

impl IndexWriter {
    /// Write `index` to `path`, replacing any existing file
    pub fn write(index: &FmIndex, path: &Path) -> Result<()> {
        let bwt = index.bwt_bytes();
        let samples = index.samples();
        let mark_words = index.mark_words();

        let header = IndexHeader::new(
            index.text_len() as u64,
            index.sample_step() as u32,
            samples.len() as u64,
            mark_words.len() as u64,
        );

        let mut file = BufWriter::with_capacity(65536, File::create(path)?);

        file.write_all(&header.magic.to_le_bytes())?;
        file.write_all(&header.version.to_le_bytes())?;
        file.write_all(&header.flags.to_le_bytes())?;
        file.write_all(&header.text_len.to_le_bytes())?;
        file.write_all(&header.sample_step.to_le_bytes())?;
        file.write_all(&header.sample_count.to_le_bytes())?;
        file.write_all(&header.mark_words.to_le_bytes())?;

        file.write_all(&bwt)?;

        for &word in mark_words {
            file.write_all(&word.to_le_bytes())?;
        }
        for &sample in samples {
            file.write_all(&sample.to_le_bytes())?;
        }

        file.flush()?;
        Ok(())
    }

    /// Write the metadata sidecar
    pub fn write_meta(meta: &IndexMeta, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, meta)?;
        Ok(())
    }
}
