//! Index reader
//!
//! Memory-maps a companion file, validates its header, and reassembles the
//! index. A missing file is `Ok(None)` so the caller can fall back to a
//! build; a present-but-invalid file is an error, never a silent rebuild.

use crate::index::fm::FmIndex;
use crate::index::types::{FMX_MAGIC, FMX_VERSION, IndexHeader, IndexMeta};
use anyhow::{Context, Result};
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

/// Reads index companion files
pub struct IndexReader;

impl IndexReader {
    /// Open the companion file at `path` for the given text.
    ///
    /// Returns `Ok(None)` if the file does not exist (triggering a build).
    pub fn open(path: &Path, text: &[u8]) -> Result<Option<FmIndex>> {
        if !path.exists() {
            return Ok(None);
        }

        let file = File::open(path)
            .with_context(|| format!("Failed to open index file {}", path.display()))?;
        let mmap = unsafe { Mmap::map(&file)? };

        if mmap.len() < IndexHeader::SIZE {
            anyhow::bail!("Invalid index file {}: file too small", path.display());
        }

        let magic = u32::from_le_bytes(mmap[0..4].try_into().unwrap());
        if magic != FMX_MAGIC {
            anyhow::bail!("Invalid index file {}: bad magic number", path.display());
        }

        let version = u32::from_le_bytes(mmap[4..8].try_into().unwrap());
        if version != FMX_VERSION {
            anyhow::bail!(
                "Unsupported index version {} in {}",
                version,
                path.display()
            );
        }

        let text_len = u64::from_le_bytes(mmap[12..20].try_into().unwrap()) as usize;
        let sample_step = u32::from_le_bytes(mmap[20..24].try_into().unwrap()) as usize;
        let sample_count = u64::from_le_bytes(mmap[24..32].try_into().unwrap()) as usize;
        let mark_words = u64::from_le_bytes(mmap[32..40].try_into().unwrap()) as usize;

        if text_len != text.len() {
            anyhow::bail!(
                "Index file {} was built over a text of {} bytes, but the text file has {} \
                 (delete the index to rebuild)",
                path.display(),
                text_len,
                text.len()
            );
        }

        let bwt_len = text_len + 1;
        let expected = IndexHeader::SIZE + bwt_len + mark_words * 8 + sample_count * 8;
        if mmap.len() < expected {
            anyhow::bail!("Invalid index file {}: truncated", path.display());
        }

        let mut offset = IndexHeader::SIZE;
        let bwt = mmap[offset..offset + bwt_len].to_vec();
        offset += bwt_len;

        let mut words = Vec::with_capacity(mark_words);
        for _ in 0..mark_words {
            words.push(u64::from_le_bytes(
                mmap[offset..offset + 8].try_into().unwrap(),
            ));
            offset += 8;
        }

        let mut samples = Vec::with_capacity(sample_count);
        for _ in 0..sample_count {
            samples.push(u64::from_le_bytes(
                mmap[offset..offset + 8].try_into().unwrap(),
            ));
            offset += 8;
        }

        Ok(Some(FmIndex::from_parts(
            text.to_vec(),
            bwt,
            sample_step,
            samples,
            words,
        )))
    }

    /// Read the metadata sidecar; `Ok(None)` when absent
    pub fn read_meta(path: &Path) -> Result<Option<IndexMeta>> {
        if !path.exists() {
            return Ok(None);
        }
        let data = std::fs::read(path)
            .with_context(|| format!("Failed to read index metadata {}", path.display()))?;
        let meta = serde_json::from_slice(&data)
            .with_context(|| format!("Invalid index metadata {}", path.display()))?;
        Ok(Some(meta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::writer::IndexWriter;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempdir().unwrap();
        let reader = IndexReader::open(&dir.path().join("absent.fmx"), b"text").unwrap();
        assert!(reader.is_none());
    }

    #[test]
    fn test_write_read_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("text.fmx");
        let text = b"the quick brown fox jumps over the lazy dog";

        let built = FmIndex::build(text.to_vec(), 4);
        IndexWriter::write(&built, &path).unwrap();

        let loaded = IndexReader::open(&path, text).unwrap().unwrap();

        for pattern in [&b"the"[..], b"quick", b"o", b"zebra"] {
            assert_eq!(built.count(pattern), loaded.count(pattern));
            let mut a = built.positions(built.suffix_range(pattern));
            let mut b = loaded.positions(loaded.suffix_range(pattern));
            a.sort_unstable();
            b.sort_unstable();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_bad_magic_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("text.fmx");
        fs::write(&path, vec![0u8; 64]).unwrap();

        assert!(IndexReader::open(&path, b"text").is_err());
    }

    #[test]
    fn test_text_length_mismatch_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("text.fmx");

        let built = FmIndex::build(b"hello world".to_vec(), 4);
        IndexWriter::write(&built, &path).unwrap();

        assert!(IndexReader::open(&path, b"different text").is_err());
    }
}
