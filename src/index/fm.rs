//! The FM-index
//!
//! One instance indexes one orientation of the text (the tool keeps two:
//! forward and reversed). The index is built once and never mutated; all
//! query-side components hold it by shared reference.
//!
//! Operations exposed to the query layer:
//! - [`FmIndex::suffix_range`]: exact range for a literal pattern
//! - [`FmIndex::extend_left`]: one-character left-extension of a range
//! - [`FmIndex::positions`]: offset enumeration for a range
//! - [`FmIndex::count`]: raw occurrence count
//! - [`FmIndex::extract`]: context extraction for an offset span

use crate::index::bitvec::{BitBuilder, RankBits};
use crate::index::suffix::{build_bwt, build_c_table, build_suffix_array, byte_alphabet};
use crate::index::types::{SENTINEL, SuffixRange};
use crate::index::wavelet::WaveletMatrix;

/// Succinct full-text index over one text orientation
pub struct FmIndex {
    /// The indexed bytes; kept for context extraction
    text: Vec<u8>,
    /// Wavelet matrix over the BWT (rank support for LF-mapping)
    wm: WaveletMatrix,
    /// Cumulative byte counts for LF-mapping
    c_table: [usize; 256],
    /// Distinct text bytes, ascending
    alphabet: Vec<u8>,
    /// Suffix-array sampling interval
    sample_step: usize,
    /// Sampled suffix-array values, in row order
    samples: Vec<u64>,
    /// Marks the rows whose suffix-array value is sampled
    marks: RankBits,
}

impl FmIndex {
    /// Build an index over `text`.
    ///
    /// Sorting the suffixes dominates the cost; everything else is linear.
    /// `sample_step` bounds the LF-walk length of [`FmIndex::positions`].
    pub fn build(text: Vec<u8>, sample_step: usize) -> Self {
        let sample_step = sample_step.max(1);

        let sa = build_suffix_array(&text);
        let bwt = build_bwt(&text, &sa);

        let mut samples = Vec::with_capacity(sa.len() / sample_step + 1);
        let mut marks = BitBuilder::with_capacity(sa.len());
        for &pos in &sa {
            if pos as usize % sample_step == 0 {
                samples.push(pos);
                marks.push(true);
            } else {
                marks.push(false);
            }
        }

        Self::assemble(text, bwt, sample_step, samples, marks.finish())
    }

    /// Reassemble an index from persisted parts.
    ///
    /// The wavelet matrix and C-table are derived from the BWT; only the
    /// parts that would require re-sorting the suffixes are persisted.
    pub fn from_parts(
        text: Vec<u8>,
        bwt: Vec<u8>,
        sample_step: usize,
        samples: Vec<u64>,
        mark_words: Vec<u64>,
    ) -> Self {
        let marks = RankBits::from_words(mark_words, bwt.len());
        Self::assemble(text, bwt, sample_step.max(1), samples, marks)
    }

    fn assemble(
        text: Vec<u8>,
        bwt: Vec<u8>,
        sample_step: usize,
        samples: Vec<u64>,
        marks: RankBits,
    ) -> Self {
        let wm = WaveletMatrix::build(&bwt);
        let c_table = build_c_table(&bwt);
        let alphabet = byte_alphabet(&bwt);

        Self {
            text,
            wm,
            c_table,
            alphabet,
            sample_step,
            samples,
            marks,
        }
    }

    /// The range covering every suffix
    #[inline]
    pub fn full_range(&self) -> SuffixRange {
        SuffixRange::new(0, self.wm.len())
    }

    /// Exact suffix range for a literal pattern.
    ///
    /// An empty pattern matches everywhere. Patterns containing bytes
    /// outside the alphabet narrow to the empty range; no rejection path
    /// exists or is needed.
    pub fn suffix_range(&self, pattern: &[u8]) -> SuffixRange {
        let mut range = self.full_range();
        for &c in pattern.iter().rev() {
            range = self.extend_left(range, c);
            if range.is_empty() {
                return SuffixRange::EMPTY;
            }
        }
        range
    }

    /// Narrow `range` by requiring `c` immediately left of the currently
    /// matched string. One LF-mapping step; empty if unsatisfiable.
    #[inline]
    pub fn extend_left(&self, range: SuffixRange, c: u8) -> SuffixRange {
        if range.is_empty() || c == SENTINEL {
            return SuffixRange::EMPTY;
        }
        let base = self.c_table[c as usize];
        SuffixRange::new(
            base + self.wm.rank(c, range.lo),
            base + self.wm.rank(c, range.hi),
        )
    }

    /// Occurrence count for a literal pattern
    pub fn count(&self, pattern: &[u8]) -> usize {
        self.suffix_range(pattern).len()
    }

    /// Text offset for one suffix row, via the LF walk to the nearest
    /// sampled row. O(sample_step) steps.
    pub fn position(&self, mut row: usize) -> usize {
        let mut steps = 0;
        loop {
            if self.marks.get(row) {
                return self.samples[self.marks.rank1(row)] as usize + steps;
            }
            let c = self.wm.get(row);
            if c == SENTINEL {
                // Walked past the text start; the suffix began at `steps`
                return steps;
            }
            row = self.c_table[c as usize] + self.wm.rank(c, row);
            steps += 1;
        }
    }

    /// Text offsets for every row of a range, in row order
    pub fn positions(&self, range: SuffixRange) -> Vec<usize> {
        (range.lo..range.hi).map(|row| self.position(row)).collect()
    }

    /// Bytes of the span `[start, end)`, clamped to the text
    pub fn extract(&self, start: usize, end: usize) -> &[u8] {
        let n = self.text.len();
        let start = start.min(n);
        let end = end.clamp(start, n);
        &self.text[start..end]
    }

    /// Length of the indexed text, excluding the sentinel
    #[inline]
    pub fn text_len(&self) -> usize {
        self.text.len()
    }

    /// Distinct text bytes, ascending
    #[inline]
    pub fn alphabet(&self) -> &[u8] {
        &self.alphabet
    }

    #[inline]
    pub fn sample_step(&self) -> usize {
        self.sample_step
    }

    /// Sampled suffix-array values, in row order
    pub fn samples(&self) -> &[u64] {
        &self.samples
    }

    /// Packed words of the sampled-row marks
    pub fn mark_words(&self) -> &[u64] {
        self.marks.words()
    }

    /// Reconstruct the BWT bytes (for persistence)
    pub fn bwt_bytes(&self) -> Vec<u8> {
        (0..self.wm.len()).map(|i| self.wm.get(i)).collect()
    }

    /// Approximate resident size in bytes
    pub fn size_bytes(&self) -> usize {
        self.text.len()
            + self.wm.heap_bytes()
            + self.samples.len() * 8
            + self.marks.heap_bytes()
            + std::mem::size_of::<[usize; 256]>()
    }
}
