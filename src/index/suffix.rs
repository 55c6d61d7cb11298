//! Suffix array and Burrows-Wheeler transform construction
//!
//! The suffix order includes the implicit sentinel position at `text.len()`,
//! so the array has `n + 1` entries and the derived BWT is the column the
//! backward search walks. Sorting is the only expensive build step; large
//! texts go through rayon's parallel sort.

use crate::index::types::SENTINEL;
use rayon::prelude::*;

/// Texts above this size are sorted in parallel
const PARALLEL_SORT_THRESHOLD: usize = 100_000;

/// Build the suffix array over `text` plus the implicit sentinel.
///
/// Entry values are positions into the text; the value `n` stands for the
/// sentinel suffix and always sorts first.
pub fn build_suffix_array(text: &[u8]) -> Vec<u64> {
    let n = text.len();
    let mut sa: Vec<u64> = (0..=n as u64).collect();

    // Full suffix comparison: the BWT depends on the exact order, so the
    // comparison cannot be depth-bounded. The sentinel suffix compares as
    // the empty slice, which is smallest.
    let compare = |&a: &u64, &b: &u64| text[a as usize..].cmp(&text[b as usize..]);

    if n > PARALLEL_SORT_THRESHOLD {
        sa.par_sort_unstable_by(compare);
    } else {
        sa.sort_unstable_by(compare);
    }

    sa
}

/// Derive the BWT from the text and its suffix array.
/// `bwt[i] = text[sa[i] - 1]`, with the sentinel standing in at `sa[i] == 0`.
pub fn build_bwt(text: &[u8], sa: &[u64]) -> Vec<u8> {
    let mut bwt = Vec::with_capacity(sa.len());
    for &idx in sa {
        if idx == 0 {
            bwt.push(SENTINEL);
        } else {
            bwt.push(text[idx as usize - 1]);
        }
    }
    bwt
}

/// Build the C-table: `c_table[c]` = number of BWT bytes lexicographically
/// smaller than c. The LF-mapping of backward search is
/// `row' = c_table[c] + rank(c, row)`.
pub fn build_c_table(bwt: &[u8]) -> [usize; 256] {
    let mut counts = [0usize; 256];
    for &c in bwt {
        counts[c as usize] += 1;
    }

    let mut c_table = [0usize; 256];
    let mut sum = 0;
    for (c, count) in counts.iter().enumerate() {
        c_table[c] = sum;
        sum += count;
    }
    c_table
}

/// Distinct non-sentinel bytes of the text, ascending.
/// This is the substitution alphabet of the extension engine.
pub fn byte_alphabet(bwt: &[u8]) -> Vec<u8> {
    let mut seen = [false; 256];
    for &c in bwt {
        seen[c as usize] = true;
    }
    (1u16..256)
        .map(|c| c as u8)
        .filter(|&c| seen[c as usize])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_array_banana() {
        let sa = build_suffix_array(b"banana");

        // Suffixes of "banana" + sentinel, sorted:
        // 6: (sentinel)
        // 5: a
        // 3: ana
        // 1: anana
        // 0: banana
        // 4: na
        // 2: nana
        assert_eq!(sa, vec![6, 5, 3, 1, 0, 4, 2]);
    }

    #[test]
    fn test_bwt_banana() {
        let text = b"banana";
        let sa = build_suffix_array(text);
        let bwt = build_bwt(text, &sa);

        assert_eq!(bwt, vec![b'a', b'n', b'n', b'b', SENTINEL, b'a', b'a']);
    }

    #[test]
    fn test_c_table() {
        let text = b"banana";
        let sa = build_suffix_array(text);
        let bwt = build_bwt(text, &sa);
        let c_table = build_c_table(&bwt);

        // 1 sentinel, 3 'a', 1 'b', 2 'n'
        assert_eq!(c_table[SENTINEL as usize], 0);
        assert_eq!(c_table[b'a' as usize], 1);
        assert_eq!(c_table[b'b' as usize], 4);
        assert_eq!(c_table[b'n' as usize], 5);
    }

    #[test]
    fn test_alphabet() {
        let text = b"banana";
        let sa = build_suffix_array(text);
        let bwt = build_bwt(text, &sa);

        assert_eq!(byte_alphabet(&bwt), vec![b'a', b'b', b'n']);
    }

    #[test]
    fn test_repeated_suffixes() {
        // "aaaa": shorter suffixes sort first under the sentinel convention
        let sa = build_suffix_array(b"aaaa");
        assert_eq!(sa, vec![4, 3, 2, 1, 0]);
    }
}
