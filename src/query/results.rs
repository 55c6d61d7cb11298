//! Candidate aggregation
//!
//! All passes and cases feed one shared collection per query. Aggregation
//! deduplicates by (offset, matchedText), orders by offset, and caps the
//! reported list while keeping the full count.

use crate::query::matcher::RawMatches;

/// One reportable occurrence, in original-text coordinates
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Candidate {
    /// Byte offset of the occurrence in the original text
    pub offset: usize,
    /// The query with its permitted substitutions realized; equals the
    /// text bytes at `[offset, offset + len)`
    pub matched: Vec<u8>,
}

/// Deduplicated, offset-sorted, capped view of one query's matches
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    /// Total number of occurrences; may exceed `candidates.len()`
    pub total: usize,
    /// The first occurrences by offset order, at most the configured cap
    pub candidates: Vec<Candidate>,
    /// True if a deadline cut the search short (counts are a lower bound)
    pub truncated: bool,
}

/// Collapse raw matches into a result set.
///
/// With `max_locations == 0` the matcher never enumerated positions; the
/// total is the summed size of all surviving ranges and no candidates are
/// reported.
pub fn aggregate(raw: RawMatches, max_locations: usize) -> ResultSet {
    if max_locations == 0 {
        return ResultSet {
            total: raw.span_total,
            candidates: Vec::new(),
            truncated: raw.truncated,
        };
    }

    let mut candidates = raw.candidates;
    candidates.sort();
    candidates.dedup();

    let total = candidates.len();
    candidates.truncate(max_locations);

    ResultSet {
        total,
        candidates,
        truncated: raw.truncated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(offset: usize, matched: &[u8]) -> Candidate {
        Candidate {
            offset,
            matched: matched.to_vec(),
        }
    }

    #[test]
    fn test_dedup_and_sort() {
        let raw = RawMatches {
            candidates: vec![
                candidate(7, b"abc"),
                candidate(2, b"abc"),
                candidate(7, b"abc"),
                candidate(2, b"azc"),
            ],
            span_total: 0,
            truncated: false,
        };

        let results = aggregate(raw, 10);
        assert_eq!(results.total, 3);
        assert_eq!(
            results.candidates,
            vec![candidate(2, b"abc"), candidate(2, b"azc"), candidate(7, b"abc")]
        );
    }

    #[test]
    fn test_cap_keeps_total() {
        let raw = RawMatches {
            candidates: (0..20).map(|o| candidate(o, b"x")).collect(),
            span_total: 0,
            truncated: false,
        };

        let results = aggregate(raw, 5);
        assert_eq!(results.total, 20);
        assert_eq!(results.candidates.len(), 5);
        assert_eq!(results.candidates[0].offset, 0);
        assert_eq!(results.candidates[4].offset, 4);
    }

    #[test]
    fn test_count_only_mode() {
        let raw = RawMatches {
            candidates: Vec::new(),
            span_total: 42,
            truncated: false,
        };

        let results = aggregate(raw, 0);
        assert_eq!(results.total, 42);
        assert!(results.candidates.is_empty());
    }

    #[test]
    fn test_zero_occurrences_is_normal() {
        let results = aggregate(RawMatches::default(), 5);
        assert_eq!(results.total, 0);
        assert!(results.candidates.is_empty());
    }
}
