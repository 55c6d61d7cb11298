//! Query partitioning for the pigeonhole case analysis
//!
//! A query of length m searched with k permitted mismatches is cut into
//! k+1 contiguous, near-equal segments. Any placement of at most k
//! single-character substitutions leaves at least one segment untouched,
//! so every case of the matcher can anchor on an exactly-matched segment.

/// One contiguous segment of the query, `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
}

impl Segment {
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Split `[0, m)` into k+1 contiguous segments with lengths differing by
/// at most one. The remainder is absorbed by the leftmost segments; the
/// same rule serves every mismatch case, so boundaries are deterministic
/// for a given (m, k).
pub fn partition(m: usize, k: usize) -> Vec<Segment> {
    let parts = k + 1;
    let base = m / parts;
    let rem = m % parts;

    let mut segments = Vec::with_capacity(parts);
    let mut start = 0;
    for i in 0..parts {
        let len = base + usize::from(i < rem);
        segments.push(Segment {
            start,
            end: start + len,
        });
        start += len;
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The contract every caller relies on: k+1 contiguous segments
    /// covering [0, m), lengths differing by at most one.
    fn assert_contract(m: usize, k: usize) {
        let segments = partition(m, k);
        assert_eq!(segments.len(), k + 1);

        let mut expected_start = 0;
        for seg in &segments {
            assert_eq!(seg.start, expected_start);
            expected_start = seg.end;
        }
        assert_eq!(expected_start, m);

        let lens: Vec<usize> = segments.iter().map(Segment::len).collect();
        let min = lens.iter().min().unwrap();
        let max = lens.iter().max().unwrap();
        assert!(max - min <= 1, "m={m} k={k}: lengths {lens:?}");
    }

    #[test]
    fn test_contract_holds() {
        for m in 0..64 {
            for k in 0..3 {
                assert_contract(m, k);
            }
        }
    }

    #[test]
    fn test_whole_query_for_exact() {
        assert_eq!(partition(10, 0), vec![Segment { start: 0, end: 10 }]);
    }

    #[test]
    fn test_near_half_split() {
        assert_eq!(
            partition(7, 1),
            vec![Segment { start: 0, end: 4 }, Segment { start: 4, end: 7 }]
        );
        assert_eq!(
            partition(8, 1),
            vec![Segment { start: 0, end: 4 }, Segment { start: 4, end: 8 }]
        );
    }

    #[test]
    fn test_near_third_split() {
        assert_eq!(
            partition(9, 2),
            vec![
                Segment { start: 0, end: 3 },
                Segment { start: 3, end: 6 },
                Segment { start: 6, end: 9 }
            ]
        );
        // Remainder absorbed leftmost
        assert_eq!(
            partition(7, 2),
            vec![
                Segment { start: 0, end: 3 },
                Segment { start: 3, end: 5 },
                Segment { start: 5, end: 7 }
            ]
        );
        assert_eq!(
            partition(8, 2),
            vec![
                Segment { start: 0, end: 3 },
                Segment { start: 3, end: 6 },
                Segment { start: 6, end: 8 }
            ]
        );
    }

    #[test]
    fn test_short_queries_get_empty_segments() {
        let segments = partition(2, 2);
        assert_eq!(segments.len(), 3);
        assert!(segments[2].is_empty());
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(partition(13, 2), partition(13, 2));
    }
}
