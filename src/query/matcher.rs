//! k-error matcher
//!
//! Orchestrates the narrowing chains that together cover every placement
//! of exactly k substitutions, for k in 0..=2. Each case anchors on a
//! segment the placement leaves untouched and walks the rest of the query
//! through the extension engine, against whichever index instance lets
//! the anchor be matched first:
//!
//! - k=0: the whole query, forward index.
//! - k=1: pass L (error in the first half, forward index) and pass R
//!   (error in the second half, reverse index on the reversed query).
//!   Both passes always run.
//! - k=2 with thirds T1/T2/T3: case A (both errors in T1∪T2, forward),
//!   case B (both in T3, reverse), case C (one in T2 and one in T3,
//!   reverse), case D (one in T1 and one in T3). Case D is the only one
//!   whose clean segment sits in the middle, so it runs in two stages:
//!   a forward chain realizes the prefix through T2, then each surviving
//!   realization is re-anchored in the reverse index and extended through
//!   T3; the index instance switches because the extension direction
//!   reverses.
//!
//! The four k=2 cases partition the placements, so no candidate is
//! produced twice; the aggregator still deduplicates as a matter of
//! contract.

use crate::index::fm::FmIndex;
use crate::index::types::SuffixRange;
use crate::query::extend::{Chain, Zone};
use crate::query::partition::partition;
use crate::query::results::Candidate;
use std::time::Instant;

/// Raw output of all passes/cases for one query, before aggregation
#[derive(Debug, Default)]
pub struct RawMatches {
    /// Candidates in original-text coordinates (empty when not locating)
    pub candidates: Vec<Candidate>,
    /// Summed sizes of all surviving ranges (used when not locating)
    pub span_total: usize,
    /// True if a deadline cut some chain short
    pub truncated: bool,
}

/// Shared handles to the two index instances
pub struct Searcher<'a> {
    fwd: &'a FmIndex,
    rev: &'a FmIndex,
}

impl<'a> Searcher<'a> {
    pub fn new(fwd: &'a FmIndex, rev: &'a FmIndex) -> Self {
        debug_assert_eq!(fwd.text_len(), rev.text_len());
        Self { fwd, rev }
    }

    /// Run every pass/case for `mismatches` over one query.
    ///
    /// With `locate` false, positions are never enumerated or translated;
    /// only the surviving range sizes are summed. Matches are occurrences
    /// at Hamming distance exactly `mismatches`.
    pub fn search(
        &self,
        query: &[u8],
        mismatches: u8,
        locate: bool,
        deadline: Option<Instant>,
    ) -> RawMatches {
        let mut raw = RawMatches::default();
        let m = query.len();
        if m == 0 {
            return raw;
        }

        let rq: Vec<u8> = query.iter().rev().copied().collect();
        let segments = partition(m, mismatches as usize);

        match mismatches {
            0 => {
                self.run_case(
                    self.fwd,
                    query.to_vec(),
                    vec![Zone::new(0, m, 0)],
                    false,
                    locate,
                    deadline,
                    &mut raw,
                );
            }
            1 => {
                let mid = segments[0].end;
                // Pass L: the error in the first half, second half anchors
                self.run_case(
                    self.fwd,
                    query.to_vec(),
                    vec![Zone::new(0, mid, 1), Zone::new(mid, m, 0)],
                    false,
                    locate,
                    deadline,
                    &mut raw,
                );
                // Pass R: the error in the second half, reversed query
                // against the reverse index
                self.run_case(
                    self.rev,
                    rq.clone(),
                    vec![Zone::new(0, m - mid, 1), Zone::new(m - mid, m, 0)],
                    true,
                    locate,
                    deadline,
                    &mut raw,
                );
            }
            _ => {
                let b1 = segments[0].end;
                let b2 = segments[1].end;

                // Case A: both errors in T1∪T2, T3 anchors
                self.run_case(
                    self.fwd,
                    query.to_vec(),
                    vec![Zone::new(0, b2, 2), Zone::new(b2, m, 0)],
                    false,
                    locate,
                    deadline,
                    &mut raw,
                );
                // Case B: both errors in T3, the prefix anchors
                self.run_case(
                    self.rev,
                    rq.clone(),
                    vec![Zone::new(0, m - b2, 2), Zone::new(m - b2, m, 0)],
                    true,
                    locate,
                    deadline,
                    &mut raw,
                );
                // Case C: one error in T2, one in T3, T1 anchors
                self.run_case(
                    self.rev,
                    rq.clone(),
                    vec![
                        Zone::new(0, m - b2, 1),
                        Zone::new(m - b2, m - b1, 1),
                        Zone::new(m - b1, m, 0),
                    ],
                    true,
                    locate,
                    deadline,
                    &mut raw,
                );
                // Case D: one error in T1, one in T3, T2 anchors
                self.run_case_d(query, &rq, b1, b2, locate, deadline, &mut raw);
            }
        }

        raw
    }

    /// Run one single-chain case and collect its emissions
    #[allow(clippy::too_many_arguments)]
    fn run_case(
        &self,
        index: &FmIndex,
        pattern: Vec<u8>,
        zones: Vec<Zone>,
        reverse: bool,
        locate: bool,
        deadline: Option<Instant>,
        raw: &mut RawMatches,
    ) {
        let query_len = pattern.len();
        let Some(chain) = Chain::new(index, pattern, zones, deadline) else {
            return;
        };

        let mut emit = |range: SuffixRange, realized: &[u8]| {
            collect_emission(index, reverse, query_len, locate, range, realized, raw);
        };
        let completed = chain.walk(&mut emit);
        raw.truncated |= !completed;
    }

    /// Case D: error in T1 and error in T3, with the clean middle third.
    ///
    /// Stage 1 walks the query prefix `[0, b2)` in the forward index with
    /// the T1 error enumerated and T2 exact. Every surviving realization
    /// is then looked up reversed in the reverse index (a fresh anchor)
    /// and stage 2 extends it through T3 with the second error.
    #[allow(clippy::too_many_arguments)]
    fn run_case_d(
        &self,
        query: &[u8],
        rq: &[u8],
        b1: usize,
        b2: usize,
        locate: bool,
        deadline: Option<Instant>,
        raw: &mut RawMatches,
    ) {
        let m = query.len();
        let tail = m - b2; // length of T3
        if b1 == 0 || tail == 0 {
            return;
        }

        let Some(stage1) = Chain::new(
            self.fwd,
            query[..b2].to_vec(),
            vec![Zone::new(0, b1, 1), Zone::new(b1, b2, 0)],
            deadline,
        ) else {
            return;
        };

        let mut prefixes: Vec<Vec<u8>> = Vec::new();
        let completed = stage1.walk(&mut |_range, realized| {
            prefixes.push(realized.to_vec());
        });
        raw.truncated |= !completed;

        for prefix in prefixes {
            let reversed_prefix: Vec<u8> = prefix.iter().rev().copied().collect();
            let seed = self.rev.suffix_range(&reversed_prefix);
            if seed.is_empty() {
                continue;
            }

            // The stage-2 pattern is the reversed query with the realized
            // prefix spliced into its tail positions
            let mut pattern = rq.to_vec();
            pattern[tail..].copy_from_slice(&reversed_prefix);

            let Some(stage2) = Chain::new(
                self.rev,
                pattern,
                vec![Zone::new(0, tail, 1)],
                deadline,
            ) else {
                continue;
            };

            let mut emit = |range: SuffixRange, realized: &[u8]| {
                collect_emission(self.rev, true, m, locate, range, realized, raw);
            };
            let completed = stage2.walk_from(seed, tail, &mut emit);
            raw.truncated |= !completed;
        }
    }
}

/// Turn one surviving range into candidates (or a count contribution).
///
/// Reverse-chain offsets are translated to original-text coordinates via
/// `offset = N - reverseOffset - queryLength`; the reversed copy is
/// complete, so no sentinel adjustment applies.
fn collect_emission(
    index: &FmIndex,
    reverse: bool,
    query_len: usize,
    locate: bool,
    range: SuffixRange,
    realized: &[u8],
    raw: &mut RawMatches,
) {
    if !locate {
        raw.span_total += range.len();
        return;
    }

    let matched: Vec<u8> = if reverse {
        realized.iter().rev().copied().collect()
    } else {
        realized.to_vec()
    };

    for position in index.positions(range) {
        let offset = if reverse {
            index.text_len() - position - query_len
        } else {
            position
        };
        raw.candidates.push(Candidate {
            offset,
            matched: matched.clone(),
        });
    }
}
