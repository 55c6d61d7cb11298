//! Extension engine
//!
//! Pure range-narrowing primitives over one index instance, and the
//! budgeted depth-first walk that drives them across a pattern. The walk
//! is the single code path behind every mismatch case of the matcher: a
//! case is just a pattern orientation plus a set of error-budget zones.

use crate::index::fm::FmIndex;
use crate::index::types::SuffixRange;
use std::time::Instant;

/// Narrow `range` by requiring `c` immediately left-adjacent (in the
/// index's orientation) to the currently matched string
#[inline]
pub fn exact_extend(index: &FmIndex, range: SuffixRange, c: u8) -> SuffixRange {
    index.extend_left(range, c)
}

/// All single-character left-extensions that substitute `true_char`:
/// one narrowed range per alphabet byte other than the true one. The
/// exact character is the zero-mismatch branch and is never yielded here.
pub fn substituted_extend<'a>(
    index: &'a FmIndex,
    range: SuffixRange,
    true_char: u8,
) -> impl Iterator<Item = (u8, SuffixRange)> + 'a {
    index
        .alphabet()
        .iter()
        .filter(move |&&c| c != true_char)
        .map(move |&c| (c, index.extend_left(range, c)))
}

/// A contiguous span of the oriented pattern that must consume exactly
/// `errors` substitutions
#[derive(Debug, Clone, Copy)]
pub struct Zone {
    pub start: usize,
    pub end: usize,
    pub errors: usize,
}

impl Zone {
    pub fn new(start: usize, end: usize, errors: usize) -> Self {
        Self { start, end, errors }
    }

    #[inline]
    fn len(&self) -> usize {
        self.end - self.start
    }
}

/// One narrowing chain: an oriented pattern walked right-to-left against
/// one index, with substitutions enumerated inside the error zones.
///
/// Zones must be contiguous from position 0; positions past the last zone
/// are never visited (they are the caller's anchor or seed). A zone
/// shorter than its error budget makes the chain infeasible, in which
/// case construction yields `None` and the case contributes nothing.
pub struct Chain<'a> {
    index: &'a FmIndex,
    pattern: Vec<u8>,
    zones: Vec<Zone>,
    deadline: Option<Instant>,
}

struct Walk<'e> {
    realized: Vec<u8>,
    remaining: Vec<usize>,
    truncated: bool,
    emit: &'e mut dyn FnMut(SuffixRange, &[u8]),
}

impl<'a> Chain<'a> {
    pub fn new(
        index: &'a FmIndex,
        pattern: Vec<u8>,
        zones: Vec<Zone>,
        deadline: Option<Instant>,
    ) -> Option<Self> {
        if zones.iter().any(|z| z.errors > z.len()) {
            return None;
        }

        let zones: Vec<Zone> = zones.into_iter().filter(|z| z.len() > 0).collect();
        debug_assert!(zones.first().is_none_or(|z| z.start == 0));
        debug_assert!(
            zones.windows(2).all(|w| w[0].end == w[1].start),
            "zones must be contiguous"
        );
        debug_assert!(zones.last().is_none_or(|z| z.end <= pattern.len()));

        Some(Self {
            index,
            pattern,
            zones,
            deadline,
        })
    }

    /// Walk the full zone cover from the whole-index range.
    /// Returns false if the deadline cut the walk short.
    pub fn walk(&self, emit: &mut dyn FnMut(SuffixRange, &[u8])) -> bool {
        let start = self.zones.last().map_or(0, |z| z.end);
        self.walk_from(self.index.full_range(), start, emit)
    }

    /// Walk from a pre-narrowed seed range, processing pattern positions
    /// `[0, pos)` right to left. `pos` must equal the zone cover's end.
    pub fn walk_from(
        &self,
        seed: SuffixRange,
        pos: usize,
        emit: &mut dyn FnMut(SuffixRange, &[u8]),
    ) -> bool {
        debug_assert_eq!(pos, self.zones.last().map_or(0, |z| z.end));

        let mut walk = Walk {
            realized: self.pattern.clone(),
            remaining: self.zones.iter().map(|z| z.errors).collect(),
            truncated: false,
            emit,
        };
        self.step(pos, seed, &mut walk);
        !walk.truncated
    }

    fn step(&self, pos: usize, range: SuffixRange, walk: &mut Walk) {
        // An empty range is terminal: abandon the branch
        if range.is_empty() || walk.truncated {
            return;
        }
        if let Some(deadline) = self.deadline
            && Instant::now() >= deadline
        {
            walk.truncated = true;
            return;
        }

        if pos == 0 {
            debug_assert!(walk.remaining.iter().all(|&r| r == 0));
            let Walk { emit, realized, .. } = walk;
            emit(range, realized.as_slice());
            return;
        }

        let p = pos - 1;
        let z = self
            .zones
            .iter()
            .position(|zone| p < zone.end)
            .expect("position outside zone cover");

        // Exact branch, unless the zone's outstanding budget no longer
        // fits strictly left of this position
        if p - self.zones[z].start >= walk.remaining[z] {
            self.step(p, exact_extend(self.index, range, self.pattern[p]), walk);
        }

        // Substitution branch: one budget unit, every alphabet byte but
        // the true one
        if walk.remaining[z] > 0 {
            walk.remaining[z] -= 1;
            for (c, narrowed) in substituted_extend(self.index, range, self.pattern[p]) {
                if narrowed.is_empty() {
                    continue;
                }
                walk.realized[p] = c;
                self.step(p, narrowed, walk);
            }
            walk.realized[p] = self.pattern[p];
            walk.remaining[z] += 1;
        }
    }
}
