//! Query-side components: partitioning, extension, matching, aggregation,
//! and context extraction
//!
//! The flow per query line: the matcher runs every pass/case for the
//! configured mismatch count, the aggregator collapses raw candidates
//! into a result set, and the context reporter decorates the retained
//! occurrences for display.

pub mod context;
pub mod extend;
pub mod matcher;
pub mod partition;
pub mod results;

use std::time::Duration;

pub use context::{Snippet, snippet};
pub use matcher::{RawMatches, Searcher};
pub use partition::{Segment, partition};
pub use results::{Candidate, ResultSet, aggregate};

/// Per-session search configuration, fixed at startup
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Permitted character mismatches (0, 1, or 2)
    pub mismatches: u8,
    /// Maximum number of reported locations; 0 switches to count-only
    pub max_locations: usize,
    /// Maximal length of the reported pre-context
    pub pre_context: usize,
    /// Maximal length of the reported post-context
    pub post_context: usize,
    /// Optional per-query search deadline
    pub deadline: Option<Duration>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            mismatches: 0,
            max_locations: 5,
            pre_context: 10,
            post_context: 10,
            deadline: None,
        }
    }
}
