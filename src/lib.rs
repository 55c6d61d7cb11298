//! # FMX - Approximate Substring Search
//!
//! FMX is a terminal-first tool for exact and approximate substring search
//! over large static texts. It builds a compact FM-index over the text and
//! its reversal once, persists both beside the text file, and then answers
//! interactive queries with up to two character mismatches.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`index`] - FM-index construction, persistence, and loading
//! - [`query`] - Partitioning, extension chains, matching, aggregation
//! - [`repl`] - The interactive query loop
//! - [`output`] - Result formatting
//!
//! ## Quick Start
//!
//! ```ignore
//! use fmx::index::load_or_build;
//! use fmx::query::{Searcher, aggregate};
//! use std::path::Path;
//!
//! // Load (or build) the forward and reverse indexes
//! let (fwd, rev) = load_or_build(Path::new("corpus.txt"), true).unwrap();
//!
//! // Find everything one substitution away from "banana"
//! let raw = Searcher::new(&fwd, &rev).search(b"banana", 1, true, None);
//! let results = aggregate(raw, 5);
//!
//! for candidate in &results.candidates {
//!     println!("{}: {}", candidate.offset, String::from_utf8_lossy(&candidate.matched));
//! }
//! ```
//!
//! ## Matching model
//!
//! Mode k reports occurrences at Hamming distance exactly k (substitutions
//! only). The query is partitioned into k+1 near-equal segments; by
//! pigeonhole, every placement of k substitutions leaves one segment
//! untouched, and each matcher case anchors an exact match of such a
//! segment before enumerating substituted extensions against the forward
//! or reverse index.

pub mod index;
pub mod output;
pub mod query;
pub mod repl;
