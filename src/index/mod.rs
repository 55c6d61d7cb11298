//! FM-index construction, persistence, and loading
//!
//! Two instances are kept per text: one over the forward bytes and one
//! over the full byte-reversal. Both expose the same operation set
//! (exact-range lookup, one-character left-extension, position
//! enumeration, raw count, context extraction) and are immutable after
//! startup.
//!
//! ## File layout
//!
//! For a text file `corpus.txt`:
//! - `corpus.txt.fmx`: forward index (BWT + sampled suffix array)
//! - `corpus.txt.rev.fmx`: reverse index
//! - `corpus.txt.fmx.json`: metadata sidecar

pub mod bitvec;
pub mod build;
pub mod fm;
pub mod reader;
pub mod suffix;
pub mod types;
pub mod wavelet;
pub mod writer;

// Re-exports for convenience
pub use build::{companion_paths, load_or_build};
pub use fm::FmIndex;
pub use types::{IndexMeta, SuffixRange};
