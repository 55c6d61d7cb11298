//! Context extraction for reported occurrences
//!
//! Each retained candidate is reported with the text around it, clamped
//! to the text boundaries and trimmed to the enclosing line: pre-context
//! starts after the nearest newline, post-context stops before the next
//! one.

use crate::index::fm::FmIndex;
use crate::query::results::Candidate;

/// Line-trimmed context around one occurrence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub before: Vec<u8>,
    /// The matched text as realized (substitutions applied)
    pub matched: Vec<u8>,
    pub after: Vec<u8>,
}

/// Extract the context window for `candidate` from the forward index
pub fn snippet(index: &FmIndex, candidate: &Candidate, pre: usize, post: usize) -> Snippet {
    let n = index.text_len();
    let m = candidate.matched.len();
    let p = candidate.offset;

    let pre_len = pre.min(p);
    let post_len = post.min(n.saturating_sub(p + m));

    let window = index.extract(p - pre_len, p + m + post_len);
    let before = &window[..pre_len];
    let after = &window[pre_len + m..];

    // Trim to the enclosing line
    let before = match memchr::memrchr(b'\n', before) {
        Some(nl) => &before[nl + 1..],
        None => before,
    };
    let after = match memchr::memchr(b'\n', after) {
        Some(nl) => &after[..nl],
        None => after,
    };

    Snippet {
        before: before.to_vec(),
        matched: candidate.matched.clone(),
        after: after.to_vec(),
    }
}
