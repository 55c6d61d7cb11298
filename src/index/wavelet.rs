//! Wavelet matrix over a byte sequence
//!
//! Stores the BWT and answers `rank(c, i)` and `get(i)` in a fixed eight
//! steps per query, one per bit layer. Construction reuses two ping-pong
//! buffers across all layers, so no per-layer allocations happen.

use crate::index::bitvec::{BitBuilder, RankBits};

/// One layer per bit of a byte
const LAYERS: usize = 8;

/// Rank-capable byte sequence (the BWT lives here)
pub struct WaveletMatrix {
    /// One bit vector per layer, MSB layer first in construction order
    layers: Vec<RankBits>,
    /// Number of zero bits in each layer, used for routing
    zeros: [usize; LAYERS],
    len: usize,
}

impl WaveletMatrix {
    /// Build from a byte sequence
    pub fn build(data: &[u8]) -> Self {
        let n = data.len();
        let mut layers = Vec::with_capacity(LAYERS);
        let mut zeros = [0usize; LAYERS];

        if n == 0 {
            for _ in 0..LAYERS {
                layers.push(BitBuilder::new().finish());
            }
            return Self { layers, zeros, len: 0 };
        }

        let mut current = data.to_vec();
        let mut next = vec![0u8; n];

        for d in (0..LAYERS).rev() {
            let mask = 1u8 << d;
            let mut builder = BitBuilder::with_capacity(n);

            let zero_count = current.iter().filter(|&&c| c & mask == 0).count();
            zeros[d] = zero_count;

            // Stable partition by the current bit while recording it
            let mut z_ptr = 0;
            let mut o_ptr = zero_count;
            for &c in &current {
                let bit = c & mask != 0;
                builder.push(bit);
                if bit {
                    next[o_ptr] = c;
                    o_ptr += 1;
                } else {
                    next[z_ptr] = c;
                    z_ptr += 1;
                }
            }

            layers.push(builder.finish());
            std::mem::swap(&mut current, &mut next);
        }

        // Built MSB-first; store so that layers[d] serves bit d
        layers.reverse();

        Self { layers, zeros, len: n }
    }

    /// Byte at position i
    #[inline]
    pub fn get(&self, mut i: usize) -> u8 {
        let mut c = 0u8;
        for d in (0..LAYERS).rev() {
            let layer = &self.layers[d];
            let bit = layer.get(i);
            c |= (bit as u8) << d;
            i = if bit {
                self.zeros[d] + layer.rank1(i)
            } else {
                layer.rank0(i)
            };
        }
        c
    }

    /// Count occurrences of byte c in `[0..i)`
    #[inline]
    pub fn rank(&self, c: u8, mut i: usize) -> usize {
        let mut start = 0;
        for d in (0..LAYERS).rev() {
            let layer = &self.layers[d];
            let bit = (c >> d) & 1 != 0;

            let rank_start = layer.rank(bit, start);
            let rank_end = layer.rank(bit, i);

            if bit {
                start = self.zeros[d] + rank_start;
                i = self.zeros[d] + rank_end;
            } else {
                start = rank_start;
                i = rank_end;
            }
        }
        i - start
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Approximate heap footprint in bytes
    pub fn heap_bytes(&self) -> usize {
        self.layers.iter().map(RankBits::heap_bytes).sum()
    }
}
