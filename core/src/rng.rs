//! Deterministic random number generation for commentary selection.
//!
//! RULE: Nothing in the engine may call a platform RNG directly.
//! All randomness flows through a CommentaryRng handed in by the caller.
//!
//! Each delivery gets its own stream, seeded from
//! (master_seed XOR ordinal * golden ratio). This means:
//!   - Re-running an analysis pass over the same ball log reproduces
//!     the same commentary line for every ball.
//!   - Appending a ball never changes the lines of earlier balls.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// A deterministic RNG stream used to pick commentary templates.
pub struct CommentaryRng {
    inner: Pcg64Mcg,
}

impl CommentaryRng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Derive the stream for one delivery. The ordinal is the ball's
    /// position in the sorted log and must be stable across passes.
    pub fn for_ball(master_seed: u64, ordinal: u64) -> Self {
        let derived_seed = master_seed ^ ordinal.wrapping_add(1).wrapping_mul(GOLDEN_GAMMA);
        Self::new(derived_seed)
    }

    /// Roll an index in [0, n). Returns 0 when n is 0.
    pub fn next_index(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        (self.inner.next_u64() % n as u64) as usize
    }

    /// Pick one element uniformly, or None from an empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            items.get(self.next_index(items.len()))
        }
    }
}
