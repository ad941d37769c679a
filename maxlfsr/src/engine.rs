//! Maximal-length LFSR engine.
//!
//! A [`MaxLfsr`] of width N emits every integer in `[1, 2^N - 1]` exactly once
//! per cycle, in register order. When the register comes back round to the
//! value the cycle started from, the cycle counter is bumped and a fresh
//! non-zero seed is drawn from the engine's random source.
//!
//! The engine is not a cryptographic generator: the tap sets are public and
//! the whole sequence follows from the current state.
//!
//! # Examples
//! ```
//! use maxlfsr::MaxLfsr;
//!
//! let mut lfsr = MaxLfsr::new(3).unwrap();
//! let mut seen: Vec<u64> = (0..7).map(|_| lfsr.next()).collect();
//! seen.sort();
//! assert_eq!(seen, vec![1, 2, 3, 4, 5, 6, 7]);
//! assert_eq!(lfsr.cycle_count(), 1);
//! ```

use log::debug;
use rand_core::{OsRng, RngCore};

use crate::def::width_mask;
use crate::error::LfsrError;
use crate::transition::Transition;

/// A maximal-length shift register that reseeds itself after every full period.
///
/// `R` supplies the seeds. It defaults to the operating system's entropy
/// source; tests substitute a deterministic one through [`MaxLfsr::with_rng`].
///
/// `next` mutates the register, so concurrent callers must serialize access.
#[derive(Debug, Clone)]
pub struct MaxLfsr<R: RngCore = OsRng> {
    /// Feedback rule chosen from the width
    transition: Transition,
    /// Value the current cycle started from
    seed: u64,
    /// Current register contents, never zero
    state: u64,
    /// Completed full periods
    cycle_count: u64,
    /// Source of new seeds
    rng: R,
}

impl MaxLfsr<OsRng> {
    /// Creates a register of `width` bits seeded from OS entropy.
    ///
    /// # Returns
    /// * `Ok(MaxLfsr)` - A register with `cycle_count() == 0`
    /// * `Err(LfsrError::OutOfRange)` - If `width` is outside 2..=64
    pub fn new(width: usize) -> Result<Self, LfsrError> {
        Self::with_rng(width, OsRng)
    }
}

impl Default for MaxLfsr<OsRng> {
    /// A `DEFAULT_WIDTH`-bit register seeded from OS entropy.
    fn default() -> Self {
        Self::from_transition(Transition::default_width(), OsRng)
    }
}

impl<R: RngCore> MaxLfsr<R> {
    /// Creates a register of `width` bits that draws its seeds from `rng`.
    ///
    /// The first seed is drawn before this returns.
    pub fn with_rng(width: usize, rng: R) -> Result<Self, LfsrError> {
        let transition = Transition::for_width(width)?;
        Ok(Self::from_transition(transition, rng))
    }

    fn from_transition(transition: Transition, rng: R) -> Self {
        let mut lfsr = Self {
            transition,
            seed: 0,
            state: 0,
            cycle_count: 0,
            rng,
        };
        lfsr.reseed();
        lfsr
    }

    /// Register width in bits.
    pub fn size(&self) -> usize {
        self.transition.width()
    }

    /// Advances the register one step and returns its new contents.
    ///
    /// The result is in `[1, 2^width - 1]` and differs from every value
    /// returned since the last reseed. When the result equals the cycle's
    /// seed, the cycle count goes up by one and a new seed is drawn before
    /// returning.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> u64 {
        self.state = self.transition.next_state(self.state);
        let result = self.state;
        if self.state == self.seed {
            self.cycle_count += 1;
            debug!(
                "width {} finished cycle {} at seed {:#x}",
                self.size(),
                self.cycle_count,
                self.seed
            );
            self.reseed();
        }
        result
    }

    /// Number of full periods completed so far.
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    /// Value the current cycle started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Current register contents.
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Length of one cycle, `2^width - 1`.
    pub fn period(&self) -> u64 {
        width_mask(self.size())
    }

    /// The feedback rule in use.
    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    /// Advances the register by n steps and returns the lowest n bits of the
    /// last value emitted.
    ///
    /// # Arguments
    /// * `n` - Number of steps to advance and bits to return (0 returns 0)
    pub fn rand_n(&mut self, n: usize) -> u64 {
        let mut last = 0;
        for _ in 0..n {
            last = self.next();
        }
        if n >= 64 {
            last
        } else {
            last & ((1u64 << n) - 1)
        }
    }

    /// Fills `out` with consecutive values.
    pub fn fill(&mut self, out: &mut [u64]) {
        for v in out.iter_mut() {
            *v = self.next();
        }
    }

    /// Draws a new non-zero seed masked to the register width and restarts
    /// the cycle from it.
    fn reseed(&mut self) {
        let mask = self.period();
        let seed = loop {
            let candidate = self.rng.next_u64() & mask;
            if candidate != 0 {
                break candidate;
            }
        };
        self.seed = seed;
        self.state = seed;
    }
}

/// Endless stream of register values; never yields `None`.
impl<R: RngCore> Iterator for MaxLfsr<R> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        Some(MaxLfsr::<R>::next(self))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::def::DEFAULT_WIDTH;
    use crate::test_helper::{CountingRng, ScriptedRng};

    #[test]
    fn test_new_out_of_range() {
        for width in [0, 1, 65, 128] {
            assert_eq!(
                MaxLfsr::new(width).unwrap_err(),
                LfsrError::out_of_range(width)
            );
        }
    }

    #[test]
    fn test_new_all_widths() {
        for width in 2..=64 {
            let lfsr = MaxLfsr::new(width).unwrap();
            assert_eq!(lfsr.size(), width);
            assert_eq!(lfsr.cycle_count(), 0);
            assert_ne!(lfsr.seed(), 0);
            assert_eq!(lfsr.seed(), lfsr.state());
            assert!(lfsr.seed() <= width_mask(width));
        }
    }

    #[test]
    fn test_default_width() {
        let lfsr: MaxLfsr = MaxLfsr::default();
        assert_eq!(lfsr.size(), DEFAULT_WIDTH);
        assert_eq!(*lfsr.transition(), Transition::for_width(DEFAULT_WIDTH).unwrap());
        assert_eq!(lfsr.period(), u64::MAX);
    }

    #[test]
    fn test_seeded_width_3_cycle() {
        let mut lfsr = MaxLfsr::with_rng(3, ScriptedRng::new(&[1])).unwrap();
        assert_eq!(lfsr.seed(), 1);
        let mut out = Vec::new();
        for _ in 0..6 {
            out.push(lfsr.next());
            assert_eq!(lfsr.cycle_count(), 0);
        }
        out.push(lfsr.next());
        assert_eq!(out, vec![4, 2, 5, 6, 7, 3, 1]);
        assert_eq!(lfsr.cycle_count(), 1);
        // the script wraps, so the next cycle repeats
        assert_eq!(lfsr.seed(), 1);
        assert_eq!(lfsr.next(), 4);
    }

    #[test]
    fn test_reseed_rejects_zero() {
        let lfsr = MaxLfsr::with_rng(3, ScriptedRng::new(&[0, 0, 5])).unwrap();
        assert_eq!(lfsr.seed(), 5);
        assert_eq!(lfsr.rng.taken(), 3);
    }

    #[test]
    fn test_reseed_masks_to_width() {
        let lfsr = MaxLfsr::with_rng(3, ScriptedRng::new(&[u64::MAX - 1])).unwrap();
        assert_eq!(lfsr.seed(), 6);

        // high bits alone mask to zero and are rejected
        let lfsr = MaxLfsr::with_rng(8, ScriptedRng::new(&[0xff00, 3])).unwrap();
        assert_eq!(lfsr.seed(), 3);
        assert_eq!(lfsr.rng.taken(), 2);
    }

    #[test]
    fn test_full_width_seed() {
        let mut lfsr = MaxLfsr::with_rng(64, ScriptedRng::new(&[u64::MAX])).unwrap();
        assert_eq!(lfsr.seed(), u64::MAX);
        assert_eq!(lfsr.next(), u64::MAX >> 1);
        assert_eq!(lfsr.cycle_count(), 0);
    }

    #[test]
    fn test_cycle_count_tracks_seed() {
        let mut lfsr = MaxLfsr::with_rng(4, CountingRng(1)).unwrap();
        let mut seeds = vec![lfsr.seed()];
        for _ in 0..(15 * 5) {
            let seed = lfsr.seed();
            let before = lfsr.cycle_count();
            let v = lfsr.next();
            if v == seed {
                assert_eq!(lfsr.cycle_count(), before + 1);
                seeds.push(lfsr.seed());
            } else {
                assert_eq!(lfsr.cycle_count(), before);
            }
        }
        assert_eq!(lfsr.cycle_count(), 5);
        assert_eq!(seeds, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_rand_n() {
        let mut lfsr = MaxLfsr::with_rng(3, ScriptedRng::new(&[1])).unwrap();
        assert_eq!(lfsr.rand_n(0), 0);
        // steps emit 4, 2
        assert_eq!(lfsr.rand_n(2), 2);
        // steps emit 5, 6, 7
        assert_eq!(lfsr.rand_n(3), 7);
    }

    #[test]
    fn test_fill_and_iterator() {
        let mut a = MaxLfsr::with_rng(5, ScriptedRng::new(&[9])).unwrap();
        let mut b = a.clone();
        let mut buf = [0u64; 31];
        a.fill(&mut buf);
        let collected: Vec<u64> = b.by_ref().take(31).collect();
        assert_eq!(buf.to_vec(), collected);

        let mut sorted = collected;
        sorted.sort();
        assert_eq!(sorted, (1..=31).collect::<Vec<u64>>());
        assert_eq!(a.cycle_count(), 1);
        assert_eq!(b.cycle_count(), 1);
    }
}
