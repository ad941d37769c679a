//! Deterministic random sources for seeding registers in tests.
//!
//! Both types implement `rand_core::RngCore`, so they can be handed to
//! [`MaxLfsr::with_rng`](crate::MaxLfsr::with_rng) in place of `OsRng`.

use rand_core::{impls, Error, RngCore};

/// Replays a fixed list of 64-bit draws, starting over after the last one.
///
/// A script made only of values that mask to zero makes reseeding spin
/// forever, the same as a real source that never yields a usable seed.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    draws: Vec<u64>,
    taken: usize,
}

impl ScriptedRng {
    /// # Panics
    /// If `draws` is empty
    pub fn new(draws: &[u64]) -> Self {
        assert!(!draws.is_empty(), "ScriptedRng needs at least one draw");
        Self {
            draws: draws.to_vec(),
            taken: 0,
        }
    }

    /// Number of 64-bit draws handed out so far.
    pub fn taken(&self) -> usize {
        self.taken
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        let v = self.draws[self.taken % self.draws.len()];
        self.taken += 1;
        v
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Yields `start`, `start + 1`, ... wrapping at `u64::MAX`.
#[derive(Debug, Clone, Copy)]
pub struct CountingRng(pub u64);

impl RngCore for CountingRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        let v = self.0;
        self.0 = self.0.wrapping_add(1);
        v
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
