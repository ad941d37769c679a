//! Single-step state transition of a Fibonacci shift register.
//!
//! Each step XORs the tapped bits into a feedback bit, shifts the register
//! right by one and inserts the feedback bit as the new most-significant bit.
//! The tap set is picked once per width; narrow registers use two taps and
//! wider ones four.

use log::trace;

use crate::def::{DEFAULT_WIDTH, FOUR_TAP_MIN_WIDTH, MAX_WIDTH, TWO_TAP_MAX_WIDTH};
use crate::error::{check_width, LfsrError};
use crate::taps::{self, FOUR_TAP_TABLE};

const _: () = assert!(FOUR_TAP_MIN_WIDTH <= DEFAULT_WIDTH && DEFAULT_WIDTH <= MAX_WIDTH);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TapSet {
    /// Widths 2 to 4
    Two([u32; 2]),
    /// Widths 5 to 64
    Four([u32; 4]),
}

/// The feedback rule of a register, fixed for its whole lifetime.
///
/// Only [`Transition::for_width`] builds one, so the width and taps always
/// come from the tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    width: usize,
    taps: TapSet,
}

impl Transition {
    /// Picks the transition for a register of `width` bits.
    ///
    /// # Returns
    /// * `Ok(Transition)` - Two taps for widths up to 4, else four
    /// * `Err(LfsrError::OutOfRange)` - If `width` is outside 2..=64
    pub fn for_width(width: usize) -> Result<Self, LfsrError> {
        let width = check_width(width)?;
        let taps = if width <= TWO_TAP_MAX_WIDTH {
            TapSet::Two(*taps::two_tap(width).ok_or(LfsrError::out_of_range(width))?)
        } else {
            TapSet::Four(*taps::four_tap(width).ok_or(LfsrError::out_of_range(width))?)
        };
        let transition = Self { width, taps };
        trace!("selected {:?}", transition);
        Ok(transition)
    }

    /// The `DEFAULT_WIDTH` transition, which needs no validation.
    pub(crate) fn default_width() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            taps: TapSet::Four(FOUR_TAP_TABLE[DEFAULT_WIDTH - FOUR_TAP_MIN_WIDTH]),
        }
    }

    /// Register width in bits.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Tap positions, most-significant first.
    pub fn taps(&self) -> &[u32] {
        match &self.taps {
            TapSet::Two(taps) => taps,
            TapSet::Four(taps) => taps,
        }
    }

    /// Computes the register contents one step after `state`.
    ///
    /// Zero maps to zero; it is the one state outside the maximal cycle.
    #[inline]
    pub fn next_state(&self, state: u64) -> u64 {
        let bit = feedback(self.width, state, self.taps());
        (state >> 1) | (bit << (self.width - 1))
    }
}

/// XOR of the bits at the given tap positions, as 0 or 1.
#[inline]
fn feedback(width: usize, state: u64, taps: &[u32]) -> u64 {
    // tap p lives at bit (width - p); p == width is bit 0
    taps.iter()
        .fold(0, |acc, &p| acc ^ (state >> (width - p as usize)))
        & 1
}
