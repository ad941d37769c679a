//! Core definitions and constants for the maximal-length LFSR.
//!
//! This module contains the width limits that every other part of the crate
//! validates against, and the mask helper used both for reseeding and for
//! reporting the period of a register.
//!
//! # Width classes
//! - Widths `MIN_WIDTH..=TWO_TAP_MAX_WIDTH` use the two-tap table
//! - Widths `FOUR_TAP_MIN_WIDTH..=MAX_WIDTH` use the four-tap table

/// Narrowest supported register, in bits.
pub const MIN_WIDTH: usize = 2;

/// Widest supported register, in bits.
/// At this width the register fills a whole `u64`.
pub const MAX_WIDTH: usize = 64;

/// Width used when the caller does not pick one.
pub const DEFAULT_WIDTH: usize = 64;

/// Widest register served by the two-tap table.
pub const TWO_TAP_MAX_WIDTH: usize = 4;

/// Narrowest register served by the four-tap table.
pub const FOUR_TAP_MIN_WIDTH: usize = TWO_TAP_MAX_WIDTH + 1;

/// Returns a mask with the low `width` bits set, i.e. `2^width - 1`.
///
/// This is also the period of a maximal-length register of that width.
/// `width` must already be validated; `1u64 << 64` would overflow, so the
/// mask is derived by shifting `u64::MAX` down instead.
#[inline]
pub fn width_mask(width: usize) -> u64 {
    debug_assert!((MIN_WIDTH..=MAX_WIDTH).contains(&width));
    u64::MAX >> (MAX_WIDTH - width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_mask() {
        assert_eq!(width_mask(2), 0b11);
        assert_eq!(width_mask(3), 0b111);
        assert_eq!(width_mask(20), (1 << 20) - 1);
        assert_eq!(width_mask(63), (1 << 63) - 1);
        assert_eq!(width_mask(64), u64::MAX);
    }
}
