//! Feedback tap tables for maximal-length shift registers.
//!
//! Tap positions are 1-indexed and counted from the most-significant end of
//! the register, so position `p` of a `width`-bit register is bit
//! `width - p` when bits are numbered from 0 (least significant).
//!
//! Values are taken verbatim from the published maximal-length table at
//! http://courses.cse.tamu.edu/csce680/walker/lfsr_table.pdf.
//! The first tap of every row equals the width itself.

use crate::def::{FOUR_TAP_MIN_WIDTH, MAX_WIDTH, MIN_WIDTH, TWO_TAP_MAX_WIDTH};

/// Two-tap rows for widths 2 to 4, indexed by `width - 2`.
pub static TWO_TAP_TABLE: [[u32; 2]; 3] = [
    [2, 1],
    [3, 2],
    [4, 3],
];

/// Four-tap rows for widths 5 to 64, indexed by `width - 5`.
pub static FOUR_TAP_TABLE: [[u32; 4]; 60] = [
    [5, 4, 3, 2],
    [6, 5, 3, 2],
    [7, 6, 5, 4],
    [8, 6, 5, 4],
    [9, 8, 6, 5],
    [10, 9, 7, 6],
    [11, 10, 9, 7],
    [12, 11, 8, 6],
    [13, 12, 10, 9],
    [14, 13, 11, 9],
    [15, 14, 13, 11],
    [16, 14, 13, 11],
    [17, 16, 15, 14],
    [18, 17, 16, 13],
    [19, 18, 17, 14],
    [20, 19, 16, 14],
    [21, 20, 19, 16],
    [22, 19, 18, 17],
    [23, 22, 20, 18],
    [24, 23, 21, 20],
    [25, 24, 23, 22],
    [26, 25, 24, 20],
    [27, 26, 25, 22],
    [28, 27, 24, 22],
    [29, 28, 27, 25],
    [30, 29, 26, 24],
    [31, 30, 29, 28],
    [32, 30, 26, 25],
    [33, 32, 29, 27],
    [34, 31, 30, 26],
    [35, 34, 28, 27],
    [36, 35, 29, 28],
    [37, 36, 33, 31],
    [38, 37, 33, 32],
    [39, 38, 35, 32],
    [40, 37, 36, 35],
    [41, 40, 39, 38],
    [42, 40, 37, 35],
    [43, 42, 38, 37],
    [44, 42, 39, 38],
    [45, 44, 42, 41],
    [46, 40, 39, 38],
    [47, 46, 43, 42],
    [48, 44, 41, 39],
    [49, 45, 44, 43],
    [50, 48, 47, 46],
    [51, 50, 48, 45],
    [52, 51, 49, 46],
    [53, 52, 51, 47],
    [54, 51, 48, 46],
    [55, 54, 53, 49],
    [56, 54, 52, 49],
    [57, 55, 54, 52],
    [58, 57, 53, 52],
    [59, 57, 55, 52],
    [60, 58, 56, 55],
    [61, 60, 59, 56],
    [62, 59, 57, 56],
    [63, 62, 59, 58],
    [64, 63, 61, 60],
];

/// Returns the two-tap row for `width`, or `None` outside 2..=4.
pub fn two_tap(width: usize) -> Option<&'static [u32; 2]> {
    if !(MIN_WIDTH..=TWO_TAP_MAX_WIDTH).contains(&width) {
        return None;
    }
    TWO_TAP_TABLE.get(width - MIN_WIDTH)
}

/// Returns the four-tap row for `width`, or `None` outside 5..=64.
pub fn four_tap(width: usize) -> Option<&'static [u32; 4]> {
    if !(FOUR_TAP_MIN_WIDTH..=MAX_WIDTH).contains(&width) {
        return None;
    }
    FOUR_TAP_TABLE.get(width - FOUR_TAP_MIN_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_row(width: usize, row: &[u32]) {
        assert_eq!(row[0] as usize, width, "leading tap of width {}", width);
        for pair in row.windows(2) {
            assert!(pair[0] > pair[1], "taps of width {} not descending", width);
        }
        assert!(row.iter().all(|&p| p >= 1 && p as usize <= width));
    }

    #[test]
    fn test_rows_match_width() {
        for width in MIN_WIDTH..=TWO_TAP_MAX_WIDTH {
            check_row(width, two_tap(width).unwrap());
        }
        for width in FOUR_TAP_MIN_WIDTH..=MAX_WIDTH {
            check_row(width, four_tap(width).unwrap());
        }
    }

    #[test]
    fn test_lookup_outside_table() {
        assert!(two_tap(1).is_none());
        assert!(two_tap(5).is_none());
        assert!(four_tap(4).is_none());
        assert!(four_tap(65).is_none());
    }

    #[test]
    fn test_known_rows() {
        assert_eq!(two_tap(3), Some(&[3, 2]));
        assert_eq!(four_tap(5), Some(&[5, 4, 3, 2]));
        assert_eq!(four_tap(46), Some(&[46, 40, 39, 38]));
        assert_eq!(four_tap(64), Some(&[64, 63, 61, 60]));
    }
}
