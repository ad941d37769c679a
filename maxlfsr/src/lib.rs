//! A maximal-length linear-feedback shift register that walks every non-zero
//! value of an N-bit register once per cycle.
//!
//! # Overview
//! For a width N between 2 and 64, [`MaxLfsr`] emits a permutation of
//! `[1, 2^N - 1]` in register order. No value repeats until the full period of
//! `2^N - 1` steps has elapsed; at that point the engine counts the cycle and
//! reseeds itself with a fresh non-zero start state, so the next period walks
//! the same cycle from a different starting point.
//!
//! ## Components
//! - [`taps`]: published feedback tap tables (two taps for widths 2-4, four
//!   taps for widths 5-64)
//! - [`transition::Transition`]: the one-step shift/feedback rule, picked once
//!   per width
//! - [`MaxLfsr`]: the generation, reseed and cycle-counting state machine
//!
//! # Randomness
//! Seeds come from a `rand_core::RngCore`. [`MaxLfsr::new`] uses `OsRng`;
//! [`MaxLfsr::with_rng`] accepts any source, e.g. the deterministic ones in
//! [`test_helper`]. A draw is masked to the low N bits and an all-zero draw is
//! rejected, since zero is a fixed point of the feedback function.
//!
//! # Example Usage
//! ```
//! use maxlfsr::MaxLfsr;
//!
//! let mut lfsr = MaxLfsr::new(16).unwrap();
//! assert_eq!(lfsr.size(), 16);
//! let v = lfsr.next();
//! assert!(v >= 1 && v < 1 << 16);
//! ```
//!
//! Not suitable for cryptographic use.

pub mod def;
pub mod engine;
pub mod error;
pub mod taps;
pub mod transition;

pub mod test_helper;

pub use engine::MaxLfsr;
pub use error::LfsrError;
pub use transition::Transition;
