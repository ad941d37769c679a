//! Command-line driver for the `maxlfsr` register: streams values, runs
//! exhaustive single-cycle checks on small widths and measures throughput.
//!
//! This crate sits outside the library. `maxlfsr` does not depend on it, and
//! nothing here is needed to use the register.

pub mod common;
