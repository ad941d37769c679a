// Workloads driven by the lfsr-bench CLI.
// - emit: stream values from one register
// - verify: exhaustive single-cycle check for small widths
// - throughput: time next() on one register

use anyhow::{bail, Result};
use log::{info, warn};
use maxlfsr::{def::MIN_WIDTH, MaxLfsr};
use rand_core::RngCore;
use serde::Serialize;
use std::io::Write;
use std::time::Instant;

/// Widest register verify will walk; the count table has 2^width entries.
pub const MAX_VERIFY_WIDTH: usize = 24;

#[derive(Serialize, Debug)]
pub struct EmitReport {
    pub width: usize,
    pub count: u64,
    pub cycle_count: u64,
}

/// Outcome of walking one full cycle of a register.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CycleCheck {
    pub width: usize,
    pub period: u64,
    /// Values seen at least once
    pub distinct: u64,
    /// Values seen more than once
    pub duplicates: u64,
    /// Values in [1, period] never seen
    pub missing: u64,
    pub ok: bool,
}

#[derive(Serialize, Debug)]
pub struct VerifyReport {
    pub max_width: usize,
    pub checks: Vec<CycleCheck>,
    pub ok: bool,
}

#[derive(Serialize, Debug)]
pub struct ThroughputReport {
    pub width: usize,
    pub steps: u64,
    pub elapsed_s: f64,
    pub steps_per_sec: f64,
    pub cycle_count: u64,
    /// XOR of every emitted value
    pub checksum: u64,
}

pub fn emit<W: Write>(width: usize, count: u64, out: &mut W) -> Result<EmitReport> {
    let mut lfsr = MaxLfsr::new(width)?;
    for _ in 0..count {
        writeln!(out, "{}", lfsr.next())?;
    }
    out.flush()?;
    Ok(EmitReport {
        width,
        count,
        cycle_count: lfsr.cycle_count(),
    })
}

/// Draws from `lfsr` until its cycle count moves and tallies what was emitted.
///
/// Fails without drawing if the register is wider than `MAX_VERIFY_WIDTH`.
pub fn check_cycle<R: RngCore>(lfsr: &mut MaxLfsr<R>) -> Result<CycleCheck> {
    if lfsr.size() > MAX_VERIFY_WIDTH {
        bail!(
            "verify supports widths up to {}, got {}",
            MAX_VERIFY_WIDTH,
            lfsr.size()
        );
    }
    let period = lfsr.period();
    let mut counts = vec![0u8; period as usize + 1];
    let start = lfsr.cycle_count();
    while lfsr.cycle_count() == start {
        let v = lfsr.next() as usize;
        counts[v] = counts[v].saturating_add(1);
    }
    let distinct = counts[1..].iter().filter(|&&c| c > 0).count() as u64;
    let duplicates = counts[1..].iter().filter(|&&c| c > 1).count() as u64;
    let missing = period - distinct;
    Ok(CycleCheck {
        width: lfsr.size(),
        period,
        distinct,
        duplicates,
        missing,
        ok: counts[0] == 0 && duplicates == 0 && missing == 0,
    })
}

pub fn verify_width(width: usize) -> Result<CycleCheck> {
    let mut lfsr = MaxLfsr::new(width)?;
    check_cycle(&mut lfsr)
}

pub fn verify(max_width: usize, show_progress: bool) -> Result<VerifyReport> {
    if !(MIN_WIDTH..=MAX_VERIFY_WIDTH).contains(&max_width) {
        bail!(
            "max-width must be between {} and {}, got {}",
            MIN_WIDTH,
            MAX_VERIFY_WIDTH,
            max_width
        );
    }
    let pb = super::utils::progress_bar((max_width - MIN_WIDTH + 1) as u64, show_progress);
    let mut checks = Vec::with_capacity(max_width - MIN_WIDTH + 1);
    for width in MIN_WIDTH..=max_width {
        pb.set_message(format!("width {}", width));
        let check = verify_width(width)?;
        if !check.ok {
            warn!("width {} failed: {:?}", width, check);
        }
        checks.push(check);
        pb.inc(1);
    }
    pb.finish_and_clear();
    let ok = checks.iter().all(|c| c.ok);
    info!("Verified widths {}..={}: ok={}", MIN_WIDTH, max_width, ok);
    Ok(VerifyReport {
        max_width,
        checks,
        ok,
    })
}

pub fn throughput(width: usize, steps: u64) -> Result<ThroughputReport> {
    let mut lfsr = MaxLfsr::new(width)?;
    let mut checksum = 0u64;
    let start = Instant::now();
    for _ in 0..steps {
        checksum ^= lfsr.next();
    }
    let elapsed = start.elapsed().as_secs_f64();
    let steps_per_sec = if elapsed > 0.0 {
        steps as f64 / elapsed
    } else {
        0.0
    };
    info!(
        "width {}: {} steps in {:.3}s ({:.0} steps/s), {} cycles",
        width,
        steps,
        elapsed,
        steps_per_sec,
        lfsr.cycle_count()
    );
    Ok(ThroughputReport {
        width,
        steps,
        elapsed_s: elapsed,
        steps_per_sec,
        cycle_count: lfsr.cycle_count(),
        checksum,
    })
}
