use clap::{Parser, Subcommand};
use maxlfsr::def::DEFAULT_WIDTH;
use serde::Serialize;

#[derive(Subcommand, Debug, Serialize, Clone)]
pub enum Command {
    /// Print values from the register, one per line
    Emit {
        #[arg(long, default_value_t = 16)]
        count: u64,
    },
    /// Run one full cycle for every width from 2 up to max-width and check
    /// each non-zero value appears exactly once
    Verify {
        #[arg(long, default_value_t = 20)]
        max_width: usize,
    },
    /// Time calls to next()
    Throughput {
        #[arg(long, default_value_t = 100_000_000)]
        steps: u64,
    },
}

#[derive(Parser, Debug, Serialize, Clone)]
pub struct BenchCli {
    #[command(subcommand)]
    pub command: Command,

    /// Register width in bits (2 to 64). Ignored by verify.
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Default log filter when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Output filename for the JSON report
    #[arg(long, default_value = "")]
    pub output: String,
}
