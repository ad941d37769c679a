// Driver for the maximal-length LFSR.
// 3 sub-commands
// - emit (print values for --width)
// - verify (exhaustive cycle check, widths 2..=max-width)
// - throughput (time next() for --width)
use anyhow::bail;
use clap::Parser;
use lfsr_bench::common::{cli, runner, utils};
use log::info;
use serde::Serialize;
use std::io::{self, BufWriter};

#[derive(Serialize)]
struct RunReport<'a, T: Serialize> {
    args: &'a cli::BenchCli,
    result: T,
}

fn main() -> anyhow::Result<()> {
    let args = cli::BenchCli::parse();
    utils::init_logging(&args.log_level);
    info!("Starting lfsr-bench: {:?}", args.command);

    match &args.command {
        cli::Command::Emit { count } => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            let result = runner::emit(args.width, *count, &mut out)?;
            utils::write_report(&args.output, &RunReport { args: &args, result })?;
        }
        cli::Command::Verify { max_width } => {
            let result = runner::verify(*max_width, true)?;
            let ok = result.ok;
            utils::write_report(&args.output, &RunReport { args: &args, result })?;
            if !ok {
                bail!("cycle verification failed");
            }
        }
        cli::Command::Throughput { steps } => {
            let result = runner::throughput(args.width, *steps)?;
            utils::write_report(&args.output, &RunReport { args: &args, result })?;
        }
    }
    Ok(())
}
