use log::info;
use serde::Serialize;
use std::fs::File;
use std::io::Write;

pub fn init_logging(max_level: &str) {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or(max_level));
}

/// Writes `report` as pretty JSON to `path`. An empty path is a no-op.
pub fn write_report<T: Serialize>(path: &str, report: &T) -> anyhow::Result<()> {
    if path.is_empty() {
        return Ok(());
    }
    let mut file = File::create(path)?;
    let json = serde_json::to_string_pretty(report)?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;
    info!("Report written to {}", path);
    Ok(())
}

pub fn progress_bar(len: u64, visible: bool) -> indicatif::ProgressBar {
    if !visible {
        return indicatif::ProgressBar::hidden();
    }
    let pb = indicatif::ProgressBar::new(len);
    if let Ok(style) = indicatif::ProgressStyle::with_template(
        "[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}",
    ) {
        pb.set_style(style.progress_chars("##-"));
    }
    pb
}
