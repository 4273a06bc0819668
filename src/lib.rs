// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs;
pub mod gate;
pub mod logging;
pub mod types;
pub mod watch;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tokio::io::BufReader;
use tracing::info;

use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::config::model::ConfigFile;
use crate::fs::{FileSystem, RealFileSystem};
use crate::gate::sink::{open_target, WriterSink};
use crate::gate::stage::run_stage;
use crate::gate::TriggerGate;
use crate::watch::WatchTarget;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - the trigger gate and its watch loop
/// - the stdin -> sink record pump
pub async fn run(args: CliArgs) -> Result<()> {
    let config_path = PathBuf::from(&args.config);
    let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);
    let cfg = load_and_validate(&config_path, fs.as_ref())?;

    if args.dry_run {
        print_dry_run(&cfg);
        return Ok(());
    }

    let normal = open_target(&cfg.output().normal).await?;
    let timed_out = open_target(&cfg.output().timed_out).await?;
    let mut sink = WriterSink::new(normal, timed_out);

    let mut gate = TriggerGate::new(Arc::clone(&fs), cfg.spec().clone());

    let mut input = BufReader::new(tokio::io::stdin());
    let summary = run_stage(&mut gate, &mut input, &mut sink).await?;

    info!(
        normal = summary.normal,
        timed_out = summary.timed_out,
        "eventgate finished"
    );
    Ok(())
}

/// Simple dry-run output: print the watch target, mask, timings and outputs.
fn print_dry_run(cfg: &ConfigFile) {
    let spec = cfg.spec();

    println!("eventgate dry-run");
    match &spec.target {
        WatchTarget::Directory { dir, pattern } => {
            println!("  watch dir: {} (pattern {})", dir.display(), pattern);
        }
        WatchTarget::File { path } => {
            println!("  watch file: {}", path.display());
        }
    }
    println!(
        "  events: additions={} deletions={} changes={}",
        spec.mask.additions, spec.mask.deletions, spec.mask.changes
    );
    println!(
        "  timeout: {}s, poll interval: {}s",
        spec.timeout.as_secs(),
        spec.poll_interval.as_secs()
    );
    println!("  normal output: {:?}", cfg.output().normal);
    println!("  timed-out output: {:?}", cfg.output().timed_out);
}
