use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use scope_finally::make_scope_guard;

/// Write a scratch file and watch it get removed on every way out of the scope.
#[derive(Debug, Parser)]
struct Args {
    /// Directory for the scratch file. Defaults to a fresh temp dir.
    #[arg(long)]
    dir: Option<PathBuf>,
    /// Leave the scope with an error
    #[arg(long)]
    fail: bool,
    /// Leave the scope by panicking
    #[arg(long)]
    panic: bool,
    #[arg(short, long)]
    verbose: bool,
}

fn process(scratch: &Path, args: &Args) -> Result<u64> {
    std::fs::write(scratch, b"intermediate output").context("write scratch file failed")?;
    let scratch_owned = scratch.to_path_buf();
    let _cleanup = make_scope_guard(move || {
        match std::fs::remove_file(&scratch_owned) {
            Ok(()) => tracing::info!("removed {}", scratch_owned.display()),
            Err(e) => tracing::warn!("remove {} failed: {e}", scratch_owned.display()),
        }
    });

    if args.panic {
        panic!("processing blew up");
    }
    if args.fail {
        bail!("processing failed");
    }
    let size = scratch.metadata()?.len();
    tracing::debug!(size, "scratch file processed");
    Ok(size)
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let temp_dir = tempfile::tempdir()?;
    let dir = args.dir.clone().unwrap_or_else(|| temp_dir.path().to_path_buf());
    anyhow::ensure!(dir.is_dir(), "{} is not a directory", dir.display());
    let scratch = dir.join("scratch.bin");

    let result = std::panic::catch_unwind(|| process(&scratch, &args));
    match result {
        Ok(Ok(size)) => tracing::info!("processed {size} bytes"),
        Ok(Err(e)) => tracing::error!("{e:#}"),
        Err(_) => tracing::error!("processing panicked"),
    }
    tracing::info!(exists = scratch.exists(), "scratch file after scope exit");
    Ok(())
}
