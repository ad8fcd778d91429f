//! `simi`: print document similarity hashes and their Hamming distance.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use simi::{DefaultPolicy, Mode, SimHash, SimHashConfig, SimHashFingerprint, TracingObserver};

#[derive(Debug, Parser)]
#[command(
    name = "simi",
    about = "Print Charikar's document similarity hash and compute Hamming distance"
)]
struct Args {
    /// Calculate the Hamming distance of the first two document hashes
    #[arg(short = 'd')]
    diff: bool,

    /// Only print the distance when computing a difference
    #[arg(short = 'q')]
    quiet: bool,

    /// Size of super-tokens (1 selects the fast per-token hash)
    #[arg(short = 's', default_value_t = 1)]
    size: u32,

    /// Documents to hash
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mode = Mode::from_super_token_size(args.size).context("invalid super-token size")?;
    let sh = SimHash::new(SimHashConfig {
        mode,
        ..Default::default()
    })?;

    let files = selected_files(&args)?;
    let mut hashes = Vec::with_capacity(files.len());
    for path in files {
        let data = std::fs::read(path)
            .with_context(|| format!("can't read file {:?}", path.display()))?;
        let fp = sh.fingerprint_with(&data, &DefaultPolicy, &mut TracingObserver);
        if !args.quiet {
            println!("{fp} {}", path.display());
        }
        hashes.push(fp);
    }

    if args.diff {
        let (a, b) = (hashes[0], hashes[1]);
        print!("{}", diff_report(a, b, args.quiet));
    }
    Ok(())
}

/// Files to hash: all of them, or the first two when diffing.
fn selected_files(args: &Args) -> Result<&[PathBuf]> {
    if !args.diff {
        return Ok(&args.files);
    }
    if args.files.len() < 2 {
        bail!("at least two files must be specified");
    }
    Ok(&args.files[..2])
}

fn diff_report(a: SimHashFingerprint, b: SimHashFingerprint, quiet: bool) -> String {
    let distance = a.hamming_distance(&b);
    if quiet {
        format!("{distance}\n")
    } else {
        format!("{}\ndifference: {distance}\n", a.xor(&b))
    }
}
