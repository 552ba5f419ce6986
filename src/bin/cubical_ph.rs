//! Thin CLI wrapper over [`cubical_ph::engine::persistence_2d`] — load an
//! image, run the engine, print the pairs. All topology logic lives in the
//! library; this binary is glue.

use std::fs::File;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use cubical_ph::dipha::{read_dipha_image, read_pgm};
use cubical_ph::engine::{persistence_2d, Method};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MethodArg {
    LinkFind,
    ComputePairs,
}

impl From<MethodArg> for Method {
    fn from(m: MethodArg) -> Self {
        match m {
            MethodArg::LinkFind => Method::LinkFind,
            MethodArg::ComputePairs => Method::ComputePairs,
        }
    }
}

/// Compute the persistent homology of a 2-D cubical filtration built from
/// a grayscale image.
#[derive(Debug, Parser)]
#[command(name = "cubical-ph", version, about)]
struct Args {
    /// Input image: a plaintext PGM (`.pgm`) or a DIPHA binary image.
    image: PathBuf,

    /// Global ceiling threshold; border pixels and absent cells carry this value.
    #[arg(long)]
    threshold: f64,

    /// Which dimension-0 algorithm to use.
    #[arg(long, value_enum, default_value = "link-find")]
    method: MethodArg,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber_init();

    let args = Args::parse();
    let rows = load_image(&args.image)?;
    let pairs = persistence_2d(&rows, args.threshold, args.method.into())?;

    for pair in pairs {
        println!("{} {} {}", pair.dim, pair.birth, pair.death);
    }
    Ok(())
}

fn load_image(path: &PathBuf) -> anyhow::Result<Vec<Vec<f64>>> {
    let file = File::open(path)?;
    if path.extension().and_then(|e| e.to_str()) == Some("pgm") {
        Ok(read_pgm(file)?)
    } else {
        Ok(read_dipha_image(file)?)
    }
}

fn tracing_subscriber_init() {
    // Installed only if the caller hasn't already set one up; the library
    // itself never installs a subscriber, so it stays usable as a pure function.
    let _ = tracing_subscriber::fmt::try_init();
}
