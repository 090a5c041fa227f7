#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::{Context, Result};
use clap::Parser;
use lusk::{cli, dispatch, packages, types::Package, utils};

#[macro_use]
extern crate lusk;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let pkgs = match &cli.packages {
        Some(path) => {
            dlog!("mode=file packages={}", path.display());
            packages::load_packages(path)?
        }
        None => {
            dlog!("mode=samples");
            packages::sample_packages()
        }
    };

    tracing::info!(packages = pkgs.len(), "processing sensor packages");

    for (i, pkg) in pkgs.into_iter().enumerate() {
        let Package { code, data } = pkg;
        let workout = dispatch::read_package(&code, &data)
            .with_context(|| format!("package #{} ({code})", i + 1))?;

        println!("{}", workout.summary());
    }

    Ok(())
}
