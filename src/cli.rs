use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "lusk",
    about = "Compute distance, mean speed and calories from raw workout sensor packages"
)]
pub struct Cli {
    /// JSON file with sensor packages, an array of ["CODE", [numbers...]] pairs.
    ///
    /// Without it the built-in sample packages are used.
    #[arg(value_name = "PACKAGES")]
    pub packages: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}
