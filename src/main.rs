//! # census-clean entry point
//!
//! ```bash
//! census-clean validate --raw-dir data/raw/adult.data --processor-dir data/processed
//! census-clean check-raw --raw-dir data/raw/adult.data
//! census-clean schema --output schema.json
//! ```
//!
//! Precondition failures (missing or mis-named raw file) abort with a
//! non-zero exit code and a message naming the path. Schema violations in the
//! data never abort; they are written to the validation log.

#![warn(clippy::all, rust_2018_idioms)]
#![expect(clippy::print_stdout)] // Allow println! in main binary

mod cli;

use anyhow::Result;
use clap::Parser as _;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    census_clean::logging::init(cli.verbose)?;

    cli::run_command(cli.command)
}
