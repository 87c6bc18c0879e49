//! Command-line entry point assigning mnemonic identifiers to a list of items.

use std::process::ExitCode;

use clap::Parser as _;
use mnemonic_app::{cli::Args, version};

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    log::debug!("mnemonic {}", version::build_version());

    match mnemonic_app::cli::run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
