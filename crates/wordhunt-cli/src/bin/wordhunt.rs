//! Wordhunt command-line tool.
//!
//! Set `RUST_LOG=debug` to see dictionary loads and per-board solver details.

use std::{io, process};

use clap::Parser as _;
use wordhunt_cli::Args;

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if let Err(err) = wordhunt_cli::run(&args, &mut io::stdout().lock()) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
