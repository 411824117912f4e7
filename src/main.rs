//! # Registry Paths CLI
//!
//! This is the binary entry point for the `registry-paths` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Running the enumeration and printing one `id: path` line per record.
//! - Translating a failed enumeration into an error message and exit code.
//!
//! The core logic lives in the `lib.rs` library crate; the binary is a thin
//! wrapper around it.

mod cli;

use clap::Parser;

use registry_paths::exit_codes;

fn main() {
    let cli = cli::Cli::parse();

    if let Err(err) = cli.execute() {
        eprintln!("Error: {:#}", err);
        std::process::exit(exit_codes::ERROR);
    }
}
