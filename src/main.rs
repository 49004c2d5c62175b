//! consultancy-lms entry point
//!
//! Parses CLI arguments, dispatches to the selected command, prints
//! errors to stderr and exits non-zero on failure. All logic is
//! delegated to the cli module.

use consultancy_lms::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
