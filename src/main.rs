//! PromoSuite AI Backend entry point
//!
//! All logic lives in the CLI module; errors are printed to stderr and the
//! process exits non-zero.

use promosuite::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
