//! # baseconv CLI
//!
//! The binary is intentionally thin: argument parsing, printing and exit codes live in
//! `cli/`, conversion logic lives in the library (see the crate docs of `baseconv`).
//!
//! ```text
//! baseconv <value> <base> [nbits]
//! ```
//!
//! Exactly one line goes to stdout on success. On any failure stdout stays empty, a
//! message goes to stderr and the process exits with status 1.

use baseconv::error::BaseConvError;
use colored::Colorize;

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        match e {
            // Already rendered by clap, usage line included.
            BaseConvError::Usage(usage) => eprint!("{}", usage),
            other => eprintln!("{} {}", "Error:".red().bold(), other),
        }
        std::process::exit(1);
    }
}
