//! # CLI Behavior
//!
//! One client of the `baseconv` library, and the only place that knows about stdout,
//! stderr and exit codes.
//!
//! - `setup`: argument parsing via clap
//! - `commands`: validation, dispatch to the API, choice of output
//! - `print`: text/JSON output and diagnostic messages

mod commands;
mod print;
pub mod setup;

pub use commands::run;
