//! # API Facade
//!
//! Entry point for conversions, whatever the front end. Like the layers below it,
//! the facade takes plain Rust values and returns `Result`s: it never prints and never
//! exits. The command-line binary is one client; tests are another.

use crate::commands;
use crate::error::Result;
use crate::model::ConversionRequest;

/// Runs a validated request, returning the output line with its trace.
pub fn run(request: &ConversionRequest) -> Result<commands::CmdResult> {
    commands::convert::run(request)
}

/// Converts `literal` to `base` under `bit_width` and returns the output line.
///
/// ```
/// use baseconv::api::{convert, Base};
///
/// assert_eq!(convert("0x1F", Base::Hex, 8).unwrap(), "1F");
/// assert_eq!(convert("-0b10000000", Base::Dec, 8).unwrap(), "-128");
/// ```
pub fn convert(literal: &str, base: Base, bit_width: u32) -> Result<String> {
    let request = ConversionRequest::new(literal, base, bit_width)?;
    Ok(run(&request)?.output)
}

/// Same as [`convert`], from unvalidated command-line text.
pub fn convert_args(value: &str, base: &str, nbits: Option<&str>) -> Result<String> {
    let request = ConversionRequest::from_args(value, base, nbits)?;
    Ok(run(&request)?.output)
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
pub use crate::format::format_value;
pub use crate::literal::interpret;
pub use crate::model::Base;
pub use crate::request::DEFAULT_BIT_WIDTH;
