//! # baseconv
//!
//! Converts an integer literal between binary, octal, decimal and hexadecimal under a
//! fixed bit width, producing a zero-padded string in the target base.
//!
//! ```text
//!   raw arguments ──► request ──► literal ──► format ──► one output line
//!                    (validate)  (interpret)  (render)
//! ```
//!
//! ## Layers
//!
//! Like most of our tools this is a library with a thin CLI client:
//!
//! - [`api`]: the facade every client goes through
//! - [`commands`]: the conversion pipeline, returning a structured [`commands::CmdResult`]
//! - [`request`]: argument validation into a [`model::ConversionRequest`]
//! - [`literal`]: sign markers, radix letters, digit parsing and two's-complement resolution
//! - [`format`]: rendering in the target base and fill-size normalization
//! - [`model`]: `Base`, `ConversionRequest`, `ParsedLiteral`
//! - [`error`]: error kinds
//!
//! From `api` inward nothing writes to stdout/stderr or exits the process. The binary
//! (`cli`) owns terminal I/O and exit codes.

pub mod api;
pub mod commands;
pub mod error;
pub mod format;
pub mod literal;
pub mod model;
pub mod request;
