//! Argument validation.
//!
//! Turns the raw `value`, `base` and optional `nbits` arguments into a
//! [`ConversionRequest`]. Checks run in a fixed order: base, then width, then value,
//! so a command line with several problems always reports the same one.

use crate::error::{BaseConvError, Result};
use crate::model::{Base, ConversionRequest};

pub const DEFAULT_BIT_WIDTH: u32 = 32;
pub const MIN_BIT_WIDTH: u32 = 1;
pub const MAX_BIT_WIDTH: u32 = 64;

impl ConversionRequest {
    pub fn new(literal: impl Into<String>, target_base: Base, bit_width: u32) -> Result<Self> {
        if !(MIN_BIT_WIDTH..=MAX_BIT_WIDTH).contains(&bit_width) {
            return Err(BaseConvError::InvalidWidth(bit_width.to_string()));
        }
        let literal = literal.into();
        if literal.is_empty() {
            return Err(BaseConvError::EmptyValue(""));
        }
        Ok(Self {
            literal,
            target_base,
            bit_width,
        })
    }

    /// Validates textual arguments as they arrive from the command line.
    pub fn from_args(value: &str, base: &str, nbits: Option<&str>) -> Result<Self> {
        let target_base = parse_base(base)?;
        let bit_width = match nbits {
            Some(raw) => parse_bit_width(raw)?,
            None => DEFAULT_BIT_WIDTH,
        };
        Self::new(value, target_base, bit_width)
    }
}

fn parse_base(raw: &str) -> Result<Base> {
    raw.parse::<u32>()
        .ok()
        .and_then(Base::from_radix)
        .ok_or_else(|| BaseConvError::InvalidBase(raw.to_string()))
}

fn parse_bit_width(raw: &str) -> Result<u32> {
    raw.parse::<u32>()
        .ok()
        .filter(|n| (MIN_BIT_WIDTH..=MAX_BIT_WIDTH).contains(n))
        .ok_or_else(|| BaseConvError::InvalidWidth(raw.to_string()))
}
