use serde::Serialize;
use std::fmt;

/// A numeric base understood on both sides of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u32")]
pub enum Base {
    Bin,
    Oct,
    Dec,
    Hex,
}

impl Base {
    pub fn radix(self) -> u32 {
        match self {
            Base::Bin => 2,
            Base::Oct => 8,
            Base::Dec => 10,
            Base::Hex => 16,
        }
    }

    /// Bits carried by one digit, i.e. `log2(radix)`. Decimal has no whole-bit digit.
    pub fn bits_per_digit(self) -> Option<u32> {
        match self {
            Base::Bin => Some(1),
            Base::Oct => Some(3),
            Base::Dec => None,
            Base::Hex => Some(4),
        }
    }

    pub fn from_radix(radix: u32) -> Option<Self> {
        match radix {
            2 => Some(Base::Bin),
            8 => Some(Base::Oct),
            10 => Some(Base::Dec),
            16 => Some(Base::Hex),
            _ => None,
        }
    }
}

impl From<Base> for u32 {
    fn from(base: Base) -> u32 {
        base.radix()
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Base::Bin => "binary",
            Base::Oct => "octal",
            Base::Dec => "decimal",
            Base::Hex => "hexadecimal",
        };
        write!(f, "{} ({})", name, self.radix())
    }
}

/// Validated command-line input. Built once by [`ConversionRequest::from_args`](crate::request).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub literal: String,
    pub target_base: Base,
    pub bit_width: u32,
}

/// A literal after marker stripping and digit parsing, before sign resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedLiteral {
    pub magnitude: u64,
    pub is_signed_literal: bool,
    pub source_radix: Base,
}
