//! # Literal Interpretation
//!
//! Every literal is written as a `0` magnitude marker, optionally preceded by `-` to
//! mark it as a two's-complement pattern of the requested width, then an optional
//! radix letter and the digits:
//!
//! ```text
//!   [-0 | 0] [b | o | x] digits
//! ```
//!
//! Rules, applied in order:
//! 1. Underscores are digit-group separators and are dropped wherever they appear.
//! 2. A leading `-0` is consumed as a pair and marks the literal signed. Otherwise a
//!    single leading `0` is consumed. Anything else is left as is.
//! 3. `b`, `o` and `x` select binary, octal and hexadecimal and are consumed. Any other
//!    first character means the whole remainder is decimal digits.
//! 4. Digits are parsed into a `u64` magnitude. Invalid digits and overflow are errors.
//! 5. For signed literals, a set bit `nbits - 1` means the magnitude is the negative
//!    representative within `nbits`, so `2^nbits` is subtracted.

use crate::error::{BaseConvError, Result};
use crate::model::{Base, ParsedLiteral};

const SEPARATOR: char = '_';
const SIGNED_MARKER: &str = "-0";
const MAGNITUDE_MARKER: char = '0';

/// Removes digit-group separators, e.g. `0b1111_0000` becomes `0b11110000`.
pub fn strip_separators(literal: &str) -> String {
    literal.chars().filter(|&c| c != SEPARATOR).collect()
}

/// Consumes the sign / magnitude marker. Returns the remainder and whether the
/// literal was marked signed.
pub fn strip_markers(literal: &str) -> (&str, bool) {
    if let Some(rest) = literal.strip_prefix(SIGNED_MARKER) {
        (rest, true)
    } else if let Some(rest) = literal.strip_prefix(MAGNITUDE_MARKER) {
        (rest, false)
    } else {
        (literal, false)
    }
}

/// Splits off the radix letter. Decimal digits have no letter, nothing is consumed.
pub fn split_radix(body: &str) -> (Base, &str) {
    let mut chars = body.chars();
    let radix = match chars.next() {
        Some('b') => Base::Bin,
        Some('o') => Base::Oct,
        Some('x') => Base::Hex,
        _ => return (Base::Dec, body),
    };
    (radix, chars.as_str())
}

/// Parses digit text strictly: no sign, no whitespace, nothing but digits of `radix`.
pub fn parse_magnitude(digits: &str, radix: Base) -> Result<u64> {
    if digits.is_empty() {
        return Err(BaseConvError::malformed(
            digits,
            format!("no {} digits", radix),
        ));
    }

    let base = u64::from(radix.radix());
    digits.chars().try_fold(0u64, |acc, c| {
        let digit = c.to_digit(radix.radix()).ok_or_else(|| {
            BaseConvError::malformed(digits, format!("'{}' is not a {} digit", c, radix))
        })?;
        acc.checked_mul(base)
            .and_then(|v| v.checked_add(u64::from(digit)))
            .ok_or_else(|| BaseConvError::malformed(digits, "value does not fit in 64 bits"))
    })
}

/// Runs rules 1 and 2: the radix letter and digits left after separator and marker
/// removal, and whether the literal was marked signed.
pub fn literal_body(raw: &str) -> (String, bool) {
    let cleaned = strip_separators(raw);
    let (body, is_signed_literal) = strip_markers(&cleaned);
    (body.to_string(), is_signed_literal)
}

/// Runs rules 1 through 4 on a raw literal.
pub fn parse_literal(raw: &str) -> Result<ParsedLiteral> {
    let (body, is_signed_literal) = literal_body(raw);
    if body.is_empty() {
        return Err(BaseConvError::EmptyValue(
            " after removing leading characters",
        ));
    }

    let (source_radix, digits) = split_radix(&body);
    let magnitude = parse_magnitude(digits, source_radix).map_err(|e| match e {
        BaseConvError::MalformedLiteral { reason, .. } => BaseConvError::MalformedLiteral {
            literal: raw.to_string(),
            reason,
        },
        other => other,
    })?;

    Ok(ParsedLiteral {
        magnitude,
        is_signed_literal,
        source_radix,
    })
}

impl ParsedLiteral {
    /// Applies the sign rule for `bit_width` (1..=64).
    ///
    /// At 64 bits the magnitude already is a full two's-complement pattern and is
    /// reinterpreted without subtraction. Narrower widths subtract `2^bit_width` with
    /// wrapping arithmetic, so magnitudes wider than the width keep their excess bits.
    pub fn resolve(&self, bit_width: u32) -> i64 {
        if !self.is_signed_literal || !sign_bit_set(self.magnitude, bit_width) {
            return self.magnitude as i64;
        }
        if bit_width >= 64 {
            return self.magnitude as i64;
        }
        self.magnitude.wrapping_sub(1u64 << bit_width) as i64
    }

    /// True when a signed literal's magnitude has bits at or above `bit_width`.
    pub fn exceeds_width(&self, bit_width: u32) -> bool {
        bit_width < 64 && self.magnitude >> bit_width != 0
    }
}

fn sign_bit_set(magnitude: u64, bit_width: u32) -> bool {
    (magnitude >> (bit_width - 1)) & 1 == 1
}

/// Parses `raw` and resolves its sign for `bit_width`.
pub fn interpret(raw: &str, bit_width: u32) -> Result<i64> {
    Ok(parse_literal(raw)?.resolve(bit_width))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(magnitude: u64, signed: bool, radix: Base) -> ParsedLiteral {
        ParsedLiteral {
            magnitude,
            is_signed_literal: signed,
            source_radix: radix,
        }
    }

    #[test]
    fn test_separators_removed_anywhere() {
        assert_eq!(strip_separators("1_000_0000"), "10000000");
        assert_eq!(strip_separators("_0x_F_"), "0xF");
        assert_eq!(strip_separators("___"), "");
    }

    #[test]
    fn test_signed_marker_consumed_as_pair() {
        assert_eq!(strip_markers("-0x1"), ("x1", true));
        assert_eq!(strip_markers("-042"), ("42", true));
    }

    #[test]
    fn test_single_zero_consumed_when_unsigned() {
        assert_eq!(strip_markers("0b101"), ("b101", false));
        assert_eq!(strip_markers("00"), ("0", false));
    }

    #[test]
    fn test_other_literals_left_alone() {
        assert_eq!(strip_markers("255"), ("255", false));
        assert_eq!(strip_markers("-1"), ("-1", false));
        assert_eq!(strip_markers("x1F"), ("x1F", false));
    }

    #[test]
    fn test_literal_body() {
        assert_eq!(literal_body("-0b1000_0000"), ("b10000000".to_string(), true));
        assert_eq!(literal_body("0x1F"), ("x1F".to_string(), false));
        assert_eq!(literal_body("1_000"), ("1000".to_string(), false));
    }

    #[test]
    fn test_radix_letters() {
        assert_eq!(split_radix("b1010"), (Base::Bin, "1010"));
        assert_eq!(split_radix("o17"), (Base::Oct, "17"));
        assert_eq!(split_radix("xfF"), (Base::Hex, "fF"));
    }

    #[test]
    fn test_decimal_consumes_nothing() {
        assert_eq!(split_radix("42"), (Base::Dec, "42"));
        assert_eq!(split_radix("X1F"), (Base::Dec, "X1F"));
    }

    #[test]
    fn test_parse_each_radix() {
        assert_eq!(parse_literal("0b11111111").unwrap(), parsed(255, false, Base::Bin));
        assert_eq!(parse_literal("0o777").unwrap(), parsed(511, false, Base::Oct));
        assert_eq!(parse_literal("0x1F").unwrap(), parsed(31, false, Base::Hex));
        assert_eq!(parse_literal("1_000").unwrap(), parsed(1000, false, Base::Dec));
        assert_eq!(parse_literal("-0b1000_0000").unwrap(), parsed(128, true, Base::Bin));
    }

    #[test]
    fn test_digits_after_leading_zero_are_decimal() {
        assert_eq!(parse_literal("042").unwrap(), parsed(42, false, Base::Dec));
        assert_eq!(parse_literal("-042").unwrap(), parsed(42, true, Base::Dec));
    }

    #[test]
    fn test_nothing_left_after_markers() {
        for raw in ["0", "-0", "_0_", "-_0"] {
            assert!(
                matches!(parse_literal(raw), Err(BaseConvError::EmptyValue(_))),
                "{:?}",
                raw
            );
        }
    }

    #[test]
    fn test_rejects_invalid_digits() {
        for raw in ["0b102", "0o8", "0xG", "12a", "-1", "0+5", "0x", "0b", " 5", "0X1F"] {
            assert!(
                matches!(parse_literal(raw), Err(BaseConvError::MalformedLiteral { .. })),
                "{:?}",
                raw
            );
        }
    }

    #[test]
    fn test_malformed_error_names_raw_literal() {
        let err = parse_literal("0b1_2").unwrap_err();
        assert_eq!(
            err,
            BaseConvError::MalformedLiteral {
                literal: "0b1_2".to_string(),
                reason: "'2' is not a binary (2) digit".to_string(),
            }
        );
    }

    #[test]
    fn test_overflow_beyond_64_bits() {
        assert_eq!(parse_magnitude("18446744073709551615", Base::Dec).unwrap(), u64::MAX);
        assert!(parse_magnitude("18446744073709551616", Base::Dec).is_err());
        assert_eq!(parse_magnitude("FFFFFFFFFFFFFFFF", Base::Hex).unwrap(), u64::MAX);
        assert!(parse_magnitude("10000000000000000", Base::Hex).is_err());
    }

    #[test]
    fn test_unsigned_literal_is_reinterpreted() {
        assert_eq!(parsed(255, false, Base::Dec).resolve(8), 255);
        assert_eq!(parsed(u64::MAX, false, Base::Hex).resolve(8), -1);
    }

    #[test]
    fn test_signed_literal_below_sign_bit_unchanged() {
        assert_eq!(parsed(34, true, Base::Oct).resolve(8), 34);
        assert_eq!(parsed(127, true, Base::Dec).resolve(8), 127);
    }

    #[test]
    fn test_signed_literal_with_sign_bit_is_negative() {
        assert_eq!(parsed(128, true, Base::Bin).resolve(8), -128);
        assert_eq!(parsed(255, true, Base::Hex).resolve(8), -1);
        assert_eq!(parsed(1, true, Base::Bin).resolve(1), -1);
        assert_eq!(parsed(0xFFFF_FFFF, true, Base::Hex).resolve(32), -1);
    }

    #[test]
    fn test_signed_literal_at_64_bits() {
        assert_eq!(parsed(u64::MAX, true, Base::Hex).resolve(64), -1);
        assert_eq!(parsed(1 << 63, true, Base::Hex).resolve(64), i64::MIN);
        assert_eq!(parsed(5, true, Base::Dec).resolve(64), 5);
    }

    #[test]
    fn test_magnitude_wider_than_width_keeps_excess() {
        let lit = parsed(0x1FF, true, Base::Hex);
        assert!(lit.exceeds_width(8));
        assert_eq!(lit.resolve(8), 0x1FF - 0x100);
        assert!(!parsed(0xFF, true, Base::Hex).exceeds_width(8));
    }

    #[test]
    fn test_interpret() {
        assert_eq!(interpret("-0x80", 8).unwrap(), -128);
        assert_eq!(interpret("-0x80", 16).unwrap(), 128);
        assert_eq!(interpret("0x80", 8).unwrap(), 128);
    }
}
