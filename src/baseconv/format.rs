//! Rendering of resolved values in the target base.
//!
//! Binary always shows the 64-bit two's-complement pattern and never a sign. Octal and
//! hexadecimal use signed notation (`-` then the magnitude digits). Decimal is the plain
//! signed decimal string and is never normalized. Binary, octal and hexadecimal digits
//! are then zero-extended or truncated at the most-significant end to the fill size.

use crate::model::Base;

const SIGN: char = '-';

/// Renders `value` in `base` without any width normalization.
pub fn render(value: i64, base: Base) -> String {
    let sign = if value < 0 { "-" } else { "" };
    match base {
        Base::Bin => format!("{:064b}", value as u64),
        Base::Oct => format!("{}{:o}", sign, value.unsigned_abs()),
        Base::Dec => value.to_string(),
        Base::Hex => format!("{}{:X}", sign, value.unsigned_abs()),
    }
}

/// Digits needed for `bit_width` bits in `base`: `ceil(bit_width / log2(base))`.
/// `None` for decimal, which is not normalized.
pub fn fill_size(bit_width: u32, base: Base) -> Option<usize> {
    base.bits_per_digit()
        .map(|bits| bit_width.div_ceil(bits) as usize)
}

/// Zero-extends or truncates the digit portion of `rendered` to exactly `fill_size`
/// digits. A leading `-` is kept in front of the digits and not counted.
pub fn normalize_width(rendered: &str, fill_size: usize) -> String {
    let (sign, digits) = match rendered.strip_prefix(SIGN) {
        Some(digits) => ("-", digits),
        None => ("", rendered),
    };

    if fill_size == 0 {
        return "0".to_string();
    }

    let len = digits.chars().count();
    if len > fill_size {
        let kept: String = digits.chars().skip(len - fill_size).collect();
        format!("{}{}", sign, kept)
    } else {
        format!("{}{:0>width$}", sign, digits, width = fill_size)
    }
}

/// A value rendered in the target base, before and after width normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
    pub rendered: String,
    pub fill_size: Option<usize>,
    pub output: String,
}

/// Renders `value` and normalizes it to the fill size of `bit_width` in `base`.
pub fn format_parts(value: i64, base: Base, bit_width: u32) -> Formatted {
    let rendered = render(value, base);
    let fill_size = fill_size(bit_width, base);
    let output = match fill_size {
        Some(size) => normalize_width(&rendered, size),
        None => rendered.clone(),
    };
    Formatted {
        rendered,
        fill_size,
        output,
    }
}

pub fn format_value(value: i64, base: Base, bit_width: u32) -> String {
    format_parts(value, base, bit_width).output
}
