use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::format::format_parts;
use crate::literal::{literal_body, parse_literal};
use crate::model::{Base, ConversionRequest};

pub fn run(request: &ConversionRequest) -> Result<CmdResult> {
    let parsed = parse_literal(&request.literal)?;
    let value = parsed.resolve(request.bit_width);

    let formatted = format_parts(value, request.target_base, request.bit_width);
    let rendered = formatted.rendered;
    let size = formatted.fill_size;
    let output = formatted.output;
    let (body, _) = literal_body(&request.literal);

    let mut result = CmdResult {
        input: request.literal.clone(),
        base: request.target_base,
        nbits: request.bit_width,
        signed: parsed.is_signed_literal,
        value,
        output,
        parsed,
        messages: Vec::new(),
    };

    result.add_message(CmdMessage::info(format!("Value: {}", request.literal)));
    result.add_message(CmdMessage::info(format!("Stripped: {}", body)));
    result.add_message(CmdMessage::info(format!("Base: {}", request.target_base)));
    result.add_message(CmdMessage::info(format!("Nbits: {}", request.bit_width)));
    result.add_message(CmdMessage::info(format!(
        "Signed: {}",
        parsed.is_signed_literal
    )));
    result.add_message(CmdMessage::info(format!(
        "Source radix: {}",
        parsed.source_radix
    )));
    result.add_message(CmdMessage::info(format!("Magnitude: {}", parsed.magnitude)));
    result.add_message(CmdMessage::info(format!("Result: {}", value)));
    result.add_message(CmdMessage::info(format!("Rendered: {}", rendered)));

    if parsed.is_signed_literal && parsed.exceeds_width(request.bit_width) {
        result.add_message(CmdMessage::warning(format!(
            "Magnitude {} does not fit in {} bits",
            parsed.magnitude, request.bit_width
        )));
    }

    if let Some(size) = size {
        result.add_message(CmdMessage::info(format!("Fill size: {}", size)));
        // Binary drops sign-extension ones for negative values; anything else is lost data.
        let extension = if request.target_base == Base::Bin && value < 0 {
            '1'
        } else {
            '0'
        };
        let digits = rendered.trim_start_matches('-');
        let dropped = &digits[..digits.len().saturating_sub(size)];
        if dropped.chars().any(|c| c != extension) {
            result.add_message(CmdMessage::warning(format!(
                "Truncated to {} digits, dropped '{}'",
                size, dropped
            )));
        }
    }

    result.add_message(CmdMessage::info(format!(
        "Output: {} ({} chars)",
        result.output,
        result.output.len()
    )));

    Ok(result)
}
