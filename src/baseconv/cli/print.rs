use super::setup::OutputFormat;
use baseconv::api::{CmdMessage, CmdResult, MessageLevel};
use baseconv::error::{BaseConvError, Result};
use colored::Colorize;

/// Diagnostics go to stderr so stdout carries only the converted value.
pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => eprintln!("{}", message.content.dimmed()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_result(result: &CmdResult, format: OutputFormat) -> Result<()> {
    println!("{}", render_result(result, format)?);
    Ok(())
}

fn render_result(result: &CmdResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(result.output.clone()),
        OutputFormat::Json => serde_json::to_string(result)
            .map_err(|e| BaseConvError::Serialization(e.to_string())),
    }
}
