use crate::model::{Base, ParsedLiteral};
use serde::Serialize;

pub mod convert;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Outcome of one conversion: the printable line plus everything computed on the way.
#[derive(Debug, Clone, Serialize)]
pub struct CmdResult {
    pub input: String,
    pub base: Base,
    pub nbits: u32,
    pub signed: bool,
    pub value: i64,
    pub output: String,
    #[serde(skip)]
    pub parsed: ParsedLiteral,
    #[serde(skip)]
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }
}
