use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BaseConvError {
    /// Wrong argument count or unparseable command line. Carries the rendered usage text.
    #[error("{0}")]
    Usage(String),

    #[error("base must be 2, 8, 10, or 16 (got '{0}')")]
    InvalidBase(String),

    #[error("nbits must be between 1 and 64 (got '{0}')")]
    InvalidWidth(String),

    #[error("value cannot be empty{0}")]
    EmptyValue(&'static str),

    #[error("malformed literal '{literal}': {reason}")]
    MalformedLiteral { literal: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl BaseConvError {
    pub(crate) fn malformed(literal: &str, reason: impl Into<String>) -> Self {
        BaseConvError::MalformedLiteral {
            literal: literal.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BaseConvError>;
