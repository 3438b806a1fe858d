//! Parse error types.

use crate::lexer::Token;
use thiserror::Error;

/// Parser result type.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Parse error with a prebuilt human-readable message.
///
/// The message names the offending token, or "end of input" when the stream
/// was exhausted. Errors carry no byte offsets; tokens have no position
/// metadata.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    /// Kind of parse error
    pub kind: ParseErrorKind,
    /// Human-readable error message
    pub message: String,
}

/// Category of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A parameter position held a closing delimiter, comma, or end of input
    UnexpectedToken,
    /// A `[` was not immediately followed by `]`
    MalformedArraySuffix,
    /// Tuple nesting reached the configured maximum
    NestingTooDeep,
}

impl ParseError {
    /// Create an "unexpected token" error.
    pub(crate) fn unexpected_token(found: Option<&Token>, context: &str) -> Self {
        let message = match found {
            Some(token) => format!("unexpected token `{token}` {context}"),
            None => format!("unexpected end of input {context}"),
        };
        Self {
            kind: ParseErrorKind::UnexpectedToken,
            message,
        }
    }

    /// Create a "malformed array suffix" error.
    pub(crate) fn malformed_array_suffix(found: Option<&Token>) -> Self {
        let message = match found {
            Some(token) => {
                format!("expected `]` after `[` to denote an array type, found `{token}`")
            }
            None => "expected `]` after `[` to denote an array type, found end of input".into(),
        };
        Self {
            kind: ParseErrorKind::MalformedArraySuffix,
            message,
        }
    }

    /// Create a "nesting too deep" error.
    pub(crate) fn nesting_too_deep(max_depth: usize) -> Self {
        Self {
            kind: ParseErrorKind::NestingTooDeep,
            message: format!("tuple nesting deeper than {max_depth} levels"),
        }
    }
}
