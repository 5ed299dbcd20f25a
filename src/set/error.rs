//! Errors for the textual set syntax.

use thiserror::Error;

/// Errors produced when parsing a `(tok1,tok2,...)` set literal.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input is not wrapped in surrounding parentheses.
    #[error("set literal {input:?} is not wrapped in parentheses")]
    Format { input: String },

    /// A token was rejected by the element converter.
    #[error("failed to convert token {token:?} into a set element")]
    Conversion {
        token: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
