//! Error types for the text scanner

use thiserror::Error;

/// Scanner errors
///
/// Running out of input is never an error: single reads report it as `None`
/// and sequences simply end.
#[derive(Error, Debug)]
pub enum Error {
    /// A token could not be converted to the requested type
    ///
    /// **Triggered by:** `read`, and `read_values` under [`Malformed::Fail`](crate::Malformed::Fail)
    /// **Example:** reading `i32` from the block `"x"`, or from an exhausted source (empty token)
    /// **Recovery:** the token is already consumed; the next read continues after it
    #[error("Invalid format of value type {type_name}: cannot parse {token:?} ({reason})")]
    Parse {
        /// Static name of the target type
        type_name: &'static str,
        /// Raw block text that failed to parse
        token: String,
        /// Message from the parse function
        reason: String,
    },

    /// The underlying character source failed
    ///
    /// **Triggered by:** reader I/O failures, invalid UTF-8 in a byte stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid scanner configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a parse error for target type `T`
    pub fn parse<T>(token: impl Into<String>, reason: impl ToString) -> Self {
        Error::Parse {
            type_name: std::any::type_name::<T>(),
            token: token.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a configuration error with a message
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Whether the scanner can keep reading after this error
    ///
    /// A parse failure only loses the offending token; an I/O failure leaves
    /// the source in an unknown state.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }
}

/// Result type for scanner operations
pub type Result<T> = std::result::Result<T, Error>;
