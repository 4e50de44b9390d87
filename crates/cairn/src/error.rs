//! Crate-level error type over the common client taxonomy.

use smol_str::SmolStr;

pub use cairn_common::{ApiError, ClientError, DecodeError, EncodeError, TransportError};

/// Errors surfaced by the service handles and entry wrappers.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum Error {
    /// Transport, encoding, decoding, or remote API failure
    #[error("{0}")]
    Client(
        #[from]
        #[diagnostic_source]
        ClientError,
    ),

    /// The entry was deleted through this handle's lineage; no request was
    /// made
    #[error("entry '{key}' was deleted through this handle")]
    EntryDeleted {
        /// Key of the deleted entry
        key: SmolStr,
    },

    /// Topics are limited to 80 characters
    #[error("topic exceeds 80 characters (got {len})")]
    TopicTooLong {
        /// Length of the rejected topic
        len: usize,
    },

    /// Messages are limited to 1024 characters
    #[error("message exceeds 1024 characters (got {len})")]
    MessageTooLong {
        /// Serialized length of the rejected message
        len: usize,
    },
}

impl From<ApiError> for Error {
    fn from(e: ApiError) -> Self {
        Self::Client(e.into())
    }
}

impl From<DecodeError> for Error {
    fn from(e: DecodeError) -> Self {
        Self::Client(e.into())
    }
}

impl Error {
    /// The remote API error, when that is what this is.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Client(ClientError::Api(api)) => Some(api),
            _ => None,
        }
    }
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, Error>;
