//! Error types for Open Cloud client operations.

use http::StatusCode;
use serde::Deserialize;
use smol_str::SmolStr;

/// Client error type wrapping all possible error conditions
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ClientError {
    /// HTTP transport error
    #[error("HTTP transport error: {0}")]
    Transport(
        #[from]
        #[diagnostic_source]
        TransportError,
    ),

    /// Request serialization failed
    #[error("{0}")]
    Encode(
        #[from]
        #[diagnostic_source]
        EncodeError,
    ),

    /// Response deserialization failed
    #[error("{0}")]
    Decode(
        #[from]
        #[diagnostic_source]
        DecodeError,
    ),

    /// Error response from the remote API
    #[error("{0}")]
    Api(
        #[from]
        #[diagnostic_source]
        ApiError,
    ),
}

/// Transport-level errors that occur during HTTP communication
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum TransportError {
    /// Failed to establish connection to the server
    #[error("Connection error: {0}")]
    Connect(String),

    /// Request timed out
    #[error("Request timeout")]
    Timeout,

    /// Request construction failed (malformed URI, headers, etc.)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Other transport error
    #[error("Transport error: {0}")]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

/// Request serialization errors
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum EncodeError {
    /// Failed to serialize query parameters
    #[error("Failed to serialize query: {0}")]
    Query(
        #[from]
        #[source]
        serde_html_form::ser::Error,
    ),

    /// Failed to serialize JSON body
    #[error("Failed to serialize JSON: {0}")]
    Json(
        #[from]
        #[source]
        serde_json::Error,
    ),

    /// A computed header value contained bytes HTTP forbids
    #[error("Invalid header value: {0}")]
    Header(
        #[from]
        #[source]
        http::header::InvalidHeaderValue,
    ),
}

/// Response deserialization errors
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum DecodeError {
    /// JSON deserialization failed
    #[error("Failed to deserialize JSON: {0}")]
    Json(
        #[from]
        #[source]
        serde_json::Error,
    ),

    /// A metadata response header was missing or malformed
    #[error("Missing or malformed response header: {0}")]
    Header(String),
}

/// Parsed remote error body.
///
/// The service is not consistent about its error shape: the data store
/// endpoints return `{"error": "...", "message": "..."}` while the ordered
/// data store endpoints use Google-style `{"code": ..., "message": "..."}`.
/// Both are captured leniently; anything unparsable decays to an empty body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    /// Error code string, when the endpoint provides one
    #[serde(default)]
    pub error: Option<SmolStr>,
    /// Numeric or string status code, when the endpoint provides one
    #[serde(default)]
    pub code: Option<serde_json::Value>,
    /// Human-readable message
    #[serde(default)]
    pub message: Option<SmolStr>,
}

impl ErrorBody {
    /// Leniently parse an error body from a response buffer.
    pub fn from_slice(buffer: &[u8]) -> Self {
        serde_json::from_slice(buffer).unwrap_or_default()
    }

    /// True when the remote provided no usable code or message.
    pub fn is_empty(&self) -> bool {
        self.error.is_none() && self.code.is_none() && self.message.is_none()
    }
}

impl std::fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.error, &self.code, &self.message) {
            (Some(error), _, Some(message)) => write!(f, ": {} - {}", error, message),
            (Some(error), _, None) => write!(f, ": {}", error),
            (None, Some(code), Some(message)) => write!(f, ": {} - {}", code, message),
            (None, Some(code), None) => write!(f, ": {}", code),
            (None, None, Some(message)) => write!(f, ": {}", message),
            (None, None, None) => Ok(()),
        }
    }
}

/// Error response from the remote API, classified by HTTP status.
///
/// The remote side signals failures purely through status codes plus a loose
/// JSON body; each variant keeps the parsed body so callers can still see
/// the service's own code/message.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ApiError {
    /// 400 - malformed parameters or body
    InvalidRequest(ErrorBody),
    /// 401 - the API key is missing, invalid, or lacks the required scope
    Unauthorized(ErrorBody),
    /// 403 - the key is valid but not permitted to perform this operation
    Forbidden(ErrorBody),
    /// 404 - the universe, data store, or entry does not exist
    NotFound(ErrorBody),
    /// 409 - the write conflicts with the current state of the entry
    Conflict(ErrorBody),
    /// 412 - a version-conditioned write lost the race (`matchVersion` mismatch)
    PreconditionFailed(ErrorBody),
    /// 429 - rate limited
    TooManyRequests(ErrorBody),
    /// 5xx - server-side failure
    Server { status: StatusCode, body: ErrorBody },
    /// Any other unexpected status
    Unexpected { status: StatusCode, body: ErrorBody },
}

impl ApiError {
    /// Classify a non-success response by its status code.
    pub fn from_status(status: StatusCode, body: ErrorBody) -> Self {
        match status {
            StatusCode::BAD_REQUEST => Self::InvalidRequest(body),
            StatusCode::UNAUTHORIZED => Self::Unauthorized(body),
            StatusCode::FORBIDDEN => Self::Forbidden(body),
            StatusCode::NOT_FOUND => Self::NotFound(body),
            StatusCode::CONFLICT => Self::Conflict(body),
            StatusCode::PRECONDITION_FAILED => Self::PreconditionFailed(body),
            StatusCode::TOO_MANY_REQUESTS => Self::TooManyRequests(body),
            _ if status.is_server_error() => Self::Server { status, body },
            _ => Self::Unexpected { status, body },
        }
    }

    /// The HTTP status this error was classified from.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::PreconditionFailed(_) => StatusCode::PRECONDITION_FAILED,
            Self::TooManyRequests(_) => StatusCode::TOO_MANY_REQUESTS,
            Self::Server { status, .. } | Self::Unexpected { status, .. } => *status,
        }
    }

    /// The parsed remote error body.
    pub fn body(&self) -> &ErrorBody {
        match self {
            Self::InvalidRequest(body)
            | Self::Unauthorized(body)
            | Self::Forbidden(body)
            | Self::NotFound(body)
            | Self::Conflict(body)
            | Self::PreconditionFailed(body)
            | Self::TooManyRequests(body) => body,
            Self::Server { body, .. } | Self::Unexpected { body, .. } => body,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequest(body) => write!(f, "invalid request{}", body),
            Self::Unauthorized(body) => write!(f, "API key rejected{}", body),
            Self::Forbidden(body) => write!(f, "permission denied{}", body),
            Self::NotFound(body) => write!(f, "not found{}", body),
            Self::Conflict(body) => write!(f, "conflict{}", body),
            Self::PreconditionFailed(body) => {
                write!(f, "precondition failed (version mismatch){}", body)
            }
            Self::TooManyRequests(body) => write!(f, "rate limited{}", body),
            Self::Server { status, body } => write!(f, "server error {}{}", status, body),
            Self::Unexpected { status, body } => {
                write!(f, "unexpected HTTP status {}{}", status, body)
            }
        }
    }
}

/// Result type for client operations
pub type CloudResult<T> = std::result::Result<T, ClientError>;

#[cfg(feature = "reqwest-client")]
impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_connect() {
            Self::Connect(e.to_string())
        } else if e.is_builder() || e.is_request() {
            Self::InvalidRequest(e.to_string())
        } else {
            Self::Other(Box::new(e))
        }
    }
}
