//! Shared foundations for the Cairn crates: the HTTP transport abstraction,
//! the error taxonomy, the typed request/response plumbing, and the
//! identifier newtypes used across the API surface.

pub mod error;
pub mod http_client;
pub mod request;
pub mod types;

pub use error::{
    ApiError, ClientError, CloudResult, DecodeError, EncodeError, ErrorBody, TransportError,
};
pub use http_client::HttpClient;
pub use request::{ApiMethod, ApiRequest, PagedRequest, Response, build_http_request};
pub use types::{ApiKey, UniverseId};
