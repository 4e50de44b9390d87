//! Typed request/response plumbing for Open Cloud endpoints.
//!
//! Each endpoint is a struct implementing [`ApiRequest`]: the struct's
//! serializable fields become the query string, while path components are
//! carried as `#[serde(skip)]` fields and assembled by [`ApiRequest::path`].
//! [`build_http_request`] turns a request plus explicit base URL and API key
//! into an `http::Request`; [`Response`] wraps the raw reply for typed
//! parsing.

use bytes::Bytes;
use http::{
    HeaderMap, HeaderName, HeaderValue, Request, StatusCode,
    header::{ACCEPT, CONTENT_TYPE},
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use smol_str::SmolStr;
use std::marker::PhantomData;
use url::Url;

use crate::error::{ApiError, ClientError, DecodeError, EncodeError, ErrorBody, TransportError};
use crate::types::ApiKey;

/// HTTP method and body encoding for an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiMethod {
    /// Read (HTTP GET), parameters in the query string
    Get,
    /// Create/replace (HTTP POST) with the given body encoding
    Post(&'static str),
    /// Partial modify (HTTP PATCH) with the given body encoding
    Patch(&'static str),
    /// Delete (HTTP DELETE)
    Delete,
}

impl ApiMethod {
    /// Get the corresponding `http::Method`
    pub fn as_http(&self) -> http::Method {
        match self {
            Self::Get => http::Method::GET,
            Self::Post(_) => http::Method::POST,
            Self::Patch(_) => http::Method::PATCH,
            Self::Delete => http::Method::DELETE,
        }
    }

    /// Body encoding (MIME type) for methods that carry one
    pub const fn body_encoding(&self) -> Option<&'static str> {
        match self {
            Self::Get | Self::Delete => None,
            Self::Post(enc) | Self::Patch(enc) => Some(enc),
        }
    }
}

/// Trait for typed Open Cloud requests.
///
/// Implemented on the endpoint's parameter struct. Serializable fields become
/// the query string; the resource path is produced by [`Self::path`] from the
/// identifying fields the struct carries explicitly.
pub trait ApiRequest: Serialize {
    /// HTTP method (and body encoding, for writes)
    const METHOD: ApiMethod;

    /// Decoded response type
    type Output: DeserializeOwned;

    /// Resource path for this request, starting with `/`.
    fn path(&self) -> String;

    /// Encode the request body.
    ///
    /// Default is an empty body; write endpoints override this.
    fn encode_body(&self) -> Result<Vec<u8>, EncodeError> {
        Ok(Vec::new())
    }

    /// Additional request headers beyond the standard set.
    fn extra_headers(&self) -> Result<Vec<(HeaderName, HeaderValue)>, EncodeError> {
        Ok(Vec::new())
    }

    /// Decode a successful response body.
    ///
    /// Default implementation parses JSON. Endpoints whose success reply has
    /// no body override this.
    fn decode_output(buffer: &[u8]) -> Result<Self::Output, DecodeError> {
        Ok(serde_json::from_slice(buffer)?)
    }
}

/// A cursor-paginated list endpoint.
///
/// Implementors expose their continuation cursor so a generic page walker can
/// drive the fetch loop without knowing the endpoint's parameter names.
pub trait PagedRequest: ApiRequest {
    /// Item type in each page
    type Item;

    /// Store the continuation cursor for the next fetch.
    fn set_cursor(&mut self, cursor: SmolStr);

    /// Split a page into its items and the next continuation cursor, if any.
    fn split(output: Self::Output) -> (Vec<Self::Item>, Option<SmolStr>);
}

/// Build an HTTP request for an Open Cloud call.
///
/// Base URL and API key are explicit parameters; nothing is read from
/// ambient state.
pub fn build_http_request<R: ApiRequest>(
    base: &Url,
    api_key: &ApiKey,
    req: &R,
) -> Result<Request<Vec<u8>>, ClientError> {
    let mut url = base.clone();
    let mut path = url.path().trim_end_matches('/').to_owned();
    path.push_str(&req.path());
    url.set_path(&path);

    let qs = serde_html_form::to_string(req).map_err(EncodeError::from)?;
    if !qs.is_empty() {
        url.set_query(Some(&qs));
    } else {
        url.set_query(None);
    }

    let mut builder = Request::builder()
        .method(R::METHOD.as_http())
        .uri(url.as_str());

    if let Some(encoding) = R::METHOD.body_encoding() {
        builder = builder.header(CONTENT_TYPE, encoding);
    }
    builder = builder.header(ACCEPT, "application/json");

    let key_value = HeaderValue::from_str(api_key.as_str()).map_err(|e| {
        TransportError::InvalidRequest(format!("Invalid API key header: {}", e))
    })?;
    builder = builder.header(HeaderName::from_static("x-api-key"), key_value);

    for (name, value) in req.extra_headers()? {
        builder = builder.header(name, value);
    }

    let body = if R::METHOD.body_encoding().is_some() {
        req.encode_body()?
    } else {
        Vec::new()
    };

    Ok(builder
        .body(body)
        .map_err(|e| TransportError::InvalidRequest(format!("Failed to build request: {}", e)))?)
}

/// Response wrapper that owns the reply buffer, status, and headers.
///
/// Entry metadata rides on response headers, so the full header map is kept
/// alongside the body.
pub struct Response<R: ApiRequest> {
    buffer: Bytes,
    status: StatusCode,
    headers: HeaderMap,
    _marker: PhantomData<R>,
}

impl<R: ApiRequest> Response<R> {
    /// Create a new response from the raw reply parts
    pub fn new(buffer: Bytes, status: StatusCode, headers: HeaderMap) -> Self {
        Self {
            buffer,
            status,
            headers,
            _marker: PhantomData,
        }
    }

    /// Get the HTTP status code
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get the response headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get the raw buffer
    pub fn buffer(&self) -> &Bytes {
        &self.buffer
    }

    /// Parse the response into the endpoint's output type.
    ///
    /// Success statuses decode through [`ApiRequest::decode_output`];
    /// anything else is classified into an [`ApiError`] with the remote
    /// error body attached.
    pub fn parse(&self) -> Result<R::Output, ClientError> {
        if self.status.is_success() {
            Ok(R::decode_output(&self.buffer)?)
        } else {
            Err(ApiError::from_status(self.status, ErrorBody::from_slice(&self.buffer)).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct ListWidgets {
        #[serde(skip)]
        shelf: u64,
        #[serde(skip_serializing_if = "Option::is_none")]
        cursor: Option<SmolStr>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max_items: Option<u32>,
    }

    #[derive(Debug, Deserialize)]
    struct WidgetPage {
        total: u32,
    }

    impl ApiRequest for ListWidgets {
        const METHOD: ApiMethod = ApiMethod::Get;
        type Output = WidgetPage;

        fn path(&self) -> String {
            format!("/widgets/v1/shelves/{}/widgets", self.shelf)
        }
    }

    fn key() -> ApiKey {
        ApiKey::new("test-key")
    }

    #[test]
    fn builds_url_with_query() {
        let base = Url::parse("https://apis.example.com").unwrap();
        let req = ListWidgets {
            shelf: 77,
            cursor: Some("abc".into()),
            max_items: Some(10),
        };
        let http_req = build_http_request(&base, &key(), &req).unwrap();
        assert_eq!(http_req.method(), http::Method::GET);
        assert_eq!(
            http_req.uri().to_string(),
            "https://apis.example.com/widgets/v1/shelves/77/widgets?cursor=abc&maxItems=10"
        );
        assert_eq!(http_req.headers().get("x-api-key").unwrap(), "test-key");
        assert!(http_req.body().is_empty());
    }

    #[test]
    fn omits_empty_query() {
        let base = Url::parse("https://apis.example.com").unwrap();
        let req = ListWidgets {
            shelf: 1,
            cursor: None,
            max_items: None,
        };
        let http_req = build_http_request(&base, &key(), &req).unwrap();
        assert_eq!(
            http_req.uri().to_string(),
            "https://apis.example.com/widgets/v1/shelves/1/widgets"
        );
    }

    #[test]
    fn base_path_prefix_is_preserved() {
        let base = Url::parse("https://gateway.example.com/cloud/").unwrap();
        let req = ListWidgets {
            shelf: 2,
            cursor: None,
            max_items: None,
        };
        let http_req = build_http_request(&base, &key(), &req).unwrap();
        assert_eq!(
            http_req.uri().path(),
            "/cloud/widgets/v1/shelves/2/widgets"
        );
    }

    #[test]
    fn parse_classifies_failure_statuses() {
        let resp: Response<ListWidgets> = Response::new(
            Bytes::from_static(br#"{"error":"NOT_FOUND","message":"no shelf"}"#),
            StatusCode::NOT_FOUND,
            HeaderMap::new(),
        );
        let err = resp.parse().unwrap_err();
        match err {
            ClientError::Api(ApiError::NotFound(body)) => {
                assert_eq!(body.message.as_deref(), Some("no shelf"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_decodes_success() {
        let resp: Response<ListWidgets> = Response::new(
            Bytes::from_static(br#"{"total":3}"#),
            StatusCode::OK,
            HeaderMap::new(),
        );
        assert_eq!(resp.parse().unwrap().total, 3);
    }
}
