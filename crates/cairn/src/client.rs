//! The Open Cloud client: credential holder and request dispatcher.

use bytes::Bytes;
use cairn_common::{
    ApiKey, ApiRequest, ClientError, Response, TransportError, UniverseId, build_http_request,
};
use cairn_common::http_client::HttpClient;
use smol_str::SmolStr;
use url::Url;

use crate::datastore::DataStores;
use crate::messaging::Messaging;
use crate::ordered::OrderedDataStore;

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://apis.roblox.com";

/// Client for the Open Cloud APIs.
///
/// Holds the transport, the base URL, and the API key, and attaches the
/// `x-api-key` header to every request. The client is cheap to clone and a
/// single instance can serve any number of universes; the service handles
/// ([`data_stores`](Self::data_stores),
/// [`ordered_data_store`](Self::ordered_data_store),
/// [`messaging`](Self::messaging)) borrow nothing and can outlive it.
///
/// # Example
/// ```no_run
/// use cairn::{CloudClient, UniverseId};
///
/// # async fn run() -> Result<(), cairn::Error> {
/// let client = CloudClient::new("API_KEY");
/// let stores = client.data_stores(UniverseId(3310576216));
/// let players = stores.store("players");
/// if let Some(entry) = players.get("player_42").await? {
///     println!("coins: {}", entry.value()["coins"]);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CloudClient<C = DefaultTransport> {
    http: C,
    base: Url,
    api_key: ApiKey,
}

#[cfg(feature = "reqwest-client")]
type DefaultTransport = reqwest::Client;
#[cfg(not(feature = "reqwest-client"))]
type DefaultTransport = ();

#[cfg(feature = "reqwest-client")]
impl CloudClient<reqwest::Client> {
    /// Create a client with the default transport and production base URL.
    pub fn new(api_key: impl Into<ApiKey>) -> Self {
        Self::with_transport(reqwest::Client::new(), api_key)
    }
}

impl<C: HttpClient> CloudClient<C> {
    /// Create a client over a custom transport.
    pub fn with_transport(http: C, api_key: impl Into<ApiKey>) -> Self {
        Self {
            http,
            base: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            api_key: api_key.into(),
        }
    }

    /// Override the base URL (e.g. for a gateway or a test server).
    pub fn with_base_url(mut self, base: Url) -> Self {
        self.base = base;
        self
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Send a typed request and return the wrapped response.
    ///
    /// This is the low-level escape hatch: every endpoint in `cairn-api` can
    /// be sent directly when the service handles don't expose the knob you
    /// need.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, request), fields(path = %request.path()))
    )]
    pub async fn send<R: ApiRequest + Send + Sync>(
        &self,
        request: R,
    ) -> Result<Response<R>, ClientError>
    where
        C: Sync,
    {
        let http_request = build_http_request(&self.base, &self.api_key, &request)?;

        let http_response = self
            .http
            .send_http(http_request)
            .await
            .map_err(|e| TransportError::Other(Box::new(e)))?;

        let (parts, body) = http_response.into_parts();

        #[cfg(feature = "tracing")]
        tracing::debug!(status = %parts.status, "response received");

        Ok(Response::new(Bytes::from(body), parts.status, parts.headers))
    }
}

impl<C: HttpClient + Clone + Sync> CloudClient<C> {
    /// Standard data stores of a universe.
    pub fn data_stores(&self, universe_id: UniverseId) -> DataStores<C> {
        DataStores::new(self.clone(), universe_id)
    }

    /// An ordered data store of a universe, in the `global` scope.
    pub fn ordered_data_store(
        &self,
        universe_id: UniverseId,
        name: impl Into<SmolStr>,
    ) -> OrderedDataStore<C> {
        OrderedDataStore::new(self.clone(), universe_id, name.into(), "global".into())
    }

    /// An ordered data store of a universe, in a specific scope.
    pub fn ordered_data_store_in_scope(
        &self,
        universe_id: UniverseId,
        name: impl Into<SmolStr>,
        scope: impl Into<SmolStr>,
    ) -> OrderedDataStore<C> {
        OrderedDataStore::new(self.clone(), universe_id, name.into(), scope.into())
    }

    /// Messaging service of a universe.
    pub fn messaging(&self, universe_id: UniverseId) -> Messaging<C> {
        Messaging::new(self.clone(), universe_id)
    }
}
