//! Standard data store endpoints.
//!
//! All standard data store routes live under
//! `/datastores/v1/universes/{universe}/standard-datastores`; the data store
//! name, scope, and entry key travel in the query string, and entry metadata
//! comes back in `roblox-entry-*` response headers.

use cairn_common::{DecodeError, UniverseId};
use chrono::{DateTime, Utc};
use http::HeaderMap;
use serde::Deserialize;
use serde_json::{Map, Value};
use smol_str::SmolStr;

pub mod delete_entry;
pub mod get_entry;
pub mod get_entry_version;
pub mod increment_entry;
pub mod list_entry_keys;
pub mod list_entry_versions;
pub mod list_stores;
pub mod set_entry;

pub(crate) fn base_path(universe_id: UniverseId) -> String {
    format!(
        "/datastores/v1/universes/{}/standard-datastores",
        universe_id
    )
}

pub(crate) fn default_scope() -> SmolStr {
    SmolStr::new_static("global")
}

/// One data store in a listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataStoreInfo {
    /// The name of the data store
    pub name: SmolStr,
    /// When the data store was created
    pub created_time: DateTime<Utc>,
}

/// One entry key in a key listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryKey {
    /// The key of the entry
    pub key: SmolStr,
    /// The scope the key lives in; only present when listing across scopes
    #[serde(default)]
    pub scope: Option<SmolStr>,
}

/// Version record returned by writes and version listings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryVersionInfo {
    /// Version token of this revision
    pub version: SmolStr,
    /// Whether this revision is a deletion tombstone
    #[serde(default)]
    pub deleted: bool,
    /// Serialized length of the revision's content
    #[serde(default)]
    pub content_length: u64,
    /// When this revision was written
    pub created_time: DateTime<Utc>,
    /// When the entry itself was first created
    #[serde(default)]
    pub object_created_time: Option<DateTime<Utc>>,
}

/// Entry metadata delivered in response headers by the get/read endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryMetadata {
    /// When the entry was created
    pub created_time: DateTime<Utc>,
    /// When the returned revision was written
    pub updated_time: DateTime<Utc>,
    /// Version token of the returned revision
    pub version: SmolStr,
    /// Attributes associated with the entry
    pub attributes: Map<String, Value>,
    /// User IDs tagged on the entry
    pub user_ids: Vec<u64>,
}

pub(crate) const HEADER_CREATED_TIME: &str = "roblox-entry-created-time";
pub(crate) const HEADER_VERSION_CREATED_TIME: &str = "roblox-entry-version-created-time";
pub(crate) const HEADER_VERSION: &str = "roblox-entry-version";
pub(crate) const HEADER_ATTRIBUTES: &str = "roblox-entry-attributes";
pub(crate) const HEADER_USER_IDS: &str = "roblox-entry-userids";

impl EntryMetadata {
    /// Extract entry metadata from the response headers of a read.
    ///
    /// The attribute and user-ID headers are omitted by the service when
    /// empty, so their absence is not an error.
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, DecodeError> {
        let created_time = parse_time_header(headers, HEADER_CREATED_TIME)?;
        let updated_time = parse_time_header(headers, HEADER_VERSION_CREATED_TIME)?;
        let version = header_str(headers, HEADER_VERSION)?
            .ok_or_else(|| DecodeError::Header(HEADER_VERSION.into()))?
            .into();

        let attributes = match header_str(headers, HEADER_ATTRIBUTES)? {
            Some(raw) => serde_json::from_str::<Option<Map<String, Value>>>(raw)
                .map_err(|_| DecodeError::Header(HEADER_ATTRIBUTES.into()))?
                .unwrap_or_default(),
            None => Map::new(),
        };
        let user_ids = match header_str(headers, HEADER_USER_IDS)? {
            Some(raw) => serde_json::from_str::<Option<Vec<u64>>>(raw)
                .map_err(|_| DecodeError::Header(HEADER_USER_IDS.into()))?
                .unwrap_or_default(),
            None => Vec::new(),
        };

        Ok(Self {
            created_time,
            updated_time,
            version,
            attributes,
            user_ids,
        })
    }
}

fn header_str<'h>(headers: &'h HeaderMap, name: &str) -> Result<Option<&'h str>, DecodeError> {
    match headers.get(name) {
        None => Ok(None),
        Some(value) => value
            .to_str()
            .map(Some)
            .map_err(|_| DecodeError::Header(name.into())),
    }
}

fn parse_time_header(headers: &HeaderMap, name: &str) -> Result<DateTime<Utc>, DecodeError> {
    let raw = header_str(headers, name)?.ok_or_else(|| DecodeError::Header(name.into()))?;
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|_| DecodeError::Header(name.into()))
}
