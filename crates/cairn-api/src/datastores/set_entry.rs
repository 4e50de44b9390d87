use base64::Engine;
use cairn_common::{ApiMethod, ApiRequest, EncodeError, UniverseId};
use http::{HeaderName, HeaderValue};
use md5::{Digest, Md5};
use serde::Serialize;
use serde_json::{Map, Value};
use smol_str::SmolStr;

use super::EntryVersionInfo;

/// Writes the full value of an entry, creating a new version.
///
/// The body is the complete serialized value; attributes and tagged user IDs
/// ride in request headers alongside a base64 MD5 checksum of the body.
/// Passing [`match_version`](Self::match_version) makes the write
/// conditional: the service refuses with `412 Precondition Failed` when the
/// entry has moved past that version.
#[derive(Debug, Clone, PartialEq, Serialize, bon::Builder)]
#[builder(start_fn = new)]
#[serde(rename_all = "camelCase")]
pub struct SetEntry {
    #[serde(skip)]
    pub universe_id: UniverseId,
    /// Name of the data store
    #[builder(into)]
    pub datastore_name: SmolStr,
    /// Key identifying the entry
    #[builder(into)]
    pub entry_key: SmolStr,
    /// Scope the entry lives in
    #[builder(into, default = crate::datastores::default_scope())]
    pub scope: SmolStr,
    /// Only write if the entry is still at this version
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub match_version: Option<SmolStr>,
    /// Only write if the entry does not exist yet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_create: Option<bool>,
    /// The full value to store
    #[serde(skip)]
    pub value: Value,
    /// Attributes for the new version; existing attributes are replaced
    #[serde(skip)]
    #[builder(default)]
    pub attributes: Map<String, Value>,
    /// User IDs tagged on the new version; existing tags are replaced
    #[serde(skip)]
    #[builder(default)]
    pub user_ids: Vec<u64>,
}

impl ApiRequest for SetEntry {
    const METHOD: ApiMethod = ApiMethod::Post("application/json");
    type Output = EntryVersionInfo;

    fn path(&self) -> String {
        format!(
            "{}/datastore/entries/entry",
            super::base_path(self.universe_id)
        )
    }

    fn encode_body(&self) -> Result<Vec<u8>, EncodeError> {
        Ok(serde_json::to_vec(&self.value)?)
    }

    fn extra_headers(&self) -> Result<Vec<(HeaderName, HeaderValue)>, EncodeError> {
        let body = self.encode_body()?;
        let checksum = base64::engine::general_purpose::STANDARD.encode(Md5::digest(&body));

        Ok(vec![
            (
                HeaderName::from_static("content-md5"),
                HeaderValue::from_str(&checksum)?,
            ),
            (
                HeaderName::from_static(super::HEADER_ATTRIBUTES),
                HeaderValue::from_str(&serde_json::to_string(&self.attributes)?)?,
            ),
            (
                HeaderName::from_static(super::HEADER_USER_IDS),
                HeaderValue::from_str(&serde_json::to_string(&self.user_ids)?)?,
            ),
        ])
    }
}
