use cairn_common::{ApiMethod, ApiRequest, UniverseId};
use serde::Serialize;
use serde_json::Value;
use smol_str::SmolStr;

/// Reads the current value of an entry.
///
/// The response body is the raw entry value; the entry's metadata (version
/// token, timestamps, attributes, user IDs) is carried in `roblox-entry-*`
/// response headers, see [`super::EntryMetadata::from_headers`]. A `204 No
/// Content` status means the key is tombstoned.
#[derive(Debug, Clone, PartialEq, Serialize, bon::Builder)]
#[builder(start_fn = new)]
#[serde(rename_all = "camelCase")]
pub struct GetEntry {
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
}

impl ApiRequest for GetEntry {
    const METHOD: ApiMethod = ApiMethod::Get;
    type Output = Value;

    fn path(&self) -> String {
        format!(
            "{}/datastore/entries/entry",
            super::base_path(self.universe_id)
        )
    }
}
