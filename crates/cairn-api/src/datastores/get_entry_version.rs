use cairn_common::{ApiMethod, ApiRequest, UniverseId};
use serde::Serialize;
use serde_json::Value;
use smol_str::SmolStr;

/// Reads the value of a specific version of an entry.
///
/// Like [`super::get_entry::GetEntry`], the body is the raw value and the
/// version's metadata rides in response headers.
#[derive(Debug, Clone, PartialEq, Serialize, bon::Builder)]
#[builder(start_fn = new)]
#[serde(rename_all = "camelCase")]
pub struct GetEntryVersion {
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
    /// The version token to inspect
    #[builder(into)]
    pub version_id: SmolStr,
}

impl ApiRequest for GetEntryVersion {
    const METHOD: ApiMethod = ApiMethod::Get;
    type Output = Value;

    fn path(&self) -> String {
        format!(
            "{}/datastore/entries/entry/versions/version",
            super::base_path(self.universe_id)
        )
    }
}
