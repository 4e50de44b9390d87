use cairn_common::{ApiMethod, ApiRequest, UniverseId};
use serde::Serialize;
use serde_json::Value;
use smol_str::SmolStr;

/// Atomically adds to a numeric entry, returning the new value.
///
/// The entry is created at `increment_by` when it does not exist; the call
/// fails with `400 Bad Request` when the current value is not a number.
#[derive(Debug, Clone, PartialEq, Serialize, bon::Builder)]
#[builder(start_fn = new)]
#[serde(rename_all = "camelCase")]
pub struct IncrementEntry {
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
    /// Signed amount to add to the current value
    pub increment_by: i64,
}

impl ApiRequest for IncrementEntry {
    const METHOD: ApiMethod = ApiMethod::Post("application/json");
    type Output = Value;

    fn path(&self) -> String {
        format!(
            "{}/datastore/entries/entry/increment",
            super::base_path(self.universe_id)
        )
    }
}
