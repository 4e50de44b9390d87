use cairn_common::{ApiMethod, ApiRequest, DecodeError, UniverseId};
use serde::Serialize;
use smol_str::SmolStr;

/// Marks an entry as deleted by writing a tombstone version.
///
/// Tombstoned entries are purged permanently after thirty days.
#[derive(Debug, Clone, PartialEq, Serialize, bon::Builder)]
#[builder(start_fn = new)]
#[serde(rename_all = "camelCase")]
pub struct DeleteEntry {
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

impl ApiRequest for DeleteEntry {
    const METHOD: ApiMethod = ApiMethod::Delete;
    type Output = ();

    fn path(&self) -> String {
        format!(
            "{}/datastore/entries/entry",
            super::base_path(self.universe_id)
        )
    }

    fn decode_output(_buffer: &[u8]) -> Result<Self::Output, DecodeError> {
        Ok(())
    }
}
