use cairn_common::{ApiMethod, ApiRequest, EncodeError, UniverseId};
use serde::Serialize;
use smol_str::SmolStr;

use super::OrderedEntryInfo;

#[derive(Serialize)]
struct ValueBody {
    value: i64,
}

/// Creates a new entry in an ordered data store.
///
/// Fails with `409 Conflict` when the id already exists.
#[derive(Debug, Clone, PartialEq, Serialize, bon::Builder)]
#[builder(start_fn = new)]
pub struct CreateOrderedEntry {
    #[serde(skip)]
    pub universe_id: UniverseId,
    /// Name of the ordered data store
    #[serde(skip)]
    #[builder(into)]
    pub name: SmolStr,
    /// Scope to create the entry in
    #[serde(skip)]
    #[builder(into)]
    pub scope: SmolStr,
    /// Id of the new entry
    #[builder(into)]
    pub id: SmolStr,
    /// Initial value
    #[serde(skip)]
    pub value: i64,
}

impl ApiRequest for CreateOrderedEntry {
    const METHOD: ApiMethod = ApiMethod::Post("application/json");
    type Output = OrderedEntryInfo;

    fn path(&self) -> String {
        format!(
            "{}/entries",
            super::store_path(self.universe_id, &self.name, &self.scope)
        )
    }

    fn encode_body(&self) -> Result<Vec<u8>, EncodeError> {
        Ok(serde_json::to_vec(&ValueBody { value: self.value })?)
    }
}
