use cairn_common::{ApiMethod, ApiRequest, EncodeError};
use serde::Serialize;

use super::OrderedEntryInfo;

#[derive(Serialize)]
struct ValueBody {
    value: i64,
}

/// Replaces the value of an ordered data store entry.
///
/// Fails with `404 Not Found` for a missing entry unless
/// [`allow_missing`](Self::allow_missing) is set, in which case the entry is
/// created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, bon::Builder)]
#[builder(start_fn = new)]
pub struct UpdateOrderedEntry {
    /// Canonical resource path of the entry
    #[serde(skip)]
    #[builder(into)]
    pub entry_path: String,
    /// The replacement value
    #[serde(skip)]
    pub value: i64,
    /// Create the entry when it does not exist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_missing: Option<bool>,
}

impl ApiRequest for UpdateOrderedEntry {
    const METHOD: ApiMethod = ApiMethod::Patch("application/json");
    type Output = OrderedEntryInfo;

    fn path(&self) -> String {
        self.entry_path.clone()
    }

    fn encode_body(&self) -> Result<Vec<u8>, EncodeError> {
        Ok(serde_json::to_vec(&ValueBody { value: self.value })?)
    }
}
