use cairn_common::{ApiMethod, ApiRequest, EncodeError, UniverseId};
use serde::Serialize;

use super::OrderedEntryInfo;

#[derive(Serialize)]
struct AmountBody {
    amount: i64,
}

/// Atomically adds to an ordered data store entry, returning the updated
/// entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncrementOrderedEntry {
    /// Canonical resource path of the entry
    #[serde(skip)]
    pub entry_path: String,
    /// Signed amount to add to the current value
    #[serde(skip)]
    pub amount: i64,
}

impl IncrementOrderedEntry {
    /// Address an entry by its components.
    pub fn new(universe_id: UniverseId, name: &str, scope: &str, id: &str, amount: i64) -> Self {
        Self {
            entry_path: super::entry_path(universe_id, name, scope, id),
            amount,
        }
    }

    /// Address an entry by an already-resolved canonical path.
    pub fn at_path(entry_path: String, amount: i64) -> Self {
        Self { entry_path, amount }
    }
}

impl ApiRequest for IncrementOrderedEntry {
    const METHOD: ApiMethod = ApiMethod::Post("application/json");
    type Output = OrderedEntryInfo;

    fn path(&self) -> String {
        format!("{}:increment", self.entry_path)
    }

    fn encode_body(&self) -> Result<Vec<u8>, EncodeError> {
        Ok(serde_json::to_vec(&AmountBody {
            amount: self.amount,
        })?)
    }
}
