use cairn_common::{ApiMethod, ApiRequest, UniverseId};
use serde::Serialize;

use super::OrderedEntryInfo;

/// Reads a single ordered data store entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetOrderedEntry {
    /// Canonical resource path of the entry
    #[serde(skip)]
    pub entry_path: String,
}

impl GetOrderedEntry {
    /// Address an entry by its components.
    pub fn new(universe_id: UniverseId, name: &str, scope: &str, id: &str) -> Self {
        Self {
            entry_path: super::entry_path(universe_id, name, scope, id),
        }
    }

    /// Address an entry by an already-resolved canonical path.
    pub fn at_path(entry_path: String) -> Self {
        Self { entry_path }
    }
}

impl ApiRequest for GetOrderedEntry {
    const METHOD: ApiMethod = ApiMethod::Get;
    type Output = OrderedEntryInfo;

    fn path(&self) -> String {
        self.entry_path.clone()
    }
}
