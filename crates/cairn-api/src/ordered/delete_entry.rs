use cairn_common::{ApiMethod, ApiRequest, DecodeError, UniverseId};
use serde::Serialize;

/// Deletes an ordered data store entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteOrderedEntry {
    /// Canonical resource path of the entry
    #[serde(skip)]
    pub entry_path: String,
}

impl DeleteOrderedEntry {
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

impl ApiRequest for DeleteOrderedEntry {
    const METHOD: ApiMethod = ApiMethod::Delete;
    type Output = ();

    fn path(&self) -> String {
        self.entry_path.clone()
    }

    fn decode_output(_buffer: &[u8]) -> Result<Self::Output, DecodeError> {
        Ok(())
    }
}
