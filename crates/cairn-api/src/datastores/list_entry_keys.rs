use cairn_common::{ApiMethod, ApiRequest, PagedRequest, UniverseId};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::EntryKey;

/// Lists the entry keys in a standard data store.
#[derive(Debug, Clone, PartialEq, Serialize, bon::Builder)]
#[builder(start_fn = new)]
#[serde(rename_all = "camelCase")]
pub struct ListEntryKeys {
    #[serde(skip)]
    pub universe_id: UniverseId,
    /// Name of the data store
    #[builder(into)]
    pub datastore_name: SmolStr,
    /// Scope to list keys from
    #[builder(into, default = crate::datastores::default_scope())]
    pub scope: SmolStr,
    /// List keys across every scope; the listed keys carry their scope
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_scopes: Option<bool>,
    /// Only return keys starting with this prefix
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub prefix: Option<SmolStr>,
    /// Continuation cursor from a previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub cursor: Option<SmolStr>,
    /// Maximum number of keys per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEntryKeysOutput {
    /// The keys in the data store
    pub keys: Vec<EntryKey>,
    /// Cursor for the next page; absent or empty when exhausted
    #[serde(default)]
    pub next_page_cursor: Option<SmolStr>,
}

impl ApiRequest for ListEntryKeys {
    const METHOD: ApiMethod = ApiMethod::Get;
    type Output = ListEntryKeysOutput;

    fn path(&self) -> String {
        format!("{}/datastore/entries", super::base_path(self.universe_id))
    }
}

impl PagedRequest for ListEntryKeys {
    type Item = EntryKey;

    fn set_cursor(&mut self, cursor: SmolStr) {
        self.cursor = Some(cursor);
    }

    fn split(output: Self::Output) -> (Vec<Self::Item>, Option<SmolStr>) {
        (output.keys, output.next_page_cursor)
    }
}
