use cairn_common::{ApiMethod, ApiRequest, PagedRequest, UniverseId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::EntryVersionInfo;

/// Sort order for version listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SortOrder {
    /// Earlier versions first
    Ascending,
    /// Later versions first
    Descending,
}

/// Lists the versions of an entry, newest window first by default.
#[derive(Debug, Clone, PartialEq, Serialize, bon::Builder)]
#[builder(start_fn = new)]
#[serde(rename_all = "camelCase")]
pub struct ListEntryVersions {
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
    /// Continuation cursor from a previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub cursor: Option<SmolStr>,
    /// Exclude versions written before this time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    /// Exclude versions written after this time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    /// Enumeration direction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
    /// Maximum number of versions per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEntryVersionsOutput {
    /// The versions of the entry
    pub versions: Vec<EntryVersionInfo>,
    /// Cursor for the next page; absent or empty when exhausted
    #[serde(default)]
    pub next_page_cursor: Option<SmolStr>,
}

impl ApiRequest for ListEntryVersions {
    const METHOD: ApiMethod = ApiMethod::Get;
    type Output = ListEntryVersionsOutput;

    fn path(&self) -> String {
        format!(
            "{}/datastore/entries/entry/versions",
            super::base_path(self.universe_id)
        )
    }
}

impl PagedRequest for ListEntryVersions {
    type Item = EntryVersionInfo;

    fn set_cursor(&mut self, cursor: SmolStr) {
        self.cursor = Some(cursor);
    }

    fn split(output: Self::Output) -> (Vec<Self::Item>, Option<SmolStr>) {
        (output.versions, output.next_page_cursor)
    }
}
