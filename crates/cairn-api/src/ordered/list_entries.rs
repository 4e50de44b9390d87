use cairn_common::{ApiMethod, ApiRequest, PagedRequest, UniverseId};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::OrderedEntryInfo;

/// Lists the entries of an ordered data store in value order.
#[derive(Debug, Clone, PartialEq, Serialize, bon::Builder)]
#[builder(start_fn = new)]
pub struct ListOrderedEntries {
    #[serde(skip)]
    pub universe_id: UniverseId,
    /// Name of the ordered data store
    #[serde(skip)]
    #[builder(into)]
    pub name: SmolStr,
    /// Scope the entries live in
    #[serde(skip)]
    #[builder(into)]
    pub scope: SmolStr,
    /// Maximum entries per page; the service caps this at 100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_page_size: Option<u32>,
    /// Continuation token from a previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub page_token: Option<SmolStr>,
    /// Enumeration direction; ascending unless set to `desc`
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub order_by: Option<SmolStr>,
    /// Value range filter, e.g. `entry >= 10 && entry <= 50`
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub filter: Option<SmolStr>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListOrderedEntriesOutput {
    /// The entries in the requested order
    #[serde(default)]
    pub entries: Vec<OrderedEntryInfo>,
    /// Token for the next page; absent when there are no further pages
    #[serde(default)]
    pub next_page_token: Option<SmolStr>,
}

impl ApiRequest for ListOrderedEntries {
    const METHOD: ApiMethod = ApiMethod::Get;
    type Output = ListOrderedEntriesOutput;

    fn path(&self) -> String {
        format!(
            "{}/entries",
            super::store_path(self.universe_id, &self.name, &self.scope)
        )
    }
}

impl PagedRequest for ListOrderedEntries {
    type Item = OrderedEntryInfo;

    fn set_cursor(&mut self, cursor: SmolStr) {
        self.page_token = Some(cursor);
    }

    fn split(output: Self::Output) -> (Vec<Self::Item>, Option<SmolStr>) {
        (output.entries, output.next_page_token)
    }
}
