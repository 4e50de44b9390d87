use cairn_common::{ApiMethod, ApiRequest, PagedRequest, UniverseId};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::DataStoreInfo;

/// Lists the standard data stores in a universe.
#[derive(Debug, Clone, PartialEq, Serialize, bon::Builder)]
#[builder(start_fn = new)]
#[serde(rename_all = "camelCase")]
pub struct ListDataStores {
    #[serde(skip)]
    pub universe_id: UniverseId,
    /// Continuation cursor from a previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub cursor: Option<SmolStr>,
    /// Maximum number of stores per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Only return stores whose name starts with this prefix
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub prefix: Option<SmolStr>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDataStoresOutput {
    /// The data stores in the universe
    pub datastores: Vec<DataStoreInfo>,
    /// Cursor for the next page; absent or empty when exhausted
    #[serde(default)]
    pub next_page_cursor: Option<SmolStr>,
}

impl ApiRequest for ListDataStores {
    const METHOD: ApiMethod = ApiMethod::Get;
    type Output = ListDataStoresOutput;

    fn path(&self) -> String {
        super::base_path(self.universe_id)
    }
}

impl PagedRequest for ListDataStores {
    type Item = DataStoreInfo;

    fn set_cursor(&mut self, cursor: SmolStr) {
        self.cursor = Some(cursor);
    }

    fn split(output: Self::Output) -> (Vec<Self::Item>, Option<SmolStr>) {
        (output.datastores, output.next_page_cursor)
    }
}
