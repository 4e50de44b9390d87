//! Ordered data store entry handles.

use cairn_api::ordered::OrderedEntryInfo;
use cairn_common::http_client::HttpClient;
use smol_str::SmolStr;

use crate::error::Result;

use super::OrderedDataStore;

/// One fetched ordered data store entry.
///
/// Handles are immutable snapshots: mutating operations return the updated
/// entry as a new handle and leave this one unchanged.
#[derive(Debug, Clone)]
pub struct OrderedEntry<C> {
    store: OrderedDataStore<C>,
    path: SmolStr,
    id: SmolStr,
    value: i64,
}

impl<C> OrderedEntry<C> {
    pub(super) fn new(store: OrderedDataStore<C>, info: OrderedEntryInfo) -> Self {
        Self {
            store,
            path: info.path,
            id: info.id,
            value: info.value,
        }
    }

    /// The entry's id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The entry's value at fetch time.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// The service-reported resource path of this entry.
    pub fn resource_path(&self) -> &str {
        &self.path
    }
}

impl<C: HttpClient + Clone + Sync> OrderedEntry<C> {
    /// Replace the entry's value, returning the updated entry.
    pub async fn update(&self, value: i64) -> Result<Self> {
        self.store.update(self, value).await
    }

    /// Atomically add to the entry's value, returning the updated entry.
    pub async fn increment(&self, amount: i64) -> Result<Self> {
        self.store.increment(self, amount).await
    }

    /// Delete the entry.
    pub async fn delete(&self) -> Result<()> {
        self.store.delete(self).await
    }
}
