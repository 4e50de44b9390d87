//! Fetched entry snapshots and the read-modify-write flow built on them.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use cairn_api::datastores::list_entry_versions::ListEntryVersions;
use cairn_api::datastores::set_entry::SetEntry;
use cairn_api::datastores::{EntryMetadata, EntryVersionInfo};
use cairn_common::http_client::HttpClient;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use smol_str::SmolStr;

use crate::error::{Error, Result};
use crate::merge::merge;
use crate::pages::Pages;

use super::DataStore;

/// A fetched data store entry: the value and write-conditioning metadata
/// captured at fetch time.
///
/// Snapshots are immutable — writing produces a *new* snapshot and leaves
/// this one untouched, so a held reference always reflects what was actually
/// fetched. [`set`](Self::set) and [`update`](Self::update) take a sparse
/// patch, merge it over the held value (see [`merge`]), and resubmit the
/// full value together with the held attributes and user tags.
///
/// Attributes and tags are resubmitted *as captured*: if another writer
/// changed them between this fetch and the write, those changes are
/// overwritten. `update` guards the value the same race by asserting the
/// held version token; `set` performs no such check.
///
/// After a successful [`delete`](Self::delete), every snapshot descended
/// from the same fetch refuses further writes with [`Error::EntryDeleted`]
/// without touching the network.
#[derive(Debug, Clone)]
pub struct DataStoreEntry<C> {
    store: DataStore<C>,
    key: SmolStr,
    value: Value,
    attributes: Map<String, Value>,
    user_ids: Vec<u64>,
    version: SmolStr,
    created_time: DateTime<Utc>,
    updated_time: DateTime<Utc>,
    // Shared across every snapshot of one fetch lineage.
    tombstone: Arc<AtomicBool>,
}

impl<C: HttpClient + Clone + Sync> DataStoreEntry<C> {
    pub(super) fn from_fetch(
        store: DataStore<C>,
        key: SmolStr,
        value: Value,
        metadata: EntryMetadata,
    ) -> Self {
        Self {
            store,
            key,
            value,
            attributes: metadata.attributes,
            user_ids: metadata.user_ids,
            version: metadata.version,
            created_time: metadata.created_time,
            updated_time: metadata.updated_time,
            tombstone: Arc::new(AtomicBool::new(false)),
        }
    }

    pub(super) fn from_write(
        store: DataStore<C>,
        key: SmolStr,
        value: Value,
        attributes: Map<String, Value>,
        user_ids: Vec<u64>,
        info: EntryVersionInfo,
    ) -> Self {
        Self {
            store,
            key,
            value,
            attributes,
            user_ids,
            version: info.version,
            created_time: info.object_created_time.unwrap_or(info.created_time),
            updated_time: info.created_time,
            tombstone: Arc::new(AtomicBool::new(false)),
        }
    }

    /// The key identifying this entry.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The value captured at fetch time.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Consume the snapshot and take the value.
    pub fn into_value(self) -> Value {
        self.value
    }

    /// Attributes captured at fetch time.
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// User IDs tagged on the entry at fetch time.
    pub fn user_ids(&self) -> &[u64] {
        &self.user_ids
    }

    /// Version token of the captured revision.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// When the entry was created.
    pub fn created_time(&self) -> DateTime<Utc> {
        self.created_time
    }

    /// When the captured revision was written.
    pub fn updated_time(&self) -> DateTime<Utc> {
        self.updated_time
    }

    /// Whether this snapshot's lineage has been deleted.
    pub fn is_deleted(&self) -> bool {
        self.tombstone.load(Ordering::Acquire)
    }

    /// Merge a sparse patch over the held value and write the result back,
    /// returning the new snapshot.
    ///
    /// The write is unconditional: whatever revision the entry is at gets
    /// replaced. Use [`update`](Self::update) to fail instead when the entry
    /// moved since this fetch.
    pub async fn set(&self, patch: &Value) -> Result<Self> {
        self.write(patch, None).await
    }

    /// Merge a sparse patch over the held value and write the result back,
    /// conditioned on the entry still being at the captured version.
    ///
    /// When another writer got there first the service refuses with
    /// `412 Precondition Failed`
    /// ([`ApiError::PreconditionFailed`](crate::error::ApiError)); fetch
    /// again and retry from the fresh snapshot.
    pub async fn update(&self, patch: &Value) -> Result<Self> {
        self.write(patch, Some(self.version.clone())).await
    }

    async fn write(&self, patch: &Value, match_version: Option<SmolStr>) -> Result<Self> {
        if self.is_deleted() {
            return Err(Error::EntryDeleted {
                key: self.key.clone(),
            });
        }

        let merged = merge(&self.value, patch);
        let request = SetEntry::new()
            .universe_id(self.store.universe_id)
            .datastore_name(self.store.name.clone())
            .entry_key(self.key.clone())
            .scope(self.store.scope.clone())
            .maybe_match_version(match_version)
            .value(merged.clone())
            .attributes(self.attributes.clone())
            .user_ids(self.user_ids.clone())
            .build();

        let info: EntryVersionInfo = self.store.client.send(request).await?.parse()?;

        Ok(Self {
            store: self.store.clone(),
            key: self.key.clone(),
            value: merged,
            attributes: self.attributes.clone(),
            user_ids: self.user_ids.clone(),
            version: info.version,
            created_time: self.created_time,
            updated_time: info.created_time,
            tombstone: self.tombstone.clone(),
        })
    }

    /// Delete the entry and tombstone this snapshot's lineage.
    pub async fn delete(&self) -> Result<()> {
        self.store.delete(self.key.clone()).await?;
        self.tombstone.store(true, Ordering::Release);
        Ok(())
    }

    /// Fetch a specific version of this entry.
    pub async fn version_at(&self, version_id: impl Into<SmolStr>) -> Result<Self> {
        self.store.get_version(self.key.clone(), version_id).await
    }

    /// List this entry's versions.
    pub fn versions(&self) -> Pages<C, ListEntryVersions> {
        self.store.list_versions(self.key.clone())
    }
}
