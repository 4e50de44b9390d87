//! Standard data store service handles.

mod entry;

pub use entry::DataStoreEntry;

use cairn_api::datastores::delete_entry::DeleteEntry;
use cairn_api::datastores::get_entry::GetEntry;
use cairn_api::datastores::get_entry_version::GetEntryVersion;
use cairn_api::datastores::increment_entry::IncrementEntry;
use cairn_api::datastores::list_entry_keys::ListEntryKeys;
use cairn_api::datastores::list_entry_versions::ListEntryVersions;
use cairn_api::datastores::list_stores::ListDataStores;
use cairn_api::datastores::set_entry::SetEntry;
use cairn_api::datastores::{EntryMetadata, EntryVersionInfo};
use cairn_common::http_client::HttpClient;
use cairn_common::UniverseId;
use http::StatusCode;
use serde_json::{Map, Value};
use smol_str::SmolStr;

use crate::client::CloudClient;
use crate::error::Result;
use crate::pages::Pages;

/// The standard data stores of one universe.
#[derive(Debug, Clone)]
pub struct DataStores<C> {
    client: CloudClient<C>,
    universe_id: UniverseId,
}

impl<C: HttpClient + Clone + Sync> DataStores<C> {
    pub(crate) fn new(client: CloudClient<C>, universe_id: UniverseId) -> Self {
        Self {
            client,
            universe_id,
        }
    }

    /// The universe these data stores belong to.
    pub fn universe_id(&self) -> UniverseId {
        self.universe_id
    }

    /// A data store in the default `global` scope.
    pub fn store(&self, name: impl Into<SmolStr>) -> DataStore<C> {
        self.store_in_scope(name, "global")
    }

    /// A data store in a specific scope.
    pub fn store_in_scope(
        &self,
        name: impl Into<SmolStr>,
        scope: impl Into<SmolStr>,
    ) -> DataStore<C> {
        DataStore {
            client: self.client.clone(),
            universe_id: self.universe_id,
            name: name.into(),
            scope: scope.into(),
        }
    }

    /// List the universe's data stores.
    ///
    /// For prefix filtering or page sizing, build a
    /// [`ListDataStores`] request yourself and walk it with
    /// [`Pages::new`].
    pub fn list(&self) -> Pages<C, ListDataStores> {
        Pages::new(
            self.client.clone(),
            ListDataStores::new().universe_id(self.universe_id).build(),
        )
    }
}

/// Options for [`DataStore::set`].
#[derive(Debug, Clone, Default)]
pub struct SetOptions {
    /// Attributes for the new version; existing attributes are replaced
    /// (omitting this clears them)
    pub attributes: Map<String, Value>,
    /// User IDs tagged on the new version; existing tags are replaced
    /// (omitting this clears them)
    pub user_ids: Vec<u64>,
    /// Only write if the entry is still at this version
    pub match_version: Option<SmolStr>,
    /// Only write if the entry does not exist yet
    pub exclusive_create: Option<bool>,
}

/// One standard data store, identified by universe, name, and scope.
#[derive(Debug, Clone)]
pub struct DataStore<C> {
    pub(crate) client: CloudClient<C>,
    pub(crate) universe_id: UniverseId,
    pub(crate) name: SmolStr,
    pub(crate) scope: SmolStr,
}

impl<C: HttpClient + Clone + Sync> DataStore<C> {
    /// The name of this data store.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The scope of this data store.
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Fetch an entry's current value and metadata.
    ///
    /// Returns `Ok(None)` when the key is tombstoned (the service answers
    /// `204 No Content` for deleted entries).
    pub async fn get(&self, key: impl Into<SmolStr>) -> Result<Option<DataStoreEntry<C>>> {
        let key = key.into();
        let request = GetEntry::new()
            .universe_id(self.universe_id)
            .datastore_name(self.name.clone())
            .entry_key(key.clone())
            .scope(self.scope.clone())
            .build();

        let response = self.client.send(request).await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let value: Value = response.parse()?;
        let metadata = EntryMetadata::from_headers(response.headers())?;
        Ok(Some(DataStoreEntry::from_fetch(
            self.clone(),
            key,
            value,
            metadata,
        )))
    }

    /// Write an entry's full value, creating a new version.
    ///
    /// This replaces the stored value outright; to change only some fields
    /// of an existing entry, fetch it and use
    /// [`DataStoreEntry::set`]/[`DataStoreEntry::update`], which merge for
    /// you and resubmit the held attributes and user tags.
    pub async fn set(
        &self,
        key: impl Into<SmolStr>,
        value: Value,
        options: SetOptions,
    ) -> Result<DataStoreEntry<C>> {
        let key = key.into();
        let request = SetEntry::new()
            .universe_id(self.universe_id)
            .datastore_name(self.name.clone())
            .entry_key(key.clone())
            .scope(self.scope.clone())
            .maybe_match_version(options.match_version)
            .maybe_exclusive_create(options.exclusive_create)
            .value(value)
            .attributes(options.attributes)
            .user_ids(options.user_ids)
            .build();

        let attributes = request.attributes.clone();
        let user_ids = request.user_ids.clone();
        let value = request.value.clone();

        let info: EntryVersionInfo = self.client.send(request).await?.parse()?;
        Ok(DataStoreEntry::from_write(
            self.clone(),
            key,
            value,
            attributes,
            user_ids,
            info,
        ))
    }

    /// Mark an entry as deleted by writing a tombstone version.
    ///
    /// Tombstoned entries are purged permanently after thirty days.
    pub async fn delete(&self, key: impl Into<SmolStr>) -> Result<()> {
        let request = DeleteEntry::new()
            .universe_id(self.universe_id)
            .datastore_name(self.name.clone())
            .entry_key(key.into())
            .scope(self.scope.clone())
            .build();
        self.client.send(request).await?.parse()?;
        Ok(())
    }

    /// Atomically add to a numeric entry, returning the new value.
    pub async fn increment(&self, key: impl Into<SmolStr>, amount: i64) -> Result<Value> {
        let request = IncrementEntry::new()
            .universe_id(self.universe_id)
            .datastore_name(self.name.clone())
            .entry_key(key.into())
            .scope(self.scope.clone())
            .increment_by(amount)
            .build();
        Ok(self.client.send(request).await?.parse()?)
    }

    /// Fetch the value and metadata of a specific version of an entry.
    pub async fn get_version(
        &self,
        key: impl Into<SmolStr>,
        version_id: impl Into<SmolStr>,
    ) -> Result<DataStoreEntry<C>> {
        let key = key.into();
        let request = GetEntryVersion::new()
            .universe_id(self.universe_id)
            .datastore_name(self.name.clone())
            .entry_key(key.clone())
            .scope(self.scope.clone())
            .version_id(version_id)
            .build();

        let response = self.client.send(request).await?;
        let value: Value = response.parse()?;
        let metadata = EntryMetadata::from_headers(response.headers())?;
        Ok(DataStoreEntry::from_fetch(
            self.clone(),
            key,
            value,
            metadata,
        ))
    }

    /// List the entry keys in this data store.
    pub fn list_keys(&self) -> Pages<C, ListEntryKeys> {
        Pages::new(
            self.client.clone(),
            ListEntryKeys::new()
                .universe_id(self.universe_id)
                .datastore_name(self.name.clone())
                .scope(self.scope.clone())
                .build(),
        )
    }

    /// List the versions of an entry, oldest window first.
    pub fn list_versions(&self, key: impl Into<SmolStr>) -> Pages<C, ListEntryVersions> {
        Pages::new(
            self.client.clone(),
            ListEntryVersions::new()
                .universe_id(self.universe_id)
                .datastore_name(self.name.clone())
                .entry_key(key)
                .scope(self.scope.clone())
                .build(),
        )
    }
}
