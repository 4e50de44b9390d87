//! Ordered data store service handles.

mod entry;

pub use entry::OrderedEntry;

use cairn_api::ordered::create_entry::CreateOrderedEntry;
use cairn_api::ordered::delete_entry::DeleteOrderedEntry;
use cairn_api::ordered::get_entry::GetOrderedEntry;
use cairn_api::ordered::increment_entry::IncrementOrderedEntry;
use cairn_api::ordered::list_entries::ListOrderedEntries;
use cairn_api::ordered::update_entry::UpdateOrderedEntry;
use cairn_api::ordered::{OrderedEntryInfo, entry_path, entry_path_from_resource};
use cairn_common::UniverseId;
use cairn_common::http_client::HttpClient;
use smol_str::SmolStr;

use crate::client::CloudClient;
use crate::error::Result;
use crate::pages::Pages;

/// Addresses an ordered data store entry: either a raw id, or an entry
/// handle whose service-reported resource path is reused directly.
///
/// Anything that needs an entry accepts `impl Into<EntrySelector>`, so plain
/// `&str` ids and `&OrderedEntry` handles both work.
#[derive(Debug, Clone, Copy)]
pub enum EntrySelector<'a> {
    /// An entry id, resolved against the store's own path
    Id(&'a str),
    /// The canonical resource path reported by the service with an entry
    Resource(&'a str),
}

impl<'a> EntrySelector<'a> {
    /// Resolve to the canonical request path for an entry of `store`.
    fn resolve<C>(&self, store: &OrderedDataStore<C>) -> String {
        match self {
            Self::Id(id) => entry_path(store.universe_id, &store.name, &store.scope, id),
            Self::Resource(resource) => entry_path_from_resource(resource),
        }
    }
}

impl<'a> From<&'a str> for EntrySelector<'a> {
    fn from(id: &'a str) -> Self {
        Self::Id(id)
    }
}

impl<'a, C> From<&'a OrderedEntry<C>> for EntrySelector<'a> {
    fn from(entry: &'a OrderedEntry<C>) -> Self {
        Self::Resource(entry.resource_path())
    }
}

/// One ordered data store: a sorted collection of `i64` values, identified
/// by universe, name, and scope.
#[derive(Debug, Clone)]
pub struct OrderedDataStore<C> {
    pub(crate) client: CloudClient<C>,
    pub(crate) universe_id: UniverseId,
    pub(crate) name: SmolStr,
    pub(crate) scope: SmolStr,
}

impl<C: HttpClient + Clone + Sync> OrderedDataStore<C> {
    pub(crate) fn new(
        client: CloudClient<C>,
        universe_id: UniverseId,
        name: SmolStr,
        scope: SmolStr,
    ) -> Self {
        Self {
            client,
            universe_id,
            name,
            scope,
        }
    }

    /// The name of this ordered data store.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The scope of this ordered data store.
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// List entries in ascending value order.
    ///
    /// For descending order use
    /// [`entries_descending`](Self::entries_descending); for value filters
    /// or page sizing, build a [`ListOrderedEntries`] request and walk it
    /// with [`Pages::new`].
    pub fn entries(&self) -> Pages<C, ListOrderedEntries> {
        let request = ListOrderedEntries::new()
            .universe_id(self.universe_id)
            .name(self.name.clone())
            .scope(self.scope.clone())
            .build();
        Pages::new(self.client.clone(), request)
    }

    /// List entries in descending value order (leaderboard order).
    pub fn entries_descending(&self) -> Pages<C, ListOrderedEntries> {
        let request = ListOrderedEntries::new()
            .universe_id(self.universe_id)
            .name(self.name.clone())
            .scope(self.scope.clone())
            .order_by("desc")
            .build();
        Pages::new(self.client.clone(), request)
    }

    /// Create a new entry.
    ///
    /// Fails with `409 Conflict` when the id already exists.
    pub async fn create(&self, id: impl Into<SmolStr>, value: i64) -> Result<OrderedEntry<C>> {
        let request = CreateOrderedEntry::new()
            .universe_id(self.universe_id)
            .name(self.name.clone())
            .scope(self.scope.clone())
            .id(id)
            .value(value)
            .build();
        let info: OrderedEntryInfo = self.client.send(request).await?.parse()?;
        Ok(OrderedEntry::new(self.clone(), info))
    }

    /// Fetch an entry.
    pub async fn get<'a>(&self, entry: impl Into<EntrySelector<'a>>) -> Result<OrderedEntry<C>> {
        let request = GetOrderedEntry::at_path(entry.into().resolve(self));
        let info: OrderedEntryInfo = self.client.send(request).await?.parse()?;
        Ok(OrderedEntry::new(self.clone(), info))
    }

    /// Replace an entry's value, returning the updated entry.
    pub async fn update<'a>(
        &self,
        entry: impl Into<EntrySelector<'a>>,
        value: i64,
    ) -> Result<OrderedEntry<C>> {
        let request = UpdateOrderedEntry::new()
            .entry_path(entry.into().resolve(self))
            .value(value)
            .build();
        let info: OrderedEntryInfo = self.client.send(request).await?.parse()?;
        Ok(OrderedEntry::new(self.clone(), info))
    }

    /// Atomically add to an entry's value, returning the updated entry.
    ///
    /// `amount` may be negative to decrement.
    pub async fn increment<'a>(
        &self,
        entry: impl Into<EntrySelector<'a>>,
        amount: i64,
    ) -> Result<OrderedEntry<C>> {
        let request = IncrementOrderedEntry::at_path(entry.into().resolve(self), amount);
        let info: OrderedEntryInfo = self.client.send(request).await?.parse()?;
        Ok(OrderedEntry::new(self.clone(), info))
    }

    /// Delete an entry.
    pub async fn delete<'a>(&self, entry: impl Into<EntrySelector<'a>>) -> Result<()> {
        let request = DeleteOrderedEntry::at_path(entry.into().resolve(self));
        self.client.send(request).await?.parse()?;
        Ok(())
    }
}
