//! Ordered data store endpoints.
//!
//! Ordered data stores hold `i64` values the service keeps sorted; routes
//! live under
//! `/ordered-data-stores/v1/universes/{universe}/orderedDataStores/{name}/scopes/{scope}`.
//! Entry-addressing endpoints take the entry's canonical resource path,
//! produced either from its components or from the `path` the service
//! returned with the entry.

use cairn_common::UniverseId;
use serde::Deserialize;
use smol_str::SmolStr;

use crate::path_segment;

pub mod create_entry;
pub mod delete_entry;
pub mod get_entry;
pub mod increment_entry;
pub mod list_entries;
pub mod update_entry;

/// Canonical path of an ordered data store's entry collection.
pub fn store_path(universe_id: UniverseId, name: &str, scope: &str) -> String {
    format!(
        "/ordered-data-stores/v1/universes/{}/orderedDataStores/{}/scopes/{}",
        universe_id,
        path_segment(name),
        path_segment(scope)
    )
}

/// Canonical path of a single ordered data store entry.
pub fn entry_path(universe_id: UniverseId, name: &str, scope: &str, id: &str) -> String {
    format!(
        "{}/entries/{}",
        store_path(universe_id, name, scope),
        path_segment(id)
    )
}

/// Canonical path of an entry from the service-returned resource path.
///
/// The service reports entry paths relative to the API version root
/// (`universes/…/entries/…`).
pub fn entry_path_from_resource(resource: &str) -> String {
    format!("/ordered-data-stores/v1/{}", resource)
}

/// One ordered data store entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderedEntryInfo {
    /// Resource path of the entry, relative to the API version root
    pub path: SmolStr,
    /// The entry's id
    pub id: SmolStr,
    /// The entry's value
    pub value: i64,
}
