//! # Cairn
//!
//! Typed Rust client for the Roblox Open Cloud key-value and messaging APIs:
//! standard data stores, ordered data stores (leaderboards), and cross-server
//! messaging.
//!
//! ## Goals
//!
//! - Typed requests and results for every endpoint, not stringly-typed JSON
//! - Safe read-modify-write: immutable entry snapshots, sparse-patch merging,
//!   and version-conditioned writes for race-free updates
//! - Batteries included, but replaceable — the whole client is generic over
//!   an [`HttpClient`](cairn_common::http_client::HttpClient) transport
//! - Use as much or as little as you need: ergonomic service handles on top,
//!   raw [`api`] requests + [`CloudClient::send`] underneath
//!
//! ## Example
//!
//! Fetch a player record, bump one field, and write it back only if nobody
//! else got there first:
//!
//! ```no_run
//! use cairn::{CloudClient, UniverseId};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), cairn::Error> {
//!     let client = CloudClient::new(std::env::var("API_KEY").unwrap());
//!     let stores = client.data_stores(UniverseId(3310576216));
//!     let players = stores.store("players");
//!
//!     if let Some(entry) = players.get("player_42").await? {
//!         // Only `coins` changes; every other field is resubmitted as held.
//!         let updated = entry.update(&json!({"coins": 120})).await?;
//!         println!(
//!             "{} is now at version {}",
//!             updated.key(),
//!             updated.version()
//!         );
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod datastore;
pub mod error;
pub mod merge;
pub mod messaging;
pub mod ordered;
pub mod pages;

/// Typed endpoint definitions, for use with [`CloudClient::send`].
pub use cairn_api as api;
pub use cairn_common as common;

pub use client::{CloudClient, DEFAULT_BASE_URL};
pub use common::{ApiError, ApiKey, ClientError, UniverseId};
pub use datastore::{DataStore, DataStoreEntry, DataStores, SetOptions};
pub use error::{Error, Result};
pub use merge::merge;
pub use messaging::Messaging;
pub use ordered::{EntrySelector, OrderedDataStore, OrderedEntry};
pub use pages::Pages;
