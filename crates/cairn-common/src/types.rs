//! Identifier newtypes shared across the API surface.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Identifier of a universe (an experience), the top-level container every
/// data store and messaging topic lives under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UniverseId(pub u64);

impl std::fmt::Display for UniverseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for UniverseId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Open Cloud API key, attached to every request as the `x-api-key` header.
///
/// `Debug` redacts the key so it cannot leak through logs or error output.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(SmolStr);

impl ApiKey {
    /// Wrap a raw API key string.
    pub fn new(key: impl Into<SmolStr>) -> Self {
        Self(key.into())
    }

    /// The raw key, for header construction.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(…)")
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}
