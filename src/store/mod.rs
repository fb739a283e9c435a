pub mod firebase;
pub mod memory;
pub mod push_id;

use crate::error::Result;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// Hierarchical document store addressed by slash-separated paths.
///
/// The backend only needs three capabilities from its store, so they are
/// the whole trait. Implementations are injected into the services, which
/// lets tests swap in [`memory::MemoryStore`].
#[async_trait::async_trait]
pub trait Store: Send + Sync {
    /// Read all children under `path`, keyed by child id in the store's
    /// native enumeration order. Returns `None` when the path does not
    /// exist at all, as opposed to `Some` of an empty map.
    async fn read_children(&self, path: &str) -> Result<Option<BTreeMap<String, JsonValue>>>;

    /// Append a child under `path` with a generated key that is unique
    /// within the partition and time-ordered. Returns the new key.
    async fn push(&self, path: &str, value: &JsonValue) -> Result<String>;

    /// Write a full value at `path`, creating intermediate nodes.
    async fn set(&self, path: &str, value: &JsonValue) -> Result<()>;
}

pub(crate) fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}
