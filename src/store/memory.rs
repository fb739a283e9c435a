use crate::error::{Error, Result};
use crate::store::{push_id, segments, Store};
use serde_json::{Map, Value as JsonValue};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// In-memory implementation of [`Store`] backed by a nested JSON tree.
/// Used by the test suites in place of the real database; semantics
/// match the REST store, including the absent-vs-empty distinction.
#[derive(Default)]
pub struct MemoryStore {
    root: RwLock<JsonValue>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            root: RwLock::new(JsonValue::Null),
        }
    }

    /// Read the raw value at `path`, `None` when the path is absent.
    pub async fn read(&self, path: &str) -> Option<JsonValue> {
        let root = self.root.read().await;
        let mut node = &*root;
        for segment in segments(path) {
            node = node.get(segment)?;
        }
        Some(node.clone())
    }

    async fn write_at(&self, path: &str, value: &JsonValue) {
        let mut root = self.root.write().await;
        let mut node = &mut *root;
        for segment in segments(path) {
            if !node.is_object() {
                *node = JsonValue::Object(Map::new());
            }
            node = node
                .as_object_mut()
                .expect("node was just made an object")
                .entry(segment.to_string())
                .or_insert(JsonValue::Null);
        }
        *node = value.clone();
    }
}

#[async_trait::async_trait]
impl Store for MemoryStore {
    async fn read_children(&self, path: &str) -> Result<Option<BTreeMap<String, JsonValue>>> {
        match self.read(path).await {
            None | Some(JsonValue::Null) => Ok(None),
            Some(JsonValue::Object(map)) => Ok(Some(map.into_iter().collect())),
            Some(_) => Err(Error::Store(format!("expected a collection at {}", path))),
        }
    }

    async fn push(&self, path: &str, value: &JsonValue) -> Result<String> {
        let key = push_id::next_push_id();
        self.write_at(&format!("{}/{}", path.trim_matches('/'), key), value)
            .await;
        Ok(key)
    }

    async fn set(&self, path: &str, value: &JsonValue) -> Result<()> {
        self.write_at(path, value).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn absent_path_is_distinct_from_empty_collection() {
        let store = MemoryStore::new();
        assert!(store.read_children("admins").await.unwrap().is_none());

        store.set("admins", &json!({})).await.unwrap();
        let children = store.read_children("admins").await.unwrap();
        assert_eq!(children, Some(BTreeMap::new()));
    }

    #[tokio::test]
    async fn push_creates_uniquely_keyed_children() {
        let store = MemoryStore::new();
        let first = store.push("logs/biz1", &json!({"n": 1})).await.unwrap();
        let second = store.push("logs/biz1", &json!({"n": 2})).await.unwrap();
        assert_ne!(first, second);

        let children = store.read_children("logs/biz1").await.unwrap().unwrap();
        assert_eq!(children.len(), 2);
        assert_eq!(children[&first], json!({"n": 1}));
        assert_eq!(children[&second], json!({"n": 2}));
    }
}
