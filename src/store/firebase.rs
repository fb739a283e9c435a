use crate::error::{Error, Result};
use crate::store::{push_id, Store};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::time::Duration;

/// REST client for a Firebase-style realtime database. Every node is
/// addressable as `{base_url}/{path}.json`; reading an absent node
/// returns JSON `null`.
#[derive(Clone)]
pub struct FirebaseStore {
    client: reqwest::Client,
    base_url: String,
}

impl FirebaseStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("reqwest client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn node_url(&self, path: &str) -> String {
        format!("{}/{}.json", self.base_url, path.trim_matches('/'))
    }
}

#[async_trait::async_trait]
impl Store for FirebaseStore {
    async fn read_children(&self, path: &str) -> Result<Option<BTreeMap<String, JsonValue>>> {
        let response = self.client.get(self.node_url(path)).send().await?;
        if !response.status().is_success() {
            return Err(Error::Store(format!(
                "read of {} failed with status {}",
                path,
                response.status()
            )));
        }

        match response.json::<JsonValue>().await? {
            JsonValue::Null => Ok(None),
            JsonValue::Object(map) => Ok(Some(map.into_iter().collect())),
            other => Err(Error::Store(format!(
                "expected a collection at {}, found {}",
                path,
                type_name(&other)
            ))),
        }
    }

    async fn push(&self, path: &str, value: &JsonValue) -> Result<String> {
        let key = push_id::next_push_id();
        self.set(&format!("{}/{}", path.trim_matches('/'), key), value)
            .await?;
        Ok(key)
    }

    async fn set(&self, path: &str, value: &JsonValue) -> Result<()> {
        let response = self
            .client
            .put(self.node_url(path))
            .json(value)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Error::Store(format!(
                "write to {} failed with status {}",
                path,
                response.status()
            )));
        }
        Ok(())
    }
}

fn type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
