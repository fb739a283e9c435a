use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// The acting user as supplied by the caller at write time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActingUser {
    pub id: Option<String>,
    pub uid: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
}

/// Denormalized snapshot of the actor persisted with each entry. This is
/// not a live reference: later changes to the user never rewrite history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedBy {
    pub user_id: Option<String>,
    pub name: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLogEntry {
    pub business_id: String,
    pub branch_id: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: String,
    pub activity: String,
    pub ip_address: Option<String>,
    pub updated_by: UpdatedBy,
    pub entity: Option<JsonValue>,
}
