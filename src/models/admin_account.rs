use serde::Deserialize;
use serde_json::Value as JsonValue;

/// Raw admin-account record as it sits in the store. The collection has
/// no enforced schema, so every field is optional and defaulting happens
/// in the projection, not here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminAccountRecord {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub business_name: Option<String>,
    pub company_name: Option<String>,
    pub subscription: Option<Subscription>,
    // Only presence matters for the activity indicator; records carry
    // these in more than one format, so they stay untyped.
    pub created_at: Option<JsonValue>,
    pub updated_at: Option<JsonValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Subscription {
    pub status: Option<String>,
}
