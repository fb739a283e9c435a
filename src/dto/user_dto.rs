use serde::{Deserialize, Serialize};

/// One display-ready row of the super-admin user directory. Every field
/// is populated; absent source data is replaced by sentinels upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub company: String,
    pub status: String,
    pub last_active: String,
    pub initials: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<ProjectedUser>,
}
