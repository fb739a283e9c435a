use crate::dto::user_dto::ProjectedUser;
use crate::error::{Error, Result};
use crate::models::admin_account::AdminAccountRecord;
use crate::store::Store;
use std::sync::Arc;

const ADMINS_PATH: &str = "admins";

#[derive(Clone)]
pub struct UserDirectoryService {
    store: Arc<dyn Store>,
}

impl UserDirectoryService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Project the whole admin-accounts collection into display-ready
    /// rows, one per record, in the store's native enumeration order.
    /// A namespace with no records at all signals not-found rather than
    /// returning an empty list.
    pub async fn list_platform_users(&self) -> Result<Vec<ProjectedUser>> {
        let records = match self.store.read_children(ADMINS_PATH).await? {
            Some(records) if !records.is_empty() => records,
            _ => return Err(Error::NotFound("No users found".to_string())),
        };

        let mut users = Vec::with_capacity(records.len());
        for (id, raw) in records {
            let record: AdminAccountRecord = serde_json::from_value(raw)
                .map_err(|e| Error::Store(format!("malformed admin record {}: {}", id, e)))?;
            users.push(project(id, record));
        }
        Ok(users)
    }
}

fn project(id: String, record: AdminAccountRecord) -> ProjectedUser {
    let raw_name = record.name.clone().unwrap_or_default();
    let has_timestamp = record.created_at.is_some() || record.updated_at.is_some();

    ProjectedUser {
        id,
        initials: initials(&raw_name),
        name: non_empty_or(record.name, "N/A"),
        email: non_empty_or(record.email, "N/A"),
        phone: non_empty_or(record.phone, "N/A"),
        role: role_label(record.role.as_deref().unwrap_or_default()),
        company: display_company(record.business_name, record.company_name),
        status: status_bucket(
            record
                .subscription
                .as_ref()
                .and_then(|s| s.status.as_deref()),
        )
        .to_string(),
        // The stored timestamps are too coarse for a real relative-time
        // label, so presence collapses to a fixed placeholder.
        last_active: if has_timestamp { "Recently" } else { "Never" }.to_string(),
    }
}

/// Raw role tags map to display labels; unknown tags pass through
/// unchanged, including the empty one.
fn role_label(role: &str) -> String {
    match role {
        "admin" => "Salon Admin".to_string(),
        "superadmin" => "Super Admin".to_string(),
        other => other.to_string(),
    }
}

/// Three-valued status bucket. Anything unrecognized, including an
/// absent subscription, counts as pending.
fn status_bucket(status: Option<&str>) -> &'static str {
    match status.map(str::to_ascii_lowercase).as_deref() {
        Some("active") => "active",
        Some("suspended") | Some("cancelled") => "blocked",
        Some("trial") => "pending",
        _ => "pending",
    }
}

/// First character of each whitespace-separated token, uppercased,
/// truncated to at most two characters.
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|token| token.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

fn display_company(business_name: Option<String>, company_name: Option<String>) -> String {
    non_empty_or(business_name.filter(|s| !s.is_empty()).or(company_name), "N/A")
}

fn non_empty_or(value: Option<String>, sentinel: &str) -> String {
    match value {
        Some(s) if !s.is_empty() => s,
        _ => sentinel.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn known_roles_get_display_labels() {
        assert_eq!(role_label("admin"), "Salon Admin");
        assert_eq!(role_label("superadmin"), "Super Admin");
        assert_eq!(role_label("support"), "support");
        assert_eq!(role_label(""), "");
    }

    #[test]
    fn subscription_status_buckets_are_case_insensitive() {
        assert_eq!(status_bucket(Some("active")), "active");
        assert_eq!(status_bucket(Some("Active")), "active");
        assert_eq!(status_bucket(Some("suspended")), "blocked");
        assert_eq!(status_bucket(Some("CANCELLED")), "blocked");
        assert_eq!(status_bucket(Some("trial")), "pending");
        assert_eq!(status_bucket(Some("something-else")), "pending");
        assert_eq!(status_bucket(None), "pending");
    }

    #[test]
    fn initials_take_at_most_two_tokens() {
        assert_eq!(initials("Priya Sharma"), "PS");
        assert_eq!(initials("Anjali"), "A");
        assert_eq!(initials("mira devi rao"), "MD");
        assert_eq!(initials(""), "");
        assert_eq!(initials("   "), "");
    }

    #[test]
    fn company_prefers_business_name_over_company_name() {
        assert_eq!(
            display_company(Some("Lotus Spa".into()), Some("Glow Inc".into())),
            "Lotus Spa"
        );
        assert_eq!(display_company(None, Some("Glow Inc".into())), "Glow Inc");
        assert_eq!(display_company(Some("".into()), Some("Glow Inc".into())), "Glow Inc");
        assert_eq!(display_company(None, None), "N/A");
    }

    #[test]
    fn bare_record_projects_with_sentinels() {
        let record: AdminAccountRecord =
            serde_json::from_value(json!({ "name": "X" })).expect("deserialize");
        let row = project("admin_1".to_string(), record);

        assert_eq!(row.id, "admin_1");
        assert_eq!(row.name, "X");
        assert_eq!(row.email, "N/A");
        assert_eq!(row.phone, "N/A");
        assert_eq!(row.role, "");
        assert_eq!(row.company, "N/A");
        assert_eq!(row.status, "pending");
        assert_eq!(row.last_active, "Never");
        assert_eq!(row.initials, "X");
    }

    #[test]
    fn any_present_timestamp_reads_as_recently() {
        let record: AdminAccountRecord = serde_json::from_value(json!({
            "name": "Priya Sharma",
            "createdAt": 1_700_000_000_000_i64
        }))
        .expect("deserialize");
        let row = project("admin_2".to_string(), record);
        assert_eq!(row.last_active, "Recently");
    }
}
