use crate::error::Result;
use crate::models::activity_log::{ActingUser, ActivityLogEntry, UpdatedBy};
use crate::store::Store;
use chrono::Utc;
use serde_json::Value as JsonValue;
use std::sync::Arc;

/// Named outcome of a [`ActivityLogService::record`] call, so callers
/// and tests can tell a no-op by design apart from a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// One entry was appended; carries the generated entry key.
    Written(String),
    /// Required fields were missing, nothing was written.
    Skipped,
}

#[derive(Clone)]
pub struct ActivityLogService {
    store: Arc<dyn Store>,
}

impl ActivityLogService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Append one audit entry under the business's log partition.
    ///
    /// Audit logging is best-effort: when any of business id, acting
    /// user, type or activity is missing (empty strings count as
    /// missing) the call skips silently instead of failing the business
    /// action that triggered it. A store write failure does propagate.
    pub async fn record(
        &self,
        business_id: Option<&str>,
        branch_id: Option<&str>,
        acting_user: Option<&ActingUser>,
        kind: Option<&str>,
        activity: Option<&str>,
        entity: Option<JsonValue>,
        ip_address: Option<&str>,
    ) -> Result<WriteOutcome> {
        let (business_id, user, kind, activity) = match (
            non_empty(business_id),
            acting_user,
            non_empty(kind),
            non_empty(activity),
        ) {
            (Some(b), Some(u), Some(k), Some(a)) => (b, u, k, a),
            _ => {
                tracing::debug!("activity log write skipped, required fields missing");
                return Ok(WriteOutcome::Skipped);
            }
        };

        let entry = ActivityLogEntry {
            business_id: business_id.to_string(),
            branch_id: branch_id.map(str::to_string),
            created_at: Utc::now(),
            kind: kind.to_string(),
            activity: activity.to_string(),
            ip_address: ip_address.map(str::to_string),
            updated_by: UpdatedBy {
                user_id: user.id.clone().or_else(|| user.uid.clone()),
                name: user.name.clone().unwrap_or_else(|| "Unknown".to_string()),
                role: user.role.clone().unwrap_or_else(|| "unknown".to_string()),
            },
            entity,
        };

        let key = self
            .store
            .push(
                &format!("activity_logs/{}", business_id),
                &serde_json::to_value(&entry)?,
            )
            .await?;
        Ok(WriteOutcome::Written(key))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
