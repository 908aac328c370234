use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::profile::{Profile, Recommendation};

/// A saved (profile, recommendation) pair. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub profile: Profile,
    pub recommendation: Recommendation,
}
