use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Final outcome of an identity change, as reported to the webhook.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChangeOutcome {
    Committed,
    RolledBack,
}

/// Notification payload describing one attempted identity change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// Who ran the change (login name or `NAMESYNC_OPERATOR`).
    pub operator: String,
    /// `ComputerName` before the change, when it could be read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_value: Option<String>,
    pub attempted_value: String,
    pub outcome: ChangeOutcome,
    /// Field that failed apply or verification. None when committed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_field: Option<String>,
    /// Number of fields that could not be restored during rollback.
    #[serde(default)]
    pub restore_failures: usize,
    pub timestamp: DateTime<Utc>,
}
