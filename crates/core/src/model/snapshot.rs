use serde::{Deserialize, Serialize};

use crate::model::station::{StampedSet, Station};
use crate::model::user::User;
use crate::model::wire::null_as_default;

/// Full session state as received from the remote authority at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassSnapshot {
    pub user: User,
    pub stations: Vec<Station>,
    pub stamped: StampedSet,
}

/// Outcome of an unlock submission, as reported by the remote authority.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlockResult {
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlocked_station: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlocked_icon: Option<String>,
}

impl UnlockResult {
    /// A confirmed unlock of `station`.
    #[must_use]
    pub fn unlocked(station: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            unlocked_station: Some(station.into()),
            unlocked_icon: None,
        }
    }

    /// A rejected submission.
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            unlocked_station: None,
            unlocked_icon: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlock_result_reads_optional_fields() {
        let json = r#"{"success":true,"message":"ok","unlockedStation":"Lab","unlockedIcon":"u.png"}"#;
        let result: UnlockResult = serde_json::from_str(json).expect("unlock json");
        assert!(result.success);
        assert_eq!(result.unlocked_station.as_deref(), Some("Lab"));
        assert_eq!(result.unlocked_icon.as_deref(), Some("u.png"));
    }

    #[test]
    fn unlock_result_tolerates_missing_fields() {
        let result: UnlockResult =
            serde_json::from_str(r#"{"success":false}"#).expect("unlock json");
        assert_eq!(result, UnlockResult::rejected(""));
    }

    #[test]
    fn unlock_result_reads_null_message_as_empty() {
        let json = r#"{"success":false,"message":null,"unlockedStation":null}"#;
        let result: UnlockResult = serde_json::from_str(json).expect("unlock json");
        assert_eq!(result, UnlockResult::rejected(""));
    }
}
