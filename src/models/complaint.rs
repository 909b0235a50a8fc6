use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where in the boarding house the problem was observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintLocation {
    Room,
    Parking,
    Kitchen,
    Bathroom,
    CommonArea,
    Other,
}

impl ComplaintLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintLocation::Room => "room",
            ComplaintLocation::Parking => "parking",
            ComplaintLocation::Kitchen => "kitchen",
            ComplaintLocation::Bathroom => "bathroom",
            ComplaintLocation::CommonArea => "common_area",
            ComplaintLocation::Other => "other",
        }
    }
}

/// Complaint lifecycle. `pending` is the initial state, `completed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintStatus {
    Pending,
    InProgress,
    Completed,
}

impl ComplaintStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintStatus::Pending => "pending",
            ComplaintStatus::InProgress => "in_progress",
            ComplaintStatus::Completed => "completed",
        }
    }

    /// Central transition rule for the lifecycle. Re-applying the current
    /// status is an idempotent no-op. Work can be sent back to the queue
    /// (`in_progress` -> `pending`), but `completed` is terminal: a finished
    /// complaint cannot be reopened.
    pub fn can_transition_to(self, next: ComplaintStatus) -> bool {
        use ComplaintStatus::{Completed, InProgress, Pending};
        match (self, next) {
            (a, b) if a == b => true,
            (Pending, InProgress) | (Pending, Completed) => true,
            (InProgress, Pending) | (InProgress, Completed) => true,
            (Completed, _) => false,
            _ => false,
        }
    }
}

/// A facility complaint as stored in the `complaints` collection.
///
/// `room_number`, `email` and `phone` are snapshots of the submitter's
/// profile taken at submit time; later profile edits do not touch them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Complaint {
    pub id: Uuid,
    pub user_id: Uuid,
    pub room_number: Option<String>,
    pub email: String,
    pub phone: String,
    pub location: ComplaintLocation,
    pub description: String,
    pub photo_url: Option<String>,
    pub status: ComplaintStatus,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a new complaint. The server always sets the status,
/// never the client.
#[derive(Debug, Serialize)]
pub struct NewComplaint {
    pub user_id: Uuid,
    pub room_number: Option<String>,
    pub email: String,
    pub phone: String,
    pub location: ComplaintLocation,
    pub description: String,
    pub photo_url: Option<String>,
    pub status: ComplaintStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_transitions_are_legal() {
        assert!(ComplaintStatus::Pending.can_transition_to(ComplaintStatus::InProgress));
        assert!(ComplaintStatus::Pending.can_transition_to(ComplaintStatus::Completed));
        assert!(ComplaintStatus::InProgress.can_transition_to(ComplaintStatus::Completed));
    }

    #[test]
    fn in_progress_can_return_to_queue() {
        assert!(ComplaintStatus::InProgress.can_transition_to(ComplaintStatus::Pending));
    }

    #[test]
    fn completed_is_terminal() {
        assert!(!ComplaintStatus::Completed.can_transition_to(ComplaintStatus::Pending));
        assert!(!ComplaintStatus::Completed.can_transition_to(ComplaintStatus::InProgress));
    }

    #[test]
    fn reapplying_current_status_is_a_no_op() {
        assert!(ComplaintStatus::Pending.can_transition_to(ComplaintStatus::Pending));
        assert!(ComplaintStatus::InProgress.can_transition_to(ComplaintStatus::InProgress));
        assert!(ComplaintStatus::Completed.can_transition_to(ComplaintStatus::Completed));
    }

    #[test]
    fn status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ComplaintStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        let parsed: ComplaintStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(parsed, ComplaintStatus::Pending);
    }

    #[test]
    fn location_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ComplaintLocation::CommonArea).unwrap(),
            "\"common_area\""
        );
        assert_eq!(ComplaintLocation::CommonArea.as_str(), "common_area");
    }
}
