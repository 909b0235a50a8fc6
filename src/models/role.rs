use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role capability. Everyone without an `admin` row is a resident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppRole {
    Admin,
    Resident,
}

/// Row in the `user_roles` collection. Provisioned externally; this app
/// only ever reads it.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRole {
    pub user_id: Uuid,
    pub role: AppRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_store_row() {
        let row = serde_json::json!({
            "user_id": "7f4df6ad-4f3c-44ee-b8c8-63e567c88e63",
            "role": "admin"
        });
        let user_role: UserRole = serde_json::from_value(row).unwrap();
        assert_eq!(user_role.role, AppRole::Admin);
    }
}
