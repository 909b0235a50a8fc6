use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

/// Row in the `profiles` collection. `id` equals the auth user id, one
/// profile per identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub gender: Gender,
    pub room_number: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Insert payload written right after a successful signup.
#[derive(Debug, Serialize)]
pub struct NewProfile {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub gender: Gender,
    pub room_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"male\"");
        let parsed: Gender = serde_json::from_str("\"female\"").unwrap();
        assert_eq!(parsed, Gender::Female);
    }

    #[test]
    fn profile_parses_store_row() {
        let row = serde_json::json!({
            "id": "7f4df6ad-4f3c-44ee-b8c8-63e567c88e63",
            "first_name": "Rina",
            "last_name": "Wijaya",
            "email": "rina@example.com",
            "phone": "081234567890",
            "gender": "female",
            "room_number": "A-12",
            "created_at": "2024-03-01T08:30:00+00:00",
            "updated_at": null
        });
        let profile: Profile = serde_json::from_value(row).unwrap();
        assert_eq!(profile.first_name, "Rina");
        assert_eq!(profile.gender, Gender::Female);
        assert_eq!(profile.room_number.as_deref(), Some("A-12"));
        assert!(profile.updated_at.is_none());
    }
}
