use serde::{Deserialize, Serialize};

use crate::models::profile::Gender;

/// Owner-side profile edit. Email and room assignment stay with the admin.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub gender: Gender,
}

/// Admin-side resident edit, the full form of the residents screen.
#[derive(Debug, Serialize, Deserialize)]
pub struct AdminProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub gender: Gender,
    pub room_number: Option<String>,
}
