use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::profile::{Gender, Profile};

#[derive(Debug, Deserialize)]
pub struct SignupIn {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub gender: Gender,
    pub room_number: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginIn {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SessionOut {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: Option<i64>,
    pub token_type: Option<String>,
}

#[derive(Serialize)]
pub struct SignupOut {
    pub user_id: Uuid,
}

/// Login response. `is_admin` drives the client-side redirect to the admin
/// or resident dashboard; the real authorization boundary stays server-side.
#[derive(Serialize)]
pub struct LoginOut {
    pub session: SessionOut,
    pub profile: Option<Profile>,
    pub is_admin: bool,
}
