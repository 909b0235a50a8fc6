use actix_web::{get, put, web, Responder};

use crate::dtos::profile_dtos::ProfileUpdate;
use crate::handlers::{bad_request, not_found, ok_json, store_error};
use crate::middleware::auth_extractor::AuthenticatedUser;
use crate::repositories::profile_repo::ProfileRepository;

/// GET /api/profile
#[get("/profile")]
pub async fn get_profile(
    user: AuthenticatedUser,
    profiles: web::Data<ProfileRepository>,
) -> impl Responder {
    match profiles.find_by_user(user.user_id).await {
        Ok(Some(profile)) => ok_json("Profile retrieved", profile),
        Ok(None) => not_found("Profile not found"),
        Err(e) => store_error("get_profile", &e, "Failed to retrieve profile"),
    }
}

/// PUT /api/profile
/// Owner edit of name, phone and gender. Email and room assignment are
/// managed by the admin.
#[put("/profile")]
pub async fn update_profile(
    user: AuthenticatedUser,
    profiles: web::Data<ProfileRepository>,
    body: web::Json<ProfileUpdate>,
) -> impl Responder {
    if body.first_name.trim().is_empty() || body.last_name.trim().is_empty() {
        return bad_request("First and last name are required");
    }
    if body.phone.trim().is_empty() {
        return bad_request("Phone number is required");
    }

    let patch = ProfileUpdate {
        first_name: body.first_name.trim().to_string(),
        last_name: body.last_name.trim().to_string(),
        phone: body.phone.trim().to_string(),
        gender: body.gender,
    };

    match profiles.update_own(user.user_id, &patch).await {
        Ok(profile) => ok_json("Profile updated", profile),
        Err(e) => store_error("update_profile", &e, "Failed to update profile"),
    }
}
