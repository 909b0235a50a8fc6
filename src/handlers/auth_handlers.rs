use actix_web::{post, web, HttpRequest, HttpResponse, Responder};
use regex::Regex;

use crate::dtos::auth_dtos::{LoginIn, LoginOut, SignupIn, SignupOut};
use crate::handlers::{bad_request, created_json, internal_error, ok_json, ApiResponse};
use crate::middleware::auth_extractor::bearer_token;
use crate::models::profile::NewProfile;
use crate::repositories::profile_repo::ProfileRepository;
use crate::repositories::role_repo::RoleRepository;
use crate::services::auth_service::{AuthError, AuthService};

fn looks_like_email(email: &str) -> bool {
    let re = Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").unwrap();
    re.is_match(email)
}

/// POST /auth/signup
/// Creates the auth user, then the matching profile row.
#[post("/signup")]
pub async fn signup(
    auth: web::Data<AuthService>,
    profiles: web::Data<ProfileRepository>,
    body: web::Json<SignupIn>,
) -> impl Responder {
    let email = body.email.trim().to_lowercase();

    if !looks_like_email(&email) {
        return bad_request("Invalid email format");
    }
    if body.password.len() < 6 {
        return bad_request("Password must be at least 6 characters long");
    }
    if body.first_name.trim().is_empty() || body.last_name.trim().is_empty() {
        return bad_request("First and last name are required");
    }
    if body.phone.trim().is_empty() {
        return bad_request("Phone number is required");
    }

    let user_id = match auth.sign_up(&email, &body.password).await {
        Ok(user_id) => user_id,
        Err(AuthError::EmailTaken) => {
            return bad_request("Email already exists. Please login instead.");
        }
        Err(e) => {
            log::error!("signup failed: {}", e);
            return internal_error("Failed to create account. Please try again.");
        }
    };

    let profile = NewProfile {
        id: user_id,
        first_name: body.first_name.trim().to_string(),
        last_name: body.last_name.trim().to_string(),
        email,
        phone: body.phone.trim().to_string(),
        gender: body.gender,
        room_number: body.room_number.clone(),
    };

    match profiles.insert(&profile).await {
        Ok(_) => created_json("Account created", SignupOut { user_id }),
        Err(e) => {
            log::error!("profile insert failed for new user {}: {}", user_id, e);
            internal_error("Account created but the profile could not be saved")
        }
    }
}

/// POST /auth/login
/// Returns the session, the caller's profile and whether they hold the
/// admin role, so the client knows which dashboard to show.
#[post("/login")]
pub async fn login(
    auth: web::Data<AuthService>,
    profiles: web::Data<ProfileRepository>,
    roles: web::Data<RoleRepository>,
    body: web::Json<LoginIn>,
) -> impl Responder {
    let (session, user_id) = match auth.sign_in(body.email.trim(), &body.password).await {
        Ok(ok) => ok,
        Err(AuthError::InvalidCredentials) => {
            return HttpResponse::Unauthorized().json(ApiResponse::<()> {
                status: "error".to_string(),
                message: "Invalid email or password".to_string(),
                data: None,
            });
        }
        Err(e) => {
            log::error!("login failed: {}", e);
            return internal_error("Login failed. Please try again.");
        }
    };

    let profile = match profiles.find_by_user(user_id).await {
        Ok(profile) => profile,
        Err(e) => {
            log::error!("profile lookup failed for {}: {}", user_id, e);
            None
        }
    };

    let is_admin = match roles.is_admin(user_id).await {
        Ok(is_admin) => is_admin,
        Err(e) => {
            // Deny the admin redirect on lookup failure; the role gate on
            // the admin routes decides for real.
            log::error!("role lookup failed for {}: {}", user_id, e);
            false
        }
    };

    ok_json(
        "Login successful",
        LoginOut {
            session,
            profile,
            is_admin,
        },
    )
}

/// POST /auth/logout
#[post("/logout")]
pub async fn logout(auth: web::Data<AuthService>, req: HttpRequest) -> actix_web::Result<HttpResponse> {
    let token = bearer_token(&req)?;

    match auth.sign_out(token).await {
        Ok(()) => Ok(ok_json("Logged out", ())),
        Err(e) => {
            log::error!("logout failed: {}", e);
            Ok(internal_error("Logout failed"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::looks_like_email;

    #[test]
    fn accepts_plain_addresses() {
        assert!(looks_like_email("resident@example.com"));
        assert!(looks_like_email("first.last+tag@sub.example.co.id"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!looks_like_email("not-an-email"));
        assert!(!looks_like_email("missing@tld"));
        assert!(!looks_like_email("@example.com"));
    }
}
