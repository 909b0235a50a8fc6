// Session broker against the hosted auth provider (Supabase GoTrue).
// Sign-up and password-grant sign-in use the anon key; sign-out revokes
// the caller's own token.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::dtos::auth_dtos::SessionOut;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("email already registered")]
    EmailTaken,
    #[error("auth provider error: {status} {body}")]
    Upstream { status: u16, body: String },
    #[error("malformed auth response: {0}")]
    BadResponse(String),
}

#[derive(Clone)]
pub struct AuthService {
    client: reqwest::Client,
    auth_base: String,
    anon_key: String,
}

impl AuthService {
    pub fn new(client: reqwest::Client, config: &AppConfig) -> Self {
        Self {
            client,
            auth_base: format!("{}/auth/v1", config.supabase_url.trim_end_matches('/')),
            anon_key: config.anon_key.clone(),
        }
    }

    /// Create the auth user. The profile row is written separately by the
    /// signup handler once this returns the new user id.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<Uuid, AuthError> {
        #[derive(Serialize)]
        struct Body<'a> {
            email: &'a str,
            password: &'a str,
        }

        let resp = self
            .client
            .post(format!("{}/signup", self.auth_base))
            .header("apikey", &self.anon_key)
            .json(&Body { email, password })
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();

        if !status.is_success() {
            if body.contains("already registered") {
                return Err(AuthError::EmailTaken);
            }
            return Err(AuthError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let json: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| AuthError::BadResponse(e.to_string()))?;
        let user_id = json
            .get("user")
            .and_then(|u| u.get("id"))
            .or_else(|| json.get("id"))
            .and_then(|v| v.as_str())
            .ok_or_else(|| AuthError::BadResponse("signup returned no user id".into()))?;

        Uuid::parse_str(user_id).map_err(|e| AuthError::BadResponse(e.to_string()))
    }

    /// Password-grant sign-in. Returns the session plus the user id carried
    /// in the token response.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(SessionOut, Uuid), AuthError> {
        #[derive(Serialize)]
        struct Body<'a> {
            email: &'a str,
            password: &'a str,
        }

        #[derive(Deserialize)]
        struct TokenResp {
            access_token: String,
            refresh_token: Option<String>,
            expires_in: Option<i64>,
            token_type: Option<String>,
            user: Option<UserInfo>,
        }

        #[derive(Deserialize)]
        struct UserInfo {
            id: String,
        }

        let resp = self
            .client
            .post(format!("{}/token?grant_type=password", self.auth_base))
            .header("apikey", &self.anon_key)
            .json(&Body { email, password })
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();

        if status == StatusCode::BAD_REQUEST || status == StatusCode::UNAUTHORIZED {
            return Err(AuthError::InvalidCredentials);
        }
        if !status.is_success() {
            return Err(AuthError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let token: TokenResp =
            serde_json::from_str(&body).map_err(|e| AuthError::BadResponse(e.to_string()))?;
        let user = token
            .user
            .ok_or_else(|| AuthError::BadResponse("no user info in token response".into()))?;
        let user_id = Uuid::parse_str(&user.id).map_err(|e| AuthError::BadResponse(e.to_string()))?;

        let session = SessionOut {
            access_token: token.access_token,
            refresh_token: token.refresh_token,
            expires_in: token.expires_in,
            token_type: token.token_type,
        };
        Ok((session, user_id))
    }

    /// Revoke the caller's session upstream.
    pub async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        let resp = self
            .client
            .post(format!("{}/logout", self.auth_base))
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AuthError::Upstream {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}
