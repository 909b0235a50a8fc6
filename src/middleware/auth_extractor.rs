// Request guards. `AuthenticatedUser` is the session guard: it verifies
// the bearer token signature and expiry, so an absent or stale session is
// rejected before any data request is issued. `AdminUser` layers the role
// gate on top: one role lookup per request, shared by every admin route
// instead of repeated per page.
//
// Both are a first line only; the store's own row-level rules remain the
// real authorization boundary.

use actix_web::dev::Payload;
use actix_web::error::{ErrorForbidden, ErrorInternalServerError, ErrorUnauthorized};
use actix_web::{web, Error, FromRequest, HttpRequest};
use futures::future::{ready, LocalBoxFuture, Ready};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use uuid::Uuid;

use crate::models::role::AppRole;
use crate::repositories::role_repo::RoleRepository;

/// Claims carried by the auth provider's access tokens.
#[derive(Debug, Deserialize)]
pub struct JwtClaims {
    pub sub: String,
    pub exp: Option<u64>,
    pub email: Option<String>,
}

/// Verifies HS256 access tokens issued by the auth provider.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(jwt_secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // User access tokens carry aud=authenticated; anon and service
        // tokens do not and must not pass the session guard.
        validation.set_audience(&["authenticated"]);
        Self {
            decoding_key: DecodingKey::from_secret(jwt_secret.as_bytes()),
            validation,
        }
    }

    pub fn verify(&self, token: &str) -> Result<JwtClaims, jsonwebtoken::errors::Error> {
        Ok(decode::<JwtClaims>(token, &self.decoding_key, &self.validation)?.claims)
    }
}

/// The current authenticated identity.
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: Option<String>,
}

pub fn bearer_token(req: &HttpRequest) -> Result<&str, Error> {
    let header = req
        .headers()
        .get("Authorization")
        .ok_or_else(|| ErrorUnauthorized("missing Authorization header"))?
        .to_str()
        .map_err(|_| ErrorUnauthorized("invalid Authorization header"))?;
    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .ok_or_else(|| ErrorUnauthorized("expected a bearer token"))
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<AuthenticatedUser, Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(resolve_user(req))
    }
}

fn resolve_user(req: &HttpRequest) -> Result<AuthenticatedUser, Error> {
    let token = bearer_token(req)?;
    let verifier = req
        .app_data::<web::Data<TokenVerifier>>()
        .ok_or_else(|| ErrorInternalServerError("token verifier not configured"))?;

    let claims = verifier
        .verify(token)
        .map_err(|_| ErrorUnauthorized("invalid or expired token"))?;
    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| ErrorUnauthorized("invalid or expired token"))?;

    Ok(AuthenticatedUser {
        user_id,
        email: claims.email,
    })
}

/// An authenticated identity that holds the admin role. Anything else is
/// denied before the handler body runs.
pub struct AdminUser {
    pub user_id: Uuid,
}

impl FromRequest for AdminUser {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<AdminUser, Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user = resolve_user(req);
        let roles = req.app_data::<web::Data<RoleRepository>>().cloned();

        Box::pin(async move {
            let user = user?;
            let roles =
                roles.ok_or_else(|| ErrorInternalServerError("role repository not configured"))?;

            match roles.role_for_user(user.user_id).await {
                Ok(Some(AppRole::Admin)) => Ok(AdminUser {
                    user_id: user.user_id,
                }),
                Ok(_) => Err(ErrorForbidden("admin role required")),
                Err(e) => {
                    log::error!("role lookup failed for {}: {}", user.user_id, e);
                    Err(ErrorInternalServerError("role lookup failed"))
                }
            }
        })
    }
}
