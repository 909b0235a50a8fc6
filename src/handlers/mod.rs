pub mod admin_handlers;
pub mod auth_handlers;
pub mod complaint_handlers;
pub mod profile_handlers;

use actix_web::HttpResponse;
use serde::Serialize;

use crate::repositories::record_store::StoreError;

/// Response envelope shared by every endpoint.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: String,
    pub message: String,
    pub data: Option<T>,
}

pub fn ok_json<T: Serialize>(message: &str, data: T) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse {
        status: "success".to_string(),
        message: message.to_string(),
        data: Some(data),
    })
}

pub fn created_json<T: Serialize>(message: &str, data: T) -> HttpResponse {
    HttpResponse::Created().json(ApiResponse {
        status: "success".to_string(),
        message: message.to_string(),
        data: Some(data),
    })
}

pub fn bad_request(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::<()> {
        status: "error".to_string(),
        message: message.to_string(),
        data: None,
    })
}

pub fn not_found(message: &str) -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::<()> {
        status: "error".to_string(),
        message: message.to_string(),
        data: None,
    })
}

pub fn unprocessable(message: &str) -> HttpResponse {
    HttpResponse::UnprocessableEntity().json(ApiResponse::<()> {
        status: "error".to_string(),
        message: message.to_string(),
        data: None,
    })
}

pub fn conflict(message: &str) -> HttpResponse {
    HttpResponse::Conflict().json(ApiResponse::<()> {
        status: "error".to_string(),
        message: message.to_string(),
        data: None,
    })
}

pub fn internal_error(message: &str) -> HttpResponse {
    HttpResponse::InternalServerError().json(ApiResponse::<()> {
        status: "error".to_string(),
        message: message.to_string(),
        data: None,
    })
}

/// Single surfacing policy for store failures: log the backend detail,
/// hand the client a generic message. Raw backend error text never
/// reaches end users.
pub fn store_error(context: &str, err: &StoreError, message: &str) -> HttpResponse {
    log::error!("{}: {}", context, err);
    match err {
        StoreError::NotFound => not_found("Record not found"),
        _ => internal_error(message),
    }
}
