mod config;
mod dtos;
mod handlers;
mod middleware;
mod models;
mod repositories;
mod services;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{error, info};
use reqwest::Client;

use crate::config::AppConfig;
use crate::handlers::admin_handlers;
use crate::handlers::auth_handlers;
use crate::handlers::complaint_handlers;
use crate::handlers::profile_handlers;
use crate::middleware::auth_extractor::TokenVerifier;
use crate::repositories::complaint_repo::ComplaintRepository;
use crate::repositories::profile_repo::ProfileRepository;
use crate::repositories::record_store::RecordStore;
use crate::repositories::role_repo::RoleRepository;
use crate::repositories::room_repo::RoomRepository;
use crate::services::auth_service::AuthService;

fn mask_key(k: &str) -> String {
    if k.len() <= 8 {
        "[REDACTED]".to_string()
    } else {
        format!("{}***{}", &k[..4], &k[k.len() - 4..])
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    dotenv::dotenv().ok();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("configuration error: {:#}", e);
            std::process::exit(1);
        }
    };

    info!("Supabase URL: {}", config.supabase_url);
    info!("Service key: {}", mask_key(&config.service_role_key));

    let http_client = match Client::builder().user_agent("kost-complaint-be/0.1").build() {
        Ok(client) => client,
        Err(e) => {
            error!("failed to build http client: {}", e);
            std::process::exit(1);
        }
    };

    let store = RecordStore::new(
        http_client.clone(),
        &config.supabase_url,
        config.service_role_key.clone(),
    );
    let profiles = web::Data::new(ProfileRepository::new(store.clone()));
    let complaints = web::Data::new(ComplaintRepository::new(store.clone()));
    let rooms = web::Data::new(RoomRepository::new(store.clone()));
    let roles = web::Data::new(RoleRepository::new(store));
    let auth = web::Data::new(AuthService::new(http_client, &config));
    let verifier = web::Data::new(TokenVerifier::new(&config.jwt_secret));

    let allowed_origins = config.allowed_origins.clone();
    let bind_address = config.bind_address.clone();

    info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
            .allowed_headers(vec!["authorization", "content-type", "accept"])
            .supports_credentials()
            .max_age(3600);

        for origin in allowed_origins.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            cors = cors.allowed_origin(origin);
        }

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(profiles.clone())
            .app_data(complaints.clone())
            .app_data(rooms.clone())
            .app_data(roles.clone())
            .app_data(auth.clone())
            .app_data(verifier.clone())
            .service(
                web::scope("/auth")
                    .service(auth_handlers::signup)
                    .service(auth_handlers::login)
                    .service(auth_handlers::logout),
            )
            .service(
                web::scope("/api")
                    .service(profile_handlers::get_profile)
                    .service(profile_handlers::update_profile)
                    .service(complaint_handlers::submit_complaint)
                    .service(complaint_handlers::my_complaints),
            )
            .service(
                web::scope("/admin")
                    .service(admin_handlers::dashboard_stats)
                    .service(admin_handlers::list_complaints)
                    .service(admin_handlers::update_complaint_status)
                    .service(admin_handlers::delete_complaint)
                    .service(admin_handlers::list_residents)
                    .service(admin_handlers::update_resident)
                    .service(admin_handlers::delete_resident)
                    .service(admin_handlers::list_rooms)
                    .service(admin_handlers::create_room)
                    .service(admin_handlers::update_room)
                    .service(admin_handlers::delete_room)
                    .service(admin_handlers::reports),
            )
    })
    .bind(&bind_address)?
    .run()
    .await
}
