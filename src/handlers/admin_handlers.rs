// Admin routes. Every handler takes `AdminUser`, so the role gate runs
// once per request before any body below executes.

use actix_web::{delete, get, patch, post, put, web, Responder};
use uuid::Uuid;

use crate::dtos::complaint_dtos::{StatusFilter, StatusUpdateIn};
use crate::dtos::profile_dtos::AdminProfileUpdate;
use crate::dtos::report_dtos::{DashboardStats, ReportOut};
use crate::dtos::room_dtos::RoomIn;
use crate::handlers::{
    bad_request, conflict, created_json, internal_error, not_found, ok_json, store_error, unprocessable,
};
use crate::middleware::auth_extractor::AdminUser;
use crate::models::complaint::ComplaintStatus;
use crate::repositories::record_store::StoreError;
use crate::repositories::complaint_repo::ComplaintRepository;
use crate::repositories::profile_repo::ProfileRepository;
use crate::repositories::room_repo::RoomRepository;
use crate::services::report_service;

/// GET /admin/dashboard
/// Exact counts only; no rows are transferred.
#[get("/dashboard")]
pub async fn dashboard_stats(
    _admin: AdminUser,
    complaints: web::Data<ComplaintRepository>,
    profiles: web::Data<ProfileRepository>,
) -> impl Responder {
    let counts = futures::future::join5(
        complaints.count(None),
        complaints.count(Some(ComplaintStatus::Pending)),
        complaints.count(Some(ComplaintStatus::InProgress)),
        complaints.count(Some(ComplaintStatus::Completed)),
        profiles.count(),
    )
    .await;

    match counts {
        (Ok(total), Ok(pending), Ok(in_progress), Ok(completed), Ok(residents)) => ok_json(
            "Dashboard stats retrieved",
            DashboardStats {
                total_complaints: total,
                pending_complaints: pending,
                in_progress_complaints: in_progress,
                completed_complaints: completed,
                total_residents: residents,
            },
        ),
        (a, b, c, d, e) => {
            for err in [a.err(), b.err(), c.err(), d.err(), e.err()].into_iter().flatten() {
                log::error!("dashboard count failed: {}", err);
            }
            internal_error("Failed to load dashboard stats")
        }
    }
}

/// GET /admin/complaints?status=
#[get("/complaints")]
pub async fn list_complaints(
    _admin: AdminUser,
    complaints: web::Data<ComplaintRepository>,
    query: web::Query<StatusFilter>,
) -> impl Responder {
    match complaints.list_all(query.status).await {
        Ok(rows) => ok_json("Complaints retrieved", rows),
        Err(e) => store_error("list_complaints", &e, "Failed to load complaints"),
    }
}

/// PATCH /admin/complaints/{id}/status
/// The only mutation the lifecycle allows: a transition the central rule
/// accepts. Nothing else on the row changes.
#[patch("/complaints/{id}/status")]
pub async fn update_complaint_status(
    _admin: AdminUser,
    complaints: web::Data<ComplaintRepository>,
    path: web::Path<Uuid>,
    body: web::Json<StatusUpdateIn>,
) -> impl Responder {
    let id = path.into_inner();

    let current = match complaints.find(id).await {
        Ok(Some(complaint)) => complaint,
        Ok(None) => return not_found("Complaint not found"),
        Err(e) => return store_error("update_complaint_status find", &e, "Failed to update status"),
    };

    if !current.status.can_transition_to(body.status) {
        return unprocessable(&format!(
            "Cannot move a {} complaint to {}",
            current.status.as_str(),
            body.status.as_str()
        ));
    }

    // The patch is guarded on the status just read; if another admin
    // moved the complaint in between, no row matches and nothing is
    // written.
    match complaints.set_status(id, current.status, body.status).await {
        Ok(updated) => ok_json("Status updated", updated),
        Err(StoreError::NotFound) => conflict("Complaint status changed, reload and retry"),
        Err(e) => store_error("update_complaint_status set", &e, "Failed to update status"),
    }
}

/// DELETE /admin/complaints/{id}
/// Irreversible; there is no soft delete or audit trail.
#[delete("/complaints/{id}")]
pub async fn delete_complaint(
    _admin: AdminUser,
    complaints: web::Data<ComplaintRepository>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match complaints.delete(path.into_inner()).await {
        Ok(()) => ok_json("Complaint deleted", ()),
        Err(e) => store_error("delete_complaint", &e, "Failed to delete complaint"),
    }
}

/// GET /admin/residents
#[get("/residents")]
pub async fn list_residents(_admin: AdminUser, profiles: web::Data<ProfileRepository>) -> impl Responder {
    match profiles.list_newest_first().await {
        Ok(rows) => ok_json("Residents retrieved", rows),
        Err(e) => store_error("list_residents", &e, "Failed to load residents"),
    }
}

/// PUT /admin/residents/{id}
#[put("/residents/{id}")]
pub async fn update_resident(
    _admin: AdminUser,
    profiles: web::Data<ProfileRepository>,
    path: web::Path<Uuid>,
    body: web::Json<AdminProfileUpdate>,
) -> impl Responder {
    if body.first_name.trim().is_empty()
        || body.last_name.trim().is_empty()
        || body.email.trim().is_empty()
        || body.phone.trim().is_empty()
    {
        return bad_request("All fields are required");
    }

    match profiles.update_by_admin(path.into_inner(), &body.into_inner()).await {
        Ok(profile) => ok_json("Resident updated", profile),
        Err(e) => store_error("update_resident", &e, "Failed to update resident"),
    }
}

/// DELETE /admin/residents/{id}
#[delete("/residents/{id}")]
pub async fn delete_resident(
    _admin: AdminUser,
    profiles: web::Data<ProfileRepository>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match profiles.delete(path.into_inner()).await {
        Ok(()) => ok_json("Resident deleted", ()),
        Err(e) => store_error("delete_resident", &e, "Failed to delete resident"),
    }
}

/// GET /admin/rooms
#[get("/rooms")]
pub async fn list_rooms(_admin: AdminUser, rooms: web::Data<RoomRepository>) -> impl Responder {
    match rooms.list().await {
        Ok(rows) => ok_json("Rooms retrieved", rows),
        Err(e) => store_error("list_rooms", &e, "Failed to load rooms"),
    }
}

/// POST /admin/rooms
#[post("/rooms")]
pub async fn create_room(
    _admin: AdminUser,
    rooms: web::Data<RoomRepository>,
    body: web::Json<RoomIn>,
) -> impl Responder {
    if body.room_number.trim().is_empty() || body.room_name.trim().is_empty() {
        return bad_request("Room number and name are required");
    }

    match rooms.insert(&body.into_inner()).await {
        Ok(room) => created_json("Room created", room),
        Err(e) => store_error("create_room", &e, "Failed to create room"),
    }
}

/// PUT /admin/rooms/{id}
#[put("/rooms/{id}")]
pub async fn update_room(
    _admin: AdminUser,
    rooms: web::Data<RoomRepository>,
    path: web::Path<Uuid>,
    body: web::Json<RoomIn>,
) -> impl Responder {
    if body.room_number.trim().is_empty() || body.room_name.trim().is_empty() {
        return bad_request("Room number and name are required");
    }

    match rooms.update(path.into_inner(), &body.into_inner()).await {
        Ok(room) => ok_json("Room updated", room),
        Err(e) => store_error("update_room", &e, "Failed to update room"),
    }
}

/// DELETE /admin/rooms/{id}
#[delete("/rooms/{id}")]
pub async fn delete_room(
    _admin: AdminUser,
    rooms: web::Data<RoomRepository>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match rooms.delete(path.into_inner()).await {
        Ok(()) => ok_json("Room deleted", ()),
        Err(e) => store_error("delete_room", &e, "Failed to delete room"),
    }
}

/// GET /admin/reports
/// Location top-5 and status summary, aggregated server-side over the
/// full complaint listing.
#[get("/reports")]
pub async fn reports(_admin: AdminUser, complaints: web::Data<ComplaintRepository>) -> impl Responder {
    match complaints.list_all(None).await {
        Ok(rows) => {
            let top_locations = report_service::location_counts(&rows);
            let status_summary = report_service::status_summary(&rows);
            ok_json(
                "Report retrieved",
                ReportOut {
                    top_locations,
                    status_summary,
                    complaints: rows,
                },
            )
        }
        Err(e) => store_error("reports", &e, "Failed to load report"),
    }
}
