use actix_web::{get, post, web, Responder};
use uuid::Uuid;

use crate::dtos::complaint_dtos::CreateComplaintIn;
use crate::handlers::{bad_request, created_json, ok_json, store_error};
use crate::middleware::auth_extractor::AuthenticatedUser;
use crate::models::complaint::{ComplaintStatus, NewComplaint};
use crate::models::profile::Profile;
use crate::repositories::complaint_repo::ComplaintRepository;
use crate::repositories::profile_repo::ProfileRepository;

/// Builds the insert payload for a submission. Room number, email and
/// phone are snapshotted from the submitter's profile here and never
/// re-validated against later profile edits; the status always starts
/// at `pending` and a blank photo URL is stored as absent.
fn build_complaint(user_id: Uuid, profile: Profile, input: &CreateComplaintIn) -> NewComplaint {
    NewComplaint {
        user_id,
        room_number: profile.room_number,
        email: profile.email,
        phone: profile.phone,
        location: input.location,
        description: input.description.trim().to_string(),
        photo_url: input.photo_url.clone().filter(|url| !url.trim().is_empty()),
        status: ComplaintStatus::Pending,
    }
}

/// POST /api/complaints
#[post("/complaints")]
pub async fn submit_complaint(
    user: AuthenticatedUser,
    profiles: web::Data<ProfileRepository>,
    complaints: web::Data<ComplaintRepository>,
    body: web::Json<CreateComplaintIn>,
) -> impl Responder {
    if body.description.trim().is_empty() {
        return bad_request("Description is required");
    }

    let profile = match profiles.find_by_user(user.user_id).await {
        Ok(Some(profile)) => profile,
        Ok(None) => return bad_request("Complete your profile before submitting a complaint"),
        Err(e) => return store_error("submit_complaint profile", &e, "Failed to submit complaint"),
    };

    let complaint = build_complaint(user.user_id, profile, &body);

    match complaints.insert(&complaint).await {
        Ok(created) => created_json("Complaint submitted", created),
        Err(e) => store_error("submit_complaint insert", &e, "Failed to submit complaint"),
    }
}

/// GET /api/complaints
/// The caller's own complaint history, newest first.
#[get("/complaints")]
pub async fn my_complaints(
    user: AuthenticatedUser,
    complaints: web::Data<ComplaintRepository>,
) -> impl Responder {
    match complaints.list_for_user(user.user_id).await {
        Ok(rows) => ok_json("Complaints retrieved", rows),
        Err(e) => store_error("my_complaints", &e, "Failed to load complaints"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::complaint::ComplaintLocation;
    use crate::models::profile::Gender;

    fn profile() -> Profile {
        Profile {
            id: Uuid::new_v4(),
            first_name: "Rina".into(),
            last_name: "Wijaya".into(),
            email: "rina@example.com".into(),
            phone: "081234567890".into(),
            gender: Gender::Female,
            room_number: Some("A-12".into()),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn submission_snapshots_profile_and_starts_pending() {
        let submitter = profile();
        let user_id = submitter.id;
        let input = CreateComplaintIn {
            location: ComplaintLocation::Kitchen,
            description: "Sink leaking".into(),
            photo_url: None,
        };

        let complaint = build_complaint(user_id, submitter, &input);

        assert_eq!(complaint.status, ComplaintStatus::Pending);
        assert_eq!(complaint.user_id, user_id);
        assert_eq!(complaint.room_number.as_deref(), Some("A-12"));
        assert_eq!(complaint.email, "rina@example.com");
        assert_eq!(complaint.phone, "081234567890");
        assert_eq!(complaint.location, ComplaintLocation::Kitchen);
        assert_eq!(complaint.description, "Sink leaking");
    }

    #[test]
    fn description_is_trimmed() {
        let input = CreateComplaintIn {
            location: ComplaintLocation::Room,
            description: "  Door hinge broken  ".into(),
            photo_url: None,
        };
        let complaint = build_complaint(Uuid::new_v4(), profile(), &input);
        assert_eq!(complaint.description, "Door hinge broken");
    }

    #[test]
    fn blank_photo_url_is_stored_as_absent() {
        let input = CreateComplaintIn {
            location: ComplaintLocation::Bathroom,
            description: "Shower drain clogged".into(),
            photo_url: Some("   ".into()),
        };
        let complaint = build_complaint(Uuid::new_v4(), profile(), &input);
        assert!(complaint.photo_url.is_none());
    }

    #[test]
    fn provided_photo_url_is_kept() {
        let input = CreateComplaintIn {
            location: ComplaintLocation::Parking,
            description: "Broken gate".into(),
            photo_url: Some("https://example.com/photo.jpg".into()),
        };
        let complaint = build_complaint(Uuid::new_v4(), profile(), &input);
        assert_eq!(
            complaint.photo_url.as_deref(),
            Some("https://example.com/photo.jpg")
        );
    }
}
