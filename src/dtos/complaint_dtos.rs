use serde::Deserialize;

use crate::models::complaint::{ComplaintLocation, ComplaintStatus};

/// Resident submission. Contact fields are not accepted from the client;
/// the server snapshots them from the submitter's profile.
#[derive(Debug, Deserialize)]
pub struct CreateComplaintIn {
    pub location: ComplaintLocation,
    pub description: String,
    pub photo_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdateIn {
    pub status: ComplaintStatus,
}

/// `?status=` filter on the admin complaint listing.
#[derive(Debug, Deserialize)]
pub struct StatusFilter {
    pub status: Option<ComplaintStatus>,
}
