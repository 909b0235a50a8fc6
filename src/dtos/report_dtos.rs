use serde::Serialize;

use crate::models::complaint::{Complaint, ComplaintLocation};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationCount {
    pub location: ComplaintLocation,
    pub count: u64,
}

#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct StatusSummary {
    pub total: u64,
    pub pending: u64,
    pub in_progress: u64,
    pub completed: u64,
}

#[derive(Serialize)]
pub struct ReportOut {
    pub top_locations: Vec<LocationCount>,
    pub status_summary: StatusSummary,
    pub complaints: Vec<Complaint>,
}

/// Admin dashboard counters, fetched as exact counts rather than rows.
#[derive(Serialize)]
pub struct DashboardStats {
    pub total_complaints: u64,
    pub pending_complaints: u64,
    pub in_progress_complaints: u64,
    pub completed_complaints: u64,
    pub total_residents: u64,
}
