//! Reporting aggregation over the complaint collection: counts by location
//! (top five, descending) and a status summary. Pure functions so the
//! report handler stays a fetch-then-render shell.

use std::collections::HashMap;

use crate::dtos::report_dtos::{LocationCount, StatusSummary};
use crate::models::complaint::{Complaint, ComplaintStatus};

const TOP_LOCATIONS: usize = 5;

/// Count complaints per location, descending by count. Ties break on the
/// location name so the order is stable across fetches. At most five
/// entries are returned.
pub fn location_counts(complaints: &[Complaint]) -> Vec<LocationCount> {
    let mut counts: HashMap<_, u64> = HashMap::new();
    for complaint in complaints {
        *counts.entry(complaint.location).or_insert(0) += 1;
    }

    let mut entries: Vec<LocationCount> = counts
        .into_iter()
        .map(|(location, count)| LocationCount { location, count })
        .collect();
    entries.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.location.as_str().cmp(b.location.as_str()))
    });
    entries.truncate(TOP_LOCATIONS);
    entries
}

pub fn status_summary(complaints: &[Complaint]) -> StatusSummary {
    let mut summary = StatusSummary {
        total: complaints.len() as u64,
        ..StatusSummary::default()
    };
    for complaint in complaints {
        match complaint.status {
            ComplaintStatus::Pending => summary.pending += 1,
            ComplaintStatus::InProgress => summary.in_progress += 1,
            ComplaintStatus::Completed => summary.completed += 1,
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::complaint::ComplaintLocation;
    use chrono::Utc;
    use uuid::Uuid;

    fn complaint(location: ComplaintLocation, status: ComplaintStatus) -> Complaint {
        Complaint {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            room_number: Some("A-1".into()),
            email: "resident@example.com".into(),
            phone: "0812000000".into(),
            location,
            description: "Sink leaking".into(),
            photo_url: None,
            status,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn counts_by_location_descending() {
        let complaints = vec![
            complaint(ComplaintLocation::Room, ComplaintStatus::Pending),
            complaint(ComplaintLocation::Room, ComplaintStatus::Pending),
            complaint(ComplaintLocation::Kitchen, ComplaintStatus::Pending),
        ];
        let counts = location_counts(&complaints);
        assert_eq!(
            counts,
            vec![
                LocationCount {
                    location: ComplaintLocation::Room,
                    count: 2
                },
                LocationCount {
                    location: ComplaintLocation::Kitchen,
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn ties_break_on_location_name() {
        let complaints = vec![
            complaint(ComplaintLocation::Parking, ComplaintStatus::Pending),
            complaint(ComplaintLocation::Bathroom, ComplaintStatus::Pending),
        ];
        let counts = location_counts(&complaints);
        assert_eq!(counts[0].location, ComplaintLocation::Bathroom);
        assert_eq!(counts[1].location, ComplaintLocation::Parking);
    }

    #[test]
    fn at_most_five_locations_returned() {
        let complaints = vec![
            complaint(ComplaintLocation::Room, ComplaintStatus::Pending),
            complaint(ComplaintLocation::Parking, ComplaintStatus::Pending),
            complaint(ComplaintLocation::Kitchen, ComplaintStatus::Pending),
            complaint(ComplaintLocation::Bathroom, ComplaintStatus::Pending),
            complaint(ComplaintLocation::CommonArea, ComplaintStatus::Pending),
            complaint(ComplaintLocation::Other, ComplaintStatus::Pending),
        ];
        assert_eq!(location_counts(&complaints).len(), 5);
    }

    #[test]
    fn empty_collection_yields_no_counts() {
        assert!(location_counts(&[]).is_empty());
        assert_eq!(status_summary(&[]), StatusSummary::default());
    }

    #[test]
    fn status_summary_counts_each_state() {
        let complaints = vec![
            complaint(ComplaintLocation::Room, ComplaintStatus::Pending),
            complaint(ComplaintLocation::Room, ComplaintStatus::Pending),
            complaint(ComplaintLocation::Kitchen, ComplaintStatus::InProgress),
            complaint(ComplaintLocation::Other, ComplaintStatus::Completed),
        ];
        let summary = status_summary(&complaints);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.pending, 2);
        assert_eq!(summary.in_progress, 1);
        assert_eq!(summary.completed, 1);
    }
}
