use serde_json::json;
use uuid::Uuid;

use crate::models::complaint::{Complaint, ComplaintStatus, NewComplaint};
use crate::repositories::record_store::{Collection, RecordStore, StoreError};

/// Repository for the `complaints` collection. Listings are newest-first,
/// matching the complaint history and admin views.
#[derive(Clone)]
pub struct ComplaintRepository {
    store: RecordStore,
}

impl ComplaintRepository {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    pub async fn insert(&self, complaint: &NewComplaint) -> Result<Complaint, StoreError> {
        self.store.insert(Collection::Complaints, complaint).await
    }

    pub async fn find(&self, id: Uuid) -> Result<Option<Complaint>, StoreError> {
        self.store
            .select_one(Collection::Complaints, &[("id", id.to_string())])
            .await
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Complaint>, StoreError> {
        self.store
            .select(
                Collection::Complaints,
                &[("user_id", user_id.to_string())],
                Some("created_at.desc"),
            )
            .await
    }

    pub async fn list_all(&self, status: Option<ComplaintStatus>) -> Result<Vec<Complaint>, StoreError> {
        let filters: Vec<(&str, String)> = match status {
            Some(status) => vec![("status", status.as_str().to_string())],
            None => vec![],
        };
        self.store
            .select(Collection::Complaints, &filters, Some("created_at.desc"))
            .await
    }

    /// Persist exactly the new status value; every other field is left
    /// untouched by the patch. The patch is guarded on `expected`, so a
    /// row whose status moved since it was read is not changed and the
    /// call reports `NotFound`.
    pub async fn set_status(
        &self,
        id: Uuid,
        expected: ComplaintStatus,
        status: ComplaintStatus,
    ) -> Result<Complaint, StoreError> {
        self.store
            .update_where(
                Collection::Complaints,
                id,
                &[("status", expected.as_str().to_string())],
                &json!({ "status": status }),
            )
            .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.store.delete(Collection::Complaints, id).await
    }

    pub async fn count(&self, status: Option<ComplaintStatus>) -> Result<u64, StoreError> {
        let filters: Vec<(&str, String)> = match status {
            Some(status) => vec![("status", status.as_str().to_string())],
            None => vec![],
        };
        self.store.count(Collection::Complaints, &filters).await
    }
}
