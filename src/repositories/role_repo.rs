use uuid::Uuid;

use crate::models::role::{AppRole, UserRole};
use crate::repositories::record_store::{Collection, RecordStore, StoreError};

/// Read-only repository for the `user_roles` collection. Rows are
/// provisioned outside this app.
#[derive(Clone)]
pub struct RoleRepository {
    store: RecordStore,
}

impl RoleRepository {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// The single role row for a user. Duplicate rows are an error state,
    /// surfaced as `StoreError::MultipleRows` by the store.
    pub async fn role_for_user(&self, user_id: Uuid) -> Result<Option<AppRole>, StoreError> {
        let row: Option<UserRole> = self
            .store
            .select_one(Collection::UserRoles, &[("user_id", user_id.to_string())])
            .await?;
        Ok(row.map(|r| r.role))
    }

    pub async fn is_admin(&self, user_id: Uuid) -> Result<bool, StoreError> {
        Ok(self.role_for_user(user_id).await? == Some(AppRole::Admin))
    }
}
