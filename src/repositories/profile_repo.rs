use uuid::Uuid;

use crate::dtos::profile_dtos::{AdminProfileUpdate, ProfileUpdate};
use crate::models::profile::{NewProfile, Profile};
use crate::repositories::record_store::{Collection, RecordStore, StoreError};

/// Repository for the `profiles` collection.
#[derive(Clone)]
pub struct ProfileRepository {
    store: RecordStore,
}

impl ProfileRepository {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Profile>, StoreError> {
        self.store
            .select_one(Collection::Profiles, &[("id", user_id.to_string())])
            .await
    }

    /// Admin resident listing, newest registration first.
    pub async fn list_newest_first(&self) -> Result<Vec<Profile>, StoreError> {
        self.store
            .select(Collection::Profiles, &[], Some("created_at.desc"))
            .await
    }

    pub async fn insert(&self, profile: &NewProfile) -> Result<Profile, StoreError> {
        self.store.insert(Collection::Profiles, profile).await
    }

    pub async fn update_own(&self, user_id: Uuid, patch: &ProfileUpdate) -> Result<Profile, StoreError> {
        self.store.update(Collection::Profiles, user_id, patch).await
    }

    pub async fn update_by_admin(&self, id: Uuid, patch: &AdminProfileUpdate) -> Result<Profile, StoreError> {
        self.store.update(Collection::Profiles, id, patch).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.store.delete(Collection::Profiles, id).await
    }

    pub async fn count(&self) -> Result<u64, StoreError> {
        self.store.count(Collection::Profiles, &[]).await
    }
}
