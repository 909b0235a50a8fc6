use uuid::Uuid;

use crate::dtos::room_dtos::RoomIn;
use crate::models::room::Room;
use crate::repositories::record_store::{Collection, RecordStore, StoreError};

/// Repository for the `rooms` collection. Listings are ascending by room
/// number, the order the admin room grid expects.
#[derive(Clone)]
pub struct RoomRepository {
    store: RecordStore,
}

impl RoomRepository {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Room>, StoreError> {
        self.store
            .select(Collection::Rooms, &[], Some("room_number.asc"))
            .await
    }

    pub async fn insert(&self, room: &RoomIn) -> Result<Room, StoreError> {
        self.store.insert(Collection::Rooms, room).await
    }

    pub async fn update(&self, id: Uuid, room: &RoomIn) -> Result<Room, StoreError> {
        self.store.update(Collection::Rooms, id, room).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.store.delete(Collection::Rooms, id).await
    }
}
