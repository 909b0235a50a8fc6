use serde::{Deserialize, Serialize};

/// Create/edit payload for a room; doubles as the store write body.
#[derive(Debug, Serialize, Deserialize)]
pub struct RoomIn {
    pub room_number: String,
    pub room_name: String,
    pub description: Option<String>,
    pub photo_url: Option<String>,
}
