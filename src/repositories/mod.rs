pub mod complaint_repo;
pub mod profile_repo;
pub mod record_store;
pub mod role_repo;
pub mod room_repo;
