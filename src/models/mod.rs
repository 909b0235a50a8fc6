pub mod complaint;
pub mod profile;
pub mod role;
pub mod room;
