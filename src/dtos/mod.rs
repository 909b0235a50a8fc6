pub mod auth_dtos;
pub mod complaint_dtos;
pub mod profile_dtos;
pub mod report_dtos;
pub mod room_dtos;
