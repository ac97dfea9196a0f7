pub mod user_summary_dto;
pub mod users;
