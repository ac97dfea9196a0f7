pub mod accounts;
pub mod envelope;
pub mod error;
pub mod extractors;
pub mod images;
pub mod info;
pub mod profile;
pub mod users;
