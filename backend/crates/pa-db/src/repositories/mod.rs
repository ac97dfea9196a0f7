pub mod identity_repository;
pub mod retirement_transaction;
pub mod session_repository;
