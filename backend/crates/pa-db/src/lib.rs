pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::pool::{connect, connect_in_memory, migrate};
pub use error::{DbError, Result};
pub use repositories::identity_repository::IdentityRepository;
pub use repositories::retirement_transaction::SqliteRetirementTransaction;
pub use repositories::session_repository::SessionRepository;
