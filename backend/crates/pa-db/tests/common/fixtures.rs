use pa_core::Identity;
use pa_db::IdentityRepository;

use sqlx::SqlitePool;

/// Build an identity with a predictable email and display name
pub fn identity(username: &str) -> Identity {
    let mut identity = Identity::new(username.to_string(), format!("{}@example.com", username));
    identity.profile.name = format!("{} Example", username);
    identity
}

/// Insert a test identity and return it with its assigned id
pub async fn create_test_identity(pool: &SqlitePool, username: &str) -> Identity {
    IdentityRepository::new(pool.clone())
        .create(&identity(username))
        .await
        .expect("Failed to create test identity")
}

pub async fn count_retirement_requests(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM retirement_requests")
        .fetch_one(pool)
        .await
        .expect("Failed to count retirement requests")
}
