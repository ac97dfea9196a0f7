mod api;

use crate::{AppState, Metrics};

use pa_config::{FeaturesConfig, PlatformConfig};
use pa_core::SystemClock;
use pa_db::{IdentityRepository, SessionRepository};
use pa_media::{FileSystemImageStorage, ImageSettings};
use pa_notify::LogNotifier;

use std::collections::BTreeMap;
use std::sync::Arc;

use tempfile::TempDir;

/// In-memory state with real collaborators; keep the TempDir alive
pub(crate) async fn create_test_state(auth_enabled: bool) -> (AppState, TempDir) {
    let pool = pa_db::connect_in_memory()
        .await
        .expect("Failed to create test pool");
    let image_dir = TempDir::new().unwrap();

    let images = FileSystemImageStorage::new(ImageSettings {
        storage_dir: image_dir.path().to_path_buf(),
        secret_key: String::from("test-secret"),
        max_bytes: 1024 * 1024,
        min_bytes: 100,
        sizes: BTreeMap::from([(String::from("full"), 500)]),
    });

    let state = AppState {
        identities: Arc::new(IdentityRepository::new(pool.clone())),
        sessions: SessionRepository::new(pool.clone()),
        pool,
        images: Arc::new(images),
        notifier: Arc::new(LogNotifier),
        clock: Arc::new(SystemClock),
        auth_enabled,
        features: FeaturesConfig::default(),
        base_path: String::new(),
        max_body_bytes: 1024 * 1024,
        platform: PlatformConfig::default(),
        metrics: Metrics::new(),
    };

    (state, image_dir)
}
