use crate::metrics::Metrics;

use pa_config::{FeaturesConfig, PlatformConfig};
use pa_core::{Clock, IdentityStore};
use pa_db::SessionRepository;
use pa_media::ProfileImageStorage;
use pa_notify::Notifier;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared handler state. Every collaborator sits behind a trait object so
/// tests can swap it.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub identities: Arc<dyn IdentityStore>,
    pub sessions: SessionRepository,
    pub images: Arc<dyn ProfileImageStorage>,
    pub notifier: Arc<dyn Notifier>,
    pub clock: Arc<dyn Clock>,
    /// When false every request acts as an anonymous staff caller
    pub auth_enabled: bool,
    pub features: FeaturesConfig,
    /// Prefix all routes are nested under; empty mounts them at the root
    pub base_path: String,
    pub max_body_bytes: usize,
    pub platform: PlatformConfig,
    pub metrics: Metrics,
}
