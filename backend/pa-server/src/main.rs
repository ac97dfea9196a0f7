use pa_server::{AppState, Metrics, build_router, error::ServerError, logger};

use pa_config::{Config, ConfigError, NotificationBackend};
use pa_core::SystemClock;
use pa_db::{IdentityRepository, SessionRepository};
use pa_media::{FileSystemImageStorage, ImageSettings};
use pa_notify::{LogNotifier, Notifier, WebhookNotifier};

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let log_dir = Config::config_dir()?.join(&config.logging.dir);
        std::fs::create_dir_all(&log_dir)?;
        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting pa-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = pa_db::connect(
        &database_path,
        config.database.max_connections,
        Duration::from_secs(config.database.busy_timeout_secs),
    )
    .await?;

    info!("Running database migrations...");
    pa_db::migrate(&pool).await?;
    info!("Migrations complete");

    let image_dir = config.profile_image_dir()?;
    info!("Profile images stored in {}", image_dir.display());
    let images = FileSystemImageStorage::new(ImageSettings {
        storage_dir: image_dir,
        secret_key: config.profile_images.secret_key.clone(),
        max_bytes: config.profile_images.max_bytes,
        min_bytes: config.profile_images.min_bytes,
        sizes: config.profile_images.sizes.clone(),
    });

    let notifier = build_notifier(&config)?;

    if !config.auth.enabled {
        warn!("Authentication DISABLED - every caller is treated as staff");
    }

    // Build application state
    let app_state = AppState {
        identities: Arc::new(IdentityRepository::new(pool.clone())),
        sessions: SessionRepository::new(pool.clone()),
        pool,
        images: Arc::new(images),
        notifier,
        clock: Arc::new(SystemClock),
        auth_enabled: config.auth.enabled,
        features: config.features,
        base_path: config.api.base_path.clone(),
        max_body_bytes: config.server.max_body_bytes,
        platform: config.platform.clone(),
        metrics: Metrics::new(),
    };

    let app = build_router(app_state);

    // Create TCP listener
    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => {
                    error!("Failed to listen for SIGINT: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        })
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

fn build_notifier(config: &Config) -> Result<Arc<dyn Notifier>, ServerError> {
    match config.notification.backend {
        NotificationBackend::Log => {
            info!("Notifications: log backend");
            Ok(Arc::new(LogNotifier))
        }
        NotificationBackend::Webhook => {
            let url = config.notification.webhook_url.as_deref().ok_or_else(|| {
                ConfigError::notification("notification.webhook_url is required")
            })?;
            info!("Notifications: webhook {}", url);
            let timeout = Duration::from_secs(config.notification.timeout_secs);
            Ok(Arc::new(WebhookNotifier::new(url, timeout)?))
        }
    }
}
