#![allow(dead_code)]

//! Test infrastructure for pa-server API tests

use pa_config::{FeaturesConfig, PlatformConfig};
use pa_core::{FixedClock, Identity, IdentityStore};
use pa_db::{IdentityRepository, SessionRepository};
use pa_media::{FileSystemImageStorage, ImageSettings};
use pa_notify::{NotificationMessage, Notifier, NotifyError};
use pa_server::{AppState, Metrics, build_router};

use std::collections::BTreeMap;
use std::io::Cursor;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{DateTime, TimeZone, Utc};
use http_body_util::BodyExt;
use image::{ImageFormat, Rgb, RgbImage};
use tempfile::TempDir;
use tower::ServiceExt;

pub const BASE: &str = "/openedx_plugin/api";
pub const MULTIPART_BOUNDARY: &str = "pa-test-boundary";

/// Instant every handler sees as "now"
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 45).unwrap()
}

/// Records every notification it is asked to send
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<NotificationMessage>>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<NotificationMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, message: &NotificationMessage) -> Result<(), NotifyError> {
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

/// Fails every delivery as a mail relay outage would
pub struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn send(&self, _message: &NotificationMessage) -> Result<(), NotifyError> {
        Err(NotifyError::rejected(503))
    }
}

pub struct TestOptions {
    pub features: FeaturesConfig,
    pub auth_enabled: bool,
    pub failing_notifier: bool,
    pub base_path: String,
}

impl Default for TestOptions {
    fn default() -> Self {
        Self {
            features: FeaturesConfig::default(),
            auth_enabled: true,
            failing_notifier: false,
            base_path: BASE.to_string(),
        }
    }
}

pub struct TestApp {
    pub state: AppState,
    pub notifier: Arc<RecordingNotifier>,
    pub images: Arc<FileSystemImageStorage>,
    pub image_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_options(TestOptions::default()).await
    }

    pub async fn with_options(options: TestOptions) -> Self {
        let pool = pa_db::connect_in_memory()
            .await
            .expect("Failed to create test database");
        let image_dir = TempDir::new().expect("Failed to create image dir");

        let images = Arc::new(FileSystemImageStorage::new(ImageSettings {
            storage_dir: image_dir.path().to_path_buf(),
            secret_key: String::from("test-secret"),
            max_bytes: 1024 * 1024,
            min_bytes: 100,
            sizes: BTreeMap::from([
                (String::from("full"), 500),
                (String::from("large"), 120),
                (String::from("medium"), 50),
                (String::from("small"), 30),
            ]),
        }));

        let notifier = Arc::new(RecordingNotifier::default());
        let active_notifier: Arc<dyn Notifier> = if options.failing_notifier {
            Arc::new(FailingNotifier)
        } else {
            notifier.clone()
        };

        let state = AppState {
            identities: Arc::new(IdentityRepository::new(pool.clone())),
            sessions: SessionRepository::new(pool.clone()),
            pool,
            images: images.clone(),
            notifier: active_notifier,
            clock: Arc::new(FixedClock(fixed_now())),
            auth_enabled: options.auth_enabled,
            features: options.features,
            base_path: options.base_path,
            max_body_bytes: 4 * 1024 * 1024,
            platform: PlatformConfig {
                default_language: String::from("en"),
                platform_name: String::from("Example Academy"),
                site_name: String::from("academy.example.com"),
                contact_email: String::from("help@example.com"),
                lms_root_url: String::from("https://academy.example.com"),
            },
            metrics: Metrics::new(),
        };

        Self {
            state,
            notifier,
            images,
            image_dir,
        }
    }

    pub fn router(&self) -> Router {
        build_router(self.state.clone())
    }

    /// Insert an identity named `username` with email `{username}@example.com`
    pub async fn create_identity(&self, username: &str) -> Identity {
        let mut identity = Identity::new(username.to_string(), format!("{username}@example.com"));
        identity.profile.name = format!("{username} Example");
        IdentityRepository::new(self.state.pool.clone())
            .create(&identity)
            .await
            .expect("Failed to create test identity")
    }

    pub async fn create_staff(&self, username: &str) -> Identity {
        let mut identity = self.create_identity(username).await;
        identity.is_staff = true;
        self.state.identities.save(&identity).await.unwrap();
        identity
    }

    /// Open a session and return its bearer token
    pub async fn login(&self, username: &str) -> String {
        self.state.sessions.create(username).await.unwrap().token
    }

    pub async fn identity(&self, username: &str) -> Option<Identity> {
        self.state.identities.find_by_username(username).await.unwrap()
    }

    pub async fn retirement_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM retirement_requests")
            .fetch_one(&self.state.pool)
            .await
            .unwrap()
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self.router().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json = if body.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null)
        };
        (status, json)
    }
}

/// JSON request against `BASE + path`, authenticated when `token` is given
pub fn json_request(
    method: &str,
    path: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(format!("{BASE}{path}"))
        .header("Content-Type", "application/json");
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn empty_request(method: &str, path: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(format!("{BASE}{path}"));
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

/// Multipart upload with a single part
pub fn multipart_request(
    path: &str,
    token: Option<&str>,
    field_name: &str,
    file_name: &str,
    content_type: &str,
    data: &[u8],
) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field_name}\"; filename=\"{file_name}\"\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{MULTIPART_BOUNDARY}--\r\n").as_bytes());

    let mut builder = Request::builder()
        .method("POST")
        .uri(format!("{BASE}{path}"))
        .header(
            "Content-Type",
            format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
        );
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    builder.body(Body::from(body)).unwrap()
}

/// A noisy 80x60 PNG, comfortably above the minimum upload size
pub fn png_bytes() -> Vec<u8> {
    let mut seed: u32 = 0x9e37_79b9;
    let img = RgbImage::from_fn(80, 60, |_, _| {
        seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        let [a, b, c, _] = seed.to_be_bytes();
        Rgb([a, b, c])
    });

    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png).unwrap();
    out.into_inner()
}
