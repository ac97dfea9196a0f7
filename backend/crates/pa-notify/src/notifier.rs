use crate::{NotificationMessage, Result};

use async_trait::async_trait;

/// Delivery backend for rendered notifications.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, message: &NotificationMessage) -> Result<()>;
}
