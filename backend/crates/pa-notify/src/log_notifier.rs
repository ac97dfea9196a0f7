use crate::{NotificationMessage, Notifier, Result};

use async_trait::async_trait;
use log::info;

/// Writes notifications to the log instead of delivering them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, message: &NotificationMessage) -> Result<()> {
        info!(
            "Notification '{}' to {} [{}]: {}",
            message.kind, message.recipient_email, message.language, message.subject
        );
        Ok(())
    }
}
