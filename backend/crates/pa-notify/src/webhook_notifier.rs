use crate::{NotificationMessage, Notifier, NotifyError, Result};

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client as ReqwestClient;

/// POSTs each notification as JSON to a mail relay endpoint.
///
/// Any non-2xx answer counts as a failed delivery.
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    url: String,
    client: ReqwestClient,
}

impl WebhookNotifier {
    pub fn new(url: &str, timeout: Duration) -> Result<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;
        Ok(Self {
            url: url.to_string(),
            client,
        })
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn send(&self, message: &NotificationMessage) -> Result<()> {
        let response = self.client.post(&self.url).json(message).send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!(
                "Webhook {} rejected '{}' notification for {}: {}",
                self.url, message.kind, message.recipient_email, status
            );
            return Err(NotifyError::rejected(status.as_u16()));
        }

        debug!(
            "Delivered '{}' notification for {}",
            message.kind, message.recipient_email
        );
        Ok(())
    }
}
