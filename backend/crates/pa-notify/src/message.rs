use crate::TemplateContext;

use serde::Serialize;

/// A fully rendered message ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationMessage {
    /// Template family, e.g. `deletion`
    pub kind: &'static str,
    pub recipient_email: String,
    /// Locale the message was rendered in
    pub language: &'static str,
    pub subject: String,
    pub body: String,
    pub context: TemplateContext,
}
