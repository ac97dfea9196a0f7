mod context;
mod deletion;
mod error;
mod locale;
mod log_notifier;
mod message;
mod notifier;
mod webhook_notifier;


pub use context::TemplateContext;
pub use deletion::DeletionNotification;
pub use error::{NotifyError, Result};
pub use locale::{FALLBACK_LANGUAGE, SUPPORTED_LANGUAGES, resolve_language};
pub use log_notifier::LogNotifier;
pub use message::NotificationMessage;
pub use notifier::Notifier;
pub use webhook_notifier::WebhookNotifier;
