//! `{"response": {"success": true, ...}}` success envelope.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub response: SuccessBody<T>,
}

#[derive(Debug, Serialize)]
pub struct SuccessBody<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub data: T,
}

#[derive(Debug, Serialize)]
pub struct MessageData {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct VersionData {
    pub version: &'static str,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            response: SuccessBody {
                success: true,
                data,
            },
        }
    }
}

impl SuccessResponse<MessageData> {
    pub fn message(message: impl Into<String>) -> Self {
        Self::new(MessageData {
            message: message.into(),
        })
    }
}
