use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    /// `low-stock`, `high-demand`, `festival`, ...
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub unread: bool,
}

/// Body of the legacy `PUT /notifications`
#[derive(Debug, Clone, Deserialize)]
pub struct MarkReadRequest {
    pub id: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkReadResponse {
    pub success: bool,
    pub message: String,
}
