use std::sync::Arc;

use crate::core::error::AppError;
use crate::modules::notifications::models::{MarkReadResponse, Notification};
use crate::modules::notifications::repositories::NotificationRepository;

pub struct NotificationService {
    repo: Arc<dyn NotificationRepository>,
}

impl NotificationService {
    pub fn new(repo: Arc<dyn NotificationRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<Notification>, AppError> {
        self.repo.list().await
    }

    pub async fn mark_read(&self, id: u32) -> Result<MarkReadResponse, AppError> {
        self.repo.mark_read(id).await?;
        tracing::debug!(notification_id = id, "Notification marked as read");

        Ok(MarkReadResponse {
            success: true,
            message: "Notification marked as read".to_string(),
        })
    }
}
